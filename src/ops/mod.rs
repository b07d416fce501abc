pub mod task_ops;
pub mod theme_ops;
