use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task, assigned from the creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    /// Transient: true while the text is being revised
    #[serde(skip)]
    pub editing: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
            editing: false,
        }
    }
}

/// Which subset of the list is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// All filters in tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Parse a filter name. Anything unrecognized means `All`.
    pub fn parse(s: &str) -> Filter {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Filter::Completed,
            "pending" => Filter::Pending,
            _ => Filter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }

    /// Label shown on the filter tab
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }

    /// Next filter in tab order, wrapping around
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Pending,
            Filter::Pending => Filter::All,
        }
    }

    /// Previous filter in tab order, wrapping around
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Pending,
            Filter::Completed => Filter::All,
            Filter::Pending => Filter::Completed,
        }
    }
}

/// The task list store: ordered tasks, active filter, and theme flag.
///
/// Mutations go through `ops::task_ops` and `ops::theme_ops`; outside the
/// crate the list is read-only.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    pub(crate) tasks: Vec<Task>,
    pub(crate) filter: Filter,
    pub(crate) dark_mode: bool,
    pub(crate) last_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Theme flag (`true` = dark)
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// The task currently in edit mode, if any
    pub fn editing_task(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| t.editing)
    }

    /// Tasks matching the current filter, in list order.
    /// Recomputed on every call.
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// (total, completed, pending)
    pub fn counts(&self) -> (usize, usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (self.tasks.len(), completed, self.tasks.len() - completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parse_known_and_unknown() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("completed"), Filter::Completed);
        assert_eq!(Filter::parse("Pending"), Filter::Pending);
        assert_eq!(Filter::parse("done"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
    }

    #[test]
    fn filter_cycle_wraps() {
        for f in Filter::ALL {
            assert_eq!(f.next().prev(), f);
        }
        assert_eq!(Filter::Pending.next(), Filter::All);
        assert_eq!(Filter::All.prev(), Filter::Pending);
    }

    #[test]
    fn filter_matches() {
        let mut task = Task::new(TaskId(1), "x".into());
        assert!(Filter::All.matches(&task));
        assert!(Filter::Pending.matches(&task));
        assert!(!Filter::Completed.matches(&task));
        task.completed = true;
        assert!(Filter::Completed.matches(&task));
        assert!(!Filter::Pending.matches(&task));
    }

    #[test]
    fn new_task_defaults() {
        let task = Task::new(TaskId(7), "Buy milk".into());
        assert!(!task.completed);
        assert!(!task.editing);
        assert_eq!(task.id.to_string(), "7");
    }

    #[test]
    fn empty_list_defaults() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.filter(), Filter::All);
        assert!(!list.dark_mode());
        assert_eq!(list.counts(), (0, 0, 0));
        assert!(list.editing_task().is_none());
    }
}
