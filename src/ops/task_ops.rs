use chrono::Utc;

use crate::model::task::{Filter, Task, TaskId, TaskList};

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

/// Append a new task. Whitespace-only text is ignored.
/// Returns the assigned ID, or None if nothing was added.
pub fn add_task(list: &mut TaskList, text: &str) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = next_id(list);
    list.tasks.push(Task::new(id, text.to_string()));
    tracing::debug!(%id, "added task");
    Some(id)
}

/// Flip the completed flag. Returns false if the ID is unknown.
pub fn toggle_complete(list: &mut TaskList, id: TaskId) -> bool {
    let Some(task) = list.get_mut(id) else {
        return false;
    };
    task.completed = !task.completed;
    tracing::debug!(%id, completed = task.completed, "toggled task");
    true
}

/// Put a task in edit mode. Any other task leaves edit mode.
pub fn enable_editing(list: &mut TaskList, id: TaskId) -> bool {
    if list.get(id).is_none() {
        return false;
    }
    for task in &mut list.tasks {
        task.editing = task.id == id;
    }
    true
}

/// Replace a task's text and leave edit mode.
///
/// Whitespace-only text is rejected: the task keeps its text and stays in
/// whatever edit state it was in.
pub fn save_edit(list: &mut TaskList, id: TaskId, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }
    let Some(task) = list.get_mut(id) else {
        return false;
    };
    task.text = new_text.to_string();
    task.editing = false;
    tracing::debug!(%id, "saved edit");
    true
}

/// Leave edit mode without touching the text
pub fn cancel_edit(list: &mut TaskList, id: TaskId) -> bool {
    let Some(task) = list.get_mut(id) else {
        return false;
    };
    task.editing = false;
    true
}

/// Remove a task. Returns false if the ID is unknown.
pub fn delete_task(list: &mut TaskList, id: TaskId) -> bool {
    let before = list.tasks.len();
    list.tasks.retain(|t| t.id != id);
    let removed = list.tasks.len() != before;
    if removed {
        tracing::debug!(%id, "deleted task");
    }
    removed
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

pub fn set_filter(list: &mut TaskList, filter: Filter) {
    list.filter = filter;
    tracing::debug!(filter = filter.as_str(), "filter changed");
}

/// Set the filter from its name; unknown names select `All`
pub fn set_filter_by_name(list: &mut TaskList, name: &str) {
    set_filter(list, Filter::parse(name));
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Next ID from the wall clock, bumped past the last one handed out so IDs
/// stay unique even within the same millisecond.
fn next_id(list: &mut TaskList) -> TaskId {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let id = now.max(list.last_id + 1);
    list.last_id = id;
    TaskId(id)
}
