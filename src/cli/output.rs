use serde::Serialize;

use crate::model::task::Task;
use crate::ops::task_list::TaskList;

#[derive(Debug, Serialize, PartialEq)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub is_completed: bool,
    /// Present while the row is still being edited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

pub fn task_to_json(task: &Task, list: &TaskList) -> TaskJson {
    TaskJson {
        id: task.id.0,
        title: task.title.clone(),
        is_completed: task.is_completed,
        draft: list.draft(task.id).map(str::to_string),
    }
}

pub fn list_to_json(list: &TaskList) -> Vec<TaskJson> {
    list.tasks().iter().map(|t| task_to_json(t, list)).collect()
}

/// `[x] #2 Title`, plus the pending draft for rows still in edit mode
pub fn format_task_line(task: &Task, list: &TaskList) -> String {
    let check = if task.is_completed { 'x' } else { ' ' };
    let mut line = format!("[{}] {} {}", check, task.id, task.title);
    if let Some(draft) = list.draft(task.id) {
        line.push_str(&format!("  (editing: {})", draft));
    }
    line
}

pub fn format_list(list: &TaskList) -> Vec<String> {
    list.tasks()
        .iter()
        .map(|t| format_task_line(t, list))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_list::Intent;
    use pretty_assertions::assert_eq;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.apply(Intent::AddTask("Buy milk".into()));
        list.apply(Intent::AddTask("Walk dog".into()));
        let first = list.tasks()[0].id;
        let second = list.tasks()[1].id;
        list.apply(Intent::ToggleComplete(first));
        list.apply(Intent::EnterEdit(second));
        list.apply(Intent::ChangeDraft(second, "Walk the dog".into()));
        list
    }

    #[test]
    fn test_format_list() {
        assert_eq!(
            format_list(&sample()),
            vec![
                "[x] #1 Buy milk".to_string(),
                "[ ] #2 Walk dog  (editing: Walk the dog)".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_json() {
        let json = serde_json::to_string(&list_to_json(&sample())).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"title":"Buy milk","is_completed":true},{"id":2,"title":"Walk dog","is_completed":false,"draft":"Walk the dog"}]"#
        );
    }
}
