use tracing::debug;

use crate::model::task::{Task, TaskId, TaskPatch};

/// The ordered, in-memory collection of tasks.
///
/// Order is insertion order. Lookups by an id that is not (or no longer)
/// present are silent no-ops: a row can only ask for a mutation of a task it
/// was rendered from, so a miss means the task is already gone.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
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

    /// Index of the task in display order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a task with the trimmed title.
    /// Blank input creates nothing and returns `None`.
    pub fn add_task(&mut self, raw_title: &str) -> Option<TaskId> {
        let title = raw_title.trim();
        if title.is_empty() {
            debug!("ignoring blank add");
            return None;
        }
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, title.to_string()));
        debug!(%id, title, "task added");
        Some(id)
    }

    /// Apply `patch` to the task with `id`. Returns false if no such task.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "update for unknown task ignored");
            return false;
        };
        debug!(%id, ?patch, "task updated");
        task.apply(patch);
        true
    }

    /// Remove the task with `id`, keeping the others in order.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.tasks.remove(idx);
                debug!(%id, "task deleted");
                true
            }
            None => {
                debug!(%id, "delete for unknown task ignored");
                false
            }
        }
    }

    /// Flip the completion flag of the task with `id`
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.get(id) {
            Some(task) => {
                let done = !task.is_completed;
                self.update_task(id, TaskPatch::completed(done))
            }
            None => false,
        }
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_trimmed_open_task() {
        let mut store = TaskStore::new();
        let id = store.add_task("  New Task \t").unwrap();
        assert_eq!(store.len(), 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.title, "New Task");
        assert!(!task.is_completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut store = TaskStore::new();
        for raw in ["", "   ", "\t\n", " \u{3000} "] {
            assert_eq!(store.add_task(raw), None);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = TaskStore::new();
        store.add_task("one");
        store.add_task("two");
        store.add_task("three");
        assert_eq!(titles(&store), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_ids_unique_and_not_reused() {
        let mut store = TaskStore::new();
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        assert_ne!(a, b);
        store.delete_task(b);
        let c = store.add_task("c").unwrap();
        assert_ne!(c, b);
        assert!(c > b);
    }

    #[test]
    fn test_update_title_preserves_other_fields() {
        let mut store = TaskStore::new();
        let id = store.add_task("Draft").unwrap();
        store.toggle_complete(id);
        assert!(store.update_task(id, TaskPatch::title("Final")));
        let task = store.get(id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.title, "Final");
        assert!(task.is_completed);
    }

    #[test]
    fn test_update_accepts_blank_title() {
        let mut store = TaskStore::new();
        let id = store.add_task("Something").unwrap();
        assert!(store.update_task(id, TaskPatch::title("   ")));
        assert_eq!(store.get(id).unwrap().title, "   ");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = TaskStore::new();
        store.add_task("only");
        let before = store.tasks().to_vec();
        assert!(!store.update_task(TaskId(99), TaskPatch::title("nope")));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = TaskStore::new();
        let first = store.add_task("New Task").unwrap();
        store.add_task("New Task2");
        store.add_task("New Task3");
        assert!(store.delete_task(first));
        assert_eq!(titles(&store), vec!["New Task2", "New Task3"]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add_task("keep").unwrap();
        assert!(!store.delete_task(TaskId(42)));
        assert!(store.delete_task(id));
        assert!(!store.delete_task(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut store = TaskStore::new();
        let id = store.add_task("flip").unwrap();
        assert!(store.toggle_complete(id));
        assert!(store.get(id).unwrap().is_completed);
        assert!(store.toggle_complete(id));
        assert!(!store.get(id).unwrap().is_completed);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = TaskStore::new();
        assert!(!store.toggle_complete(TaskId(1)));
    }
}
