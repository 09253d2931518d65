pub mod row_editor;
pub mod task_list;
pub mod task_store;
