use arbor_core::{models::NewTask, Database, Task, TaskStatus, Tracker, TrackerBuilder};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a test tracker
#[allow(dead_code)]
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Helper function to create a temporary database for testing
#[allow(dead_code)]
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Create a task with the given status, walking it through the lifecycle.
#[allow(dead_code)]
pub fn create_task_in(db: &mut Database, name: &str, parent_id: Option<u64>, status: TaskStatus) -> Task {
    let task = db
        .create_task(&NewTask {
            parent_id,
            ..NewTask::named(name)
        })
        .expect("Failed to create task");

    match status {
        TaskStatus::Assigned => task,
        TaskStatus::InProgress => start(db, task.id),
        TaskStatus::Paused | TaskStatus::Completed => {
            start(db, task.id);
            db.update_status(task.id, status)
                .expect("Failed to set status")
                .task
        }
    }
}

#[allow(dead_code)]
fn start(db: &mut Database, id: u64) -> Task {
    db.update_status(id, TaskStatus::InProgress)
        .expect("Failed to start task")
        .task
}
