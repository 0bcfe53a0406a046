mod common;

use arbor_core::{
    params::{CreateTask, Id, ListTasks, UpdateActualEffort, UpdateStatus, UpdateTask},
    TaskStatus,
};
use common::create_test_tracker;

async fn status(tracker: &arbor_core::Tracker, id: u64, status: &str) -> bool {
    tracker
        .update_status(&UpdateStatus {
            id,
            status: status.to_string(),
        })
        .await
        .expect("Status update should not fail hard")
        .success
}

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_task_tree_workflow() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let release = tracker
        .create(&CreateTask {
            name: "Release 3.1".to_string(),
            description: Some("Cut and publish the release".to_string()),
            performers: Some("ivan, june".to_string()),
            planned_effort: Some(10.0),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let mut subtask_ids = Vec::new();
    for (name, planned) in [("Changelog", 5.0), ("Tag", 3.0)] {
        let subtask = tracker
            .create(&CreateTask {
                name: name.to_string(),
                planned_effort: Some(planned),
                parent_id: Some(release.id),
                ..Default::default()
            })
            .await
            .expect("Failed to create subtask");
        subtask_ids.push(subtask.id);
    }

    let efforts = tracker
        .efforts(&Id { id: release.id })
        .await
        .expect("Failed to get efforts");
    assert_eq!(efforts.total_planned_effort, 18.0);
    assert_eq!(efforts.subtask_planned_effort, 8.0);

    // Non-terminal tasks cannot be deleted
    let err = tracker
        .delete(&Id { id: release.id })
        .await
        .expect_err("Task with subtasks cannot be deleted");
    assert!(err.is_validation());

    assert!(status(&tracker, release.id, "in_progress").await);
    assert!(status(&tracker, subtask_ids[0], "in_progress").await);

    // The in-progress subtask blocks completion
    assert!(!status(&tracker, release.id, "completed").await);

    assert!(status(&tracker, subtask_ids[0], "paused").await);
    let effort = tracker
        .update_actual_effort(&UpdateActualEffort {
            id: subtask_ids[0],
            actual_effort: Some("2".into()),
        })
        .await
        .expect("Effort update should not fail hard");
    assert!(effort.success);

    // The assigned subtask still blocks completion
    assert!(!status(&tracker, release.id, "completed").await);
    tracker
        .update(&UpdateTask {
            id: subtask_ids[1],
            status: Some("in_progress".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to start subtask");
    assert!(status(&tracker, subtask_ids[1], "paused").await);

    // Paused subtasks are completed by the cascade
    assert!(status(&tracker, release.id, "completed").await);

    let details = tracker
        .get(&Id { id: release.id })
        .await
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(details.task.status, TaskStatus::Completed);
    assert!(details
        .subtasks
        .iter()
        .all(|s| s.status == TaskStatus::Completed && s.completed_at.is_some()));
    assert_eq!(details.total_actual_effort(), 2.0);

    let completed = tracker
        .list(&ListTasks {
            status: Some("completed".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(completed.len(), 3);

    // Tear the tree down from the leaves
    for id in subtask_ids {
        tracker
            .delete(&Id { id })
            .await
            .expect("Terminal subtasks can be deleted");
    }
    let deleted = tracker
        .delete(&Id { id: release.id })
        .await
        .expect("Terminal task can be deleted");
    assert_eq!(deleted.name, "Release 3.1");
    assert!(tracker
        .list(&ListTasks::default())
        .await
        .expect("Failed to list tasks")
        .is_empty());
}

#[tokio::test]
async fn test_invalid_list_filters() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let err = tracker
        .list(&ListTasks {
            parent_id: Some(1),
            roots_only: true,
            ..Default::default()
        })
        .await
        .expect_err("Conflicting filters must be refused");
    assert!(err.is_validation());

    let err = tracker
        .list(&ListTasks {
            status: Some("someday".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("Unknown status must be refused");
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_concurrent_status_updates_on_separate_tasks() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut ids = Vec::new();
    for i in 0..8 {
        let task = tracker
            .create(&CreateTask {
                name: format!("Parallel {i}"),
                ..Default::default()
            })
            .await
            .expect("Failed to create task");
        ids.push(task.id);
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let tracker = tracker.clone();
            tokio::spawn(async move {
                tracker
                    .update_status(&UpdateStatus {
                        id,
                        status: "in_progress".to_string(),
                    })
                    .await
            })
        })
        .collect();

    for handle in handles {
        let response = handle
            .await
            .expect("Task panicked")
            .expect("Status update should not fail hard");
        assert!(response.success);
    }

    let started = tracker
        .list(&ListTasks {
            status: Some("in_progress".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(started.len(), ids.len());
}
