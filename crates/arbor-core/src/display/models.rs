//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data. All
//! output is Markdown: headers for identity, bullet lists for metadata and a
//! table for effort figures.

use std::fmt;

use super::{datetime::LocalDateTime, effort::EffortDuration};
use crate::models::{Efforts, Task, TaskDetails, TaskStatus, TaskSummary};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// Metadata bullets shared by the standalone and detailed views.
    fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        if let Some(performers) = &self.performers {
            writeln!(f, "- Performers: {performers}")?;
        }
        if let Some(parent_id) = self.parent_id {
            writeln!(f, "- Parent: {parent_id}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        self.fmt_metadata(f)?;
        writeln!(
            f,
            "- Effort: {} planned, {} actual",
            EffortDuration(self.planned_effort),
            EffortDuration(self.actual_effort)
        )?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Efforts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Effort | Task | Subtasks | Total |")?;
        writeln!(f, "|:-|-:|-:|-:|")?;
        writeln!(
            f,
            "| Planned | {} | {} | {} |",
            EffortDuration(self.task_planned_effort),
            EffortDuration(self.subtask_planned_effort),
            EffortDuration(self.total_planned_effort)
        )?;
        writeln!(
            f,
            "| Actual | {} | {} | {} |",
            EffortDuration(self.task_actual_effort),
            EffortDuration(self.subtask_actual_effort),
            EffortDuration(self.total_actual_effort)
        )
    }
}

impl fmt::Display for TaskDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        writeln!(f, "# {}. {}", task.id, task.name)?;
        writeln!(f)?;
        task.fmt_metadata(f)?;

        if let Some(desc) = &task.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Effort")?;
        writeln!(f)?;
        write!(f, "{}", self.calculate_efforts())?;

        if self.subtasks.is_empty() {
            writeln!(f, "\nNo subtasks.")?;
        } else {
            writeln!(f, "\n## Subtasks")?;
            writeln!(f)?;
            for subtask in &self.subtasks {
                writeln!(
                    f,
                    "- {}. {} ({})",
                    subtask.id,
                    subtask.name,
                    subtask.status.with_icon()
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        let progress = if self.total_subtasks > 0 {
            format!(" ({}/{})", self.completed_subtasks, self.total_subtasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", task.name, task.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", task.status.with_icon())?;
        if let Some(performers) = &task.performers {
            writeln!(f, "- **Performers**: {performers}")?;
        }
        if let Some(desc) = &task.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(
            f,
            "- **Effort**: {} planned, {} actual",
            EffortDuration(task.planned_effort),
            EffortDuration(task.actual_effort)
        )?;
        writeln!(f)?;

        Ok(())
    }
}
