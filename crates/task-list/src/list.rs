//! Task List Operations
//!
//! Local edits applied before the whole list is sent back to the server.
//! Every operation addresses tasks by their index in the list.

use crate::{Filter, Task, TaskListError, TaskListResult};

/// Result of committing an edited title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Renamed,
    /// The title trimmed to nothing, so the task was dropped
    Removed,
}

/// Ordered task list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append a new incomplete task. Blank titles are ignored.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(title));
        true
    }

    /// Commit an edited title; a blank title deletes the task
    pub fn finish_edit(&mut self, index: usize, title: &str) -> TaskListResult<EditOutcome> {
        let title = title.trim();
        if title.is_empty() {
            self.remove(index)?;
            return Ok(EditOutcome::Removed);
        }
        self.task_mut(index)?.title = title.to_string();
        Ok(EditOutcome::Renamed)
    }

    pub fn remove(&mut self, index: usize) -> TaskListResult<Task> {
        self.check(index)?;
        Ok(self.tasks.remove(index))
    }

    pub fn set_completed(&mut self, index: usize, completed: bool) -> TaskListResult<()> {
        self.task_mut(index)?.completed = completed;
        Ok(())
    }

    /// Drop completed tasks, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        before - self.tasks.len()
    }

    pub fn mark_all(&mut self, completed: bool) {
        for task in &mut self.tasks {
            task.completed = completed;
        }
    }

    pub fn remaining(&self) -> usize {
        self.iter().filter(|task| task.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.remaining()
    }

    /// True for a non-empty list with nothing left to do
    pub fn all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.remaining() == 0
    }

    /// Tasks visible under `filter`, paired with their index in the full list
    pub fn filtered(&self, filter: Filter) -> Vec<(usize, Task)> {
        self.iter()
            .enumerate()
            .filter(|(_, task)| filter.matches(task))
            .map(|(index, task)| (index, task.clone()))
            .collect()
    }

    fn check(&self, index: usize) -> TaskListResult<()> {
        match self.get(index) {
            Some(_) => Ok(()),
            None => Err(TaskListError::OutOfRange { index, len: self.tasks.len() }),
        }
    }

    fn task_mut(&mut self, index: usize) -> TaskListResult<&mut Task> {
        self.check(index)?;
        Ok(&mut self.tasks[index])
    }
}
