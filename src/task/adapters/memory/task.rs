//! In-memory repository for task tracking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskField, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Iteration order is insertion order. Titles are unique across stored
/// tasks, mirroring the unique index of the `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn ordered(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    fn title_taken_by_other(&self, title: &str, own_id: Option<TaskId>) -> bool {
        self.ordered()
            .any(|stored| stored.title() == title && stored.id() != own_id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.order.len())
    }

    /// Reports whether the repository holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_field(
        &self,
        field: TaskField,
        value: &str,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .ordered()
            .find(|task| task.field(field) == value)
            .cloned())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.read()?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn save(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        if state.title_taken_by_other(task.title(), task.id()) {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().to_owned()));
        }

        let (id, saved) = match task.id() {
            Some(id) if state.tasks.contains_key(&id) => (id, task),
            Some(id) => return Err(TaskRepositoryError::NotFound(id)),
            None => {
                let id = TaskId::new();
                state.order.push(id);
                (id, task.assign_id(id))
            }
        };

        state.tasks.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.order.retain(|stored| *stored != id);
        Ok(())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.ordered().cloned().collect())
    }
}
