//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskDto,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository>;

/// Scenario world for task management behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub repository: Arc<InMemoryTaskRepository>,
    pub last_lookup_result: Option<Result<TaskDto, TaskServiceError>>,
    pub last_listing: Option<Vec<TaskDto>>,
    pub last_delete_result: Option<Result<(), TaskServiceError>>,
}

impl TaskWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        Self {
            service: TaskService::new(Arc::clone(&repository)),
            repository,
            last_lookup_result: None,
            last_listing: None,
            last_delete_result: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
