//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskField, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const TITLE_UNIQUE_INDEX: &str = "idx_tasks_title_unique";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_field(
        &self,
        field: TaskField,
        value: &str,
    ) -> TaskRepositoryResult<Option<Task>> {
        let lookup = value.to_owned();
        self.run_blocking(move |connection| {
            let base = tasks::table
                .select(TaskRow::as_select())
                .order(tasks::seq.asc())
                .into_boxed();
            let query = match field {
                TaskField::Title => base.filter(tasks::title.eq(lookup)),
                TaskField::Status => base.filter(tasks::status.eq(lookup)),
            };
            let row = query
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(tasks::table.find(id.into_inner())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn save(&self, task: Task) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| match task.id() {
            Some(id) => update_task(connection, id, task),
            None => insert_task(connection, task),
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .order(tasks::seq.asc())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

fn insert_task(connection: &mut PgConnection, task: Task) -> TaskRepositoryResult<Task> {
    let id = TaskId::new();
    let new_row = to_new_row(id, &task);
    diesel::insert_into(tasks::table)
        .values(&new_row)
        .execute(connection)
        .map_err(|err| map_write_error(err, task.title()))?;
    Ok(task.assign_id(id))
}

fn update_task(connection: &mut PgConnection, id: TaskId, task: Task) -> TaskRepositoryResult<Task> {
    let updated = diesel::update(tasks::table.find(id.into_inner()))
        .set((
            tasks::title.eq(task.title()),
            tasks::description.eq(task.description()),
            tasks::status.eq(task.status()),
        ))
        .execute(connection)
        .map_err(|err| map_write_error(err, task.title()))?;
    if updated == 0 {
        return Err(TaskRepositoryError::NotFound(id));
    }
    Ok(task)
}

fn to_new_row(id: TaskId, task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: id.into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        status,
        ..
    } = row;
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
    })
}

fn map_write_error(err: DieselError, title: &str) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_title_unique_violation(info.as_ref()) =>
        {
            TaskRepositoryError::DuplicateTitle(title.to_owned())
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

fn is_title_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == TITLE_UNIQUE_INDEX)
}
