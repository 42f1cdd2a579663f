//! Manager repository — assignment of users as responsible parties on todos.

use chrono::Utc;

use tasklane_core::entities::Manager;
use tasklane_core::ids::PREFIX_MANAGER;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::TaskService;

const SELECT_COLS: &str = "id, user_id, todo_id, created_at";

fn row_to_manager(row: &libsql::Row) -> Result<Manager, DatabaseError> {
    Ok(Manager {
        id: row.get(0)?,
        user_id: row.get(1)?,
        todo_id: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl TaskService {
    /// Assign a user as manager of a todo.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails; a duplicate
    /// (user, todo) pair is rejected by the schema UNIQUE constraint.
    pub async fn create_manager(
        &self,
        user_id: &str,
        todo_id: &str,
    ) -> Result<Manager, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MANAGER).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO managers ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4)"
                ),
                libsql::params![id.as_str(), user_id, todo_id, now.to_rfc3339()],
            )
            .await?;

        Ok(Manager {
            id,
            user_id: user_id.to_string(),
            todo_id: todo_id.to_string(),
            created_at: now,
        })
    }

    /// List the managers assigned to a todo, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_managers_for_todo(
        &self,
        todo_id: &str,
    ) -> Result<Vec<Manager>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM managers WHERE todo_id = ?1 ORDER BY created_at"
                ),
                [todo_id],
            )
            .await?;

        let mut managers = Vec::new();
        while let Some(row) = rows.next().await? {
            managers.push(row_to_manager(&row)?);
        }
        Ok(managers)
    }
}
