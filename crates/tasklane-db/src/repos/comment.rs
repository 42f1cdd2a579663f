//! Comment repository — comments left on todos.

use chrono::Utc;

use tasklane_core::entities::Comment;
use tasklane_core::ids::PREFIX_COMMENT;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::TaskService;

const SELECT_COLS: &str = "id, todo_id, user_id, contents, created_at, updated_at";

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get(0)?,
        todo_id: row.get(1)?,
        user_id: row.get(2)?,
        contents: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl TaskService {
    /// Add a comment to a todo.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_comment(
        &self,
        todo_id: &str,
        user_id: &str,
        contents: &str,
    ) -> Result<Comment, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMMENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO comments ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    todo_id,
                    user_id,
                    contents,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Comment {
            id,
            todo_id: todo_id.to_string(),
            user_id: user_id.to_string(),
            contents: contents.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// List the comments on a todo, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_comments_for_todo(
        &self,
        todo_id: &str,
    ) -> Result<Vec<Comment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM comments WHERE todo_id = ?1 ORDER BY created_at"
                ),
                [todo_id],
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(row_to_comment(&row)?);
        }
        Ok(comments)
    }
}
