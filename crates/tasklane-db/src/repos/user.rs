//! User repository — creation and lookup.

use chrono::Utc;

use tasklane_core::entities::User;
use tasklane_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::TaskService;

const SELECT_COLS: &str = "id, email, nickname, created_at, updated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: get_opt_string(row, 1)?,
        nickname: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl TaskService {
    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_user(
        &self,
        email: Option<&str>,
        nickname: &str,
    ) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO users ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5)"
                ),
                libsql::params![
                    id.as_str(),
                    email,
                    nickname,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(User {
            id,
            email: email.map(String::from),
            nickname: nickname.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user exists with this id.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_user_roundtrip() {
        let svc = test_service().await;

        let user = svc
            .create_user(Some("alice@example.com"), "alice")
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.nickname, "alice");

        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.email.as_deref(), Some("alice@example.com"));
        assert_eq!(fetched.nickname, "alice");
    }

    #[tokio::test]
    async fn create_user_without_email() {
        let svc = test_service().await;

        let user = svc.create_user(None, "bob").await.unwrap();
        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.email, None);
    }

    #[tokio::test]
    async fn get_missing_user() {
        let svc = test_service().await;

        let result = svc.get_user("usr-missing").await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }
}
