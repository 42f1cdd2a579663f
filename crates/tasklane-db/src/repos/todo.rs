//! Todo repository — creation, lookup, and the filtered paginated search.
//!
//! The search builds its WHERE clause dynamically from the optional
//! filters, then runs two queries: the page query (joins managers, their
//! users, and comments; groups by todo; counts distinct manager and
//! comment ids) and a total-count query over `COUNT(DISTINCT t.id)` that
//! keeps the manager/user joins but deliberately omits comments — joining
//! comments would multiply rows without changing which todos match.

use chrono::{DateTime, Utc};
use tracing::debug;

use tasklane_core::entities::{Todo, User};
use tasklane_core::ids::PREFIX_TODO;
use tasklane_core::page::{Page, PageRequest};
use tasklane_core::responses::TodoSearchResult;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::TaskService;

const SELECT_COLS: &str = "id, user_id, title, contents, created_at, updated_at";

fn row_to_todo(row: &libsql::Row) -> Result<Todo, DatabaseError> {
    Ok(Todo {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        contents: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Filter criteria for the todo search. `None` means "no constraint
/// on this dimension".
#[derive(Debug, Clone, Default)]
pub struct TodoSearchFilter {
    /// Case-sensitive substring match on the todo title.
    pub title: Option<String>,
    /// Case-sensitive substring match on the nickname of any manager's user.
    pub nickname: Option<String>,
    /// Inclusive lower bound on todo creation time.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on todo creation time.
    pub end_date: Option<DateTime<Utc>>,
}

impl TodoSearchFilter {
    /// Build the conjunctive WHERE clause and its positional params.
    ///
    /// `instr(...) > 0` instead of LIKE: SQLite LIKE is ASCII
    /// case-insensitive, and the title/nickname matches are defined as
    /// case-sensitive "contains". RFC 3339 timestamps compare correctly
    /// as strings.
    fn where_clause(&self) -> (String, Vec<libsql::Value>) {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref title) = self.title {
            params.push(libsql::Value::Text(title.clone()));
            conditions.push(format!("instr(t.title, ?{}) > 0", params.len()));
        }
        if let Some(ref nickname) = self.nickname {
            params.push(libsql::Value::Text(nickname.clone()));
            conditions.push(format!("instr(u.nickname, ?{}) > 0", params.len()));
        }
        if let Some(start) = self.start_date {
            params.push(libsql::Value::Text(start.to_rfc3339()));
            conditions.push(format!("t.created_at >= ?{}", params.len()));
        }
        if let Some(end) = self.end_date {
            params.push(libsql::Value::Text(end.to_rfc3339()));
            conditions.push(format!("t.created_at <= ?{}", params.len()));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (clause, params)
    }
}

impl TaskService {
    /// Create a todo owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_todo(
        &self,
        user_id: &str,
        title: &str,
        contents: Option<&str>,
    ) -> Result<Todo, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TODO).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO todos ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    title,
                    contents,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Todo {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            contents: contents.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a todo by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no todo exists with this id.
    pub async fn get_todo(&self, id: &str) -> Result<Todo, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM todos WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_todo(&row)
    }

    /// Fetch a todo together with its owning user, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_todo_with_user(
        &self,
        todo_id: &str,
    ) -> Result<Option<(Todo, User)>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT t.id, t.user_id, t.title, t.contents, t.created_at, t.updated_at,
                        u.id, u.email, u.nickname, u.created_at, u.updated_at
                 FROM todos t
                 JOIN users u ON u.id = t.user_id
                 WHERE t.id = ?1",
                [todo_id],
            )
            .await?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        let todo = row_to_todo(&row)?;
        let user = User {
            id: row.get(6)?,
            email: get_opt_string(&row, 7)?,
            nickname: row.get(8)?,
            created_at: parse_datetime(&row.get::<String>(9)?)?,
            updated_at: parse_datetime(&row.get::<String>(10)?)?,
        };
        Ok(Some((todo, user)))
    }

    /// Search todos with optional filters, newest first, one page at a time.
    ///
    /// Each result row carries distinct counts of the todo's managers and
    /// comments; the returned page's `total_elements` is the count of
    /// distinct matching todos. An inverted date range is not an error —
    /// it simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn search_todos(
        &self,
        filter: &TodoSearchFilter,
        page: &PageRequest,
    ) -> Result<Page<TodoSearchResult>, DatabaseError> {
        let (where_clause, params) = filter.where_clause();
        let limit = page.size;
        let offset = page.offset();
        debug!(
            page = page.page,
            size = page.size,
            predicates = params.len(),
            "searching todos"
        );

        let page_sql = format!(
            "SELECT t.title,
                    COUNT(DISTINCT m.id) AS manager_count,
                    COUNT(DISTINCT c.id) AS comment_count
             FROM todos t
             LEFT JOIN managers m ON m.todo_id = t.id
             LEFT JOIN users u ON u.id = m.user_id
             LEFT JOIN comments c ON c.todo_id = t.id
             {where_clause}
             GROUP BY t.id
             ORDER BY t.created_at DESC
             LIMIT {limit} OFFSET {offset}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&page_sql, libsql::params_from_iter(params.clone()))
            .await?;

        let mut content = Vec::new();
        while let Some(row) = rows.next().await? {
            content.push(TodoSearchResult {
                title: row.get(0)?,
                manager_count: row.get::<i64>(1)? as u64,
                comment_count: row.get::<i64>(2)? as u64,
            });
        }

        // Same join structure as the page query minus comments: the
        // comment join fans out rows without affecting which todos match.
        let count_sql = format!(
            "SELECT COUNT(DISTINCT t.id)
             FROM todos t
             LEFT JOIN managers m ON m.todo_id = t.id
             LEFT JOIN users u ON u.id = m.user_id
             {where_clause}"
        );

        let mut count_rows = self
            .db()
            .conn()
            .query(&count_sql, libsql::params_from_iter(params))
            .await?;
        let total_elements = match count_rows.next().await? {
            Some(row) => row.get::<i64>(0)? as u64,
            None => 0,
        };

        Ok(Page::new(content, page, total_elements))
    }
}
