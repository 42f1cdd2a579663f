//! Shared helpers for the unit tests in this crate.

pub mod helpers {
    use crate::TaskDb;
    use crate::service::TaskService;

    /// In-memory service with migrations applied.
    pub async fn test_service() -> TaskService {
        let db = TaskDb::open_local(":memory:").await.unwrap();
        TaskService::from_db(db)
    }

    /// Insert a user, returning its id.
    pub async fn seed_user(svc: &TaskService, nickname: &str) -> String {
        svc.create_user(None, nickname).await.unwrap().id
    }

    /// Insert a todo owned by `user_id`, returning its id.
    pub async fn seed_todo(svc: &TaskService, user_id: &str, title: &str) -> String {
        svc.create_todo(user_id, title, None).await.unwrap().id
    }
}
