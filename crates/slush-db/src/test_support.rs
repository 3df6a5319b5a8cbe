//! Shared test utilities for slush-db integration tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::SlushDb;
    use crate::service::SlushService;
    use crate::updates::profile::ProfileUpdate;

    /// Create an in-memory `SlushService` acting as the account "tester".
    pub async fn test_service() -> SlushService {
        let db = SlushDb::open_local(":memory:").await.unwrap();
        SlushService::from_db(db, "tester")
    }

    /// Register the service's acting account (projects need the profile FK).
    pub async fn register_account(svc: &SlushService) {
        svc.create_profile(ProfileUpdate::default()).await.unwrap();
    }
}
