//! Repository trait for service records

use async_trait::async_trait;

use crate::domain::error::DomainResult;
use crate::domain::service_record::ServiceRecord;

/// Persistence seam for service records.
///
/// Implemented by the SeaORM repository in the infrastructure layer and by
/// in-memory stubs in handler tests.
#[async_trait]
pub trait ServiceRecordRepository: Send + Sync {
    /// Look up a record by its unique name.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceRecord>>;

    /// Set the activation flag and refresh `updated_at`.
    ///
    /// Returns `DomainError::NotFound` when no row matched the name.
    async fn set_active(&self, name: &str, active: bool) -> DomainResult<()>;
}
