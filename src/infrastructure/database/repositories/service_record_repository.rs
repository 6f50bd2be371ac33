//! SeaORM implementation of ServiceRecordRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use crate::domain::service_record::{ServiceRecord, ServiceRecordRepository, MAIN_SERVICE};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::service_record;

pub struct SeaOrmServiceRecordRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Outcome of seeding the default record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyPresent,
}

// ── Conversion helpers ──────────────────────────────────────────

fn record_from_model(model: service_record::Model) -> ServiceRecord {
    ServiceRecord {
        name: model.name,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl ServiceRecordRepository for SeaOrmServiceRecordRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceRecord>> {
        let model = service_record::Entity::find()
            .filter(service_record::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(record_from_model))
    }

    async fn set_active(&self, name: &str, active: bool) -> DomainResult<()> {
        let result = service_record::Entity::update_many()
            .col_expr(service_record::Column::Active, Expr::value(active))
            .col_expr(service_record::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(service_record::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "service",
                name: name.to_string(),
            });
        }

        Ok(())
    }
}

impl SeaOrmServiceRecordRepository {
    /// Insert the default record if no record with that name exists.
    ///
    /// Used by the schema initializer; safe to call repeatedly.
    pub async fn seed_default(&self) -> DomainResult<SeedOutcome> {
        let existing = service_record::Entity::find()
            .filter(service_record::Column::Name.eq(MAIN_SERVICE))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_some() {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let now = Utc::now();
        let record = service_record::ActiveModel {
            id: NotSet,
            name: Set(MAIN_SERVICE.to_string()),
            active: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };
        record.insert(&self.db).await.map_err(db_err)?;

        Ok(SeedOutcome::Created)
    }
}
