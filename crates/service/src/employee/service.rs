use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use models::{company, employee};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::password;

use super::domain::{CreateEmployeeInput, UpdateEmployeeInput};

const ENTITY: &str = "Employee";

fn parse_id(id: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(id.trim()).map_err(|_| ServiceError::InvalidId)
}

/// Create an employee under an existing company. The email pre-check gives a
/// friendly 409; the unique index catches the concurrent-create race. The
/// password is hashed before insert and the returned projection never
/// contains it.
pub async fn create(
    db: &DatabaseConnection,
    input: CreateEmployeeInput,
) -> Result<employee::Public, ServiceError> {
    let new = input.validate()?;

    let found = company::Entity::find_by_id(new.company_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if found.is_none() {
        return Err(ServiceError::not_found("Associated company"));
    }

    let existing = employee::Entity::find()
        .filter(employee::Column::Email.eq(new.email.as_str()))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::already_exists(ENTITY));
    }

    let hash = password::hash_password(&new.password)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(new.company_id),
        email: Set(new.email),
        name: Set(new.name),
        password_hash: Set(hash),
        role: Set(new.role),
        status: Set(new.status.as_str().to_string()),
        termination_date: Set(new.termination_date),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(employee_id = %created.id, company_id = %created.company_id, "employee_created");
    Ok(created.into())
}

/// List employees in storage order.
pub async fn find(
    db: &DatabaseConnection,
    pg: Pagination,
) -> Result<Vec<employee::Public>, ServiceError> {
    let rows = employee::Entity::find()
        .offset(pg.skip)
        .limit(pg.limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<employee::Public, ServiceError> {
    let uid = parse_id(id)?;
    let found = employee::Entity::find_by_id(uid)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(ENTITY))?;
    Ok(found.into())
}

/// Apply a partial update. The company reference is excluded at the type
/// level; a supplied password is re-hashed.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    input: UpdateEmployeeInput,
) -> Result<employee::Public, ServiceError> {
    let uid = parse_id(id)?;
    let patch = input.validate()?;

    let mut am: employee::ActiveModel = employee::Entity::find_by_id(uid)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(ENTITY))?
        .into();

    if let Some(v) = patch.email {
        am.email = Set(v);
    }
    if let Some(v) = patch.name {
        am.name = Set(v);
    }
    if let Some(v) = patch.password {
        am.password_hash = Set(password::hash_password(&v)?);
    }
    if let Some(v) = patch.role {
        am.role = Set(v);
    }
    if let Some(v) = patch.status {
        am.status = Set(v.as_str().to_string());
    }
    if let Some(v) = patch.termination_date {
        am.termination_date = Set(Some(v));
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated.into())
}

/// Hard delete.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let uid = parse_id(id)?;
    let res = employee::Entity::delete_by_id(uid)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(ENTITY));
    }
    info!(employee_id = %uid, "employee_deleted");
    Ok(())
}
