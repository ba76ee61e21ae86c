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

use super::domain::{CreateCompanyInput, UpdateCompanyInput};

const ENTITY: &str = "Company";

fn parse_id(id: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(id.trim()).map_err(|_| ServiceError::InvalidId)
}

/// Create a company. The cnpj pre-check gives a friendly 409; the unique
/// index catches the concurrent-create race.
pub async fn create(
    db: &DatabaseConnection,
    input: CreateCompanyInput,
) -> Result<company::Public, ServiceError> {
    let new = input.validate()?;

    let existing = company::Entity::find()
        .filter(company::Column::Cnpj.eq(new.cnpj.as_str()))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::AlreadyExists(
            "Company with this CNPJ already exists".into(),
        ));
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = company::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new.name),
        cnpj: Set(new.cnpj),
        sector: Set(new.sector),
        address_city: Set(new.city),
        address_state: Set(new.state),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(company_id = %created.id, "company_created");
    Ok(created.into())
}

/// List companies in storage order.
pub async fn find(
    db: &DatabaseConnection,
    pg: Pagination,
) -> Result<Vec<company::Public>, ServiceError> {
    let rows = company::Entity::find()
        .offset(pg.skip)
        .limit(pg.limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<company::Public, ServiceError> {
    let uid = parse_id(id)?;
    let found = company::Entity::find_by_id(uid)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(ENTITY))?;
    Ok(found.into())
}

/// Employees referencing the given company. No existence check on the
/// company itself: a well-formed unknown id yields an empty page.
pub async fn find_employees(
    db: &DatabaseConnection,
    id: &str,
    pg: Pagination,
) -> Result<Vec<employee::Public>, ServiceError> {
    let uid = parse_id(id)?;
    let rows = employee::Entity::find()
        .filter(employee::Column::CompanyId.eq(uid))
        .offset(pg.skip)
        .limit(pg.limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Apply a partial update. The cnpj is excluded at the type level and never
/// written back.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    input: UpdateCompanyInput,
) -> Result<company::Public, ServiceError> {
    let uid = parse_id(id)?;
    let patch = input.validate()?;

    let mut am: company::ActiveModel = company::Entity::find_by_id(uid)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found(ENTITY))?
        .into();

    if let Some(v) = patch.name {
        am.name = Set(v);
    }
    if let Some(v) = patch.sector {
        am.sector = Set(v);
    }
    if let Some(v) = patch.city {
        am.address_city = Set(v);
    }
    if let Some(v) = patch.state {
        am.address_state = Set(v);
    }
    am.updated_at = Set(Utc::now().into());

    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated.into())
}

/// Hard delete. Employees are intentionally left in place, even if they
/// reference the removed company.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    let uid = parse_id(id)?;
    let res = company::Entity::delete_by_id(uid)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(ENTITY));
    }
    info!(company_id = %uid, "company_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination;
    use crate::test_support::{get_db, unique_cnpj};

    fn company_input(cnpj: &str) -> CreateCompanyInput {
        serde_json::from_value(serde_json::json!({
            "name": "Tech Solutions",
            "cnpj": cnpj,
            "sector": "Technology",
            "address": {"city": "São Paulo", "state": "SP"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn company_crud_service() {
        let Some(db) = get_db().await else { return };

        let cnpj = unique_cnpj();
        let created = create(&db, company_input(&cnpj)).await.expect("create company");
        assert_eq!(created.cnpj, cnpj);

        // Duplicate cnpj is rejected with AlreadyExists
        let dup = create(&db, company_input(&cnpj)).await;
        assert!(matches!(dup, Err(ServiceError::AlreadyExists(_))));

        let found = find_by_id(&db, &created.id.to_string()).await.expect("find by id");
        assert_eq!(found.id, created.id);

        let patch: UpdateCompanyInput = serde_json::from_value(serde_json::json!({
            "name": "Updated Name",
            "cnpj": "00000000000000"
        }))
        .unwrap();
        let updated = update(&db, &created.id.to_string(), patch).await.expect("update");
        assert_eq!(updated.name, "Updated Name");
        // immutable after create, whatever the raw payload said
        assert_eq!(updated.cnpj, cnpj);

        delete(&db, &created.id.to_string()).await.expect("delete");
        let after = find_by_id(&db, &created.id.to_string()).await;
        assert!(matches!(after, Err(ServiceError::NotFound(_))));
        let twice = delete(&db, &created.id.to_string()).await;
        assert!(matches!(twice, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected_before_storage() {
        let Some(db) = get_db().await else { return };

        for op in [
            find_by_id(&db, "12345").await.err(),
            delete(&db, "12345").await.err(),
            update(&db, "12345", UpdateCompanyInput::default()).await.err(),
            find_employees(&db, "not-a-uuid", pagination::paginate(None, None)).await.err(),
        ] {
            assert!(matches!(op, Some(ServiceError::InvalidId)));
        }
    }

    #[tokio::test]
    async fn find_employees_on_unknown_company_is_empty() {
        let Some(db) = get_db().await else { return };

        let rows = find_employees(&db, &Uuid::new_v4().to_string(), pagination::paginate(None, None))
            .await
            .expect("list");
        assert!(rows.is_empty());
    }
}
