#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

// Run migrations only once across the whole test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection for DB-backed tests. Returns `None` (and the test passes
/// vacuously) when no database is reachable, so the suite can run without
/// one.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("DATABASE_URL").is_err() {
        let _ = dotenvy::dotenv();
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set");
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {e}");
            return None;
        }
    };
    let ok = MIGRATED
        .get_or_init(|| async { migration::Migrator::up(&db, None).await.is_ok() })
        .await;
    if !*ok {
        eprintln!("skip: migrate up failed");
        return None;
    }
    Some(db)
}

pub fn unique_cnpj() -> String {
    let digits = Uuid::new_v4().as_u128().to_string();
    digits[..14.min(digits.len())].to_string()
}

pub fn unique_email() -> String {
    format!("svc_{}@example.com", Uuid::new_v4())
}
