use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Once;

use crate::database::candidate_repo::{self, PoliticianRow};
use crate::services::catalog::ReferenceData;

static INIT: Once = Once::new();

pub struct TestContext {
    pub pool: Pool<Sqlite>,
}

/// Fresh in-memory database with the schema applied and logging enabled.
pub async fn init_test_db() -> TestContext {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });

    // Single connection: every connection to `sqlite::memory:` is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    TestContext { pool }
}

/// Like [`init_test_db`], with the embedded tag catalog mirrored into `tags`.
pub async fn init_seeded_db() -> TestContext {
    let ctx = init_test_db().await;
    let reference = ReferenceData::embedded().expect("embedded reference data");
    candidate_repo::sync_tags(&ctx.pool, &reference.tags)
        .await
        .expect("Failed to sync tags");
    ctx
}

pub async fn seed_politician(pool: &Pool<Sqlite>, id: &str, name: &str, party: &str, tags: &[&str]) {
    let row = PoliticianRow {
        id: id.to_string(),
        name: name.to_string(),
        party: party.to_string(),
        is_active: true,
    };
    candidate_repo::upsert_politician(pool, &row)
        .await
        .expect("Failed to insert politician");

    for tag in tags {
        candidate_repo::assign_tag(pool, id, tag)
            .await
            .expect("Failed to assign tag");
    }
}
