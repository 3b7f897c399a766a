use super::*;
use crate::services::catalog::ReferenceData;

async fn setup_pool() -> SqlitePool {
    let ctx = crate::test_utils::init_seeded_db().await;
    ctx.pool
}

fn politician(id: &str, name: &str, party: &str, is_active: bool) -> PoliticianRow {
    PoliticianRow {
        id: id.into(),
        name: name.into(),
        party: party.into(),
        is_active,
    }
}

#[tokio::test]
async fn test_sync_tags_is_idempotent() {
    let pool = setup_pool().await;
    let mut tags = ReferenceData::embedded().unwrap().tags;

    tags[0].category = "Nova Categoria".into();
    sync_tags(&pool, &tags).await.unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count as usize, tags.len());

    let (category,): (String,) = sqlx::query_as("SELECT category FROM tags WHERE id = ?")
        .bind(&tags[0].id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(category, "Nova Categoria");
}

#[tokio::test]
async fn test_list_candidates_groups_tags_per_politician() {
    let pool = setup_pool().await;

    upsert_politician(&pool, &politician("p2", "Bruna", "PARTIDO-B", true))
        .await
        .unwrap();
    upsert_politician(&pool, &politician("p1", "Ana", "PARTIDO-A", true))
        .await
        .unwrap();
    upsert_politician(&pool, &politician("p3", "Carlos", "PARTIDO-A", true))
        .await
        .unwrap();

    assign_tag(&pool, "p1", "liberal").await.unwrap();
    assign_tag(&pool, "p1", "assiduo").await.unwrap();
    assign_tag(&pool, "p1", "assiduo").await.unwrap();
    assign_tag(&pool, "p2", "baixo-custo").await.unwrap();

    let candidates = list_candidates_with_tags(&pool).await.unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruna", "Carlos"]);

    assert_eq!(candidates[0].group, "PARTIDO-A");
    assert_eq!(
        candidates[0].tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["assiduo", "liberal"]
    );
    assert!(candidates[1].has_tag("baixo-custo"));
    assert!(candidates[2].tags.is_empty());
}

#[tokio::test]
async fn test_inactive_politicians_are_not_candidates() {
    let pool = setup_pool().await;

    upsert_politician(&pool, &politician("p1", "Ana", "PARTIDO-A", true))
        .await
        .unwrap();
    upsert_politician(&pool, &politician("p2", "Bruna", "PARTIDO-B", false))
        .await
        .unwrap();
    assign_tag(&pool, "p2", "liberal").await.unwrap();

    let candidates = list_candidates_with_tags(&pool).await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "p1");

    let assignments = get_active_tag_assignments(&pool).await.unwrap();
    assert!(assignments.is_empty());
}

#[tokio::test]
async fn test_unassign_tag() {
    let pool = setup_pool().await;

    upsert_politician(&pool, &politician("p1", "Ana", "PARTIDO-A", true))
        .await
        .unwrap();
    assign_tag(&pool, "p1", "liberal").await.unwrap();
    unassign_tag(&pool, "p1", "liberal").await.unwrap();

    let candidates = list_candidates_with_tags(&pool).await.unwrap();
    assert!(candidates[0].tags.is_empty());
}

#[tokio::test]
async fn test_upsert_politician_keeps_assignments() {
    let pool = setup_pool().await;

    upsert_politician(&pool, &politician("p1", "Ana", "PARTIDO-A", true))
        .await
        .unwrap();
    assign_tag(&pool, "p1", "liberal").await.unwrap();
    upsert_politician(&pool, &politician("p1", "Ana Souza", "PARTIDO-C", true))
        .await
        .unwrap();

    let candidates = list_candidates_with_tags(&pool).await.unwrap();
    assert_eq!(candidates[0].name, "Ana Souza");
    assert_eq!(candidates[0].group, "PARTIDO-C");
    assert!(candidates[0].has_tag("liberal"));
}
