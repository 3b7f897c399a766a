mod common;

use civic_affinity::services::matching::models::types::MatchStrength;
use civic_affinity::services::matching::DOMINANT_CATEGORY_COUNT;
use civic_affinity::{
    dominant_categories, match_strength, MatchConfig, MatchService, QuizSession, ReferenceData,
    SqliteCandidateProvider,
};

// (question index, option index)
const ANSWERS: [(usize, usize); 10] = [
    (0, 0),
    (1, 0),
    (2, 1),
    (3, 0),
    (4, 1),
    (5, 0),
    (6, 0),
    (7, 1),
    (8, 0),
    (9, 0),
];

#[tokio::test]
async fn test_quiz_to_report_over_sqlite() {
    let ctx = common::init_test_db().await;
    let pool = ctx.pool;

    common::seed_politician(
        &pool,
        "p1",
        "Ana Lima",
        "NOVO",
        &["liberal", "privatizacao", "liberdade-digital"],
    )
    .await;
    common::seed_politician(
        &pool,
        "p2",
        "Bruno Reis",
        "PL",
        &["conservador-costumes", "linha-dura", "pro-armas", "agro"],
    )
    .await;
    common::seed_politician(&pool, "p3", "Clara Dias", "PSOL", &["progressista", "social"]).await;
    common::seed_politician(
        &pool,
        "p4",
        "Davi Rocha",
        "NOVO",
        &["baixo-custo", "assiduo", "oposicao-governo", "oposicao-rigoroso"],
    )
    .await;

    let reference = ReferenceData::embedded().unwrap();

    let mut session = QuizSession::new(&reference.questions);
    for (question, option) in ANSWERS {
        session.answer(question, option).unwrap();
    }
    assert!(session.is_complete());

    let user = session.score_vector();
    assert_eq!(user.get("liberal"), 4.0);
    assert_eq!(user.get("assiduo"), 3.0);
    assert_eq!(user.total_abs_weight(), 31.0);

    let config = MatchConfig::load(&pool).await;
    let service =
        MatchService::new(&reference, SqliteCandidateProvider::new(pool.clone()), config).unwrap();

    let report = service.report(&user).await.unwrap();
    assert_eq!(report.archetype.id, "fiscal");

    let ranked: Vec<(&str, u8)> = report
        .outcome
        .ranked
        .iter()
        .map(|r| (r.name.as_str(), r.percentage))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Bruno Reis", 39),
            ("Davi Rocha", 32),
            ("Ana Lima", 29),
            ("Clara Dias", 0),
        ]
    );

    let groups: Vec<(&str, u8, usize)> = report
        .outcome
        .groups
        .iter()
        .map(|g| (g.group.as_str(), g.percentage, g.member_count))
        .collect();
    assert_eq!(groups, vec![("PL", 39, 1), ("NOVO", 31, 2), ("PSOL", 0, 1)]);

    let best = report.outcome.best().unwrap();
    assert_eq!(match_strength(best.percentage), MatchStrength::Weak);
    assert_eq!(
        dominant_categories(&best.category_scores, DOMINANT_CATEGORY_COUNT),
        vec!["Costumes", "Meio Ambiente", "Segurança Pública"]
    );
    assert!(best
        .category_scores
        .iter()
        .all(|c| c.user_axis == 100 && c.candidate_axis <= 100));
}

#[tokio::test]
async fn test_saved_config_limits_the_report() {
    let ctx = common::init_test_db().await;
    let pool = ctx.pool;

    for i in 0..8 {
        common::seed_politician(
            &pool,
            &format!("p{i}"),
            &format!("Candidato {i}"),
            &format!("PARTIDO-{}", i % 4),
            &["liberal"],
        )
        .await;
    }

    MatchConfig {
        top_candidates: 3,
        top_groups: 2,
        ..MatchConfig::default()
    }
    .save(&pool)
    .await
    .unwrap();

    let reference = ReferenceData::embedded().unwrap();
    let config = MatchConfig::load(&pool).await;
    let service =
        MatchService::new(&reference, SqliteCandidateProvider::new(pool.clone()), config).unwrap();

    let mut session = QuizSession::new(&reference.questions);
    session.answer(0, 0).unwrap();
    let report = service.report(&session.score_vector()).await.unwrap();

    assert_eq!(report.outcome.ranked.len(), 3);
    assert_eq!(report.outcome.groups.len(), 2);
    assert!(report.outcome.ranked.iter().all(|r| r.percentage == 100));
    assert_eq!(report.archetype.id, "liberal");
}
