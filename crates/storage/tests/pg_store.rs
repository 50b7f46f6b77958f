//! Runs against a real Postgres (`DATABASE_URL`). Ignored by default:
//! `cargo test -p storage -- --ignored`.

use std::collections::HashSet;
use std::sync::Arc;

use sqlx::PgPool;
use storage::Database;
use storage::error::StorageError;
use storage::models::Requester;
use storage::services::battle_card_allocator::BattleCardAllocator;

async fn seed_contest(pool: &PgPool, contest_id: &str, handles: &[(&str, Option<&str>)]) {
    sqlx::query("INSERT INTO contests (contest_id, name) VALUES ($1, $2)")
        .bind(contest_id)
        .bind(format!("Battle {contest_id}"))
        .execute(pool)
        .await
        .unwrap();

    for (position, (handle, display_name)) in handles.iter().enumerate() {
        let profile = display_name.map(|name| serde_json::json!({ "displayName": name }));
        sqlx::query(
            "INSERT INTO contest_participants (contest_id, handle, zora_profile_data, position)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(contest_id)
        .bind(*handle)
        .bind(profile)
        .bind(position as i32)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn creates_card_once_per_requester(pool: PgPool) {
    seed_contest(&pool, "c1", &[("zara", Some("Zara Z")), ("max", None)]).await;
    let allocator = BattleCardAllocator::new(Database::from_pool(pool.clone()));

    let anon = allocator
        .ensure_battle_card("c1", &Requester::Anonymous)
        .await
        .unwrap();
    let anon_again = allocator
        .ensure_battle_card("c1", &Requester::Anonymous)
        .await
        .unwrap();
    let alice = allocator
        .ensure_battle_card("c1", &Requester::User("alice".into()))
        .await
        .unwrap();

    assert_eq!(anon.card_number, 1);
    assert_eq!(anon.creator_one.display_name, "Zara Z");
    assert_eq!(anon.creator_two.display_name, "max");
    assert_eq!(anon, anon_again);
    assert_eq!(alice.card_number, 2);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM battle_cards")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn rejects_contests_without_two_participants(pool: PgPool) {
    seed_contest(&pool, "solo", &[("a", None)]).await;
    let allocator = BattleCardAllocator::new(Database::from_pool(pool));

    let err = allocator
        .ensure_battle_card("solo", &Requester::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidState(_)));

    let err = allocator
        .ensure_battle_card("nope", &Requester::Anonymous)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn concurrent_requests_share_one_card_and_unique_numbers(pool: PgPool) {
    for i in 0..8 {
        seed_contest(&pool, &format!("c{i}"), &[("a", None), ("b", None)]).await;
    }
    let allocator = Arc::new(BattleCardAllocator::new(Database::from_pool(pool.clone())));

    // Same key hammered from several tasks, plus first cards for other contests.
    let mut handles = Vec::new();
    for i in 0..16 {
        let allocator = allocator.clone();
        let contest_id = if i < 8 { "c0".to_string() } else { format!("c{}", i - 8) };
        handles.push(tokio::spawn(async move {
            allocator
                .ensure_battle_card(&contest_id, &Requester::User("alice".into()))
                .await
        }));
    }

    let mut c0_numbers = HashSet::new();
    for handle in handles {
        let card = handle.await.unwrap().unwrap();
        if card.battle_id == "c0" {
            c0_numbers.insert(card.card_number);
        }
    }
    assert_eq!(c0_numbers.len(), 1, "same key must yield one card");

    let numbers: Vec<i64> = sqlx::query_scalar("SELECT card_number FROM battle_cards ORDER BY 1")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(numbers, (1..=8).collect::<Vec<i64>>());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn unknown_card_id_is_absent(pool: PgPool) {
    let allocator = BattleCardAllocator::new(Database::from_pool(pool));

    let card = allocator
        .get_battle_card(&uuid::Uuid::new_v4().to_string())
        .await
        .unwrap();
    assert!(card.is_none());
}
