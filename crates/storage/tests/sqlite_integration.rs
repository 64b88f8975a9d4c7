use quiz_core::model::ParticipantId;
use storage::repository::{CompletionRepository, Storage};
use storage::sqlite::SqliteRepository;
use sqlx::Row;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrips_completion_flags() {
    let repo = connect("memdb_roundtrip").await;

    assert!(!repo.is_completed(ParticipantId::new(4)).await.unwrap());
    repo.mark_completed(ParticipantId::new(4)).await.unwrap();
    repo.mark_completed(ParticipantId::new(4)).await.unwrap();
    repo.mark_completed(ParticipantId::new(31)).await.unwrap();

    assert!(repo.is_completed(ParticipantId::new(4)).await.unwrap());
    assert_eq!(
        repo.list_completed().await.unwrap(),
        vec![ParticipantId::new(4), ParticipantId::new(31)]
    );
}

#[tokio::test]
async fn sqlite_stores_legacy_key_format() {
    let repo = connect("memdb_keys").await;
    repo.mark_completed(ParticipantId::new(9)).await.unwrap();

    let row = sqlx::query("SELECT key, value FROM kv_store")
        .fetch_one(repo.pool())
        .await
        .expect("row");
    let key: String = row.get("key");
    let value: String = row.get("value");
    assert_eq!(key, "studentDone_9");
    assert_eq!(value, "1");
}

#[tokio::test]
async fn sqlite_ignores_foreign_keys_when_listing_and_clearing() {
    let repo = connect("memdb_foreign").await;
    sqlx::query("INSERT INTO kv_store (key, value) VALUES ('studentDoneX', '1'), ('studentDone_2', '0')")
        .execute(repo.pool())
        .await
        .expect("seed");
    repo.mark_completed(ParticipantId::new(1)).await.unwrap();

    assert_eq!(repo.list_completed().await.unwrap(), vec![ParticipantId::new(1)]);
    assert!(!repo.is_completed(ParticipantId::new(2)).await.unwrap());

    assert!(repo.clear_completion(ParticipantId::new(1)).await.unwrap());
    assert_eq!(repo.clear_all().await.unwrap(), 1);

    let remaining: i64 = sqlx::query("SELECT COUNT(*) AS n FROM kv_store")
        .fetch_one(repo.pool())
        .await
        .expect("count")
        .get("n");
    assert_eq!(remaining, 1);
}

#[tokio::test]
async fn sqlite_reads_and_clears_only_canonical_keys() {
    let repo = connect("memdb_canonical").await;
    sqlx::query(
        "INSERT INTO kv_store (key, value) VALUES \
         ('studentDone_07', '1'), ('studentDone_+7', '1'), ('studentDone_ 7', '1'), ('studentDone_x', '1')",
    )
    .execute(repo.pool())
    .await
    .expect("seed");
    repo.mark_completed(ParticipantId::new(3)).await.unwrap();

    assert!(!repo.is_completed(ParticipantId::new(7)).await.unwrap());
    assert_eq!(repo.list_completed().await.unwrap(), vec![ParticipantId::new(3)]);

    assert_eq!(repo.clear_all().await.unwrap(), 1);
    let remaining: i64 = sqlx::query("SELECT COUNT(*) AS n FROM kv_store")
        .fetch_one(repo.pool())
        .await
        .expect("count")
        .get("n");
    assert_eq!(remaining, 4);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate").await;
    repo.migrate().await.expect("second migrate");
    repo.mark_completed(ParticipantId::new(1)).await.unwrap();
    repo.migrate().await.expect("third migrate");
    assert!(repo.is_completed(ParticipantId::new(1)).await.unwrap());
}

#[tokio::test]
async fn storage_facade_uses_sqlite_backend() {
    let keep_alive = connect("memdb_facade").await;
    let storage = Storage::sqlite("sqlite:file:memdb_facade?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage
        .completions
        .mark_completed(ParticipantId::new(40))
        .await
        .unwrap();
    assert!(keep_alive.is_completed(ParticipantId::new(40)).await.unwrap());
}
