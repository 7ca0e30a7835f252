use chrono::NaiveDate;
use medico_core::model::{LeaderboardEntry, NotifyBefore, Reminder, ReminderKind};
use storage::repository::{
    KeyValueStore, LEADERBOARD_KEY, LeaderboardRepository, REMINDERS_KEY, ReminderRepository,
    Storage,
};
use storage::sqlite::SqliteRepository;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_reminder_order() {
    let storage = Storage::sqlite("sqlite:file:memdb_reminders?mode=memory&cache=shared")
        .await
        .expect("connect");

    let reminders = vec![
        Reminder::new(day(4), "Test Deadline: Anatomy", ReminderKind::Test)
            .with_notify_before(NotifyBefore::OneDay),
        Reminder::new(day(2), "Pathology lecture", ReminderKind::Lesson),
        Reminder::new(day(9), "Pharmacology quiz", ReminderKind::Test).with_details("Chapter 4"),
    ];
    storage.reminders.save_reminders(&reminders).await.unwrap();

    let loaded = storage.reminders.load_reminders().await.unwrap();
    assert_eq!(loaded, reminders);
}

#[tokio::test]
async fn sqlite_overwrites_whole_list_on_save() {
    let storage = Storage::sqlite("sqlite:file:memdb_leaderboard?mode=memory&cache=shared")
        .await
        .expect("connect");

    let first = vec![LeaderboardEntry::new("Anatomy", "General Anatomy", 1, 2, 12)];
    storage.leaderboard.save_entries(&first).await.unwrap();

    let mut second = first.clone();
    second.push(LeaderboardEntry::new("Pathology", "Cell Injury", 2, 2, 20));
    storage.leaderboard.save_entries(&second).await.unwrap();

    let loaded = storage.leaderboard.load_entries().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, second);
}

#[tokio::test]
async fn sqlite_corrupt_value_degrades_to_empty() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.set(REMINDERS_KEY, "[{\"date\":").await.unwrap();

    let storage = Storage::from_kv(std::sync::Arc::new(repo.clone()));
    assert!(storage.reminders.load_reminders().await.unwrap().is_empty());
    assert!(repo.get(LEADERBOARD_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
    repo.set("k", "v1").await.unwrap();
    repo.set("k", "v2").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v2"));
}
