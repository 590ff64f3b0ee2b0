use chrono::{Duration, Utc};
use shiftsheet::model::{DayAssignment, Schedule, StoredSchedule};
use shiftsheet::store::{InMemoryStore, ScheduleStore};

fn record(week_ending: &str, time: &str) -> StoredSchedule {
    let mut schedule = Schedule::new(week_ending.to_string());
    schedule.days.push(DayAssignment {
        day: "Monday".to_string(),
        time: time.to_string(),
        note: String::new(),
    });
    StoredSchedule::new(schedule, false)
}

#[tokio::test]
async fn save_replaces_record_for_same_week() {
    let store = InMemoryStore::default();

    store.save(&record("5/7/2024", "9:00")).await.unwrap();
    store.save(&record("5/7/2024", "8:30")).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].schedule.days[0].time, "8:30");
}

#[tokio::test]
async fn list_all_orders_newest_first() {
    let store = InMemoryStore::default();

    let mut older = record("28/6/2024", "9:00");
    older.created_at = Utc::now() - Duration::hours(2);
    let mut middle = record("5/7/2024", "9:00");
    middle.created_at = Utc::now() - Duration::hours(1);
    let newest = record("12/7/2024", "9:00");

    // Insertion order deliberately differs from creation order
    store.save(&middle).await.unwrap();
    store.save(&newest).await.unwrap();
    store.save(&older).await.unwrap();

    let all = store.list_all().await.unwrap();
    let weeks: Vec<&str> = all.iter().map(|r| r.week_ending()).collect();
    assert_eq!(weeks, vec!["12/7/2024", "5/7/2024", "28/6/2024"]);
}

#[tokio::test]
async fn clear_all_empties_the_store() {
    let store = InMemoryStore::default();

    store.save(&record("5/7/2024", "9:00")).await.unwrap();
    store.save(&record("12/7/2024", "9:00")).await.unwrap();
    store.clear_all().await.unwrap();

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn distinct_weeks_coexist() {
    let store = InMemoryStore::default();

    store.save(&record("5/7/2024", "9:00")).await.unwrap();
    store.save(&record("12/7/2024", "10:00")).await.unwrap();

    assert_eq!(store.list_all().await.unwrap().len(), 2);
}
