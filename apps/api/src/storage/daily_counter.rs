use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::{keys, JsonStore, StoreError};

/// Persisted `{date, count}` record for the posts-generated-today stat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Returns today's count, resetting the stored record when it belongs to another day.
pub fn posts_today(store: &JsonStore, today: NaiveDate) -> Result<u32, StoreError> {
    store.update(keys::POSTS_TODAY, |record: &mut Option<DailyCount>| {
        if let Some(r) = record.as_ref().filter(|r| r.date == today) {
            return r.count;
        }
        *record = Some(DailyCount {
            date: today,
            count: 0,
        });
        0
    })
}

/// Adds one generated post to today's count and returns the new total.
pub fn increment_posts_today(store: &JsonStore, today: NaiveDate) -> Result<u32, StoreError> {
    store.update(keys::POSTS_TODAY, |record: &mut Option<DailyCount>| {
        let count = match record {
            Some(r) if r.date == today => r.count + 1,
            _ => 1,
        };
        *record = Some(DailyCount { date: today, count });
        count
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_starts_at_zero() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert_eq!(posts_today(&store, day(18)).unwrap(), 0);
    }

    #[test]
    fn test_increment_same_day() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        increment_posts_today(&store, day(18)).unwrap();
        assert_eq!(increment_posts_today(&store, day(18)).unwrap(), 2);
        assert_eq!(posts_today(&store, day(18)).unwrap(), 2);
    }

    #[test]
    fn test_resets_when_stored_date_differs() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        increment_posts_today(&store, day(17)).unwrap();
        increment_posts_today(&store, day(17)).unwrap();

        assert_eq!(posts_today(&store, day(18)).unwrap(), 0);
        let stored: Option<DailyCount> = store.get(keys::POSTS_TODAY).unwrap();
        assert_eq!(
            stored,
            Some(DailyCount {
                date: day(18),
                count: 0
            })
        );
    }

    #[test]
    fn test_increment_on_new_day_starts_over() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        increment_posts_today(&store, day(17)).unwrap();
        assert_eq!(increment_posts_today(&store, day(18)).unwrap(), 1);
    }
}
