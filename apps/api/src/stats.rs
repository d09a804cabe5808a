use chrono::NaiveDate;
use serde::Serialize;

use crate::storage::shelves::{self, Shelf};
use crate::storage::{daily_counter, recent_urls, JsonStore, StoreError};

/// Figures for the stats page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub posts_today: u32,
    pub total_drafts: usize,
    pub total_favorites: usize,
    pub recent_urls: usize,
}

pub fn collect_stats(store: &JsonStore, today: NaiveDate) -> Result<Stats, StoreError> {
    Ok(Stats {
        posts_today: daily_counter::posts_today(store, today)?,
        total_drafts: shelves::list(store, Shelf::Drafts)?.len(),
        total_favorites: shelves::list(store, Shelf::Favorites)?.len(),
        recent_urls: recent_urls::list_recent_urls(store)?.len(),
    })
}
