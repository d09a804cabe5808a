use chrono::Utc;

use crate::models::post::RecentUrl;
use crate::storage::{keys, JsonStore, StoreError};

/// Maximum number of URLs remembered.
pub const MAX_RECENT_URLS: usize = 5;

pub fn list_recent_urls(store: &JsonStore) -> Result<Vec<RecentUrl>, StoreError> {
    Ok(store.get(keys::RECENT_URLS)?.unwrap_or_default())
}

/// Puts `url` at the front and drops anything past the cap.
pub fn add_recent_url(store: &JsonStore, url: &str) -> Result<Vec<RecentUrl>, StoreError> {
    let entry = RecentUrl {
        url: url.to_string(),
        timestamp: Utc::now(),
    };
    store.update(keys::RECENT_URLS, move |urls: &mut Vec<RecentUrl>| {
        urls.insert(0, entry);
        urls.truncate(MAX_RECENT_URLS);
        urls.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_by_default() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(list_recent_urls(&store).unwrap().is_empty());
    }

    #[test]
    fn test_capped_and_most_recent_first() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        for i in 0..8 {
            add_recent_url(&store, &format!("https://example.com/{i}")).unwrap();
        }

        let urls = list_recent_urls(&store).unwrap();
        assert_eq!(urls.len(), MAX_RECENT_URLS);
        let got: Vec<&str> = urls.iter().map(|u| u.url.as_str()).collect();
        assert_eq!(
            got,
            vec![
                "https://example.com/7",
                "https://example.com/6",
                "https://example.com/5",
                "https://example.com/4",
                "https://example.com/3",
            ]
        );
    }

    #[test]
    fn test_repeated_url_is_kept_as_new_entry() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        add_recent_url(&store, "https://hbr.org/a").unwrap();
        let urls = add_recent_url(&store, "https://hbr.org/a").unwrap();
        assert_eq!(urls.len(), 2);
    }
}
