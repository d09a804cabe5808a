//! Drafts and favorites. Both lists hold `SavedPost`s, newest first.

use uuid::Uuid;

use crate::models::post::{GeneratedPost, SavedPost};
use crate::storage::{keys, JsonStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Drafts,
    Favorites,
}

impl Shelf {
    fn key(self) -> &'static str {
        match self {
            Shelf::Drafts => keys::DRAFTS,
            Shelf::Favorites => keys::FAVORITES,
        }
    }

    /// Human label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Shelf::Drafts => "Draft",
            Shelf::Favorites => "Favorite",
        }
    }
}

pub fn list(store: &JsonStore, shelf: Shelf) -> Result<Vec<SavedPost>, StoreError> {
    Ok(store.get(shelf.key())?.unwrap_or_default())
}

/// Saves a snapshot of `post` at the front of the shelf.
pub fn save(store: &JsonStore, shelf: Shelf, post: &GeneratedPost) -> Result<SavedPost, StoreError> {
    let saved = SavedPost::from_post(post);
    let entry = saved.clone();
    store.update(shelf.key(), move |posts: &mut Vec<SavedPost>| {
        posts.insert(0, entry);
    })?;
    Ok(saved)
}

pub fn find(store: &JsonStore, shelf: Shelf, id: Uuid) -> Result<Option<SavedPost>, StoreError> {
    Ok(list(store, shelf)?.into_iter().find(|p| p.id == id))
}

/// Removes the post with `id`; returns whether anything was removed.
pub fn delete(store: &JsonStore, shelf: Shelf, id: Uuid) -> Result<bool, StoreError> {
    store.update(shelf.key(), |posts: &mut Vec<SavedPost>| {
        let before = posts.len();
        posts.retain(|p| p.id != id);
        posts.len() != before
    })
}
