//! Knowledge base: a flat list of bookmarked links, persisted in insertion order.

use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::knowledge::{KnowledgeBaseItem, KnowledgeBaseUpdate, NewKnowledgeBaseItem};
use crate::storage::{keys, JsonStore, StoreError};

pub mod handlers;

pub fn list(store: &JsonStore) -> Result<Vec<KnowledgeBaseItem>, StoreError> {
    Ok(store.get(keys::KNOWLEDGE_BASE)?.unwrap_or_default())
}

/// Appends a new item. Both URL and title are required and the URL must parse.
pub fn add(store: &JsonStore, new: NewKnowledgeBaseItem) -> Result<KnowledgeBaseItem, AppError> {
    require_present(&new.url)?;
    require_present(&new.title)?;
    validate_link(&new.url)?;

    let item = KnowledgeBaseItem {
        id: Uuid::new_v4(),
        url: new.url.trim().to_string(),
        title: new.title.trim().to_string(),
        description: new.description,
        category: new.category,
        tags: new.tags,
        timestamp: Utc::now(),
    };

    let stored = item.clone();
    store.update(keys::KNOWLEDGE_BASE, move |items: &mut Vec<KnowledgeBaseItem>| {
        items.push(stored)
    })?;
    Ok(item)
}

/// Applies the provided fields to the item with `id`.
pub fn update(
    store: &JsonStore,
    id: Uuid,
    changes: KnowledgeBaseUpdate,
) -> Result<KnowledgeBaseItem, AppError> {
    if let Some(title) = &changes.title {
        require_present(title)?;
    }
    if let Some(url) = &changes.url {
        require_present(url)?;
        validate_link(url)?;
    }

    let updated = store.update(keys::KNOWLEDGE_BASE, |items: &mut Vec<KnowledgeBaseItem>| {
        let item = items.iter_mut().find(|i| i.id == id)?;
        if let Some(url) = changes.url {
            item.url = url.trim().to_string();
        }
        if let Some(title) = changes.title {
            item.title = title.trim().to_string();
        }
        if let Some(description) = changes.description {
            item.description = description;
        }
        if let Some(category) = changes.category {
            item.category = category;
        }
        if let Some(tags) = changes.tags {
            item.tags = tags;
        }
        Some(item.clone())
    })?;

    updated.ok_or_else(|| AppError::NotFound(format!("Knowledge base item {id} not found")))
}

pub fn delete(store: &JsonStore, id: Uuid) -> Result<bool, StoreError> {
    store.update(keys::KNOWLEDGE_BASE, |items: &mut Vec<KnowledgeBaseItem>| {
        let before = items.len();
        items.retain(|i| i.id != id);
        items.len() != before
    })
}

pub fn get(store: &JsonStore, id: Uuid) -> Result<Option<KnowledgeBaseItem>, StoreError> {
    Ok(list(store)?.into_iter().find(|i| i.id == id))
}

/// Case-insensitive match against title, description, URL and tags.
pub fn search(items: &[KnowledgeBaseItem], query: &str) -> Vec<KnowledgeBaseItem> {
    let query = query.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&query);

    items
        .iter()
        .filter(|i| {
            hit(&i.title)
                || i.description.as_deref().is_some_and(hit)
                || hit(&i.url)
                || i.tags.iter().flatten().any(|t| hit(t))
        })
        .cloned()
        .collect()
}

pub fn by_category(items: &[KnowledgeBaseItem], category: &str) -> Vec<KnowledgeBaseItem> {
    items
        .iter()
        .filter(|i| i.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(items: &[KnowledgeBaseItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in items.iter().filter_map(|i| i.category.as_deref()) {
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

const MISSING_LINK_OR_TITLE: &str = "Please provide both URL and title";

/// URL and title share one message, whichever of the two is blank.
fn require_present(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(MISSING_LINK_OR_TITLE.to_string()));
    }
    Ok(())
}

fn validate_link(url: &str) -> Result<(), AppError> {
    if Url::parse(url.trim()).is_err() {
        return Err(AppError::Validation(
            "Please enter a valid URL format".to_string(),
        ));
    }
    Ok(())
}
