use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A bookmarked link in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBaseItem {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

/// Fields supplied when creating an item; id and timestamp are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewKnowledgeBaseItem {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial update: only the fields present are replaced.
///
/// The optional fields distinguish an absent key (`None`, keep) from an
/// explicit `null` (`Some(None)`, clear).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeBaseUpdate {
    pub url: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Option<Vec<String>>>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tells_null_from_absent() {
        let update: KnowledgeBaseUpdate =
            serde_json::from_str(r#"{"description": null, "tags": ["ai"]}"#).unwrap();
        assert_eq!(update.description, Some(None));
        assert_eq!(update.category, None);
        assert_eq!(update.tags, Some(Some(vec!["ai".to_string()])));
        assert_eq!(update.title, None);
    }
}
