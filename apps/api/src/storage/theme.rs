use crate::storage::{keys, JsonStore, StoreError};

/// Whether dark mode is enabled. Defaults to light.
pub fn dark_mode(store: &JsonStore) -> Result<bool, StoreError> {
    Ok(store.get(keys::DARK_MODE)?.unwrap_or(false))
}

pub fn set_dark_mode(store: &JsonStore, enabled: bool) -> Result<(), StoreError> {
    store.set(keys::DARK_MODE, &enabled)
}

/// Flips the flag and returns the new value.
pub fn toggle_dark_mode(store: &JsonStore) -> Result<bool, StoreError> {
    store.update(keys::DARK_MODE, |enabled: &mut bool| {
        *enabled = !*enabled;
        *enabled
    })
}
