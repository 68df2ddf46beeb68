//! localStorage を使うキーバリューストア
//!
//! 値はJSONにせず、そのままの文字列で保存する
//! （`lopam_auth` は `"true"` という生の文字列）。

use gloo::storage::{LocalStorage, Storage};
use lopam_common::{Error, KeyValueStore, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Persist(format!("localStorage: {:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| Error::Persist(format!("localStorage: {:?}", e)))
    }
}
