//! 管理画面のゲートキーパー
//!
//! 固定の認証情報と照合し、成功したらキーバリューストアに
//! `lopam_auth = "true"` を書き込む。フラグはクライアント側で
//! 書き換え可能なので、セキュリティ境界にはならない。
//! 試行回数の制限もない。

use crate::error::Result;
use std::collections::HashMap;

/// 認証フラグのキー
pub const AUTH_KEY: &str = "lopam_auth";
/// 認証済みを表す値
pub const AUTH_VALUE: &str = "true";

/// ブラウザの localStorage に相当するストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// メモリ上のストア（テスト用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// 認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "lopam".to_string(),
            password: "lopam".to_string(),
        }
    }
}

/// ゲートキーパー
#[derive(Debug, Clone)]
pub struct Gatekeeper<S> {
    storage: S,
    credentials: Credentials,
}

impl<S: KeyValueStore> Gatekeeper<S> {
    pub fn new(storage: S) -> Self {
        Self::with_credentials(storage, Credentials::default())
    }

    pub fn with_credentials(storage: S, credentials: Credentials) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// 認証情報を照合
    ///
    /// 一致しなければストアには触れない。
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        if username != self.credentials.username || password != self.credentials.password {
            tracing::debug!(username, "login rejected");
            return Ok(false);
        }
        self.storage.set(AUTH_KEY, AUTH_VALUE)?;
        Ok(true)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(AUTH_KEY)
    }

    /// 保存済みのフラグで認証済みか判定
    pub fn is_authenticated(&self) -> bool {
        self.storage.get(AUTH_KEY).as_deref() == Some(AUTH_VALUE)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success_sets_flag() {
        let mut gate = Gatekeeper::new(MemoryStore::new());
        assert!(!gate.is_authenticated());

        assert!(gate.authenticate("lopam", "lopam").expect("認証失敗"));
        assert!(gate.is_authenticated());
        assert_eq!(gate.storage().get(AUTH_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_authenticate_failure_leaves_store() {
        let mut gate = Gatekeeper::new(MemoryStore::new());
        assert!(!gate.authenticate("lopam", "wrong").expect("認証失敗"));
        assert!(!gate.authenticate("admin", "lopam").expect("認証失敗"));
        assert_eq!(gate.storage(), &MemoryStore::new());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut store = MemoryStore::new();
        store.set(AUTH_KEY, AUTH_VALUE).expect("書き込み失敗");
        let mut gate = Gatekeeper::new(store);

        assert!(!gate.authenticate("lopam", "wrong").expect("認証失敗"));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_logout_clears_flag() {
        let mut gate = Gatekeeper::new(MemoryStore::new());
        gate.authenticate("lopam", "lopam").expect("認証失敗");
        gate.logout().expect("ログアウト失敗");
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_only_exact_value_counts() {
        let mut store = MemoryStore::new();
        store.set(AUTH_KEY, "TRUE").expect("書き込み失敗");
        assert!(!Gatekeeper::new(store).is_authenticated());
    }

    #[test]
    fn test_custom_credentials() {
        let credentials = Credentials {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        };
        let mut gate = Gatekeeper::with_credentials(MemoryStore::new(), credentials);
        assert!(!gate.authenticate("lopam", "lopam").expect("認証失敗"));
        assert!(gate.authenticate("admin", "s3cret").expect("認証失敗"));
    }
}
