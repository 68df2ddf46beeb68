//! 静的ドキュメントの読み込み
//!
//! 取得は1回だけ。失敗した場合は空のリストのまま続行し、
//! ログだけを残す（リトライはしない）。

use crate::error::Result;
use crate::types::ContentDocument;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 静的ドキュメントのパス
pub const DATA_PATH: &str = "/data.json";

/// レスポンス本文をパース
pub fn parse_document(body: &str) -> Result<ContentDocument> {
    ContentDocument::from_json(body)
}

/// 読み込み結果を確定（失敗時は空ドキュメント）
pub fn load_or_empty(result: Result<ContentDocument>) -> ContentDocument {
    match result {
        Ok(document) => {
            tracing::debug!(
                articles = document.articles.len(),
                projects = document.projects.len(),
                "content loaded"
            );
            document
        }
        Err(e) => {
            tracing::error!(error = %e, "error loading data");
            ContentDocument::default()
        }
    }
}

/// 画面が破棄された後に届いた読み込み結果を捨てるためのガード
#[derive(Debug, Clone)]
pub struct LoadGuard {
    active: Arc<AtomicBool>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// 以降の結果を無視する
    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// 有効な間だけ値を通す
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_active() {
            Some(value)
        } else {
            tracing::debug!("late load result ignored");
            None
        }
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}
