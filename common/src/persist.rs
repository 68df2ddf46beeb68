//! 保存処理
//!
//! 変更のたびに `{articles, projects}` ドキュメントを渡す。
//! 既定の実装はログに出すだけで、実際の保存先
//! （`POST /api/save-data` やファイル）は呼び出し側が差し替える。

use crate::error::Result;
use crate::types::ContentDocument;
use std::cell::RefCell;

/// 保存APIのパス
pub const SAVE_ENDPOINT_PATH: &str = "/api/save-data";

/// ドキュメントの保存先
pub trait Persistence {
    fn persist(&self, document: &ContentDocument) -> Result<()>;
}

impl<P: Persistence + ?Sized> Persistence for &P {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        (**self).persist(document)
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        (**self).persist(document)
    }
}

/// 保存されるはずの内容をログに出すだけの実装
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPersistence;

impl Persistence for LogPersistence {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        let payload = serde_json::to_string(document)?;
        tracing::info!(
            articles = document.articles.len(),
            projects = document.projects.len(),
            %payload,
            "data would be saved"
        );
        Ok(())
    }
}

/// 渡されたドキュメントを記録する実装（テスト用）
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: RefCell<Vec<ContentDocument>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<ContentDocument> {
        self.saved.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.saved.borrow().len()
    }
}

impl Persistence for MemoryPersistence {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        self.saved.borrow_mut().push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Article;

    #[test]
    fn test_log_persistence_accepts_document() {
        let document = ContentDocument {
            articles: vec![Article::default()],
            projects: vec![],
        };
        assert!(LogPersistence.persist(&document).is_ok());
    }

    #[test]
    fn test_memory_persistence_records_calls() {
        let persistence = MemoryPersistence::new();
        let boxed: Box<dyn Persistence> = Box::new(LogPersistence);

        persistence.persist(&ContentDocument::default()).expect("保存失敗");
        boxed.persist(&ContentDocument::default()).expect("保存失敗");

        assert_eq!(persistence.count(), 1);
        assert_eq!(persistence.last(), Some(ContentDocument::default()));
    }
}
