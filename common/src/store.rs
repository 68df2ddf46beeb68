//! レコードストア
//!
//! 静的ドキュメントから一度だけ読み込み、以後はメモリ上でのみ変更する。
//! 追加・置換の後も同じIDのレコードは2つ存在しない。

use crate::error::{Error, Result};
use crate::record::Record;
use crate::types::{Article, ContentDocument, Project};
use std::collections::HashSet;

/// 1種類のレコードの順序付きリスト
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込んだリストから作成
    ///
    /// IDが重複している場合は先頭のレコードだけを残す。
    /// IDの無いレコードは重複扱いせず、すべて残す。
    pub fn from_records(records: Vec<R>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if record.id().is_empty() || seen.insert(record.id().to_string()) {
                kept.push(record);
            } else {
                let kind = R::KIND;
                tracing::warn!(%kind, id = record.id(), "duplicate id dropped on load");
            }
        }
        Self { records: kept }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// 末尾に追加
    pub fn append(&mut self, record: R) -> Result<&[R]> {
        if self.contains(record.id()) {
            return Err(Error::DuplicateId {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }
        self.records.push(record);
        Ok(&self.records)
    }

    /// `id` のレコードを同じ位置で置き換える
    pub fn replace(&mut self, id: &str, record: R) -> Result<&[R]> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::RecordNotFound {
                kind: R::KIND,
                id: id.to_string(),
            })?;

        if record.id() != id && self.contains(record.id()) {
            return Err(Error::DuplicateId {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }

        self.records[index] = record;
        Ok(&self.records)
    }

    /// `id` 以外のレコードだけを残す（存在しなければ何もしない）
    pub fn remove(&mut self, id: &str) -> &[R] {
        self.records.retain(|r| r.id() != id);
        &self.records
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 記事とプロジェクトのストア
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    pub articles: RecordStore<Article>,
    pub projects: RecordStore<Project>,
}

impl ContentStore {
    pub fn from_document(document: ContentDocument) -> Self {
        Self {
            articles: RecordStore::from_records(document.articles),
            projects: RecordStore::from_records(document.projects),
        }
    }

    /// 保存されるはずのドキュメント
    pub fn to_document(&self) -> ContentDocument {
        ContentDocument {
            articles: self.articles.records().to_vec(),
            projects: self.projects.records().to_vec(),
        }
    }

    /// 種別を指定してストアを取得
    pub fn of<R: Record>(&self) -> &RecordStore<R> {
        R::records(self)
    }

    pub fn of_mut<R: Record>(&mut self) -> &mut RecordStore<R> {
        R::records_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, title: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut store = RecordStore::from_records(vec![article("a", "X")]);
        assert_eq!(store.append(article("b", "Y")).expect("追加失敗").len(), 2);

        let err = store.append(article("a", "Z")).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store =
            RecordStore::from_records(vec![article("a", "X"), article("b", "Y"), article("c", "Z")]);
        let records = store.replace("b", article("b", "Y2")).expect("置換失敗");

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(records[1].title, "Y2");
    }

    #[test]
    fn test_replace_unknown_or_colliding_id() {
        let mut store = RecordStore::from_records(vec![article("a", "X"), article("b", "Y")]);
        assert!(matches!(
            store.replace("zzz", article("zzz", "?")),
            Err(Error::RecordNotFound { .. })
        ));
        assert!(matches!(
            store.replace("a", article("b", "?")),
            Err(Error::DuplicateId { .. })
        ));
        assert_eq!(store.get("a").map(|r| r.title.as_str()), Some("X"));
    }

    #[test]
    fn test_remove_is_filter() {
        let mut store = RecordStore::from_records(vec![article("a", "X"), article("b", "Y")]);
        assert_eq!(store.remove("missing").len(), 2);
        assert_eq!(store.remove("a").len(), 1);
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_from_records_drops_duplicates() {
        let store = RecordStore::from_records(vec![article("a", "first"), article("a", "second")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").map(|r| r.title.as_str()), Some("first"));
    }

    #[test]
    fn test_from_records_keeps_records_without_id() {
        let document = ContentDocument::from_json(
            r#"{"projects":[{"title":"Sneaklin"},{"title":"UniChow"}]}"#,
        )
        .unwrap();
        let store = ContentStore::from_document(document);
        let titles: Vec<&str> = store.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sneaklin", "UniChow"]);
    }

    #[test]
    fn test_content_store_document_roundtrip() {
        let document = ContentDocument {
            articles: vec![article("a", "X")],
            projects: vec![Project {
                id: "sneaklin".to_string(),
                ..Default::default()
            }],
        };
        let store = ContentStore::from_document(document.clone());
        assert_eq!(store.of::<Project>().len(), 1);
        assert_eq!(store.to_document(), document);
    }
}
