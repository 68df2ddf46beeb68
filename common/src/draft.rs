//! 下書きバッファ
//!
//! コミット前のフォーム状態。リスト項目（tags, tech, impact,
//! responsibilities）は値による追加/削除でのみ変更し、重複を持たない。

use crate::error::Result;
use crate::record::{FieldValue, Record};

/// 編集モード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Creating,
    EditingExisting(String),
}

impl EditMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditMode::Idle)
    }

    /// 編集対象のマーカー（`"new"` または対象ID）
    pub fn target(&self) -> Option<&str> {
        match self {
            EditMode::Idle => None,
            EditMode::Creating => Some("new"),
            EditMode::EditingExisting(id) => Some(id.as_str()),
        }
    }
}

/// 1種類のレコードの下書き
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBuffer<R> {
    fields: R,
    mode: EditMode,
}

impl<R: Record> DraftBuffer<R> {
    pub fn new(template: R) -> Self {
        Self {
            fields: template,
            mode: EditMode::Idle,
        }
    }

    pub fn fields(&self) -> &R {
        &self.fields
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// 1項目だけを更新（他の項目は変更しない）
    pub fn set_field(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.fields.set_field(key, value.into())
    }

    /// リスト項目に値を追加
    ///
    /// 空文字列と既存の値は無視する。変更があれば `true`。
    pub fn add_list_item(&mut self, field: &str, value: &str) -> Result<bool> {
        let list = self.fields.list_mut(field)?;
        if value.is_empty() || list.iter().any(|item| item == value) {
            return Ok(false);
        }
        list.push(value.to_string());
        Ok(true)
    }

    /// リスト項目から値を取り除く
    pub fn remove_list_item(&mut self, field: &str, value: &str) -> Result<bool> {
        let list = self.fields.list_mut(field)?;
        let before = list.len();
        list.retain(|item| item != value);
        Ok(list.len() != before)
    }

    /// テンプレートで丸ごと置き換え、待機状態に戻す
    pub fn reset(&mut self, template: R) {
        self.fields = template;
        self.mode = EditMode::Idle;
    }

    pub(crate) fn open(&mut self, fields: R, mode: EditMode) {
        self.fields = fields;
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, Project};

    #[test]
    fn test_add_list_item_deduplicates() {
        let mut draft = DraftBuffer::new(Article::default());
        assert!(draft.add_list_item("tags", "LOPAM").expect("追加失敗"));
        assert!(!draft.add_list_item("tags", "LOPAM").expect("追加失敗"));
        assert_eq!(draft.fields().tags, vec!["LOPAM"]);
    }

    #[test]
    fn test_add_list_item_ignores_empty() {
        let mut draft = DraftBuffer::new(Project::default());
        assert!(!draft.add_list_item("tech", "").expect("追加失敗"));
        assert!(draft.fields().tech.is_empty());
    }

    #[test]
    fn test_remove_list_item() {
        let mut draft = DraftBuffer::new(Project::default());
        draft.add_list_item("impact", "Reduced load times by 25%").expect("追加失敗");
        draft.add_list_item("impact", "Integrated payment flows").expect("追加失敗");

        assert!(draft.remove_list_item("impact", "Reduced load times by 25%").expect("削除失敗"));
        assert!(!draft.remove_list_item("impact", "not there").expect("削除失敗"));
        assert_eq!(draft.fields().impact, vec!["Integrated payment flows"]);
    }

    #[test]
    fn test_list_ops_on_scalar_field_fail() {
        let mut draft = DraftBuffer::new(Article::default());
        assert!(draft.add_list_item("title", "x").is_err());
        assert!(draft.remove_list_item("tech", "x").is_err());
    }

    #[test]
    fn test_set_field_merges_single_field() {
        let mut draft = DraftBuffer::new(Article {
            excerpt: "kept".to_string(),
            ..Default::default()
        });
        draft.set_field("title", "Building Sneaklin").expect("更新失敗");
        assert_eq!(draft.fields().title, "Building Sneaklin");
        assert_eq!(draft.fields().excerpt, "kept");
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut draft = DraftBuffer::new(Article::default());
        draft.open(
            Article {
                id: "a".to_string(),
                ..Default::default()
            },
            EditMode::EditingExisting("a".to_string()),
        );
        assert_eq!(draft.mode().target(), Some("a"));

        draft.reset(Article::default());
        assert!(draft.mode().is_idle());
        assert_eq!(draft.fields(), &Article::default());
    }
}
