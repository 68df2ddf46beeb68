//! エラー型定義

use crate::types::RecordKind;
use thiserror::Error;

/// 必須項目が未入力のときにユーザーへ表示するメッセージ
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Please fill in all required fields ({kind}: {})", .missing.join(", "))]
    Validation {
        kind: RecordKind,
        missing: Vec<&'static str>,
    },

    #[error("unknown {kind} field: {field}")]
    UnknownField { kind: RecordKind, field: String },

    #[error("{kind} field `{field}` cannot be edited")]
    ReadOnlyField { kind: RecordKind, field: String },

    #[error("{kind} field `{field}` is a list; use add/remove")]
    ListFieldNotSettable { kind: RecordKind, field: String },

    #[error("{kind} field `{field}` expects {expected}")]
    FieldTypeMismatch {
        kind: RecordKind,
        field: String,
        expected: &'static str,
    },

    #[error("{kind} field `{field}` is not a list")]
    NotAList { kind: RecordKind, field: String },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: RecordKind, id: String },

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: RecordKind, id: String },

    #[error("no {0} is being edited")]
    NotEditing(RecordKind),

    #[error("Persist error: {0}")]
    Persist(String),

    #[error("Load error: {0}")]
    Load(String),
}

impl Error {
    /// 入力不足によるエラーか（フォームを保持したまま再入力させる）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation {
            kind: RecordKind::Article,
            missing: vec!["title", "content"],
        };
        assert_eq!(
            format!("{}", error),
            "Please fill in all required fields (article: title, content)"
        );
        assert!(error.is_validation());
    }

    #[test]
    fn test_error_display_not_found() {
        let error = Error::RecordNotFound {
            kind: RecordKind::Project,
            id: "sneaklin".to_string(),
        };
        assert_eq!(format!("{}", error), "project not found: sneaklin");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
