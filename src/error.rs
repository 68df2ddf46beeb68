use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ログインしていません。`lopam login` でログインしてください")]
    NotAuthenticated,

    #[error("引数が不正: {0}")]
    InvalidArgument(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("HTTPエラー: {0}")]
    Http(String),

    #[error("保存に失敗しました（メモリ上の変更のみ反映）")]
    NotPersisted,

    #[error(transparent)]
    Content(#[from] lopam_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for AdminError {
    fn from(e: dialoguer::Error) -> Self {
        AdminError::Prompt(e.to_string())
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(e: reqwest::Error) -> Self {
        AdminError::Http(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
