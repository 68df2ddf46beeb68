use crate::error::{AdminError, Result};
use lopam_common::{Credentials, SAVE_ENDPOINT_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 変更後のドキュメントの保存方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// ログに出すだけ
    #[default]
    Log,
    /// data.json に書き戻す
    File,
    /// 保存APIにPOST
    Http,
}

impl std::str::FromStr for SaveMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(SaveMode::Log),
            "file" => Ok(SaveMode::File),
            "http" | "api" => Ok(SaveMode::Http),
            _ => Err(format!("Unknown save mode: {}. Use log, file, or http", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// data.json のパスまたはURL
    pub data_path: String,
    pub save_mode: SaveMode,
    pub save_endpoint: String,
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        let credentials = Credentials::default();
        Self {
            data_path: "public/data.json".into(),
            save_mode: SaveMode::Log,
            save_endpoint: format!("http://localhost:3000{}", SAVE_ENDPOINT_PATH),
            username: credentials.username,
            password: credentials.password,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdminError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("lopam"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 認証フラグを保存するファイル
    pub fn storage_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("storage.json"))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// コマンドライン引数で上書き
    pub fn with_overrides(mut self, data: Option<String>, save: Option<SaveMode>) -> Self {
        if let Some(data) = data {
            self.data_path = data;
        }
        if let Some(save) = save {
            self.save_mode = save;
        }
        self
    }
}
