//! 変更後のドキュメントの保存先
//!
//! - log: ログに出すだけ（既定）
//! - file: data.json に書き戻す
//! - http: `POST /api/save-data`

use crate::config::{Config, SaveMode};
use lopam_common::{ContentDocument, Error, LogPersistence, Persistence, Result};
use std::path::PathBuf;

/// data.json に書き戻す
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for FilePersistence {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, document.to_json_pretty()?)?;
        tracing::info!(path = %self.path.display(), "data saved");
        Ok(())
    }
}

/// 保存APIにPOST
#[derive(Debug, Clone)]
pub struct HttpPersistence {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPersistence {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Persistence for HttpPersistence {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(document)
            .send()
            .map_err(|e| Error::Persist(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Persist(format!("API error: {}", response.status())));
        }
        tracing::info!(endpoint = %self.endpoint, "data saved");
        Ok(())
    }
}

/// 設定に応じた保存先
pub fn from_config(config: &Config) -> Result<Box<dyn Persistence>> {
    match config.save_mode {
        SaveMode::Log => Ok(Box::new(LogPersistence)),
        SaveMode::File => {
            if is_url(&config.data_path) {
                return Err(Error::Persist(format!(
                    "cannot write back to a URL: {}",
                    config.data_path
                )));
            }
            Ok(Box::new(FilePersistence::new(&config.data_path)))
        }
        SaveMode::Http => Ok(Box::new(HttpPersistence::new(config.save_endpoint.clone()))),
    }
}

pub(crate) fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
