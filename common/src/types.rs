//! コンテンツの型定義
//!
//! 静的ドキュメント `/data.json` と同じ形でシリアライズされる:
//! - Article: writings に表示される記事
//! - Project: ポートフォリオのケーススタディ
//! - ContentDocument: `{articles, projects}` のドキュメント全体

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// レコード種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Article,
    Project,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Article => "article",
            RecordKind::Project => "project",
        }
    }

    /// ドキュメント上のキー名
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Article => "articles",
            RecordKind::Project => "projects",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "article" | "articles" | "a" => Ok(RecordKind::Article),
            "project" | "projects" | "p" => Ok(RecordKind::Project),
            _ => Err(format!("Unknown kind: {}. Use article or project", s)),
        }
    }
}

/// 記事
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// 本文（HTML文字列）
    pub content: String,
    /// 公開日 (YYYY-MM-DD)
    pub date: String,
    /// "5 min read" のような表示用ラベル
    pub read_time: String,
    pub tags: Vec<String>,
    pub published: bool,
}

/// プロジェクト（ケーススタディ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub role: String,
    pub duration: String,
    pub tech: Vec<String>,
    #[serde(rename = "live_demo")]
    pub live_demo: Option<String>,
    pub repo: String,
    pub summary: String,
    pub impact: Vec<String>,
    pub takeaway: String,
    pub problem: String,
    pub responsibilities: Vec<String>,
    pub approach: String,
    pub what_id_do_differently: String,
}

/// 静的ドキュメント全体
///
/// キーが無い場合は空リストとして扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ContentDocument {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 整形済みJSON
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.projects.is_empty()
    }
}
