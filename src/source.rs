//! data.json の取得（ファイルまたはURL）

use crate::persist::is_url;
use lopam_common::{load_or_empty, parse_document, ContentDocument, Error, Result};
use std::path::Path;

/// ドキュメントを取得
pub fn fetch_document(source: &str) -> Result<ContentDocument> {
    if is_url(source) {
        let response = reqwest::blocking::get(source).map_err(|e| Error::Load(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::Load(format!("HTTP {} for {}", response.status(), source)));
        }
        let body = response.text().map_err(|e| Error::Load(e.to_string()))?;
        parse_document(&body)
    } else {
        ContentDocument::from_file(Path::new(source))
    }
}

/// 取得に失敗したら空のドキュメント
pub fn load_document(source: &str) -> ContentDocument {
    load_or_empty(fetch_document(source))
}
