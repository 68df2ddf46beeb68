//! writings ページ用の読み取り
//!
//! 一覧には公開済みの記事だけを新しい順に並べる。
//! 記事ページはIDが分かれば下書きでも表示する（一覧には出ない）。

use crate::store::RecordStore;
use crate::types::{Article, Project};

/// 公開済みの記事（日付の新しい順）
pub fn published_articles(store: &RecordStore<Article>) -> Vec<&Article> {
    let mut articles: Vec<&Article> = store.iter().filter(|a| a.published).collect();
    // YYYY-MM-DD なので文字列比較で日付順になる
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

/// スラッグ（=ID）から記事を探す
pub fn find_article<'a>(store: &'a RecordStore<Article>, slug: &str) -> Option<&'a Article> {
    store.get(slug)
}

/// ケーススタディを探す
pub fn find_project<'a>(store: &'a RecordStore<Project>, id: &str) -> Option<&'a Project> {
    store.get(id)
}
