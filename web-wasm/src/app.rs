//! メインアプリケーションコンポーネント
//!
//! パスで画面を切り替える。

use crate::components::{
    admin::Admin,
    home::Home,
    not_found::NotFound,
    writings::{ArticleView, WritingsList},
};
use leptos::prelude::*;

/// 表示する画面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Admin,
    Writings,
    Article(String),
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Page::Home,
            "/update" => Page::Admin,
            "/writings" => Page::Writings,
            _ => match path.strip_prefix("/writings/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Page::Article(slug.to_string()),
                _ => Page::NotFound,
            },
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    match Page::from_path(&current_path()) {
        Page::Home => view! { <Home /> }.into_any(),
        Page::Admin => view! { <Admin /> }.into_any(),
        Page::Writings => view! { <WritingsList /> }.into_any(),
        Page::Article(slug) => view! { <ArticleView slug=slug /> }.into_any(),
        Page::NotFound => view! {
            <div class="container">
                <NotFound message="Page not found" />
            </div>
        }
        .into_any(),
    }
}
