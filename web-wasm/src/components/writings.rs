//! 公開記事の一覧と本文
//!
//! どちらも `/data.json` を1回だけ取得する。画面を離れた後に
//! 届いた結果は捨てる。

use super::header::Header;
use super::not_found::NotFound;
use crate::api::fetch_document;
use gloo::console;
use leptos::prelude::*;
use lopam_common::{
    find_article, load_or_empty, published_articles, Article, ContentDocument, Error, LoadGuard,
    RecordStore,
};

/// `/data.json` を読み込み、終わったら `on_loaded` を呼ぶ
pub(crate) fn load_content(on_loaded: impl FnOnce(ContentDocument) + 'static) {
    let guard = LoadGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_document().await.map_err(|e| {
            console::error!("Error loading data:", e.clone());
            Error::Load(e)
        });
        if let Some(document) = guard.accept(load_or_empty(result)) {
            on_loaded(document);
        }
    });
}

#[component]
pub fn WritingsList() -> impl IntoView {
    let articles = RwSignal::new(None::<Vec<Article>>);
    load_content(move |document| {
        let store = RecordStore::from_records(document.articles);
        articles.set(Some(published_articles(&store).into_iter().cloned().collect()));
    });

    view! {
        <div class="container">
            <Header title="Writings" />
            <Show
                when=move || articles.with(Option::is_some)
                fallback=|| view! { <p class="text-muted">"Loading..."</p> }
            >
                <div class="article-list">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| article.id.clone()
                        children=|article| view! {
                            <article class="article-card">
                                <a href={format!("/writings/{}", article.id)}>
                                    <h2>{article.title.clone()}</h2>
                                </a>
                                <p class="article-meta">{format!("{} · {}", article.date, article.read_time)}</p>
                                <p>{article.excerpt.clone()}</p>
                                <ul class="tag-list">
                                    {article.tags.iter().map(|tag| view! { <li class="tag">{tag.clone()}</li> }).collect_view()}
                                </ul>
                            </article>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// 読み込み中 / 見つからない / 表示
#[derive(Clone)]
enum ArticleState {
    Loading,
    Missing,
    Ready(Article),
}

#[component]
pub fn ArticleView(slug: String) -> impl IntoView {
    let state = RwSignal::new(ArticleState::Loading);
    load_content(move |document| {
        let store = RecordStore::from_records(document.articles);
        let next = match find_article(&store, &slug) {
            Some(article) => ArticleState::Ready(article.clone()),
            None => ArticleState::Missing,
        };
        state.set(next);
    });

    view! {
        <div class="container">
            <Header title="Writings" />
            {move || match state.get() {
                ArticleState::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                ArticleState::Missing => view! { <NotFound message="Article not found" /> }.into_any(),
                ArticleState::Ready(article) => view! {
                    <article class="article">
                        <h1>{article.title.clone()}</h1>
                        <p class="article-meta">{format!("{} · {}", article.date, article.read_time)}</p>
                        <div class="article-content" inner_html=article.content.clone()></div>
                        <a href="/writings">"← Back to writings"</a>
                    </article>
                }.into_any(),
            }}
        </div>
    }
}
