//! 管理画面 (`/update`)
//!
//! 未ログインならログインフォーム、読み込み中はプレースホルダ、
//! それ以外は記事/プロジェクトのタブを表示する。

use super::article_form::ArticleForm;
use super::header::Header;
use super::login::Login;
use super::project_form::ProjectForm;
use super::record_list::record_list;
use super::writings::load_content;
use crate::editor::EditorHandle;
use crate::storage::BrowserStore;
use gloo::console;
use leptos::prelude::*;
use lopam_common::{Article, Gatekeeper, Project, RecordKind};

#[component]
pub fn Admin() -> impl IntoView {
    let (authenticated, set_authenticated) =
        signal(Gatekeeper::new(BrowserStore).is_authenticated());
    let (tab, set_tab) = signal(RecordKind::Article);
    let editor = EditorHandle::new();

    // ログインするまでは読み込まない
    Effect::new(move |_| {
        if authenticated.get() && !editor.is_loaded() {
            load_content(move |document| editor.install(document));
        }
    });

    let on_login = move |_| set_authenticated.set(true);
    let on_logout = Callback::new(move |_| {
        let mut gate = Gatekeeper::new(BrowserStore);
        if let Err(e) = gate.logout() {
            console::error!(e.to_string());
        }
        set_authenticated.set(false);
    });

    view! {
        <Show
            when=move || authenticated.get()
            fallback=move || view! {
                <div class="container">
                    <Header title="LOPAM Admin" />
                    <Login on_login=on_login />
                </div>
            }
        >
            <div class="container">
                <Header title="LOPAM Admin" on_logout=on_logout />
                <Show
                    when=move || editor.is_loaded()
                    fallback=|| view! { <p class="text-muted">"Loading..."</p> }
                >
                    <div class="tabs">
                        <button
                            class=move || tab_class(tab.get() == RecordKind::Article)
                            on:click=move |_| set_tab.set(RecordKind::Article)
                        >
                            "Articles"
                        </button>
                        <button
                            class=move || tab_class(tab.get() == RecordKind::Project)
                            on:click=move |_| set_tab.set(RecordKind::Project)
                        >
                            "Projects"
                        </button>
                    </div>
                    {move || match tab.get() {
                        RecordKind::Article => view! { <ArticlePanel editor=editor /> }.into_any(),
                        RecordKind::Project => view! { <ProjectPanel editor=editor /> }.into_any(),
                    }}
                </Show>
            </div>
        </Show>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

#[component]
fn ArticlePanel(editor: EditorHandle) -> impl IntoView {
    view! {
        <section class="panel">
            <Show
                when={move || !editor.mode::<Article>().is_idle()}
                fallback=move || view! {
                    <button class="btn btn-primary" on:click={move |_| editor.begin_create::<Article>()}>
                        "New article"
                    </button>
                }
            >
                <ArticleForm editor=editor />
            </Show>
            {record_list::<Article>(editor, |article| {
                let state = if article.published { "Published" } else { "Draft" };
                format!("{} · {}", article.date, state)
            })}
        </section>
    }
}

#[component]
fn ProjectPanel(editor: EditorHandle) -> impl IntoView {
    view! {
        <section class="panel">
            <Show
                when={move || !editor.mode::<Project>().is_idle()}
                fallback=move || view! {
                    <button class="btn btn-primary" on:click={move |_| editor.begin_create::<Project>()}>
                        "New project"
                    </button>
                }
            >
                <ProjectForm editor=editor />
            </Show>
            {record_list::<Project>(editor, |project| project.role.clone())}
        </section>
    }
}
