//! トップページ (`/`)
//!
//! プロジェクトの一覧。カードを選ぶとケーススタディを重ねて表示する。

use super::header::Header;
use super::project_case::ProjectCase;
use super::writings::load_content;
use leptos::prelude::*;
use lopam_common::{find_project, Project, RecordStore};

#[component]
pub fn Home() -> impl IntoView {
    let projects = RwSignal::new(None::<RecordStore<Project>>);
    let (selected, set_selected) = signal(None::<String>);

    load_content(move |document| projects.set(Some(RecordStore::from_records(document.projects))));

    let on_close = Callback::new(move |_| set_selected.set(None));
    let case_study = move || {
        let id = selected.get()?;
        let project = projects.with(|store| store.as_ref().and_then(|s| find_project(s, &id).cloned()))?;
        Some(view! { <ProjectCase project=project on_close=on_close /> })
    };

    view! {
        <div class="container">
            <Header title="LOPAM" />
            <Show
                when=move || projects.with(Option::is_some)
                fallback=|| view! { <p class="text-muted">"Loading projects..."</p> }
            >
                <section class="project-grid">
                    <For
                        each={move || projects.get().map(|s| s.records().to_vec()).unwrap_or_default()}
                        key=|project| project.id.clone()
                        children=move |project| {
                            let id = project.id.clone();
                            view! {
                                <article class="project-card" on:click=move |_| set_selected.set(Some(id.clone()))>
                                    <h2>{project.title.clone()}</h2>
                                    <p class="article-meta">{format!("{} · {}", project.role, project.duration)}</p>
                                    <p>{project.summary.clone()}</p>
                                    <ul class="tag-list">
                                        {project.tech.iter().map(|tech| view! { <li class="tag">{tech.clone()}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        }
                    />
                </section>
            </Show>
            {case_study}
        </div>
    }
}
