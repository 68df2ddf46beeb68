//! プロジェクトのケーススタディ

use leptos::prelude::*;
use lopam_common::Project;

fn section(title: &'static str, body: String) -> impl IntoView {
    (!body.is_empty()).then(|| {
        view! {
            <section class="case-section">
                <h3>{title}</h3>
                <p>{body}</p>
            </section>
        }
    })
}

fn bullet_section(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="case-section">
                <h3>{title}</h3>
                <ul>
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </section>
        }
    })
}

#[component]
pub fn ProjectCase(project: Project, on_close: Callback<()>) -> impl IntoView {
    let live_demo = project.live_demo.clone().filter(|url| !url.is_empty());
    let repo = Some(project.repo.clone()).filter(|url| !url.is_empty());

    view! {
        <div class="case-overlay">
            <article class="case-study">
                <button class="btn btn-tertiary btn-small case-close" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
                <h2>{project.title.clone()}</h2>
                <p class="article-meta">{format!("{} · {}", project.role, project.duration)}</p>
                <ul class="tag-list">
                    {project.tech.iter().map(|tech| view! { <li class="tag">{tech.clone()}</li> }).collect_view()}
                </ul>
                <div class="case-links">
                    {live_demo.map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Live demo →"</a> })}
                    {repo.map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Repository →"</a> })}
                </div>
                {section("Summary", project.summary.clone())}
                {section("Problem", project.problem.clone())}
                {section("Approach", project.approach.clone())}
                {bullet_section("Responsibilities", project.responsibilities.clone())}
                {bullet_section("Impact", project.impact.clone())}
                {section("Takeaway", project.takeaway.clone())}
                {section("What I'd do differently", project.what_id_do_differently.clone())}
            </article>
        </div>
    }
}
