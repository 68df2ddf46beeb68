use leptos::prelude::*;

#[component]
pub fn NotFound(message: &'static str) -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p class="text-muted">{message}</p>
            <a href="/writings">"← Back to writings"</a>
        </div>
    }
}
