//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    title: &'static str,
    #[prop(optional)] on_logout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
            <nav class="nav">
                <a href="/">"Work"</a>
                <a href="/writings">"Writings"</a>
                {on_logout.map(|on_logout| view! {
                    <button class="btn btn-tertiary btn-small" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                })}
            </nav>
        </header>
    }
}
