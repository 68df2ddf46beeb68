//! 管理画面のログインフォーム
//!
//! 失敗してもロックアウトはしない。メッセージを出して再入力を待つ。

use crate::storage::BrowserStore;
use gloo::console;
use leptos::prelude::*;
use lopam_common::Gatekeeper;

#[component]
pub fn Login<F>(on_login: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut gate = Gatekeeper::new(BrowserStore);
        match gate.authenticate(&username.get(), &password.get()) {
            Ok(true) => {
                set_error.set(None);
                on_login(());
            }
            Ok(false) => set_error.set(Some("Invalid username or password".to_string())),
            Err(e) => {
                console::error!(e.to_string());
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="login-panel" on:submit=submit>
            <h2>"Admin Login"</h2>
            <div class="form-group">
                <label>"Username"</label>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Password"</label>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class="btn btn-primary">"Login"</button>
        </form>
    }
}
