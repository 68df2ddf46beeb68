//! リスト項目の編集（タグ、技術、成果、担当）
//!
//! 空文字と重複の扱いは下書きバッファ側で行う。

use leptos::prelude::*;

#[component]
pub fn ListField<FA, FR>(
    label: &'static str,
    placeholder: &'static str,
    items: Signal<Vec<String>>,
    on_add: FA,
    on_remove: FR,
) -> impl IntoView
where
    FA: Fn(String) + 'static + Clone + Send + Sync,
    FR: Fn(String) + 'static + Clone + Send + Sync,
{
    let (pending, set_pending) = signal(String::new());

    let add = move || {
        on_add(pending.get());
        set_pending.set(String::new());
    };

    view! {
        <div class="form-group list-field">
            <label>{label}</label>
            <div class="list-input">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || pending.get()
                    on:input=move |ev| set_pending.set(event_target_value(&ev))
                    on:keydown={
                        let add = add.clone();
                        move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                add();
                            }
                        }
                    }
                />
                <button type="button" class="btn btn-secondary btn-small" on:click=move |_| add()>
                    "Add"
                </button>
            </div>
            <ul class="tag-list">
                <For
                    each=move || items.get()
                    key=|item| item.clone()
                    children=move |item| {
                        let on_remove = on_remove.clone();
                        let value = item.clone();
                        view! {
                            <li class="tag">
                                {item}
                                <button type="button" class="tag-remove" on:click=move |_| on_remove(value.clone())>
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
