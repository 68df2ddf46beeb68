//! 既存レコードの一覧（編集・削除ボタン付き）

use crate::editor::EditorHandle;
use leptos::prelude::*;
use lopam_common::Editable;

/// 一覧の1行。`describe` で副題を作る
pub fn record_list<R: Editable + Send + Sync + 'static>(
    editor: EditorHandle,
    describe: fn(&R) -> String,
) -> impl IntoView {
    let empty_message = format!("No {} yet", R::KIND.plural());

    view! {
        <Show
            when={move || !editor.records::<R>().is_empty()}
            fallback=move || view! { <p class="text-muted">{empty_message.clone()}</p> }
        >
            <ul class="record-list">
                <For
                    each={move || editor.records::<R>()}
                    key=|record| (record.id().to_string(), record.title().to_string())
                    children=move |record| {
                        let edit_id = record.id().to_string();
                        let delete_id = record.id().to_string();
                        view! {
                            <li class="record-item">
                                <div class="record-summary">
                                    <strong>{record.title().to_string()}</strong>
                                    <span class="text-muted">{describe(&record)}</span>
                                </div>
                                <div class="record-actions">
                                    <button
                                        class="btn btn-secondary btn-small"
                                        on:click={move |_| editor.begin_edit::<R>(&edit_id)}
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-tertiary btn-small"
                                        on:click={move |_| editor.delete::<R>(&delete_id)}
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
