//! 下書きの項目に結びついた入力欄

use crate::editor::EditorHandle;
use leptos::prelude::*;
use lopam_common::{EditMode, Editable};

/// 1行のテキスト入力
pub fn text_input<R: Editable + 'static>(
    editor: EditorHandle,
    key: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                prop:value={move || editor.text::<R>(key)}
                on:input={move |ev| editor.set_field::<R>(key, event_target_value(&ev))}
            />
        </div>
    }
}

/// 複数行のテキスト入力
pub fn text_area<R: Editable + 'static>(
    editor: EditorHandle,
    key: &'static str,
    label: &'static str,
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows=rows.to_string()
                prop:value={move || editor.text::<R>(key)}
                on:input={move |ev| editor.set_field::<R>(key, event_target_value(&ev))}
            ></textarea>
        </div>
    }
}

/// 保存・キャンセルボタン
pub fn form_actions<R: Editable + 'static>(editor: EditorHandle) -> impl IntoView {
    let submit_label = move || {
        if editor.mode::<R>() == EditMode::Creating {
            "Add"
        } else {
            "Update"
        }
    };

    view! {
        <div class="form-actions">
            <button type="button" class="btn btn-primary" on:click={move |_| editor.commit::<R>()}>
                {submit_label}
            </button>
            <button type="button" class="btn btn-secondary" on:click={move |_| editor.cancel::<R>()}>
                "Cancel"
            </button>
        </div>
    }
}
