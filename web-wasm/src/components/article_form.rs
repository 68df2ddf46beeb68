//! 記事フォーム

use super::inputs::{form_actions, text_area, text_input};
use super::list_field::ListField;
use crate::editor::EditorHandle;
use leptos::prelude::*;
use lopam_common::Article;

#[component]
pub fn ArticleForm(editor: EditorHandle) -> impl IntoView {
    let tags = Signal::derive(move || editor.list::<Article>("tags"));
    let published = move || {
        editor
            .draft_field::<Article, _>(|a| a.published)
            .unwrap_or_default()
    };

    view! {
        <div class="record-form">
            {text_input::<Article>(editor, "title", "Title *")}
            {text_area::<Article>(editor, "excerpt", "Excerpt *", 2)}
            {text_area::<Article>(editor, "content", "Content (HTML) *", 12)}
            <div class="form-row">
                {text_input::<Article>(editor, "date", "Date")}
                {text_input::<Article>(editor, "readTime", "Read time")}
            </div>
            <ListField
                label="Tags"
                placeholder="Add a tag..."
                items=tags
                on_add={move |tag: String| editor.add_item::<Article>("tags", &tag)}
                on_remove={move |tag: String| editor.remove_item::<Article>("tags", &tag)}
            />
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=published
                    on:change={move |ev| editor.set_field::<Article>("published", event_target_checked(&ev))}
                />
                "Published"
            </label>
            {form_actions::<Article>(editor)}
        </div>
    }
}
