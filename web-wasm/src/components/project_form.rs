//! プロジェクトフォーム

use super::inputs::{form_actions, text_area, text_input};
use super::list_field::ListField;
use crate::editor::EditorHandle;
use leptos::prelude::*;
use lopam_common::Project;

/// プロジェクトのリスト項目
fn project_list(
    editor: EditorHandle,
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let items = Signal::derive(move || editor.list::<Project>(field));
    view! {
        <ListField
            label=label
            placeholder=placeholder
            items=items
            on_add={move |value: String| editor.add_item::<Project>(field, &value)}
            on_remove={move |value: String| editor.remove_item::<Project>(field, &value)}
        />
    }
}

#[component]
pub fn ProjectForm(editor: EditorHandle) -> impl IntoView {
    view! {
        <div class="record-form">
            {text_input::<Project>(editor, "title", "Title *")}
            <div class="form-row">
                {text_input::<Project>(editor, "role", "Role *")}
                {text_input::<Project>(editor, "duration", "Duration")}
            </div>
            {text_area::<Project>(editor, "summary", "Summary *", 3)}
            {project_list(editor, "tech", "Tech stack", "Add a technology...")}
            <div class="form-row">
                {text_input::<Project>(editor, "live_demo", "Live demo URL")}
                {text_input::<Project>(editor, "repo", "Repository URL")}
            </div>
            {text_area::<Project>(editor, "problem", "Problem", 3)}
            {text_area::<Project>(editor, "approach", "Approach", 3)}
            {project_list(editor, "responsibilities", "Responsibilities", "Add a responsibility...")}
            {project_list(editor, "impact", "Impact", "Add an impact...")}
            {text_area::<Project>(editor, "takeaway", "Takeaway", 2)}
            {text_area::<Project>(editor, "whatIdDoDifferently", "What I'd do differently", 2)}
            {form_actions::<Project>(editor)}
        </div>
    }
}
