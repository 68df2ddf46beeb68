//! 画面から編集コントローラを扱うためのハンドル
//!
//! 読み込みが終わるまでコントローラは `None`。

use crate::api::WebPersistence;
use crate::clock::BrowserClock;
use gloo::{console, dialogs};
use leptos::prelude::*;
use lopam_common::{
    ContentDocument, ContentStore, DeleteOutcome, EditMode, Editable, EditingController, Error,
    FieldValue, VALIDATION_MESSAGE,
};

pub type Controller = EditingController<WebPersistence, BrowserClock>;

#[derive(Clone, Copy)]
pub struct EditorHandle {
    controller: RwSignal<Option<Controller>>,
}

impl EditorHandle {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.controller.with(Option::is_some)
    }

    /// 読み込んだドキュメントでコントローラを作成
    pub fn install(&self, document: ContentDocument) {
        let controller = EditingController::new(
            ContentStore::from_document(document),
            WebPersistence::from_env(),
            BrowserClock,
        );
        self.controller.set(Some(controller));
    }

    fn read<T>(&self, f: impl FnOnce(&Controller) -> T) -> Option<T> {
        self.controller.with(|c| c.as_ref().map(f))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Option<T> {
        self.controller.try_update(|c| c.as_mut().map(f)).flatten()
    }

    pub fn records<R: Editable>(&self) -> Vec<R> {
        self.read(|c| c.records::<R>().records().to_vec())
            .unwrap_or_default()
    }

    pub fn mode<R: Editable>(&self) -> EditMode {
        self.read(|c| c.mode::<R>().clone()).unwrap_or_default()
    }

    /// 下書きのテキスト項目
    pub fn text<R: Editable>(&self, key: &str) -> String {
        self.read(|c| c.draft::<R>().fields().text(key).unwrap_or_default().to_string())
            .unwrap_or_default()
    }

    pub fn list<R: Editable>(&self, field: &str) -> Vec<String> {
        self.read(|c| c.draft::<R>().fields().list(field).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn draft_field<R: Editable, T>(&self, f: impl FnOnce(&R) -> T) -> Option<T> {
        self.read(|c| f(c.draft::<R>().fields()))
    }

    pub fn set_field<R: Editable>(&self, key: &str, value: impl Into<FieldValue>) {
        let result = self.write(|c| c.draft_mut::<R>().and_then(|d| d.set_field(key, value)));
        report(result);
    }

    pub fn add_item<R: Editable>(&self, field: &str, value: &str) {
        let result = self.write(|c| c.draft_mut::<R>().and_then(|d| d.add_list_item(field, value)));
        report(result);
    }

    pub fn remove_item<R: Editable>(&self, field: &str, value: &str) {
        let result =
            self.write(|c| c.draft_mut::<R>().and_then(|d| d.remove_list_item(field, value)));
        report(result);
    }

    pub fn begin_create<R: Editable>(&self) {
        self.write(|c| c.begin_create::<R>());
    }

    pub fn begin_edit<R: Editable>(&self, id: &str) {
        let result = self.write(|c| c.begin_edit::<R>(id));
        report(result);
    }

    pub fn cancel<R: Editable>(&self) {
        self.write(|c| c.cancel::<R>());
    }

    /// 保存ボタン
    ///
    /// 必須項目が空ならアラートを出し、下書きは残す。
    pub fn commit<R: Editable>(&self) {
        match self.write(|c| c.commit::<R>()) {
            Some(Ok(outcome)) => {
                if !outcome.persisted {
                    console::warn!("Saved in memory only:", outcome.id);
                }
            }
            Some(Err(e)) if e.is_validation() => dialogs::alert(VALIDATION_MESSAGE),
            Some(Err(e)) => console::error!(e.to_string()),
            None => {}
        }
    }

    /// 削除ボタン（確認ダイアログ付き）
    pub fn delete<R: Editable>(&self, id: &str) {
        let result = self.write(|c| c.delete::<R>(id, &mut |message: &str| dialogs::confirm(message)));
        if let Some(Ok(DeleteOutcome::Deleted { persisted: false })) = result {
            console::warn!("Deleted in memory only:", id.to_string());
        }
        report(result);
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// 失敗をコンソールに出す
fn report<T>(result: Option<Result<T, Error>>) {
    if let Some(Err(e)) = result {
        console::error!(e.to_string());
    }
}
