//! LOPAM Web App (Leptos + WASM)
//!
//! `/update` の管理画面と `/writings` の記事ページ

pub mod api;
pub mod app;
pub mod clock;
pub mod components;
pub mod editor;
pub mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
