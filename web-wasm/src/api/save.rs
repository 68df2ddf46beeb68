//! 変更後ドキュメントの保存
//!
//! ビルド時に `LOPAM_SAVE_ENDPOINT` が設定されていればそこへPOSTする
//! （結果は待たない）。未設定ならコンソールに出すだけ。

use gloo::console;
use lopam_common::{ContentDocument, Error, Persistence, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPersistence {
    Console,
    Endpoint(String),
}

impl WebPersistence {
    pub fn from_env() -> Self {
        match option_env!("LOPAM_SAVE_ENDPOINT") {
            Some(url) if !url.is_empty() => WebPersistence::Endpoint(url.to_string()),
            _ => WebPersistence::Console,
        }
    }
}

impl Default for WebPersistence {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Persistence for WebPersistence {
    fn persist(&self, document: &ContentDocument) -> Result<()> {
        match self {
            WebPersistence::Console => {
                let payload = serde_wasm_bindgen::to_value(document)
                    .map_err(|e| Error::Persist(e.to_string()))?;
                console::log!("Data would be saved:", payload);
                Ok(())
            }
            WebPersistence::Endpoint(url) => {
                let body = serde_json::to_string(document)?;
                let url = url.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = post_json(&url, &body).await {
                        console::error!("Error saving data:", e);
                    }
                });
                Ok(())
            }
        }
    }
}

async fn post_json(url: &str, body: &str) -> std::result::Result<(), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }
    Ok(())
}
