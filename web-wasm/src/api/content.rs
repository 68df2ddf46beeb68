//! 静的ドキュメント (`/data.json`) の取得

use lopam_common::{parse_document, ContentDocument, DATA_PATH};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GETで本文を取得
async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// コンテンツを1回だけ取得
///
/// 失敗時はメッセージを返す。空リストへのフォールバックは呼び出し側で行う。
pub async fn fetch_document() -> Result<ContentDocument, String> {
    let body = fetch_text(DATA_PATH)
        .await
        .map_err(|e| format!("{:?}", e))?;
    parse_document(&body).map_err(|e| e.to_string())
}
