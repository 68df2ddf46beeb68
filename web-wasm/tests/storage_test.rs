//! localStorage アダプタのブラウザテスト
//!
//! `wasm-pack test --headless --chrome web-wasm` で実行

use lopam_common::{Gatekeeper, KeyValueStore, AUTH_KEY};
use lopam_web::storage::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_login_writes_raw_flag() {
    let mut gate = Gatekeeper::new(BrowserStore);
    gate.logout().unwrap();

    assert!(gate.authenticate("lopam", "lopam").unwrap());
    assert_eq!(BrowserStore.get(AUTH_KEY).as_deref(), Some("true"));
    assert!(gate.is_authenticated());

    gate.logout().unwrap();
    assert_eq!(BrowserStore.get(AUTH_KEY), None);
}

#[wasm_bindgen_test]
fn test_wrong_password_keeps_logged_out() {
    let mut gate = Gatekeeper::new(BrowserStore);
    gate.logout().unwrap();

    assert!(!gate.authenticate("lopam", "nope").unwrap());
    assert!(!gate.is_authenticated());
}
