//! ブラウザの時計

use lopam_common::Clock;

/// `Date.now()` を使う時計
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    /// UTCの日付 (`toISOString` の先頭10文字)
    fn today(&self) -> String {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.chars().take(10).collect()
    }
}
