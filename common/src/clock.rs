//! 時刻の取得
//!
//! IDの採番 (`article-<ミリ秒>`) とテンプレートの日付に使う。

/// 現在時刻の提供元
pub trait Clock {
    /// UNIXエポックからのミリ秒
    fn now_millis(&self) -> i64;

    /// 今日の日付 (YYYY-MM-DD)
    fn today(&self) -> String;
}

/// 固定時刻（テスト用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    pub millis: i64,
    pub date: String,
}

impl FixedClock {
    pub fn new(millis: i64, date: impl Into<String>) -> Self {
        Self {
            millis,
            date: date.into(),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(1_700_000_000_000, "2023-11-14")
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> String {
        self.date.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> String {
        (**self).today()
    }
}
