//! サーバーとの通信

pub mod content;
pub mod save;

pub use content::fetch_document;
pub use save::WebPersistence;
