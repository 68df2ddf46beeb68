//! LOPAM Common Library
//!
//! CLIとWeb(WASM)で共有されるコンテンツ編集のコア:
//! レコードストア、下書きバッファ、編集コントローラ、ゲートキーパー

pub mod types;
pub mod error;
pub mod clock;
pub mod record;
pub mod store;
pub mod draft;
pub mod editor;
pub mod persist;
pub mod auth;
pub mod loader;
pub mod reader;

pub use types::{Article, ContentDocument, Project, RecordKind};
pub use error::{Error, Result, VALIDATION_MESSAGE};
pub use clock::{Clock, FixedClock};
pub use record::{FieldValue, Record, DEFAULT_READ_TIME};
pub use store::{ContentStore, RecordStore};
pub use draft::{DraftBuffer, EditMode};
pub use editor::{
    delete_prompt, CommitAction, CommitOutcome, Confirm, DeleteOutcome, Editable,
    EditingController,
};
pub use persist::{LogPersistence, MemoryPersistence, Persistence, SAVE_ENDPOINT_PATH};
pub use auth::{Credentials, Gatekeeper, KeyValueStore, MemoryStore, AUTH_KEY, AUTH_VALUE};
pub use loader::{load_or_empty, parse_document, LoadGuard, DATA_PATH};
pub use reader::{find_project, find_article, published_articles};
