//! LOPAM content admin CLI
//!
//! data.json を読み込み、記事とプロジェクトを編集する。

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod persist;
pub mod source;
pub mod storage;
