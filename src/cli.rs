use crate::config::SaveMode;
use clap::{Args, Parser, Subcommand};
use lopam_common::RecordKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lopam")]
#[command(about = "LOPAM ポートフォリオのコンテンツ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// data.json のパスまたはURL（設定より優先）
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// 保存方法 (log/file/http)
    #[arg(long, global = true)]
    pub save: Option<SaveMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 管理画面にログイン
    Login {
        /// ユーザー名（省略時は入力を求める）
        #[arg(short, long)]
        username: Option<String>,

        /// パスワード（省略時は入力を求める）
        #[arg(short, long)]
        password: Option<String>,
    },

    /// ログアウト
    Logout,

    /// ログイン状態と設定を表示
    Status,

    /// --data / --save の指定を設定ファイルに保存
    Config {
        /// 保存APIのURL
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// レコード一覧
    List {
        /// 種別 (article/project)
        #[arg(required = true)]
        kind: RecordKind,
    },

    /// レコードをJSONで表示
    Show {
        #[arg(required = true)]
        kind: RecordKind,

        #[arg(required = true)]
        id: String,
    },

    /// 公開済みの記事（新しい順）
    Writings,

    /// 公開済みの記事を読む
    Read {
        /// 記事のスラッグ（ID）
        #[arg(required = true)]
        slug: String,
    },

    /// レコードを新規作成
    Add {
        #[arg(required = true)]
        kind: RecordKind,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// 既存のレコードを編集
    Edit {
        #[arg(required = true)]
        kind: RecordKind,

        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// レコードを削除
    Delete {
        #[arg(required = true)]
        kind: RecordKind,

        #[arg(required = true)]
        id: String,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 内容をバックアップとして書き出す
    Export {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// バックアップから内容を置き換える
    Import {
        #[arg(required = true)]
        input: PathBuf,
    },
}

/// 下書きへの変更
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// 項目を設定 (例: --set title="Building Sneaklin")
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// リスト項目に追加 (例: --add tags=LOPAM)
    #[arg(long = "add", value_name = "FIELD=VALUE")]
    pub add: Vec<String>,

    /// リスト項目から削除 (例: --remove tech=Bootstrap)
    #[arg(long = "remove", value_name = "FIELD=VALUE")]
    pub remove: Vec<String>,
}

impl EditArgs {
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.add.is_empty() && self.remove.is_empty()
    }
}
