//! サブコマンドの処理
//!
//! 1回の実行で「編集開始 → 下書きの変更 → コミット」を行う。

use crate::cli::EditArgs;
use crate::error::{AdminError, Result};
use lopam_common::{
    Clock, CommitAction, CommitOutcome, Confirm, DeleteOutcome, DraftBuffer, Editable,
    EditingController, FieldValue, Gatekeeper, KeyValueStore, Persistence, Record,
};

/// `KEY=VALUE` を分解
pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| AdminError::InvalidArgument(format!("KEY=VALUE の形式で指定してください: {}", raw)))
}

/// 引数の変更を下書きに適用
pub fn apply_edits<R: Record>(draft: &mut DraftBuffer<R>, edits: &EditArgs) -> Result<()> {
    for raw in &edits.set {
        let (key, value) = parse_assignment(raw)?;
        draft.set_field(key, FieldValue::coerce::<R>(key, value)?)?;
    }
    for raw in &edits.add {
        let (field, value) = parse_assignment(raw)?;
        if !draft.add_list_item(field, value)? {
            tracing::debug!(field, value, "list item already present or empty");
        }
    }
    for raw in &edits.remove {
        let (field, value) = parse_assignment(raw)?;
        if !draft.remove_list_item(field, value)? {
            tracing::debug!(field, value, "list item not present");
        }
    }
    Ok(())
}

/// 新規作成してコミット
pub fn add_record<R, P, C>(ctrl: &mut EditingController<P, C>, edits: &EditArgs) -> Result<CommitOutcome>
where
    R: Editable,
    P: Persistence,
    C: Clock,
{
    ctrl.begin_create::<R>();
    apply_edits(ctrl.draft_mut::<R>()?, edits)?;
    Ok(ctrl.commit::<R>()?)
}

/// 既存レコードを編集してコミット
pub fn edit_record<R, P, C>(
    ctrl: &mut EditingController<P, C>,
    id: &str,
    edits: &EditArgs,
) -> Result<CommitOutcome>
where
    R: Editable,
    P: Persistence,
    C: Clock,
{
    if edits.is_empty() {
        return Err(AdminError::InvalidArgument(
            "変更がありません（--set / --add / --remove を指定）".into(),
        ));
    }
    ctrl.begin_edit::<R>(id)?;
    apply_edits(ctrl.draft_mut::<R>()?, edits)?;
    Ok(ctrl.commit::<R>()?)
}

/// 確認のうえで削除
pub fn delete_record<R, P, C>(
    ctrl: &mut EditingController<P, C>,
    id: &str,
    confirm: &mut impl Confirm,
) -> Result<DeleteOutcome>
where
    R: Editable,
    P: Persistence,
    C: Clock,
{
    Ok(ctrl.delete::<R>(id, confirm)?)
}

/// 端末で yes/no を確認
#[derive(Debug, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match dialoguer::Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}

/// `--yes` 指定時
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// 編集系コマンドの前にログイン状態を確認
pub fn require_login<S: KeyValueStore>(gate: &Gatekeeper<S>) -> Result<()> {
    if gate.is_authenticated() {
        Ok(())
    } else {
        Err(AdminError::NotAuthenticated)
    }
}

/// 一覧表示の1行
pub fn summary_line<R: Record>(record: &R) -> String {
    format!("{:<36} {}", record.id(), record.title())
}

/// コミット結果を表示（保存に失敗していればエラー）
pub fn report_commit<R: Record>(outcome: &CommitOutcome) -> Result<()> {
    let verb = match outcome.action {
        CommitAction::Appended => "追加",
        CommitAction::Replaced => "更新",
    };
    println!("✔ {} を{}しました: {}", R::KIND, verb, outcome.id);
    if outcome.persisted {
        Ok(())
    } else {
        Err(AdminError::NotPersisted)
    }
}
