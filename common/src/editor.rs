//! 編集コントローラ
//!
//! 種別ごとに `Idle` / `Creating` / `EditingExisting(id)` の状態を持ち、
//! 下書きのコミット（追加または置換）と削除を行う。
//! 変更後のドキュメントは注入された [`Persistence`] に渡す。

use crate::clock::Clock;
use crate::draft::{DraftBuffer, EditMode};
use crate::error::{Error, Result};
use crate::persist::Persistence;
use crate::record::Record;
use crate::store::{ContentStore, RecordStore};
use crate::types::{Article, ContentDocument, Project, RecordKind};

/// 削除前の確認
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// 削除確認のメッセージ
pub fn delete_prompt(kind: RecordKind) -> String {
    format!("Are you sure you want to delete this {}?", kind)
}

/// 種別ごとの下書き
#[derive(Debug, Clone, PartialEq)]
pub struct Drafts {
    article: DraftBuffer<Article>,
    project: DraftBuffer<Project>,
}

impl Drafts {
    fn new(clock: &dyn Clock) -> Self {
        Self {
            article: DraftBuffer::new(Article::template(clock)),
            project: DraftBuffer::new(Project::template(clock)),
        }
    }
}

/// 下書きを持てるレコード
pub trait Editable: Record {
    fn draft(drafts: &Drafts) -> &DraftBuffer<Self>;
    fn draft_mut(drafts: &mut Drafts) -> &mut DraftBuffer<Self>;
}

impl Editable for Article {
    fn draft(drafts: &Drafts) -> &DraftBuffer<Self> {
        &drafts.article
    }

    fn draft_mut(drafts: &mut Drafts) -> &mut DraftBuffer<Self> {
        &mut drafts.article
    }
}

impl Editable for Project {
    fn draft(drafts: &Drafts) -> &DraftBuffer<Self> {
        &drafts.project
    }

    fn draft_mut(drafts: &mut Drafts) -> &mut DraftBuffer<Self> {
        &mut drafts.project
    }
}

/// コミットの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Appended,
    Replaced,
}

/// コミット結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub id: String,
    pub action: CommitAction,
    /// 保存先への書き込みが成功したか
    pub persisted: bool,
}

/// 削除結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { persisted: bool },
    Declined,
}

/// 編集コントローラ
pub struct EditingController<P, C> {
    content: ContentStore,
    drafts: Drafts,
    persistence: P,
    clock: C,
}

impl<P: Persistence, C: Clock> EditingController<P, C> {
    pub fn new(content: ContentStore, persistence: P, clock: C) -> Self {
        let drafts = Drafts::new(&clock);
        Self {
            content,
            drafts,
            persistence,
            clock,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn records<R: Editable>(&self) -> &RecordStore<R> {
        R::records(&self.content)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn mode<R: Editable>(&self) -> &EditMode {
        R::draft(&self.drafts).mode()
    }

    pub fn draft<R: Editable>(&self) -> &DraftBuffer<R> {
        R::draft(&self.drafts)
    }

    /// 編集中の下書き（待機中はエラー）
    pub fn draft_mut<R: Editable>(&mut self) -> Result<&mut DraftBuffer<R>> {
        let draft = R::draft_mut(&mut self.drafts);
        if draft.mode().is_idle() {
            return Err(Error::NotEditing(R::KIND));
        }
        Ok(draft)
    }

    /// 新規作成を開始
    ///
    /// 編集中の下書きがあれば破棄する。
    pub fn begin_create<R: Editable>(&mut self) {
        let template = R::template(&self.clock);
        R::draft_mut(&mut self.drafts).open(template, EditMode::Creating);
    }

    /// 既存レコードの編集を開始（レコードをそのままコピー）
    pub fn begin_edit<R: Editable>(&mut self, id: &str) -> Result<()> {
        let record = R::records(&self.content)
            .get(id)
            .cloned()
            .ok_or_else(|| Error::RecordNotFound {
                kind: R::KIND,
                id: id.to_string(),
            })?;
        R::draft_mut(&mut self.drafts).open(record, EditMode::EditingExisting(id.to_string()));
        Ok(())
    }

    /// 下書きを破棄して待機状態に戻す
    pub fn cancel<R: Editable>(&mut self) {
        let template = R::template(&self.clock);
        R::draft_mut(&mut self.drafts).reset(template);
    }

    /// 下書きをストアに反映
    ///
    /// 必須項目が空なら `Error::Validation` を返し、状態も下書きも変えない。
    pub fn commit<R: Editable>(&mut self) -> Result<CommitOutcome> {
        let draft = R::draft(&self.drafts);
        let mode = draft.mode().clone();
        if mode.is_idle() {
            return Err(Error::NotEditing(R::KIND));
        }

        let missing = draft.fields().missing_required();
        if !missing.is_empty() {
            return Err(Error::Validation {
                kind: R::KIND,
                missing,
            });
        }

        let mut record = draft.fields().clone();
        record.fill_defaults(&self.clock);

        let store = R::records_mut(&mut self.content);
        let action = match &mode {
            EditMode::Creating => {
                if record.id().is_empty() {
                    record.set_id(unique_id(store, self.clock.now_millis()));
                }
                store.append(record.clone())?;
                CommitAction::Appended
            }
            EditMode::EditingExisting(id) => {
                store.replace(id, record.clone())?;
                CommitAction::Replaced
            }
            EditMode::Idle => return Err(Error::NotEditing(R::KIND)),
        };

        let persisted = self.persist();
        let template = R::template(&self.clock);
        R::draft_mut(&mut self.drafts).reset(template);

        let kind = R::KIND;
        tracing::debug!(%kind, id = record.id(), ?action, "draft committed");
        Ok(CommitOutcome {
            id: record.id().to_string(),
            action,
            persisted,
        })
    }

    /// 確認のうえでレコードを削除
    ///
    /// 確認を断った場合はストアを変更しない。
    pub fn delete<R: Editable>(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<DeleteOutcome> {
        if !R::records(&self.content).contains(id) {
            return Err(Error::RecordNotFound {
                kind: R::KIND,
                id: id.to_string(),
            });
        }

        if !confirm.confirm(&delete_prompt(R::KIND)) {
            return Ok(DeleteOutcome::Declined);
        }

        R::records_mut(&mut self.content).remove(id);

        // 削除したレコードの編集は続けられない
        if R::draft(&self.drafts).mode() == &EditMode::EditingExisting(id.to_string()) {
            self.cancel::<R>();
        }

        let persisted = self.persist();
        Ok(DeleteOutcome::Deleted { persisted })
    }

    /// バックアップから内容を丸ごと置き換える
    pub fn import(&mut self, document: ContentDocument) -> bool {
        self.content = ContentStore::from_document(document);
        self.drafts = Drafts::new(&self.clock);
        self.persist()
    }

    /// 現在の内容を書き出す
    pub fn export(&self) -> ContentDocument {
        self.content.to_document()
    }

    fn persist(&self) -> bool {
        match self.persistence.persist(&self.content.to_document()) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "error saving data");
                false
            }
        }
    }
}

/// ストア内で重複しないタイムスタンプID
fn unique_id<R: Record>(store: &RecordStore<R>, millis: i64) -> String {
    let base = R::fresh_id(millis);
    if !store.contains(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !store.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
