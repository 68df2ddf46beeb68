//! レコード共通の操作
//!
//! 記事とプロジェクトを同じ編集フローで扱うためのトレイト。
//! フィールド名は静的ドキュメントのJSONキーと同じ。

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::store::{ContentStore, RecordStore};
use crate::types::{Article, Project, RecordKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// 新規記事の読了時間ラベル
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// スカラー項目の値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// CLI等の文字列入力を項目の型に合わせて変換
    pub fn coerce<R: Record>(key: &str, raw: &str) -> Result<Self> {
        if !R::FLAG_FIELDS.contains(&key) {
            return Ok(FieldValue::Text(raw.to_string()));
        }
        match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(FieldValue::Flag(true)),
            "false" | "no" | "0" => Ok(FieldValue::Flag(false)),
            _ => Err(Error::FieldTypeMismatch {
                kind: R::KIND,
                field: key.to_string(),
                expected: "true or false",
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// 編集対象になるレコード
pub trait Record: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    const KIND: RecordKind;
    /// 保存時に空であってはならない項目
    const REQUIRED_FIELDS: &'static [&'static str];
    /// 追加/削除でのみ編集するリスト項目
    const LIST_FIELDS: &'static [&'static str];
    const FLAG_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn title(&self) -> &str;

    /// 空のフォーム
    fn template(clock: &dyn Clock) -> Self;

    /// テキスト項目の現在値
    fn text(&self, key: &str) -> Option<&str>;

    /// スカラー項目を1つだけ更新
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<()>;

    fn list(&self, field: &str) -> Result<&Vec<String>>;
    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>>;

    /// 保存前に任意項目の既定値を埋める
    fn fill_defaults(&mut self, clock: &dyn Clock);

    fn records(store: &ContentStore) -> &RecordStore<Self>;
    fn records_mut(store: &mut ContentStore) -> &mut RecordStore<Self>;

    /// 未入力の必須項目
    fn missing_required(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| self.text(key).map_or(true, str::is_empty))
            .collect()
    }

    /// タイムスタンプ由来の新しいID
    fn fresh_id(millis: i64) -> String {
        format!("{}-{}", Self::KIND.as_str(), millis)
    }
}

fn text_value(kind: RecordKind, key: &str, value: FieldValue) -> Result<String> {
    match value {
        FieldValue::Text(text) => Ok(text),
        FieldValue::Flag(_) => Err(Error::FieldTypeMismatch {
            kind,
            field: key.to_string(),
            expected: "text",
        }),
    }
}

fn reject_field<R: Record>(key: &str) -> Error {
    let field = key.to_string();
    if key == "id" {
        Error::ReadOnlyField { kind: R::KIND, field }
    } else if R::LIST_FIELDS.contains(&key) {
        Error::ListFieldNotSettable { kind: R::KIND, field }
    } else {
        Error::UnknownField { kind: R::KIND, field }
    }
}

fn reject_list<R: Record>(record: &R, field: &str) -> Error {
    if field == "id" || R::FLAG_FIELDS.contains(&field) || record.text(field).is_some() {
        Error::NotAList {
            kind: R::KIND,
            field: field.to_string(),
        }
    } else {
        Error::UnknownField {
            kind: R::KIND,
            field: field.to_string(),
        }
    }
}

impl Record for Article {
    const KIND: RecordKind = RecordKind::Article;
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "excerpt", "content"];
    const LIST_FIELDS: &'static [&'static str] = &["tags"];
    const FLAG_FIELDS: &'static [&'static str] = &["published"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn template(clock: &dyn Clock) -> Self {
        Self {
            date: clock.today(),
            read_time: DEFAULT_READ_TIME.to_string(),
            ..Default::default()
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "excerpt" => Some(&self.excerpt),
            "content" => Some(&self.content),
            "date" => Some(&self.date),
            "readTime" => Some(&self.read_time),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<()> {
        let kind = Self::KIND;
        match key {
            "title" => self.title = text_value(kind, key, value)?,
            "excerpt" => self.excerpt = text_value(kind, key, value)?,
            "content" => self.content = text_value(kind, key, value)?,
            "date" => self.date = text_value(kind, key, value)?,
            "readTime" => self.read_time = text_value(kind, key, value)?,
            "published" => match value {
                FieldValue::Flag(flag) => self.published = flag,
                FieldValue::Text(_) => {
                    return Err(Error::FieldTypeMismatch {
                        kind,
                        field: key.to_string(),
                        expected: "true or false",
                    })
                }
            },
            _ => return Err(reject_field::<Self>(key)),
        }
        Ok(())
    }

    fn list(&self, field: &str) -> Result<&Vec<String>> {
        match field {
            "tags" => Ok(&self.tags),
            _ => Err(reject_list(self, field)),
        }
    }

    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>> {
        match field {
            "tags" => Ok(&mut self.tags),
            _ => Err(reject_list(&*self, field)),
        }
    }

    fn fill_defaults(&mut self, clock: &dyn Clock) {
        if self.date.is_empty() {
            self.date = clock.today();
        }
        if self.read_time.is_empty() {
            self.read_time = DEFAULT_READ_TIME.to_string();
        }
    }

    fn records(store: &ContentStore) -> &RecordStore<Self> {
        &store.articles
    }

    fn records_mut(store: &mut ContentStore) -> &mut RecordStore<Self> {
        &mut store.articles
    }
}

impl Record for Project {
    const KIND: RecordKind = RecordKind::Project;
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "role", "summary"];
    const LIST_FIELDS: &'static [&'static str] = &["tech", "impact", "responsibilities"];
    const FLAG_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn template(_clock: &dyn Clock) -> Self {
        Self {
            live_demo: Some(String::new()),
            ..Default::default()
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "role" => Some(&self.role),
            "duration" => Some(&self.duration),
            "live_demo" => Some(self.live_demo.as_deref().unwrap_or_default()),
            "repo" => Some(&self.repo),
            "summary" => Some(&self.summary),
            "takeaway" => Some(&self.takeaway),
            "problem" => Some(&self.problem),
            "approach" => Some(&self.approach),
            "whatIdDoDifferently" => Some(&self.what_id_do_differently),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<()> {
        let kind = Self::KIND;
        match key {
            "title" => self.title = text_value(kind, key, value)?,
            "role" => self.role = text_value(kind, key, value)?,
            "duration" => self.duration = text_value(kind, key, value)?,
            "live_demo" => self.live_demo = Some(text_value(kind, key, value)?),
            "repo" => self.repo = text_value(kind, key, value)?,
            "summary" => self.summary = text_value(kind, key, value)?,
            "takeaway" => self.takeaway = text_value(kind, key, value)?,
            "problem" => self.problem = text_value(kind, key, value)?,
            "approach" => self.approach = text_value(kind, key, value)?,
            "whatIdDoDifferently" => self.what_id_do_differently = text_value(kind, key, value)?,
            _ => return Err(reject_field::<Self>(key)),
        }
        Ok(())
    }

    fn list(&self, field: &str) -> Result<&Vec<String>> {
        match field {
            "tech" => Ok(&self.tech),
            "impact" => Ok(&self.impact),
            "responsibilities" => Ok(&self.responsibilities),
            _ => Err(reject_list(self, field)),
        }
    }

    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>> {
        match field {
            "tech" => Ok(&mut self.tech),
            "impact" => Ok(&mut self.impact),
            "responsibilities" => Ok(&mut self.responsibilities),
            _ => Err(reject_list(&*self, field)),
        }
    }

    fn fill_defaults(&mut self, _clock: &dyn Clock) {
        // 空のデモURLは null として保存
        if self.live_demo.as_deref().map_or(false, str::is_empty) {
            self.live_demo = None;
        }
    }

    fn records(store: &ContentStore) -> &RecordStore<Self> {
        &store.projects
    }

    fn records_mut(store: &mut ContentStore) -> &mut RecordStore<Self> {
        &mut store.projects
    }
}
