//! Hierarchical identity of a metric record (strongly-typed names).
//!
//! # Phantom Type パターン
//! `Name<T>` は共通実装を一つだけ持ち、`T` は実行時には使わないマーカー型です。
//! RetryId / GroupName / TaskName はどれも文字列ですが、型が違うので
//! 取り違えるとコンパイルエラーになります。
//!
//! Wire 上はただの文字列（`#[serde(transparent)]`）。collector から見た形は変わりません。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// NameMarker は各 name 型のマーカー trait
///
/// Debug 出力で使う種別名（"retry_id", "group_name", ...）を提供します。
pub trait NameMarker: Send + Sync + 'static {
    fn kind() -> &'static str;
}

/// ジェネリック name 型
///
/// Values are opaque: they are written to the wire verbatim and never
/// re-validated here.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Name<T: NameMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: NameMarker> Name<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: NameMarker> Clone for Name<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: NameMarker> PartialEq for Name<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: NameMarker> Eq for Name<T> {}

impl<T: NameMarker> std::hash::Hash for Name<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: NameMarker> From<&str> for Name<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: NameMarker> From<String> for Name<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: NameMarker> fmt::Display for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: NameMarker> fmt::Debug for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::kind(), self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Retry のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retry {}

impl NameMarker for Retry {
    fn kind() -> &'static str {
        "retry_id"
    }
}

/// Group のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {}

impl NameMarker for Group {
    fn kind() -> &'static str {
        "group_name"
    }
}

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {}

impl NameMarker for Task {
    fn kind() -> &'static str {
        "task_name"
    }
}

// ========================================
// Type Alias
// ========================================

/// Identifier of one retry of a workflow group.
pub type RetryId = Name<Retry>;

/// Name of a group inside a workflow.
pub type GroupName = Name<Group>;

/// Name of a task inside a group.
pub type TaskName = Name<Task>;

impl RetryId {
    /// Retry id backed by a ULID (see `ports::IdGenerator`).
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self::new(ulid.to_string())
    }
}
