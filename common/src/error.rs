//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// パイプライン（読込 → 検証 → 展開 → 紐付け → シート分割）の各段階で
/// 発生するエラーをまとめる。`EmptyResultSet` 以外は致命的。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing columns: expected {}, found {}", .expected.join(", "), .actual.join(", "))]
    MissingColumns {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Empty table: the region patches sheet has no data rows")]
    EmptyTable,

    #[error("Unexpected column count: expected {expected}, found {actual}")]
    UnexpectedColumnCount { expected: usize, actual: usize },

    #[error("No matches: no item could be paired with a patch code")]
    EmptyResultSet,

    #[error("Sheet name collision: {0}")]
    SheetNameCollision(String),

    #[error("Invalid sheet name: {0:?}")]
    InvalidSheetName(String),

    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl Error {
    /// 警告扱いのエラーか（呼び出し側は失敗ではなく「一致なし」として表示する）
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::EmptyResultSet)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
