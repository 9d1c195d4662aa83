//! 入力表のスキーマ検証
//!
//! 変換前に必ず実行する。失敗した場合はパイプラインを中断し、部分的な出力は作らない。

use crate::error::{Error, Result};
use crate::loader::TabularData;
use crate::types::REQUIRED_ITEM_COLUMNS;

/// 品目表: 必須列（Item #, Model, VBU, Region）が全てあるか
pub fn validate_items(table: &TabularData) -> Result<()> {
    let missing = REQUIRED_ITEM_COLUMNS
        .iter()
        .any(|required| table.column_index(required).is_none());

    if missing {
        return Err(Error::MissingColumns {
            expected: REQUIRED_ITEM_COLUMNS.iter().map(|c| c.to_string()).collect(),
            actual: table.columns.clone(),
        });
    }
    Ok(())
}

/// 横持ちパッチ表: 1列以上かつ1行以上
pub fn validate_patches_wide(table: &TabularData) -> Result<()> {
    if table.column_count() == 0 || table.row_count() == 0 {
        return Err(Error::EmptyTable);
    }
    Ok(())
}

/// 1列パッチ表: ちょうど1列
pub fn validate_patches_single_column(table: &TabularData) -> Result<()> {
    if table.column_count() != 1 {
        return Err(Error::UnexpectedColumnCount {
            expected: 1,
            actual: table.column_count(),
        });
    }
    Ok(())
}
