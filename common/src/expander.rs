//! パッチ表の展開
//!
//! 横持ち（地域ごとに1列）のパッチ表を (地域, パッチコード) の縦持ちに変換する。
//! 列の長さが不揃いな場合の空セルは読み飛ばす（エラーではない）。

use crate::loader::TabularData;
use crate::types::PatchEntry;

/// 横持ちパッチ表を展開
///
/// 列順 → 行順に走査し、空でないセルごとに1件の `PatchEntry` を作る。
/// 列名がそのまま地域名になる。
pub fn expand_wide(table: &TabularData) -> Vec<PatchEntry> {
    let mut entries = Vec::new();

    for (col_idx, region) in table.columns.iter().enumerate() {
        for row in &table.rows {
            let cell = &row[col_idx];
            if cell.is_empty() {
                continue;
            }
            entries.push(PatchEntry::new(region.as_str(), cell.clone()));
        }
    }

    entries
}

/// 1列のパッチ表を `PatchEntry` に変換
///
/// 地域は列名。空セルは読み飛ばす。
pub fn single_column_entries(table: &TabularData) -> Vec<PatchEntry> {
    let Some(region) = table.columns.first() else {
        return Vec::new();
    };

    table
        .rows
        .iter()
        .map(|row| &row[0])
        .filter(|cell| !cell.is_empty())
        .map(|cell| PatchEntry::new(region.as_str(), cell.clone()))
        .collect()
}
