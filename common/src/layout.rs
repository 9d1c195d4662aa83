//! 出力シートのレイアウト定義
//!
//! 列の並び・見出し・列幅（Excel文字幅単位）

use crate::types::{
    GroupKey, ITEM_NUMBER_COLUMN, MODEL_COLUMN, PATCH_CODE_COLUMN, REGION_COLUMN, VBU_COLUMN,
};

/// Excelのシート名の最大文字数
pub const SHEET_NAME_MAX_CHARS: usize = 31;

/// シート名に使えない文字
pub const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// 出力列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputField {
    Vbu,
    ItemNumber,
    Model,
    PatchCode,
    Region,
}

/// 列定義
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputColumn {
    pub field: OutputField,
    pub label: &'static str,
    pub width: f64,
}

pub const VBU: OutputColumn = OutputColumn { field: OutputField::Vbu, label: VBU_COLUMN, width: 10.0 };
pub const ITEM_NUMBER: OutputColumn =
    OutputColumn { field: OutputField::ItemNumber, label: ITEM_NUMBER_COLUMN, width: 12.0 };
pub const MODEL: OutputColumn = OutputColumn { field: OutputField::Model, label: MODEL_COLUMN, width: 14.0 };
pub const PATCH_CODE: OutputColumn =
    OutputColumn { field: OutputField::PatchCode, label: PATCH_CODE_COLUMN, width: 18.0 };
pub const REGION: OutputColumn = OutputColumn { field: OutputField::Region, label: REGION_COLUMN, width: 14.0 };

/// 分割キーに応じた出力列
///
/// 地域で分割した場合、地域はシート名で表されるので列から外す。
pub fn columns_for(group_key: GroupKey) -> &'static [OutputColumn] {
    static BY_REGION: [OutputColumn; 4] = [VBU, ITEM_NUMBER, MODEL, PATCH_CODE];
    static BY_PATCH_CODE: [OutputColumn; 5] = [VBU, ITEM_NUMBER, MODEL, PATCH_CODE, REGION];

    match group_key {
        GroupKey::Region => &BY_REGION,
        GroupKey::PatchCode => &BY_PATCH_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_by_region_drop_region() {
        let labels: Vec<_> = columns_for(GroupKey::Region).iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["VBU", "Item #", "Model", "Region patch code"]);
    }

    #[test]
    fn test_columns_by_patch_code_keep_region() {
        let labels: Vec<_> = columns_for(GroupKey::PatchCode).iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["VBU", "Item #", "Model", "Region patch code", "Region"]);
    }
}
