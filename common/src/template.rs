//! 入力テンプレート生成
//!
//! 利用者が入力形式を確認できるよう、サンプルデータ入りのxlsxを作る。

use crate::error::{Error, Result};
use crate::types::{ITEM_NUMBER_COLUMN, MODEL_COLUMN, PATCH_CODE_COLUMN, REGION_COLUMN, VBU_COLUMN};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// (Item #, Model, Region, VBU)
const SAMPLE_ITEMS: [(f64, &str, &str, &str); 5] = [
    (1541187.0, "1000008671", "East", "1257"),
    (5452877.0, "1000011510", "West", "1257"),
    (5263949.0, "1000010242", "West", "1257"),
    (5452878.0, "1000011511", "West", "1257"),
    (9876543.0, "1000099999", "National", "1300"),
];

/// 地域ごとのパッチコード（列の長さは不揃い）
const SAMPLE_REGION_PATCHES: [(&str, &[&str]); 4] = [
    ("East", &["AB", "AC", "AD", "AE", "AF"]),
    ("West", &["HI", "HU", "IJ", "IK"]),
    ("Alaska", &["AK", "AL"]),
    ("National", &["AB", "AC", "AK", "AN"]),
];

const SAMPLE_PATCH_CODES: [&str; 4] = ["AB", "AC", "HI", "HU"];

fn template_error(e: XlsxError) -> Error {
    Error::Workbook(format!("テンプレート生成エラー: {}", e))
}

/// 品目シートのテンプレート
pub fn items_template() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Items").map_err(template_error)?;

    for (col, label) in [ITEM_NUMBER_COLUMN, MODEL_COLUMN, REGION_COLUMN, VBU_COLUMN]
        .iter()
        .enumerate()
    {
        sheet
            .write_string_with_format(0, col as u16, *label, &header)
            .map_err(template_error)?;
    }

    for (idx, (item, model, region, vbu)) in SAMPLE_ITEMS.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, *item).map_err(template_error)?;
        sheet.write_string(row, 1, *model).map_err(template_error)?;
        sheet.write_string(row, 2, *region).map_err(template_error)?;
        // VBUは文字列で書く（先頭ゼロ保持のため）
        sheet.write_string(row, 3, *vbu).map_err(template_error)?;
    }

    workbook.save_to_buffer().map_err(template_error)
}

/// 地域パッチ表（横持ち）のテンプレート
pub fn region_patches_template() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Region_Patches").map_err(template_error)?;

    for (col, (region, codes)) in SAMPLE_REGION_PATCHES.iter().enumerate() {
        let col = col as u16;
        sheet
            .write_string_with_format(0, col, *region, &header)
            .map_err(template_error)?;
        for (idx, code) in codes.iter().enumerate() {
            sheet
                .write_string(idx as u32 + 1, col, *code)
                .map_err(template_error)?;
        }
    }

    workbook.save_to_buffer().map_err(template_error)
}

/// パッチコード1列表（全組合せ用）のテンプレート
pub fn patch_codes_template() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Patch_Codes").map_err(template_error)?;

    sheet
        .write_string_with_format(0, 0, PATCH_CODE_COLUMN, &header)
        .map_err(template_error)?;
    for (idx, code) in SAMPLE_PATCH_CODES.iter().enumerate() {
        sheet
            .write_string(idx as u32 + 1, 0, *code)
            .map_err(template_error)?;
    }

    workbook.save_to_buffer().map_err(template_error)
}
