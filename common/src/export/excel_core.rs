//! Excel生成（共通ライブラリ）
//!
//! `OutputWorkbook` を1グループ1シートのxlsxバイト列に書き出す。

use crate::error::{Error, Result};
use crate::partition::{OutputWorkbook, Sheet};
use crate::types::CellValue;
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatBorder, Workbook, Worksheet, XlsxError,
};

fn workbook_error(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Workbook(format!("{}: {}", context, e))
}

/// 作成日時（固定値にして同じ入力から同じバイト列を得る）
const CREATION_DATE: (u16, u8, u8) = (2000, 1, 1);

/// 出力ブックをxlsxバイト列に変換
///
/// 同じ `OutputWorkbook` からは常に同じバイト列になる。
pub fn render_workbook(output: &OutputWorkbook) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let (year, month, day) = CREATION_DATE;
    let created = ExcelDateTime::from_ymd(year, month, day)
        .map_err(workbook_error("作成日時設定エラー"))?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin);

    for sheet in &output.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, &header_format)?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(workbook_error("Excel保存エラー"))
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header_format: &Format) -> Result<()> {
    worksheet
        .set_name(&sheet.name)
        .map_err(workbook_error("シート名設定エラー"))?;

    for (col, column) in sheet.columns.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, column.label, header_format)
            .map_err(workbook_error("見出し書き込みエラー"))?;
        worksheet
            .set_column_width(col, column.width)
            .map_err(workbook_error("列幅設定エラー"))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(workbook_error("ウィンドウ枠固定エラー"))?;

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_num, col as u16, cell)?;
        }
    }

    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    let written = match cell {
        CellValue::Empty => return Ok(()),
        CellValue::Text(s) => worksheet.write_string(row, col, s),
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
    };
    written
        .map(|_| ())
        .map_err(workbook_error("セル書き込みエラー"))
}
