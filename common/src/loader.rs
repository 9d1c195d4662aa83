//! 表データ読み込み
//!
//! スプレッドシート（xlsx/xls/ods等）とCSVのバイト列を読み込み、
//! 先頭行をヘッダーとした `TabularData` に変換する。

use crate::error::{Error, Result};
use crate::types::{
    CellValue, Item, ITEM_NUMBER_COLUMN, MODEL_COLUMN, REGION_COLUMN, VBU_COLUMN,
};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 読み込んだ表（ヘッダー + データ行）
///
/// 全ての行は列数と同じ長さにそろえてある。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TabularData {
    /// ヘッダーと行から生成（短い行は空セルで埋め、余分なセルは捨てる）
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 列名から列番号を取得（重複時は先頭）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 指定列のセルを全て文字列に変換する
    fn coerce_to_text(&mut self, column: usize) {
        for row in &mut self.rows {
            let cell = &mut row[column];
            if !matches!(cell, CellValue::Empty | CellValue::Text(_)) {
                *cell = CellValue::Text(cell.to_text());
            }
        }
    }
}

/// 入力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// calamineで読めるブック（xlsx/xlsm/xlsb/xls/ods）
    Workbook,
    /// UTF-8のCSV
    Csv,
}

impl InputFormat {
    /// バイト列の先頭から形式を判定
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Parse("入力が空です".into()));
        }
        if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
            return Ok(InputFormat::Workbook);
        }
        if std::str::from_utf8(bytes).is_ok() {
            return Ok(InputFormat::Csv);
        }
        Err(Error::Parse("スプレッドシートでもCSVでもありません".into()))
    }
}

/// バイト列を読み込む（型変換なし）
pub fn load(bytes: &[u8]) -> Result<TabularData> {
    match InputFormat::detect(bytes)? {
        InputFormat::Workbook => load_workbook(bytes),
        InputFormat::Csv => load_csv(bytes),
    }
}

/// バイト列を読み込み、指定列を文字列として扱う
///
/// 数値に見えるセルも文字列に変換する。存在しない列名は無視する。
pub fn load_with_text_columns(bytes: &[u8], text_columns: &[&str]) -> Result<TabularData> {
    let mut table = load(bytes)?;
    for name in text_columns {
        if let Some(idx) = table.column_index(name) {
            table.coerce_to_text(idx);
        }
    }
    Ok(table)
}

/// 品目シートを読み込む（VBU列は常に文字列）
pub fn load_items_table(bytes: &[u8]) -> Result<TabularData> {
    load_with_text_columns(bytes, &[VBU_COLUMN])
}

/// 検証済みの品目表を `Item` に変換
///
/// 全セルが空の行は読み飛ばす。
pub fn items_from_table(table: &TabularData) -> Result<Vec<Item>> {
    let index = |name: &str| {
        table.column_index(name).ok_or_else(|| Error::MissingColumns {
            expected: vec![name.to_string()],
            actual: table.columns.clone(),
        })
    };
    let item_idx = index(ITEM_NUMBER_COLUMN)?;
    let model_idx = index(MODEL_COLUMN)?;
    let region_idx = index(REGION_COLUMN)?;
    let vbu_idx = index(VBU_COLUMN)?;

    let items = table
        .rows
        .iter()
        .filter(|row| !row.iter().all(CellValue::is_empty))
        .map(|row| Item {
            item_number: row[item_idx].clone(),
            model: row[model_idx].clone(),
            region: row[region_idx].to_text(),
            vbu: row[vbu_idx].to_text(),
        })
        .collect();

    Ok(items)
}

fn load_workbook(bytes: &[u8]) -> Result<TabularData> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| Error::Parse(format!("ブックを開けません: {}", e)))?;

    // 先頭シートのみ対象
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Parse("シートがありません".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::Parse(format!("シート読み込みエラー: {}", e)))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(TabularData::default());
    };

    let columns = header_names(header_row.iter().map(|cell| cell.to_string()));
    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(TabularData::new(columns, rows))
}

fn load_csv(bytes: &[u8]) -> Result<TabularData> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 行長の不一致を許容
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| Error::Parse(format!("CSVヘッダー読み込みエラー: {}", e)))?;
    let columns = header_names(headers.iter().map(str::to_string));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Parse(format!("CSV読み込みエラー: {}", e)))?;
        rows.push(record.iter().map(cell_from_csv).collect());
    }

    Ok(TabularData::new(columns, rows))
}

/// ヘッダー名を整形（前後空白除去、空なら `Unnamed: n`）
fn header_names(cells: impl Iterator<Item = String>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(idx, name)| {
            let name = name.trim();
            if name.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name.to_string()
            }
        })
        .collect()
}

fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}

/// CSVのセルは全て文字列（`00045` や `007` を数値として読み替えない）
fn cell_from_csv(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}
