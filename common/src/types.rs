//! パイプラインで扱う型定義
//!
//! - CellValue: 読み込んだセル値（型は入力のまま保持）
//! - Item: 品目シートの1行
//! - PatchEntry: 地域とパッチコードの組
//! - PairedRecord: Item × PatchEntry の紐付け結果

use serde::{Deserialize, Serialize};

/// 品目シートの列名
pub const ITEM_NUMBER_COLUMN: &str = "Item #";
pub const MODEL_COLUMN: &str = "Model";
pub const REGION_COLUMN: &str = "Region";
pub const VBU_COLUMN: &str = "VBU";

/// 出力シートのパッチコード列名
pub const PATCH_CODE_COLUMN: &str = "Region patch code";

/// 品目シートに必須の列
pub const REQUIRED_ITEM_COLUMNS: [&str; 4] =
    [ITEM_NUMBER_COLUMN, MODEL_COLUMN, VBU_COLUMN, REGION_COLUMN];

/// セル値
///
/// 数値は数値のまま保持し、結合キーやシート名に使うときだけ文字列化する。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 空セルか（空文字列も空セル扱い）
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 文字列化
    ///
    /// 整数値の浮動小数点は `1541187.0` ではなく `1541187` になる。
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

fn format_number(n: f64) -> String {
    // i64に収まる整数値のみ整数表記
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// 品目
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub item_number: CellValue,
    pub model: CellValue,
    /// 結合キー（文字列化済み）
    pub region: String,
    /// 常に文字列（先頭ゼロを保持）
    pub vbu: String,
}

/// 地域パッチコード
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatchEntry {
    pub region: String,
    pub patch_code: CellValue,
}

impl PatchEntry {
    pub fn new(region: impl Into<String>, patch_code: impl Into<CellValue>) -> Self {
        Self {
            region: region.into(),
            patch_code: patch_code.into(),
        }
    }
}

/// 紐付け結果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairedRecord {
    pub vbu: String,
    pub item_number: CellValue,
    pub model: CellValue,
    pub patch_code: CellValue,
    pub region: String,
}

impl PairedRecord {
    pub fn new(item: &Item, patch: &PatchEntry, region: &str) -> Self {
        Self {
            vbu: item.vbu.clone(),
            item_number: item.item_number.clone(),
            model: item.model.clone(),
            patch_code: patch.patch_code.clone(),
            region: region.to_string(),
        }
    }
}

/// 紐付け方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairingMode {
    /// 地域名の完全一致で結合（横持ちのパッチ表）
    #[default]
    #[serde(rename = "region")]
    RegionMatched,
    /// 全品目 × 全パッチコード（1列のパッチ表）
    #[serde(rename = "cross")]
    CrossJoin,
}

impl PairingMode {
    /// この方式でのシート分割キー
    pub fn group_key(&self) -> GroupKey {
        match self {
            PairingMode::RegionMatched => GroupKey::Region,
            PairingMode::CrossJoin => GroupKey::PatchCode,
        }
    }
}

impl std::str::FromStr for PairingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "region" | "region-matched" | "matched" => Ok(PairingMode::RegionMatched),
            "cross" | "cross-join" | "all" => Ok(PairingMode::CrossJoin),
            _ => Err(format!("Unknown mode: {}. Use region or cross", s)),
        }
    }
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingMode::RegionMatched => write!(f, "region"),
            PairingMode::CrossJoin => write!(f, "cross"),
        }
    }
}

/// シート分割キー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Region,
    PatchCode,
}

impl GroupKey {
    /// レコードからキー文字列を取り出す
    pub fn key_of(&self, record: &PairedRecord) -> String {
        match self {
            GroupKey::Region => record.region.clone(),
            GroupKey::PatchCode => record.patch_code.to_text(),
        }
    }
}
