//! シート分割
//!
//! 紐付け結果を分割キー（地域 or パッチコード）でグループ化し、
//! グループごとに1シートの `OutputWorkbook` を組み立てる。

use crate::error::{Error, Result};
use crate::layout::{columns_for, OutputColumn, OutputField, SHEET_NAME_FORBIDDEN, SHEET_NAME_MAX_CHARS};
use crate::types::{CellValue, GroupKey, PairedRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 切り詰め後のシート名が重複した場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetNamePolicy {
    /// 後のシートに ` (2)`, ` (3)` … を付ける
    #[default]
    Suffix,
    /// `SheetNameCollision` エラーにする
    Reject,
}

impl std::str::FromStr for SheetNamePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suffix" => Ok(SheetNamePolicy::Suffix),
            "reject" => Ok(SheetNamePolicy::Reject),
            _ => Err(format!("Unknown sheet name policy: {}. Use suffix or reject", s)),
        }
    }
}

impl std::fmt::Display for SheetNamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetNamePolicy::Suffix => write!(f, "suffix"),
            SheetNamePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// 出力シート
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: &'static [OutputColumn],
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// 見出し行
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }
}

/// 出力ブック（シートは分割キーの初出順）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputWorkbook {
    pub sheets: Vec<Sheet>,
}

impl OutputWorkbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// 全シートのデータ行数
    pub fn row_count(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

/// 既定のシート名ポリシーで分割
pub fn partition(records: &[PairedRecord], group_key: GroupKey) -> Result<OutputWorkbook> {
    partition_with_policy(records, group_key, SheetNamePolicy::default())
}

/// シート名ポリシーを指定して分割
///
/// 紐付け結果が0件なら `EmptyResultSet`。
pub fn partition_with_policy(
    records: &[PairedRecord],
    group_key: GroupKey,
    policy: SheetNamePolicy,
) -> Result<OutputWorkbook> {
    if records.is_empty() {
        return Err(Error::EmptyResultSet);
    }

    // 初出順を保持したグループ化
    let mut groups: Vec<(String, Vec<&PairedRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let key = group_key.key_of(record);
        match index.get(&key).copied() {
            Some(i) => groups[i].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    let columns = columns_for(group_key);
    let mut names = SheetNames::new(policy);
    let mut sheets = Vec::with_capacity(groups.len());

    for (key, group) in groups {
        let name = names.allocate(&key)?;
        let rows = group.iter().map(|record| project(record, columns)).collect();
        sheets.push(Sheet { name, columns, rows });
    }

    Ok(OutputWorkbook { sheets })
}

fn project(record: &PairedRecord, columns: &[OutputColumn]) -> Vec<CellValue> {
    columns
        .iter()
        .map(|column| match column.field {
            OutputField::Vbu => CellValue::Text(record.vbu.clone()),
            OutputField::ItemNumber => record.item_number.clone(),
            OutputField::Model => record.model.clone(),
            OutputField::PatchCode => record.patch_code.clone(),
            OutputField::Region => CellValue::Text(record.region.clone()),
        })
        .collect()
}

/// 分割キーをシート名として使える形に切り詰める（先頭31文字）
pub fn sheet_name_for(key: &str) -> String {
    key.chars().take(SHEET_NAME_MAX_CHARS).collect()
}

/// シート名の割り当て（Excelと同じく大文字小文字を区別せず重複判定）
struct SheetNames {
    policy: SheetNamePolicy,
    used: HashSet<String>,
}

impl SheetNames {
    fn new(policy: SheetNamePolicy) -> Self {
        Self { policy, used: HashSet::new() }
    }

    fn allocate(&mut self, key: &str) -> Result<String> {
        let name = sheet_name_for(key);
        validate_sheet_name(&name)?;

        if self.used.insert(name.to_lowercase()) {
            return Ok(name);
        }

        match self.policy {
            SheetNamePolicy::Reject => Err(Error::SheetNameCollision(name)),
            SheetNamePolicy::Suffix => {
                let mut n = 2usize;
                loop {
                    let suffix = format!(" ({})", n);
                    let keep = SHEET_NAME_MAX_CHARS - suffix.chars().count();
                    let candidate: String =
                        name.chars().take(keep).collect::<String>() + &suffix;
                    if self.used.insert(candidate.to_lowercase()) {
                        return Ok(candidate);
                    }
                    n += 1;
                }
            }
        }
    }
}

fn validate_sheet_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.contains(SHEET_NAME_FORBIDDEN)
        || name.starts_with('\'')
        || name.ends_with('\'');
    if invalid {
        return Err(Error::InvalidSheetName(name.to_string()));
    }
    Ok(())
}
