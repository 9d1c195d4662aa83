//! 入力ファイルの読み込みと紐付け処理の実行

use crate::error::{PatchPairError, Result};
use patch_pair_common::partition::partition_with_policy;
use patch_pair_common::{pair_inputs, OutputWorkbook, PairedRecord, ProcessOptions};
use std::path::Path;
use tracing::{debug, info};

/// 紐付け結果とシート分割結果
#[derive(Debug)]
pub struct PairingOutcome {
    pub records: Vec<PairedRecord>,
    pub workbook: OutputWorkbook,
}

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(PatchPairError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "入力ファイル読み込み");
    Ok(bytes)
}

/// ファイル2つから紐付け・シート分割まで行う
pub fn run_pairing(items: &Path, patches: &Path, options: ProcessOptions) -> Result<PairingOutcome> {
    let items_bytes = read_input(items)?;
    let patches_bytes = read_input(patches)?;

    let records = pair_inputs(&items_bytes, &patches_bytes, options.mode)?;
    info!(mode = %options.mode, records = records.len(), "紐付け完了");

    let workbook =
        partition_with_policy(&records, options.mode.group_key(), options.sheet_name_policy)?;
    for sheet in &workbook.sheets {
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "シート作成");
    }
    info!(sheets = workbook.sheets.len(), "シート分割完了");

    Ok(PairingOutcome { records, workbook })
}

/// 先頭 `limit` 行のプレビュー（タブ区切り、見出し付き）
pub fn preview_lines(records: &[PairedRecord], limit: usize) -> Vec<String> {
    if limit == 0 || records.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["VBU\tItem #\tModel\tRegion patch code\tRegion".to_string()];
    lines.extend(records.iter().take(limit).map(|r| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            r.vbu, r.item_number, r.model, r.patch_code, r.region
        )
    }));
    lines
}
