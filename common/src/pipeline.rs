//! 処理パイプライン
//!
//! 読込 → 検証 → 展開 → 紐付け → シート分割 を1回の同期呼び出しで行う。
//! 入力2つと方式だけで結果が決まる（キャッシュや暗黙の設定は持たない）。

use crate::error::Result;
use crate::expander;
use crate::loader;
use crate::pairer;
use crate::partition::{partition_with_policy, OutputWorkbook, SheetNamePolicy};
use crate::types::{PairedRecord, PairingMode, PatchEntry};
use crate::validator;

/// 処理オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    pub mode: PairingMode,
    pub sheet_name_policy: SheetNamePolicy,
}

impl From<PairingMode> for ProcessOptions {
    fn from(mode: PairingMode) -> Self {
        Self { mode, ..Default::default() }
    }
}

/// 入力2つを読み込み、検証し、紐付けまで行う
///
/// 検証は両方の入力について変換前に行う。
pub fn pair_inputs(
    items_bytes: &[u8],
    patches_bytes: &[u8],
    mode: PairingMode,
) -> Result<Vec<PairedRecord>> {
    let items_table = loader::load_items_table(items_bytes)?;
    let patches_table = loader::load(patches_bytes)?;

    validator::validate_items(&items_table)?;
    match mode {
        PairingMode::RegionMatched => validator::validate_patches_wide(&patches_table)?,
        PairingMode::CrossJoin => validator::validate_patches_single_column(&patches_table)?,
    }

    let items = loader::items_from_table(&items_table)?;
    let patches: Vec<PatchEntry> = match mode {
        PairingMode::RegionMatched => expander::expand_wide(&patches_table),
        PairingMode::CrossJoin => expander::single_column_entries(&patches_table),
    };

    Ok(pairer::pair(&items, &patches, mode))
}

/// 入力2つから出力ブックを作る（既定のシート名ポリシー）
pub fn process(
    items_bytes: &[u8],
    patches_bytes: &[u8],
    mode: PairingMode,
) -> Result<OutputWorkbook> {
    process_with_options(items_bytes, patches_bytes, mode.into())
}

/// オプション指定版
pub fn process_with_options(
    items_bytes: &[u8],
    patches_bytes: &[u8],
    options: ProcessOptions,
) -> Result<OutputWorkbook> {
    let records = pair_inputs(items_bytes, patches_bytes, options.mode)?;
    partition_with_policy(&records, options.mode.group_key(), options.sheet_name_policy)
}

/// 入力2つからxlsxバイト列まで作る
#[cfg(feature = "excel")]
pub fn process_to_xlsx(
    items_bytes: &[u8],
    patches_bytes: &[u8],
    options: ProcessOptions,
) -> Result<Vec<u8>> {
    let workbook = process_with_options(items_bytes, patches_bytes, options)?;
    crate::export::excel_core::render_workbook(&workbook)
}
