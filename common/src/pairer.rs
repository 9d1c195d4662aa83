//! 品目とパッチコードの紐付け
//!
//! - 地域一致: 品目の地域と同じ地域のパッチコードごとに1行（一致しない品目は出力しない）
//! - 全組合せ: 全品目 × 全パッチコード
//!
//! どちらも品目の入力順が第1キー、パッチコードの入力順が第2キー。

use crate::types::{Item, PairedRecord, PairingMode, PatchEntry};
use std::collections::HashMap;

/// 指定方式で紐付け
pub fn pair(items: &[Item], patches: &[PatchEntry], mode: PairingMode) -> Vec<PairedRecord> {
    match mode {
        PairingMode::RegionMatched => region_matched_join(items, patches),
        PairingMode::CrossJoin => cross_join(items, patches),
    }
}

/// 地域名の完全一致（大文字小文字を区別）で結合
pub fn region_matched_join(items: &[Item], patches: &[PatchEntry]) -> Vec<PairedRecord> {
    // 地域 → パッチコード（入力順を保持）
    let mut by_region: HashMap<&str, Vec<&PatchEntry>> = HashMap::new();
    for patch in patches {
        by_region.entry(patch.region.as_str()).or_default().push(patch);
    }

    items
        .iter()
        .flat_map(|item| {
            by_region
                .get(item.region.as_str())
                .into_iter()
                .flatten()
                .map(move |patch| PairedRecord::new(item, patch, &item.region))
        })
        .collect()
}

/// 全組合せ
///
/// パッチ側に地域の紐付けがないため、出力の地域は品目の地域を使う。
pub fn cross_join(items: &[Item], patches: &[PatchEntry]) -> Vec<PairedRecord> {
    items
        .iter()
        .flat_map(|item| {
            patches
                .iter()
                .map(move |patch| PairedRecord::new(item, patch, &item.region))
        })
        .collect()
}
