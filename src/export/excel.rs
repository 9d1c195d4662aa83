//! Excel出力（CLI版）
//!
//! 共通ライブラリでxlsxを生成し、ファイルに書き出す

use crate::error::Result;
use patch_pair_common::{render_workbook, template, OutputWorkbook};
use std::path::{Path, PathBuf};

/// テンプレートのファイル名
pub const ITEMS_TEMPLATE_FILE: &str = "template_items.xlsx";
pub const REGION_PATCHES_TEMPLATE_FILE: &str = "template_region_patches.xlsx";
pub const PATCH_CODES_TEMPLATE_FILE: &str = "template_patch_codes.xlsx";

pub fn generate_excel(workbook: &OutputWorkbook, output_path: &Path) -> Result<()> {
    let bytes = render_workbook(workbook)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, bytes)?;

    Ok(())
}

/// テンプレート3種を出力し、書き出したパスを返す
pub fn generate_templates(output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let templates = [
        (ITEMS_TEMPLATE_FILE, template::items_template()?),
        (REGION_PATCHES_TEMPLATE_FILE, template::region_patches_template()?),
        (PATCH_CODES_TEMPLATE_FILE, template::patch_codes_template()?),
    ];

    let mut written = Vec::with_capacity(templates.len());
    for (file_name, bytes) in templates {
        let path = output_dir.join(file_name);
        std::fs::write(&path, bytes)?;
        written.push(path);
    }

    Ok(written)
}
