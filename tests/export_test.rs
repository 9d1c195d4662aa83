//! 紐付け〜Excel出力の統合テスト

use patch_pair::export::{self, excel};
use patch_pair::pairing;
use patch_pair_common::{loader, CellValue, PairingMode, ProcessOptions, SheetNamePolicy};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

fn write_items_xlsx(path: &Path, rows: &[(f64, &str, &str, &str)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, label) in ["Item #", "Model", "Region", "VBU"].iter().enumerate() {
        sheet.write_string(0, col as u16, *label).unwrap();
    }
    for (idx, (item, model, region, vbu)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, *item).unwrap();
        sheet.write_string(row, 1, *model).unwrap();
        sheet.write_string(row, 2, *region).unwrap();
        sheet.write_string(row, 3, *vbu).unwrap();
    }
    workbook.save(path).unwrap();
}

fn write_wide_patches_xlsx(path: &Path, columns: &[(&str, Vec<&str>)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, (region, codes)) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *region).unwrap();
        for (idx, code) in codes.iter().enumerate() {
            sheet.write_string(idx as u32 + 1, col as u16, *code).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_end_to_end_example() {
    let dir = tempdir().expect("Failed to create temp dir");
    let items = dir.path().join("items.xlsx");
    let patches = dir.path().join("patches.xlsx");
    write_items_xlsx(&items, &[(1541187.0, "1000008671", "East", "1257")]);
    write_wide_patches_xlsx(&patches, &[("East", vec!["AB", "AC"])]);

    let outcome = pairing::run_pairing(&items, &patches, PairingMode::RegionMatched.into())
        .expect("紐付けに失敗");
    assert_eq!(outcome.workbook.sheet_names(), vec!["East"]);

    let output = export::output_path(Some(dir.path()), "region_paired_output.xlsx");
    excel::generate_excel(&outcome.workbook, &output).expect("Excel生成に失敗");
    assert!(output.exists(), "Excelファイルが作成されていない");

    let bytes = std::fs::read(&output).unwrap();
    let sheet = loader::load(&bytes).unwrap();
    assert_eq!(sheet.columns, vec!["VBU", "Item #", "Model", "Region patch code"]);
    assert_eq!(
        sheet.rows,
        vec![
            vec![
                CellValue::from("1257"),
                CellValue::Number(1541187.0),
                CellValue::from("1000008671"),
                CellValue::from("AB"),
            ],
            vec![
                CellValue::from("1257"),
                CellValue::Number(1541187.0),
                CellValue::from("1000008671"),
                CellValue::from("AC"),
            ],
        ]
    );
}

#[test]
fn test_vbu_text_survives_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let items = dir.path().join("items.xlsx");
    let patches = dir.path().join("patches.xlsx");
    write_items_xlsx(&items, &[(1.0, "M1", "West", "00045")]);
    write_wide_patches_xlsx(&patches, &[("East", vec!["AB"]), ("West", vec!["HI"])]);

    let outcome = pairing::run_pairing(&items, &patches, ProcessOptions::default()).unwrap();
    let output = dir.path().join("out.xlsx");
    excel::generate_excel(&outcome.workbook, &output).unwrap();

    let sheet = loader::load(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(sheet.rows[0][0], CellValue::from("00045"));
}

#[test]
fn test_uneven_columns_and_unmatched_regions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let items = dir.path().join("items.xlsx");
    let patches = dir.path().join("patches.xlsx");
    write_items_xlsx(
        &items,
        &[
            (1.0, "M1", "Atlantis", "1257"),
            (2.0, "M2", "West", "1257"),
            (3.0, "M3", "East", "1300"),
        ],
    );
    write_wide_patches_xlsx(
        &patches,
        &[("East", vec!["AB", "AC", "AD"]), ("West", vec!["HI"])],
    );

    let outcome = pairing::run_pairing(&items, &patches, ProcessOptions::default()).unwrap();
    assert_eq!(outcome.records.len(), 4);
    assert!(outcome.records.iter().all(|r| r.region != "Atlantis"));
    assert_eq!(outcome.workbook.sheet_names(), vec!["West", "East"]);
    assert_eq!(outcome.workbook.sheet("West").unwrap().rows.len(), 1);
    assert_eq!(outcome.workbook.sheet("East").unwrap().rows.len(), 3);
}

#[test]
fn test_long_region_names_with_reject_policy() {
    let dir = tempdir().expect("Failed to create temp dir");
    let items = dir.path().join("items.xlsx");
    let patches = dir.path().join("patches.xlsx");
    let east = format!("{}East", "Northern Territory Distribution ");
    let west = format!("{}West", "Northern Territory Distribution ");
    write_items_xlsx(&items, &[(1.0, "M1", east.as_str(), "1"), (2.0, "M2", west.as_str(), "2")]);
    write_wide_patches_xlsx(&patches, &[(east.as_str(), vec!["AB"]), (west.as_str(), vec!["HI"])]);

    let suffixed = pairing::run_pairing(&items, &patches, ProcessOptions::default()).unwrap();
    assert_eq!(suffixed.workbook.sheets.len(), 2);
    assert_eq!(suffixed.workbook.sheets[0].name, "Northern Territory Distribution");
    assert_eq!(suffixed.workbook.sheets[1].name, "Northern Territory Distribu (2)");

    let options = ProcessOptions {
        mode: PairingMode::RegionMatched,
        sheet_name_policy: SheetNamePolicy::Reject,
    };
    let err = pairing::run_pairing(&items, &patches, options).unwrap_err();
    assert!(format!("{}", err).contains("collision"));
}

#[test]
fn test_generate_templates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let written = excel::generate_templates(dir.path()).expect("テンプレート生成に失敗");
    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|p| p.exists()));

    // テンプレート同士で処理できる
    let outcome = pairing::run_pairing(
        &dir.path().join(excel::ITEMS_TEMPLATE_FILE),
        &dir.path().join(excel::REGION_PATCHES_TEMPLATE_FILE),
        PairingMode::RegionMatched.into(),
    )
    .unwrap();
    assert_eq!(outcome.records.len(), 21);

    let outcome = pairing::run_pairing(
        &dir.path().join(excel::ITEMS_TEMPLATE_FILE),
        &dir.path().join(excel::PATCH_CODES_TEMPLATE_FILE),
        PairingMode::CrossJoin.into(),
    )
    .unwrap();
    assert_eq!(outcome.records.len(), 20);
    assert_eq!(outcome.workbook.sheets.len(), 4);
}
