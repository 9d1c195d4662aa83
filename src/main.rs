use clap::Parser;
use patch_pair::{cli, config, error, export, logging, pairing};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use patch_pair_common::ProcessOptions;
use tracing::warn;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => {}
        Err(e) if e.is_warning() => {
            // 一致なしは失敗ではない
            warn!("{}", e);
            println!("⚠ {}", e);
            println!("  品目とパッチコードの地域名が一致しているか確認してください");
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { items, patches, mode, output, preview, sheet_name_policy } => {
            println!("🔄 patch-pair - 紐付け\n");

            let config = Config::load_for_run(mode)?;
            let options = ProcessOptions {
                mode: config.default_mode,
                sheet_name_policy: sheet_name_policy.unwrap_or(config.sheet_name_policy),
            };

            // 1. 読込・検証・紐付け
            println!("[1/3] 紐付け中... (方式: {})", options.mode);
            let outcome = pairing::run_pairing(&items, &patches, options)?;
            println!("✔ {}行を紐付け\n", outcome.records.len());

            // 2. プレビュー
            let lines = pairing::preview_lines(&outcome.records, preview.unwrap_or(config.preview_rows));
            if !lines.is_empty() {
                println!("[2/3] プレビュー（先頭{}行）", lines.len() - 1);
                for line in &lines {
                    println!("  {}", line);
                }
                println!();
            }

            // 3. 出力
            let output_path = export::output_path(output.as_deref(), &config.output_file_name);
            println!("[3/3] Excelを生成中...");
            export::excel::generate_excel(&outcome.workbook, &output_path)?;
            println!(
                "✔ Excel出力: {} ({}シート: {})",
                output_path.display(),
                outcome.workbook.sheets.len(),
                outcome.workbook.sheet_names().join(", ")
            );

            println!("\n✅ 完了");
        }

        Commands::Template { output } => {
            println!("📄 patch-pair - テンプレート出力\n");
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            for path in export::excel::generate_templates(&output_dir)? {
                println!("✔ {}", path.display());
            }
        }

        Commands::Config { set_mode, set_sheet_name_policy, set_output_file_name, show } => {
            // 環境変数の上書きを保存しないよう、ファイルの値から編集する
            let path = Config::config_path()?;
            let changed = set_mode.is_some()
                || set_sheet_name_policy.is_some()
                || set_output_file_name.is_some();
            let mut config = if changed {
                Config::load_or_default(&path)?
            } else {
                Config::load_from(&path)?
            };

            if let Some(mode) = set_mode {
                config.default_mode = mode;
            }
            if let Some(policy) = set_sheet_name_policy {
                config.sheet_name_policy = policy;
            }
            if let Some(name) = set_output_file_name {
                config.output_file_name = name;
            }
            if changed {
                config.save_to(&path)?;
                println!("✔ 設定を保存しました: {}", path.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  紐付け方式: {}", config.default_mode);
                println!("  出力ファイル名: {}", config.output_file_name);
                println!("  シート名重複: {}", config.sheet_name_policy);
                println!("  プレビュー行数: {}", config.preview_rows);
            }
        }
    }

    Ok(())
}
