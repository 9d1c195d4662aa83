use clap::{Parser, Subcommand};
use patch_pair_common::{PairingMode, SheetNamePolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patch-pair")]
#[command(about = "品目と地域パッチコードを紐付け、地域ごとのシートに分割したExcelを出力", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 品目とパッチコードを紐付けてExcelを出力
    Run {
        /// 品目スプレッドシート（Item #, Model, Region, VBU）
        #[arg(short, long, required = true)]
        items: PathBuf,

        /// パッチコードスプレッドシート（地域ごとの列 / 全組合せ時は1列）
        #[arg(short, long, required = true)]
        patches: PathBuf,

        /// 紐付け方式 (region/cross)（省略時は設定値）
        #[arg(short, long)]
        mode: Option<PairingMode>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// プレビュー表示する行数（省略時は設定値、0で非表示）
        #[arg(long)]
        preview: Option<usize>,

        /// シート名重複時の扱い (suffix/reject)（省略時は設定値）
        #[arg(long)]
        sheet_name_policy: Option<SheetNamePolicy>,
    },

    /// 入力テンプレートを出力
    Template {
        /// 出力ディレクトリ（省略時はカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の紐付け方式を設定 (region/cross)
        #[arg(long)]
        set_mode: Option<PairingMode>,

        /// シート名重複時の扱いを設定 (suffix/reject)
        #[arg(long)]
        set_sheet_name_policy: Option<SheetNamePolicy>,

        /// 既定の出力ファイル名を設定
        #[arg(long)]
        set_output_file_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
