//! ログ初期化
//!
//! tracing-subscriber を使用。RUST_LOG で上書き可能（既定: info、--verbose で debug）。
//! 進捗表示（println!）とは別に標準エラーへ出力する。

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // 二重初期化は無視
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
