//! 出力処理（CLIなど呼び出し側から共通で使う）

#[cfg(feature = "excel")]
pub mod excel_core;
