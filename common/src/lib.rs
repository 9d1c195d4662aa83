//! Patch Pair Common Library
//!
//! 品目と地域パッチコードを紐付け、地域ごとのシートに分割する処理の本体。
//! CLIなどの呼び出し側は入力2つのバイト列と方式を渡し、出力ブックを受け取る。

pub mod types;
pub mod error;
pub mod loader;
pub mod validator;
pub mod expander;
pub mod pairer;
pub mod layout;
pub mod partition;
pub mod pipeline;
pub mod export;

#[cfg(feature = "excel")]
pub mod template;

pub use types::{CellValue, GroupKey, Item, PairedRecord, PairingMode, PatchEntry};
pub use error::{Error, Result};
pub use loader::{load, TabularData};
pub use partition::{partition, OutputWorkbook, Sheet, SheetNamePolicy};
pub use pipeline::{pair_inputs, process, process_with_options, ProcessOptions};

#[cfg(feature = "excel")]
pub use export::excel_core::render_workbook;
#[cfg(feature = "excel")]
pub use pipeline::process_to_xlsx;
