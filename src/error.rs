use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchPairError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] patch_pair_common::Error),
}

impl PatchPairError {
    /// 一致なし（警告扱い）か
    pub fn is_warning(&self) -> bool {
        matches!(self, PatchPairError::Common(e) if e.is_warning())
    }
}

pub type Result<T> = std::result::Result<T, PatchPairError>;
