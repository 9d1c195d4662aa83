use crate::error::{PatchPairError, Result};
use patch_pair_common::{PairingMode, SheetNamePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 紐付け方式を上書きする環境変数
pub const MODE_ENV: &str = "PATCH_PAIR_MODE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_mode: PairingMode,
    pub output_file_name: String,
    pub sheet_name_policy: SheetNamePolicy,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: PairingMode::RegionMatched,
            output_file_name: "region_paired_output.xlsx".into(),
            sheet_name_policy: SheetNamePolicy::Suffix,
            preview_rows: 20,
        }
    }
}

impl Config {
    /// 紐付け実行用の設定を読み込む
    ///
    /// 方式の優先順位は コマンドライン > 環境変数 > 設定ファイル。
    pub fn load_for_run(cli_mode: Option<PairingMode>) -> Result<Self> {
        let env_mode = std::env::var(MODE_ENV).ok();
        Self::load_effective(&Self::config_path()?, cli_mode, env_mode.as_deref())
    }

    /// 指定パスの設定に方式の上書きを反映する
    ///
    /// コマンドラインで方式が指定されていれば環境変数は見ない。
    pub fn load_effective(
        path: &Path,
        cli_mode: Option<PairingMode>,
        env_mode: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        match cli_mode {
            Some(mode) => config.default_mode = mode,
            None => config.apply_env(env_mode)?,
        }
        Ok(config)
    }

    /// 指定パスから読み込む（なければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 編集用に読み込む（壊れたファイルは既定値で置き換える）
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(PatchPairError::JsonParse(e)) => {
                warn!("設定ファイルを読めないため既定値から作り直します: {}", e);
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PatchPairError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("patch-pair").join("config.json"))
    }

    fn apply_env(&mut self, mode: Option<&str>) -> Result<()> {
        if let Some(mode) = mode.filter(|m| !m.trim().is_empty()) {
            self.default_mode = mode
                .trim()
                .parse()
                .map_err(|e: String| PatchPairError::Config(format!("{}: {}", MODE_ENV, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.preview_rows, 20);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_mode: PairingMode::CrossJoin,
            sheet_name_policy: SheetNamePolicy::Reject,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"default_mode\": \"cross\""));
        assert!(content.contains("\"sheet_name_policy\": \"reject\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"preview_rows": 5}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.default_mode, PairingMode::RegionMatched);
    }

    #[test]
    fn test_env_overrides_mode() {
        let mut config = Config::default();
        config.apply_env(Some("cross")).unwrap();
        assert_eq!(config.default_mode, PairingMode::CrossJoin);

        config.apply_env(None).unwrap();
        assert_eq!(config.default_mode, PairingMode::CrossJoin);

        assert!(matches!(config.apply_env(Some("fuzzy")), Err(PatchPairError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert!(matches!(Config::load_from(&path), Err(PatchPairError::JsonParse(_))));
    }

    #[test]
    fn test_cli_mode_wins_over_bad_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config =
            Config::load_effective(&path, Some(PairingMode::RegionMatched), Some("bogus")).unwrap();
        assert_eq!(config.default_mode, PairingMode::RegionMatched);

        let config = Config::load_effective(&path, None, Some("cross")).unwrap();
        assert_eq!(config.default_mode, PairingMode::CrossJoin);

        let result = Config::load_effective(&path, None, Some("bogus"));
        assert!(matches!(result, Err(PatchPairError::Config(_))));
    }

    #[test]
    fn test_broken_file_can_be_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        let mut config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());

        config.default_mode = PairingMode::CrossJoin;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().default_mode, PairingMode::CrossJoin);
    }
}
