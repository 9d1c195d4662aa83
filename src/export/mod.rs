pub mod excel;

use std::path::{Path, PathBuf};

/// 出力先を決める
///
/// ディレクトリまたは拡張子なしのパスなら既定ファイル名を付ける。
pub fn output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        None => PathBuf::from(file_name),
        Some(output) if output.is_dir() || output.extension().is_none() => output.join(file_name),
        Some(output) => output.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_default() {
        assert_eq!(output_path(None, "out.xlsx"), PathBuf::from("out.xlsx"));
    }

    #[test]
    fn test_output_path_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(output_path(Some(dir.path()), "out.xlsx"), dir.path().join("out.xlsx"));
        assert_eq!(
            output_path(Some(Path::new("results")), "out.xlsx"),
            PathBuf::from("results").join("out.xlsx")
        );
    }

    #[test]
    fn test_output_path_file() {
        assert_eq!(
            output_path(Some(Path::new("paired.xlsx")), "out.xlsx"),
            PathBuf::from("paired.xlsx")
        );
    }
}
