//! # JSON 输出
//!
//! 将全部结果写为一个带缩进的 JSON 数组（UTF-8，非 ASCII 字符原样保留）。

use crate::error::{OcrBatchError, Result};
use crate::models::ExtractionResult;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 写出 JSON 结果文件
pub fn write_json(results: &[ExtractionResult], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| OcrBatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer).and_then(|_| writer.flush()).map_err(|e| {
        OcrBatchError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageInfo;
    use image::ColorType;

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let results = vec![
            ExtractionResult::success(
                Path::new("scans/ü.png"),
                "Grüße",
                ImageInfo::new(10, 20, ColorType::Rgba8),
            ),
            ExtractionResult::failure(Path::new("scans/bad.gif"), "decode error"),
        ];

        write_json(&results, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Grüße"));

        let parsed: Vec<ExtractionResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, results);

        let failed = &parsed[1];
        assert!(!failed.success);
        assert!(failed.error.is_some());
        assert!(failed.text.is_empty());

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["image_size"], serde_json::json!([10, 20]));
        assert_eq!(value[0]["image_mode"], "RGBA");
    }

    #[test]
    fn test_json_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.json");
        let err = write_json(&[], &path).unwrap_err();
        assert!(matches!(err, OcrBatchError::FileWriteError { .. }));
    }
}
