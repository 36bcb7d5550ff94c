//! # 批量执行器
//!
//! 顺序执行逐文件文字提取。
//!
//! ## 功能
//! - 严格串行：一张图像打开、识别、释放之后才处理下一张
//! - 单文件失败转换为失败记录，不中断批处理
//! - 进度条显示
//! - 结果汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `engine::OcrEngine` 进行识别
//! - 使用 `utils/progress.rs` 创建进度条

use super::collector;
use crate::engine::OcrEngine;
use crate::error::{OcrBatchError, Result};
use crate::models::{ExtractionResult, ImageInfo};
use crate::utils::progress;

use image::io::Reader as ImageReader;
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (文件名, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl BatchSummary {
    /// 从结果序列汇总
    pub fn from_results(results: &[ExtractionResult]) -> Self {
        let mut summary = BatchSummary::default();
        for result in results {
            summary.merge(result);
        }
        summary
    }

    /// 合并单条结果
    pub fn merge(&mut self, result: &ExtractionResult) {
        if result.success {
            self.success += 1;
        } else {
            self.failed += 1;
            self.failures.push((
                result.file_name.clone(),
                result.error.clone().unwrap_or_default(),
            ));
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a, E: OcrEngine> {
    /// OCR 引擎
    engine: &'a E,
    /// 原样透传给引擎的配置
    config: String,
    /// 是否显示进度条
    show_progress: bool,
}

impl<'a, E: OcrEngine> BatchRunner<'a, E> {
    /// 创建新的批量执行器
    pub fn new(engine: &'a E, config: impl Into<String>) -> Self {
        Self {
            engine,
            config: config.into(),
            show_progress: false,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表，每个输入恰好产生一条结果，顺序与输入一致
    pub fn run(&self, files: &[PathBuf]) -> Vec<ExtractionResult> {
        let total = files.len();
        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Extracting text")
        } else {
            progress::create_hidden_bar()
        };

        let mut results = Vec::with_capacity(total);

        for (i, file) in files.iter().enumerate() {
            debug!("Processing {}/{}: {}", i + 1, total, file.display());
            pb.set_message(display_name(file));

            let result = self.extract_quiet(file);
            if !result.success {
                pb.suspend(|| log_failure(&result));
            }
            results.push(result);

            pb.inc(1);
        }

        pb.finish_and_clear();
        results
    }

    /// 处理单个文件，任何错误都被记录为失败结果
    pub fn extract_one(&self, path: &Path) -> ExtractionResult {
        let result = self.extract_quiet(path);
        if !result.success {
            log_failure(&result);
        }
        result
    }

    fn extract_quiet(&self, path: &Path) -> ExtractionResult {
        match self.try_extract(path) {
            Ok((text, info)) => {
                info!(
                    file = %path.display(),
                    width = info.size.0,
                    height = info.size.1,
                    "Successfully extracted text"
                );
                ExtractionResult::success(path, &text, info)
            }
            Err(e) => ExtractionResult::failure(path, &e),
        }
    }

    fn try_extract(&self, path: &Path) -> Result<(String, ImageInfo)> {
        if !path.exists() {
            return Err(OcrBatchError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        if !collector::is_supported(path) {
            let ext = path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_else(|| "(none)".to_string());
            return Err(OcrBatchError::UnsupportedFormat(ext));
        }

        let (rgb, info) = load_rgb(path)?;
        let text = self.engine.recognize(&rgb, &self.config)?;
        Ok((text, info))
    }
}

/// 解码图像并转换为 8 位 RGB；解码后的原始缓冲区在返回前释放
fn load_rgb(path: &Path) -> Result<(RgbImage, ImageInfo)> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| OcrBatchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

    let image = reader.decode()?;
    let info = ImageInfo::new(image.width(), image.height(), image.color());
    Ok((image.into_rgb8(), info))
}

fn log_failure(result: &ExtractionResult) {
    error!("{}", result.error.as_deref().unwrap_or_default());
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fake::FakeEngine;
    use image::{GrayImage, Luma, Rgb};
    use std::fs;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_one_result_per_input_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            dir.path().join("a.png"),
            dir.path().join("b.png"),
            dir.path().join("c.png"),
        ];
        for (i, f) in files.iter().enumerate() {
            write_png(f, 10 + i as u32, 5);
        }

        let engine = FakeEngine::default();
        let results = BatchRunner::new(&engine, "--psm 6").run(&files);

        assert_eq!(results.len(), 3);
        let names: Vec<_> = results.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(results[1].text, "text 11x5");
        assert_eq!(results[1].image_size, Some((11, 5)));
        assert_eq!(results[1].image_mode.as_deref(), Some("RGB"));
    }

    #[test]
    fn test_corrupt_file_fails_alone() {
        let dir = tempfile::tempdir().unwrap();
        let good1 = dir.path().join("1.png");
        let bad = dir.path().join("2.jpg");
        let good2 = dir.path().join("3.png");
        write_png(&good1, 8, 8);
        fs::write(&bad, b"this is not a jpeg").unwrap();
        write_png(&good2, 9, 9);

        let engine = FakeEngine::default();
        let results = BatchRunner::new(&engine, "").run(&[good1, bad, good2]);

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[1]
            .error
            .as_deref()
            .unwrap()
            .starts_with("Error processing 2.jpg:"));
        assert!(results[1].text.is_empty());
        assert!(results[2].success);
    }

    #[test]
    fn test_engine_failure_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.png");
        let fails = dir.path().join("fails.png");
        write_png(&ok, 4, 4);
        write_png(&fails, 7, 4);

        let engine = FakeEngine {
            fail_width: Some(7),
            ..Default::default()
        };
        let results = BatchRunner::new(&engine, "").run(&[ok, fails]);

        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[1]
            .error
            .as_deref()
            .unwrap()
            .contains("simulated failure"));
    }

    #[test]
    fn test_missing_and_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "hello").unwrap();

        let engine = FakeEngine::default();
        let runner = BatchRunner::new(&engine, "");

        let missing = runner.extract_one(&dir.path().join("ghost.png"));
        assert!(!missing.success);
        assert!(missing.error.unwrap().contains("not found"));

        let unsupported = runner.extract_one(&notes);
        assert!(!unsupported.success);
        assert!(unsupported
            .error
            .unwrap()
            .contains("Unsupported image format: .txt"));
    }

    #[test]
    fn test_grayscale_mode_and_config_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 2, Luma([0])).save(&path).unwrap();

        let engine = FakeEngine::default();
        let result = BatchRunner::new(&engine, "--oem 1 --psm 3").extract_one(&path);

        assert!(result.success);
        assert_eq!(result.image_mode.as_deref(), Some("L"));
        assert_eq!(engine.configs.borrow().as_slice(), ["--oem 1 --psm 3"]);
    }

    #[test]
    fn test_empty_input() {
        let engine = FakeEngine::default();
        let results = BatchRunner::new(&engine, "").run(&[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_summary() {
        let results = vec![
            ExtractionResult::failure(Path::new("x.png"), "bad"),
            ExtractionResult::success(
                Path::new("y.png"),
                "ok",
                ImageInfo::new(1, 1, image::ColorType::Rgb8),
            ),
        ];
        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures[0].0, "x.png");
    }
}
