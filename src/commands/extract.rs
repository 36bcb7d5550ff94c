//! # 文字提取命令实现
//!
//! ## 流程
//! 1. 校验引擎配置并检查 OCR 引擎是否可用（失败时直接退出）
//! 2. 解析输入：单文件或目录扫描
//! 3. 顺序逐文件识别，失败记录为失败结果
//! 4. 渲染到输出目标
//! 5. 打印汇总
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `batch/`, `engine/`, `render/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, BatchSummary, FileCollector};
use crate::cli::extract::ExtractArgs;
use crate::engine::{tesseract, OcrEngine, TesseractCli};
use crate::error::Result;
use crate::models::ExtractionResult;
use crate::render;
use crate::utils::output;

use tabled::{Table, Tabled};
use tracing::info;

/// 失败文件行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行文字提取命令
pub fn execute(args: ExtractArgs, verbose: bool) -> Result<()> {
    output::print_header("Extracting Text from Images");

    let target = args.output_target()?;

    // 配置只校验一次，避免每个文件重复同一错误
    tesseract::parse_config(&args.tesseract_config)?;

    let engine = TesseractCli::new(args.tesseract_cmd.clone());
    let version = engine.check_available()?;
    output::print_info(&format!("Using {} ({})", engine.name(), version));

    let results = extract_with(&args, &engine, verbose)?;

    if results.is_empty() {
        output::print_warning("No results to save");
        return Ok(());
    }

    render::render(&results, &target)?;
    print_summary(&BatchSummary::from_results(&results));

    Ok(())
}

/// 使用给定引擎提取文字，结果顺序与输入枚举顺序一致
pub fn extract_with<E: OcrEngine>(
    args: &ExtractArgs,
    engine: &E,
    verbose: bool,
) -> Result<Vec<ExtractionResult>> {
    let runner = BatchRunner::new(engine, args.tesseract_config.clone());

    if let Some(path) = &args.single {
        info!(engine = engine.name(), "Processing single image {}", path.display());
        return Ok(vec![runner.extract_one(path)]);
    }

    let source = args.source_dir();
    let files = FileCollector::new(source.clone())
        .recursive(!args.no_recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!("No image files found in {}", source.display()));
        return Ok(Vec::new());
    }

    output::print_info(&format!("Found {} image files to process", files.len()));

    Ok(runner.with_progress(!verbose).run(&files))
}

/// 打印汇总
fn print_summary(summary: &BatchSummary) {
    output::print_header("Summary");
    println!("Total images processed: {}", summary.total());
    println!("Successful extractions: {}", summary.success);
    println!("Failed extractions: {}", summary.failed);

    if summary.failed > 0 {
        println!("\nFailed files:");
        let rows: Vec<FailureRow> = summary
            .failures
            .iter()
            .map(|(file, error)| FailureRow {
                file: file.clone(),
                error: error.clone(),
            })
            .collect();
        println!("{}", Table::new(&rows));
    } else {
        output::print_done("All images processed successfully");
    }
}
