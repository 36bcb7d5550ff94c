//! # 终端输出
//!
//! 每个文件输出一段：分隔线、文件名、分隔线，然后是识别文本或错误信息。

use crate::models::ExtractionResult;

use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// 写出所有结果的可读文本块
pub fn write_console<W: Write>(out: &mut W, results: &[ExtractionResult]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    for result in results {
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "File: {}", result.file_name)?;
        writeln!(out, "{}", rule)?;

        if result.success {
            if result.text.is_empty() {
                writeln!(out, "(No text found)")?;
            } else {
                writeln!(out, "{}", result.text)?;
            }
        } else {
            writeln!(out, "ERROR: {}", result.error.as_deref().unwrap_or_default())?;
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageInfo;
    use image::ColorType;
    use std::path::Path;

    fn render(results: &[ExtractionResult]) -> String {
        let mut buf = Vec::new();
        write_console(&mut buf, results).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_console_blocks() {
        let info = ImageInfo::new(1, 1, ColorType::Rgb8);
        let results = vec![
            ExtractionResult::success(Path::new("a.png"), "Hello\nWorld", info.clone()),
            ExtractionResult::success(Path::new("blank.png"), "   ", info),
            ExtractionResult::failure(Path::new("bad.jpg"), "corrupt"),
        ];

        let text = render(&results);
        let rule = "=".repeat(50);

        assert!(text.contains(&format!("{}\nFile: a.png\n{}\nHello\nWorld\n", rule, rule)));
        assert!(text.contains("File: blank.png\n"));
        assert!(text.contains("(No text found)"));
        assert!(text.contains("ERROR: Error processing bad.jpg: corrupt"));
        assert_eq!(text.matches("File: ").count(), 3);
    }

    #[test]
    fn test_console_empty() {
        assert!(render(&[]).is_empty());
    }
}
