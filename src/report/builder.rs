//! # 报告内容构建
//!
//! 报告布局固定：
//! - 标题 "CO2 Flooding System Report"
//! - "Input Parameters": 尺寸、体积、两个系数
//! - "Calculation Result": CO₂ 用量
//!
//! 所有数值都来自全精度结果，只在格式化时取两位小数。
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `models/room.rs`
//! - 渲染由 `report/pdf.rs` 完成

use crate::models::{CalculationFactors, CalculationResult, RoomDimensions};

/// 报告标题
pub const REPORT_TITLE: &str = "CO2 Flooding System Report";

/// 默认下载文件名
pub const REPORT_FILE_NAME: &str = "co2_flooding_report.pdf";

/// 报告章节
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    /// 正文行，空字符串表示空行
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(title: &str, lines: Vec<String>) -> Self {
        ReportSection {
            title: title.to_string(),
            lines,
        }
    }
}

/// 完整报告
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// 纯文本渲染，与 PDF 布局一致
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.title);
        text.push('\n');

        for section in &self.sections {
            text.push('\n');
            text.push_str(&section.title);
            text.push('\n');
            for line in &section.lines {
                if !line.is_empty() {
                    text.push_str("  ");
                    text.push_str(line);
                }
                text.push('\n');
            }
        }

        text
    }
}

/// 构建报告
pub fn build_report(
    dimensions: &RoomDimensions,
    factors: &CalculationFactors,
    result: &CalculationResult,
) -> Report {
    let inputs = ReportSection::new(
        "Input Parameters",
        vec![
            format!("Length: {} m", dimensions.length),
            format!("Width: {} m", dimensions.width),
            format!("Height: {} m", dimensions.height),
            format!("Volume: {} m³", result.volume_display()),
            String::new(),
            format!(
                "Material Conversion Factor: {}",
                factors.material_conversion_factor
            ),
            format!("Flooding Factor: {}", factors.flooding_factor),
        ],
    );

    let outcome = ReportSection::new(
        "Calculation Result",
        vec![format!("CO2 Required: {} kg", result.co2_display())],
    );

    Report {
        title: REPORT_TITLE.to_string(),
        sections: vec![inputs, outcome],
    }
}
