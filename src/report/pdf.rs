//! # PDF 渲染
//!
//! 使用 `printpdf` 在内存中生成 A4 单页报告，不经过临时文件。
//!
//! ## 版式
//! - 标题：Helvetica-Bold 14pt
//! - 章节标题：Helvetica-Bold 12pt，前置 10mm 空白
//! - 正文：Helvetica 12pt，行距 10mm
//!
//! 文档 ID 取自报告文本的 SHA-256，日期固定为 Unix 纪元，
//! 相同输入得到逐字节相同的 PDF。
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `report/builder.rs` 的 Report 结构

use crate::error::{Co2Error, Result};
use crate::report::Report;

use printpdf::{
    BuiltinFont, CustomPdfConformance, Mm, OffsetDateTime, PdfConformance, PdfDocument,
};
use sha2::{Digest, Sha256};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;

const TITLE_SIZE: f32 = 14.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 12.0;

impl Report {
    /// 渲染为 PDF 字节
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Report",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Co2Error::ReportError(format!("{:?}", e)))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Co2Error::ReportError(format!("{:?}", e)))?;

        // 文本基线从页面顶部向下排列
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
        layer.use_text(
            self.title.as_str(),
            TITLE_SIZE,
            Mm(title_x(&self.title, TITLE_SIZE)),
            Mm(y),
            &bold,
        );

        for section in &self.sections {
            y -= 2.0 * LINE_HEIGHT_MM;
            layer.use_text(
                section.title.as_str(),
                HEADING_SIZE,
                Mm(MARGIN_MM),
                Mm(y),
                &bold,
            );

            for line in &section.lines {
                y -= LINE_HEIGHT_MM;
                if line.is_empty() {
                    continue;
                }
                layer.use_text(line.as_str(), BODY_SIZE, Mm(MARGIN_MM), Mm(y), &regular);
            }
        }

        doc.with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_document_id(self.document_id())
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH)
        .save_to_bytes()
        .map_err(|e| Co2Error::ReportError(format!("{:?}", e)))
    }

    /// 由报告文本派生的 32 位十六进制文档 ID
    fn document_id(&self) -> String {
        Sha256::digest(self.to_text().as_bytes())
            .iter()
            .take(16)
            .map(|b| format!("{:02X}", b))
            .collect()
    }
}

/// 标题水平居中的起点
///
/// 内置字体没有度量表，按 Helvetica 平均字宽 0.55em 估算。
fn title_x(title: &str, size_pt: f32) -> f32 {
    const PT_TO_MM: f32 = 25.4 / 72.0;
    let width = title.chars().count() as f32 * size_pt * 0.55 * PT_TO_MM;
    ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_MM)
}
