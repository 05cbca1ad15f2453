//! # 报告模块
//!
//! 将一次计算的输入与结果整理成固定两节的报告，并渲染为 PDF。
//!
//! ## 子模块
//! - `builder`: 报告内容（标题、章节、正文行）
//! - `pdf`: 内存中渲染 PDF
//! - `export`: 报告与 CSV 摘要的输出
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 使用
//! - 使用 `models/room.rs`

pub mod builder;
pub mod export;
pub mod pdf;

pub use builder::{build_report, Report, REPORT_FILE_NAME};
