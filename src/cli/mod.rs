//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calculate`: 计算 CO₂ 用量并生成 PDF 报告
//! - `factors`: 显示 NFPA 12 典型淹没系数参考表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calculate

pub mod calculate;

use clap::{Parser, Subcommand};

/// co2flood - CO₂ 全淹没灭火系统计算器
#[derive(Parser)]
#[command(name = "co2flood")]
#[command(author = "Manmohan Singh Rawat")]
#[command(version)]
#[command(about = "CO2 flooding system calculator (NFPA 12 based)", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the CO2 required for a room and write a PDF report
    Calculate(calculate::CalculateArgs),

    /// Show typical NFPA 12 flooding factors by hazard type
    Factors,
}

/// 测试中修改 CO2_* 环境变量时持有，避免与其他解析参数的测试交错
#[cfg(test)]
pub static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
