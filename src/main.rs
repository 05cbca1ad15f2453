//! # co2flood - CO₂ 全淹没灭火系统计算器
//!
//! 按 NFPA 12 的全淹没方法，由房间尺寸和两个查表系数计算所需 CO₂ 质量，
//! 并生成可下载的 PDF 报告。
//!
//! ## 子命令
//! - `calculate` - 计算 CO₂ 用量并生成报告
//! - `factors`   - 显示典型淹没系数参考表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── flooding/  (CO₂ 用量计算、参考表)
//!   │     ├── report/    (报告构建、PDF 渲染、输出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod flooding;
mod models;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
