//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `flooding/`, `report/`, `utils/`
//! - 子模块: calculate, factors

pub mod calculate;
pub mod factors;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calculate(args) => calculate::execute(args),
        Commands::Factors => factors::execute(),
    }
}
