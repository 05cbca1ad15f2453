//! # factors 命令实现
//!
//! 打印 NFPA 12 典型淹没系数参考表，仅供选择 `--flooding-factor` 时参考。
//!
//! ## 依赖关系
//! - 使用 `flooding/hazard.rs` 的静态表
//! - 使用 `utils/output.rs`

use crate::error::Result;
use crate::flooding::{HAZARD_FACTORS, REFERENCE_NOTE};
use crate::utils::output::{self, Stream};

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FactorRow {
    #[tabled(rename = "Hazard Type")]
    hazard: &'static str,
    #[tabled(rename = "Factor (kg/m³)")]
    factor: String,
}

/// 执行 factors 命令
pub fn execute() -> Result<()> {
    output::print_header(Stream::Stdout, "NFPA 12 Reference: Typical CO2 Flooding Factors");

    let rows: Vec<FactorRow> = HAZARD_FACTORS
        .iter()
        .map(|h| FactorRow {
            hazard: h.hazard,
            factor: format!("{:.2}", h.factor),
        })
        .collect();

    println!("{}", Table::new(&rows));
    println!();
    output::print_info(Stream::Stdout, REFERENCE_NOTE);

    Ok(())
}
