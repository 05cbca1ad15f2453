//! # 报告输出
//!
//! 把渲染好的 PDF 交付到文件或标准输出，并可导出 CSV 摘要。
//!
//! ## 支持目标
//! - 文件路径：默认 `co2_flooding_report.pdf`，已存在时直接覆盖
//! - `-`：直接写入标准输出
//! - CSV：一行表头加一行数据
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `models/room.rs` 的 CalculationRecord
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Co2Error, Result};
use crate::models::CalculationRecord;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 交付结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// 已写入文件
    Written(PathBuf),
    /// 已写入标准输出
    Stdout,
}

/// 目标是否为标准输出
pub fn is_stdout(destination: &Path) -> bool {
    destination.as_os_str() == "-"
}

/// 交付 PDF 字节
pub fn write_report(bytes: &[u8], destination: &Path) -> Result<Delivery> {
    if is_stdout(destination) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(bytes)
            .and_then(|_| handle.flush())
            .map_err(|e| Co2Error::FileWriteError {
                path: "<stdout>".to_string(),
                source: e,
            })?;
        return Ok(Delivery::Stdout);
    }

    fs::write(destination, bytes).map_err(|e| Co2Error::FileWriteError {
        path: destination.display().to_string(),
        source: e,
    })?;

    Ok(Delivery::Written(destination.to_path_buf()))
}

/// 导出计算摘要为 CSV 格式
pub fn write_csv_summary(record: &CalculationRecord, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.serialize(record)?;
    wtr.flush().map_err(|e| Co2Error::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
