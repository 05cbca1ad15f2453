//! # calculate 命令实现
//!
//! 一次完整的计算请求：
//! 1. 校验输入并计算体积与 CO₂ 用量
//! 2. 打印两行结果
//! 3. 构建报告并在内存中渲染 PDF
//! 4. 交付到文件或标准输出（已存在的文件直接覆盖）
//! 5. 可选导出 CSV 摘要，只在报告交付成功后写入
//!
//! ## 依赖关系
//! - 使用 `cli/calculate.rs` 定义的参数
//! - 使用 `flooding/`, `report/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::calculate::CalculateArgs;
use crate::error::Result;
use crate::flooding::FloodingCalculator;
use crate::models::CalculationRecord;
use crate::report::export::{self, Delivery};
use crate::report::build_report;
use crate::utils::output::{self, Stream};

/// 执行 calculate 命令
pub fn execute(args: CalculateArgs) -> Result<()> {
    // PDF 写入 stdout 时，状态信息改走 stderr
    let stream = if !args.no_report && export::is_stdout(&args.output) {
        Stream::Stderr
    } else {
        Stream::Stdout
    };

    output::print_header(stream, "CO2 Flooding System Calculator (NFPA 12 Based)");

    let dimensions = args.dimensions();
    let calculator = FloodingCalculator::new(args.factors());
    let factors = *calculator.factors();

    output::print_info(
        stream,
        &format!(
            "Room: {} m x {} m x {} m",
            dimensions.length, dimensions.width, dimensions.height
        ),
    );
    output::print_info(
        stream,
        &format!(
            "Material conversion factor: {}, flooding factor: {}",
            factors.material_conversion_factor, factors.flooding_factor
        ),
    );

    let result = calculator.compute(&dimensions)?;

    for line in result.summary_lines() {
        output::print_result(stream, &line);
    }

    if !args.no_report {
        let report = build_report(&dimensions, &factors, &result);
        if args.preview {
            output::print_header(stream, "Report Preview");
            output::print_block(stream, &report.to_text());
        }
        let bytes = report.to_pdf()?;

        match export::write_report(&bytes, &args.output)? {
            Delivery::Written(path) => output::print_success(
                stream,
                &format!("Report saved to '{}' ({} bytes)", path.display(), bytes.len()),
            ),
            Delivery::Stdout => output::print_success(
                stream,
                &format!("Report written to stdout ({} bytes)", bytes.len()),
            ),
        }
    }

    if let Some(csv_path) = &args.csv {
        let record = CalculationRecord::new(&dimensions, &factors, &result);
        export::write_csv_summary(&record, csv_path)?;
        output::print_success(
            stream,
            &format!("Summary saved to '{}'", csv_path.display()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands, ENV_LOCK};
    use crate::models::{CalculationFactors, RoomDimensions};
    use clap::Parser;
    use std::fs;

    fn parse(args: &[&str]) -> CalculateArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Calculate(args) => args,
            _ => panic!("expected calculate"),
        }
    }

    fn expected_pdf(length: f64, width: f64, height: f64) -> Vec<u8> {
        let dims = RoomDimensions::new(length, width, height);
        let factors = CalculationFactors::default();
        let result = FloodingCalculator::new(factors).compute(&dims).unwrap();
        build_report(&dims, &factors, &result).to_pdf().unwrap()
    }

    #[test]
    fn test_execute_writes_report_and_csv() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("co2_flooding_report.pdf");
        let csv = dir.path().join("summary.csv");

        let args = parse(&[
            "co2flood",
            "calculate",
            "--length",
            "5",
            "--width",
            "4",
            "--height",
            "3",
            "--output",
            pdf.to_str().unwrap(),
            "--csv",
            csv.to_str().unwrap(),
        ]);
        execute(args).unwrap();

        assert_eq!(fs::read(&pdf).unwrap(), expected_pdf(5.0, 4.0, 3.0));
        let summary = fs::read_to_string(&csv).unwrap();
        assert!(summary.contains("60.00,89.28"));
    }

    #[test]
    fn test_second_run_replaces_previous_report() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("co2_flooding_report.pdf");
        let csv = dir.path().join("summary.csv");

        for (l, w, h) in [("5", "4", "3"), ("50", "40", "30")] {
            let args = parse(&[
                "co2flood",
                "calculate",
                "--length",
                l,
                "--width",
                w,
                "--height",
                h,
                "-o",
                pdf.to_str().unwrap(),
                "--csv",
                csv.to_str().unwrap(),
            ]);
            execute(args).unwrap();
        }

        assert_eq!(fs::read(&pdf).unwrap(), expected_pdf(50.0, 40.0, 30.0));
        let summary = fs::read_to_string(&csv).unwrap();
        assert!(summary.contains("60000.00,89280.00"));
    }

    #[test]
    fn test_failed_delivery_leaves_no_csv() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("missing").join("report.pdf");
        let csv = dir.path().join("summary.csv");

        let args = parse(&[
            "co2flood",
            "calculate",
            "--length",
            "5",
            "--width",
            "4",
            "--height",
            "3",
            "-o",
            pdf.to_str().unwrap(),
            "--csv",
            csv.to_str().unwrap(),
        ]);
        assert!(execute(args).is_err());
        assert!(!csv.exists());
    }

    #[test]
    fn test_execute_without_report() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("report.pdf");

        let args = parse(&[
            "co2flood",
            "calculate",
            "--length",
            "0",
            "--width",
            "4",
            "--height",
            "3",
            "--output",
            pdf.to_str().unwrap(),
            "--no-report",
        ]);
        execute(args).unwrap();

        assert!(!pdf.exists());
    }
}
