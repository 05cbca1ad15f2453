//! # calculate 子命令 CLI 定义
//!
//! 收集房间尺寸与两个计算系数，相当于原来的输入表单。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calculate.rs`

use crate::models::{
    CalculationFactors, RoomDimensions, DEFAULT_FLOODING_FACTOR,
    DEFAULT_MATERIAL_CONVERSION_FACTOR,
};
use crate::report::REPORT_FILE_NAME;

use clap::Args;
use std::path::PathBuf;

/// 解析非负数输入（拒绝负数、NaN 和无穷大）
pub fn parse_non_negative(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;

    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", input));
    }
    if value < 0.0 {
        return Err(format!("'{}' must be >= 0", input));
    }
    Ok(value)
}

/// calculate 子命令参数
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Length of the room (m)
    #[arg(short, long, value_parser = parse_non_negative)]
    pub length: f64,

    /// Width of the room (m)
    #[arg(short, long, value_parser = parse_non_negative)]
    pub width: f64,

    /// Height of the room (m)
    #[arg(long, value_parser = parse_non_negative)]
    pub height: f64,

    /// Material conversion factor
    #[arg(
        long,
        env = "CO2_MATERIAL_CONVERSION_FACTOR",
        value_parser = parse_non_negative,
        default_value_t = DEFAULT_MATERIAL_CONVERSION_FACTOR
    )]
    pub material_factor: f64,

    /// Flooding factor in kg/m³ (see `co2flood factors`)
    #[arg(
        long,
        env = "CO2_FLOODING_FACTOR",
        value_parser = parse_non_negative,
        default_value_t = DEFAULT_FLOODING_FACTOR
    )]
    pub flooding_factor: f64,

    /// Output path for the PDF report ('-' writes to stdout)
    #[arg(short, long, env = "CO2_REPORT_PATH", default_value = REPORT_FILE_NAME)]
    pub output: PathBuf,

    /// Skip PDF report generation
    #[arg(long, default_value_t = false)]
    pub no_report: bool,

    /// Print the report text before writing the PDF
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Also write a one-row CSV summary to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl CalculateArgs {
    pub fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::new(self.length, self.width, self.height)
    }

    pub fn factors(&self) -> CalculationFactors {
        CalculationFactors::new(self.material_factor, self.flooding_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands, ENV_LOCK};
    use clap::Parser;
    use std::env;

    const ENV_VARS: [&str; 3] = [
        "CO2_MATERIAL_CONVERSION_FACTOR",
        "CO2_FLOODING_FACTOR",
        "CO2_REPORT_PATH",
    ];

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("5"), Ok(5.0));
        assert_eq!(parse_non_negative(" 0.93 "), Ok(0.93));
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("inf").is_err());
        assert!(parse_non_negative("abc").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cli = Cli::try_parse_from([
            "co2flood", "calculate", "--length", "5", "--width", "4", "--height", "3",
        ])
        .unwrap();

        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.dimensions(), RoomDimensions::new(5.0, 4.0, 3.0));
        assert_eq!(args.factors(), CalculationFactors::default());
        assert_eq!(args.output, PathBuf::from("co2_flooding_report.pdf"));
        assert!(!args.no_report);
        assert!(args.csv.is_none());
    }

    #[test]
    fn test_cli_rejects_negative_dimension() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = Cli::try_parse_from([
            "co2flood", "calculate", "--length", "-5", "--width", "4", "--height", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_factor_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cli = Cli::try_parse_from([
            "co2flood",
            "calculate",
            "-l",
            "2",
            "-w",
            "2",
            "--height",
            "2",
            "--flooding-factor",
            "1.10",
            "--material-factor",
            "1.2",
            "-o",
            "-",
        ])
        .unwrap();

        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.factors(), CalculationFactors::new(1.2, 1.10));
        assert_eq!(args.output, PathBuf::from("-"));
    }

    #[test]
    fn test_cli_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CO2_MATERIAL_CONVERSION_FACTOR", "1.25");
        env::set_var("CO2_FLOODING_FACTOR", "1.10");
        env::set_var("CO2_REPORT_PATH", "room_a.pdf");

        let from_env = Cli::try_parse_from([
            "co2flood", "calculate", "-l", "5", "-w", "4", "--height", "3",
        ]);
        let flag_wins = Cli::try_parse_from([
            "co2flood",
            "calculate",
            "-l",
            "5",
            "-w",
            "4",
            "--height",
            "3",
            "--flooding-factor",
            "0.67",
        ]);
        env::set_var("CO2_FLOODING_FACTOR", "-1");
        let invalid = Cli::try_parse_from([
            "co2flood", "calculate", "-l", "5", "-w", "4", "--height", "3",
        ]);

        for name in ENV_VARS {
            env::remove_var(name);
        }

        let Commands::Calculate(args) = from_env.unwrap().command else {
            panic!("expected calculate");
        };
        assert_eq!(args.factors(), CalculationFactors::new(1.25, 1.10));
        assert_eq!(args.output, PathBuf::from("room_a.pdf"));

        let Commands::Calculate(args) = flag_wins.unwrap().command else {
            panic!("expected calculate");
        };
        assert_eq!(args.factors(), CalculationFactors::new(1.25, 0.67));

        assert!(invalid.is_err());
    }
}
