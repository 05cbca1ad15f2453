//! # 房间与计算结果数据模型
//!
//! 一次计算的全部输入（房间尺寸、计算系数）与输出（体积、CO₂ 用量）。
//!
//! ## 依赖关系
//! - 被 `flooding/calculator.rs` 使用
//! - 被 `report/` 和 `commands/calculate.rs` 使用

use serde::Serialize;

/// 默认材料转换系数
pub const DEFAULT_MATERIAL_CONVERSION_FACTOR: f64 = 1.6;

/// 默认淹没系数 (kg/m³)，对应表面火灾全淹没
pub const DEFAULT_FLOODING_FACTOR: f64 = 0.93;

/// 房间尺寸（米）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDimensions {
    /// 长度 (m)
    pub length: f64,
    /// 宽度 (m)
    pub width: f64,
    /// 高度 (m)
    pub height: f64,
}

impl RoomDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        RoomDimensions {
            length,
            width,
            height,
        }
    }
}

/// 计算系数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationFactors {
    /// 材料转换系数
    pub material_conversion_factor: f64,
    /// 淹没系数 (kg/m³)
    pub flooding_factor: f64,
}

impl CalculationFactors {
    pub fn new(material_conversion_factor: f64, flooding_factor: f64) -> Self {
        CalculationFactors {
            material_conversion_factor,
            flooding_factor,
        }
    }
}

impl Default for CalculationFactors {
    fn default() -> Self {
        CalculationFactors {
            material_conversion_factor: DEFAULT_MATERIAL_CONVERSION_FACTOR,
            flooding_factor: DEFAULT_FLOODING_FACTOR,
        }
    }
}

/// 计算结果（全精度，只在显示时取两位小数）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 防护体积 (m³)
    pub volume: f64,
    /// CO₂ 需求量 (kg)
    pub co2_required: f64,
}

impl CalculationResult {
    /// 体积显示值，两位小数
    pub fn volume_display(&self) -> String {
        format!("{:.2}", self.volume)
    }

    /// CO₂ 用量显示值，两位小数
    pub fn co2_display(&self) -> String {
        format!("{:.2}", self.co2_required)
    }

    /// 屏幕输出的两行结果
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("CO2 required: {} kg", self.co2_display()),
            format!("Volume: {} m³", self.volume_display()),
        ]
    }
}

/// CSV 导出用的扁平记录
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRecord {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub material_conversion_factor: f64,
    pub flooding_factor: f64,
    pub volume_m3: String,
    pub co2_required_kg: String,
}

impl CalculationRecord {
    pub fn new(
        dimensions: &RoomDimensions,
        factors: &CalculationFactors,
        result: &CalculationResult,
    ) -> Self {
        CalculationRecord {
            length_m: dimensions.length,
            width_m: dimensions.width,
            height_m: dimensions.height,
            material_conversion_factor: factors.material_conversion_factor,
            flooding_factor: factors.flooding_factor,
            volume_m3: result.volume_display(),
            co2_required_kg: result.co2_display(),
        }
    }
}
