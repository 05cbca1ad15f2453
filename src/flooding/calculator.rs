//! # CO₂ 用量计算器
//!
//! 全淹没系统的核心公式：
//! 1. 体积 V = 长 × 宽 × 高 (m³)
//! 2. CO₂ 用量 = V × 淹没系数 × 材料转换系数 (kg)
//!
//! 计算保持全精度，取两位小数只在显示时进行。
//!
//! ## 参考
//! - NFPA 12: Standard on Carbon Dioxide Extinguishing Systems
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs` 调用
//! - 使用 `models/room.rs` 的 RoomDimensions, CalculationFactors, CalculationResult

use crate::error::{Co2Error, Result};
use crate::models::{CalculationFactors, CalculationResult, RoomDimensions};

/// CO₂ 全淹没计算器
#[derive(Debug, Clone, Copy, Default)]
pub struct FloodingCalculator {
    factors: CalculationFactors,
}

impl FloodingCalculator {
    /// 使用指定系数创建计算器
    pub fn new(factors: CalculationFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &CalculationFactors {
        &self.factors
    }

    /// 计算防护体积和 CO₂ 用量
    pub fn compute(&self, dimensions: &RoomDimensions) -> Result<CalculationResult> {
        ensure_non_negative("length", dimensions.length)?;
        ensure_non_negative("width", dimensions.width)?;
        ensure_non_negative("height", dimensions.height)?;
        ensure_non_negative(
            "material conversion factor",
            self.factors.material_conversion_factor,
        )?;
        ensure_non_negative("flooding factor", self.factors.flooding_factor)?;

        let volume = dimensions.length * dimensions.width * dimensions.height;
        let co2_required =
            volume * self.factors.flooding_factor * self.factors.material_conversion_factor;

        Ok(CalculationResult {
            volume,
            co2_required,
        })
    }
}

/// 输入必须是有限且非负的数
fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Co2Error::InvalidInput { field, value })
    }
}
