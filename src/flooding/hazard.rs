//! # NFPA 12 典型淹没系数参考表
//!
//! 静态展示数据，计算器从不读取。
//!
//! ## 依赖关系
//! - 被 `commands/factors.rs` 使用
//! - 无外部模块依赖

/// 危险类型与典型淹没系数 (kg/m³)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardFactor {
    pub hazard: &'static str,
    pub factor: f64,
}

/// 典型 CO₂ 淹没系数
pub const HAZARD_FACTORS: [HazardFactor; 4] = [
    HazardFactor {
        hazard: "Surface Fire (Total Flooding)",
        factor: 0.93,
    },
    HazardFactor {
        hazard: "Deep-Seated Fire (Total Flooding)",
        factor: 1.10,
    },
    HazardFactor {
        hazard: "Local Application (Surface Only)",
        factor: 0.67,
    },
    HazardFactor {
        hazard: "Very High Hazard Areas",
        factor: 1.20,
    },
];

/// 参考表下方的提示
pub const REFERENCE_NOTE: &str = "Refer to the latest NFPA 12 standard for final values.";
