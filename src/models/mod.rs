//! # 数据模型模块
//!
//! 定义房间尺寸、计算系数与计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `flooding/`, `report/` 和 `commands/` 使用
//! - 子模块: room

pub mod room;

pub use room::{
    CalculationFactors, CalculationRecord, CalculationResult, RoomDimensions,
    DEFAULT_FLOODING_FACTOR, DEFAULT_MATERIAL_CONVERSION_FACTOR,
};
