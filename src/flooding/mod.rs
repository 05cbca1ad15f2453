//! # CO₂ 全淹没计算模块
//!
//! 提供 NFPA 12 全淹没灭火系统的 CO₂ 用量计算。
//!
//! ## 子模块
//! - `calculator`: 体积与 CO₂ 用量计算
//! - `hazard`: 典型淹没系数参考表（仅展示）
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/room.rs`

pub mod calculator;
pub mod hazard;

pub use calculator::FloodingCalculator;
pub use hazard::{HAZARD_FACTORS, REFERENCE_NOTE};
