// src/config/mod.rs
//! 設定まわり。既定値の定数と、JS から渡される EngineConfig。

pub mod defaults;
pub mod engine_config;

pub use engine_config::{EngineConfig, SystemsConfig};
