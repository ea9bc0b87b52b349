// src/config/engine_config.rs

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_CANVAS_ID, DEFAULT_LOG_LEVEL};
use crate::error::EngineError;

/// Engine を作るときの設定。JS から JSON で渡してもらうよ。
///
/// 書いてない項目は全部既定値になるので、`"{}"` でも OK！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// 描画に使う `<canvas>` の id。
    pub canvas_id: String,
    /// "off" / "error" / "warn" / "info" / "debug" / "trace"
    pub log_level: String,
    /// 作ったらすぐフレームループを回すか。
    pub auto_start: bool,
    pub systems: SystemsConfig,
}

/// 最初から入れておく組み込みシステム。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemsConfig {
    pub movement: bool,
    pub render: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            auto_start: false,
            systems: SystemsConfig::default(),
        }
    }
}

impl Default for SystemsConfig {
    fn default() -> Self {
        SystemsConfig {
            movement: true,
            render: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        // ログレベルはここで確かめておく
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, EngineError> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            EngineError::InvalidConfig(format!("unknown log level `{}`", self.log_level))
        })
    }
}
