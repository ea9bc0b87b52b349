// src/components/sprite.rs

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_SPRITE_COLOR, DEFAULT_SPRITE_OPACITY};
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 見た目を表すコンポーネントだよ！🎨
///
/// 今は塗りつぶしの四角形だけ。Transform の位置を中心にして描かれる。
/// `color` は CSS の色文字列 (`"#ff0000"` とか `"tomato"` とか)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    pub entity_id: Entity,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_color() -> String {
    DEFAULT_SPRITE_COLOR.to_string()
}

fn default_opacity() -> f64 {
    DEFAULT_SPRITE_OPACITY
}

impl Sprite {
    /// 白・不透明の Sprite を作る。
    pub fn new(entity: Entity, width: f64, height: f64) -> Self {
        Self::with_color(entity, width, height, DEFAULT_SPRITE_COLOR)
    }

    pub fn with_color(entity: Entity, width: f64, height: f64, color: impl Into<String>) -> Self {
        Sprite {
            entity_id: entity,
            width,
            height,
            color: color.into(),
            opacity: DEFAULT_SPRITE_OPACITY,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

impl Component for Sprite {
    fn entity(&self) -> Entity {
        self.entity_id
    }
}
