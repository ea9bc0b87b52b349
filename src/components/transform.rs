// src/components/transform.rs

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_ROTATION, DEFAULT_SCALE};
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 2D 空間での位置・回転・拡大率を表すコンポーネントだよ！📍
///
/// `rotation` はラジアン。描画のときは translate → rotate → scale の順に効く。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub entity_id: Entity,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_rotation")]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

fn default_rotation() -> f64 {
    DEFAULT_ROTATION
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

impl Transform {
    /// (x, y) に置いた Transform を作る。回転 0、拡大率 1。
    pub fn new(entity: Entity, x: f64, y: f64) -> Self {
        Transform {
            entity_id: entity,
            x,
            y,
            rotation: DEFAULT_ROTATION,
            scale_x: DEFAULT_SCALE,
            scale_y: DEFAULT_SCALE,
        }
    }

    /// 原点に置いた Transform。
    pub fn at_origin(entity: Entity) -> Self {
        Self::new(entity, 0.0, 0.0)
    }
}

impl Component for Transform {
    fn entity(&self) -> Entity {
        self.entity_id
    }
}
