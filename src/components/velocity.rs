// src/components/velocity.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 移動の速さ (px / 秒) を表すコンポーネント。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Velocity {
    pub entity_id: Entity,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
}

impl Velocity {
    pub fn new(entity: Entity, vx: f64, vy: f64) -> Self {
        Velocity {
            entity_id: entity,
            vx,
            vy,
        }
    }

    /// 止まってる Velocity。
    pub fn zero(entity: Entity) -> Self {
        Self::new(entity, 0.0, 0.0)
    }
}

impl Component for Velocity {
    fn entity(&self) -> Entity {
        self.entity_id
    }
}
