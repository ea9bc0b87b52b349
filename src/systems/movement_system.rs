// src/systems/movement_system.rs

use std::collections::HashMap;

use crate::components::{Transform, Velocity};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;

/// Transform と Velocity の両方を持つエンティティを動かすシステムだよ！🏃
///
/// 毎フレーム `位置 += 速度 * delta_time` (素直なオイラー積分)。はみ出しチェックとかはしない。
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementSystem;

impl MovementSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for MovementSystem {
    fn update(&mut self, world: &mut World, delta_time: f64) {
        // Velocity を先にコピーで集めておく (Transform を書き換える間、World を二重に借りないため)
        let velocities: HashMap<Entity, Velocity> = world
            .get_components::<Velocity>()
            .into_iter()
            .map(|velocity| (velocity.entity_id, *velocity))
            .collect();

        if velocities.is_empty() {
            return;
        }

        for transform in world.components_mut::<Transform>() {
            if let Some(velocity) = velocities.get(&transform.entity_id) {
                transform.x += velocity.vx * delta_time;
                transform.y += velocity.vy * delta_time;
            }
        }
    }
}
