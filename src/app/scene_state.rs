// src/app/scene_state.rs
//! Scene の今の状態を JSON にして JS 側に渡す (デバッグ表示用)。

use serde::Serialize;

use crate::components::{Sprite, Transform, Velocity};
use crate::ecs::entity::Entity;
use crate::ecs::scene::Scene;
use crate::error::EngineError;

/// ある瞬間の Scene の中身。各リストはエンティティ ID の昇順。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneState {
    pub entities: Vec<Entity>,
    pub transforms: Vec<Transform>,
    pub velocities: Vec<Velocity>,
    pub sprites: Vec<Sprite>,
    pub system_count: usize,
}

impl SceneState {
    pub fn capture(scene: &Scene) -> Self {
        SceneState {
            entities: scene.get_entities(),
            transforms: sorted_components(scene),
            velocities: sorted_components(scene),
            sprites: sorted_components(scene),
            system_count: scene.system_count(),
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn sorted_components<T: crate::ecs::Component + Clone>(scene: &Scene) -> Vec<T> {
    let mut components: Vec<T> = scene.get_components::<T>().into_iter().cloned().collect();
    components.sort_by_key(|component| component.entity());
    components
}
