// src/systems/bounce_system.rs

use crate::components::{Sprite, Transform, Velocity};
use crate::ecs::system::System;
use crate::ecs::world::World;

/// 画面の端で跳ね返らせるシステム (デモ用)。
///
/// Transform・Sprite・Velocity を全部持つエンティティについて、
/// Sprite の端が壁に触れていたら速度の向きを反転して、位置を画面の内側に押し戻す。
/// MovementSystem の後に登録してね。
#[derive(Debug, Clone, Copy)]
pub struct WallBounceSystem {
    width: f64,
    height: f64,
}

impl WallBounceSystem {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// `lo..=hi` に収める。`hi < lo` (Sprite が画面より大きい) なら `lo` に寄せる。
fn keep_inside(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

impl System for WallBounceSystem {
    fn update(&mut self, world: &mut World, _delta_time: f64) {
        for entity in world.entities_with::<Transform>() {
            let Some((half_w, half_h)) = world
                .get_component::<Sprite>(entity)
                .map(|sprite| (sprite.half_width(), sprite.half_height()))
            else {
                continue;
            };
            if !world.has_component::<Velocity>(entity) {
                continue;
            }
            let Some((x, y)) = world
                .get_component::<Transform>(entity)
                .map(|transform| (transform.x, transform.y))
            else {
                continue;
            };

            // 壁に向かって進んでるときだけ反転する (dt = 0 のフレームで二回反転しないように)
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                if (x <= half_w && velocity.vx < 0.0) || (x >= self.width - half_w && velocity.vx > 0.0) {
                    velocity.vx = -velocity.vx;
                }
                if (y <= half_h && velocity.vy < 0.0) || (y >= self.height - half_h && velocity.vy > 0.0) {
                    velocity.vy = -velocity.vy;
                }
            }

            if let Some(transform) = world.get_component_mut::<Transform>(entity) {
                transform.x = keep_inside(transform.x, half_w, self.width - half_w);
                transform.y = keep_inside(transform.y, half_h, self.height - half_h);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::entity::Entity;
    use crate::ecs::scene::Scene;
    use crate::systems::MovementSystem;

    fn bouncing_square(scene: &mut Scene, x: f64, y: f64, vx: f64, vy: f64) -> Entity {
        let entity = scene.create_entity();
        scene.register_component(Transform::new(entity, x, y));
        scene.register_component(Sprite::new(entity, 50.0, 50.0));
        scene.register_component(Velocity::new(entity, vx, vy));
        entity
    }

    #[test]
    fn reverses_and_clamps_at_right_wall() {
        let mut scene = Scene::new();
        scene.add_system(MovementSystem::new());
        scene.add_system(WallBounceSystem::new(200.0, 200.0));
        let entity = bouncing_square(&mut scene, 170.0, 100.0, 100.0, 0.0);

        scene.update(0.1);

        let velocity = scene.get_component::<Velocity>(entity).expect("velocity");
        let transform = scene.get_component::<Transform>(entity).expect("transform");
        assert_eq!(velocity.vx, -100.0);
        assert_eq!(velocity.vy, 0.0);
        assert_eq!(transform.x, 175.0);
    }

    #[test]
    fn reverses_at_top_wall() {
        let mut scene = Scene::new();
        scene.add_system(WallBounceSystem::new(200.0, 200.0));
        let entity = bouncing_square(&mut scene, 100.0, 10.0, 0.0, -30.0);

        scene.update(0.016);

        let velocity = scene.get_component::<Velocity>(entity).expect("velocity");
        let transform = scene.get_component::<Transform>(entity).expect("transform");
        assert_eq!(velocity.vy, 30.0);
        assert_eq!(transform.y, 25.0);
    }

    #[test]
    fn leaves_entities_in_the_middle_alone() {
        let mut scene = Scene::new();
        scene.add_system(WallBounceSystem::new(200.0, 200.0));
        let entity = bouncing_square(&mut scene, 100.0, 100.0, 10.0, 10.0);

        scene.update(0.016);

        let velocity = scene.get_component::<Velocity>(entity).expect("velocity");
        assert_eq!((velocity.vx, velocity.vy), (10.0, 10.0));
    }

    #[test]
    fn moving_away_from_a_wall_keeps_direction() {
        let mut scene = Scene::new();
        scene.add_system(WallBounceSystem::new(200.0, 200.0));
        let entity = bouncing_square(&mut scene, 25.0, 100.0, 40.0, 0.0);

        scene.update(0.0);
        scene.update(0.0);

        let velocity = scene.get_component::<Velocity>(entity).expect("velocity");
        assert_eq!(velocity.vx, 40.0);
    }

    #[test]
    fn ignores_entities_without_velocity() {
        let mut scene = Scene::new();
        scene.add_system(WallBounceSystem::new(200.0, 200.0));
        let entity = scene.create_entity();
        scene.register_component(Transform::new(entity, -50.0, -50.0));
        scene.register_component(Sprite::new(entity, 50.0, 50.0));

        scene.update(0.016);

        let transform = scene.get_component::<Transform>(entity).expect("transform");
        assert_eq!((transform.x, transform.y), (-50.0, -50.0));
    }

    #[test]
    fn oversized_sprite_is_pinned_to_the_low_edge() {
        assert_eq!(keep_inside(40.0, 60.0, 20.0), 60.0);
        assert_eq!(keep_inside(5.0, 0.0, 10.0), 5.0);
    }
}
