// src/systems/render_system.rs

use log::warn;

use crate::components::{Sprite, Transform};
use crate::error::EngineError;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::render::DrawingSurface;

/// Transform と Sprite を持つエンティティを描画面に描くシステムだよ！🖌️
///
/// 毎フレーム、まず画面全体をクリア。それから各エンティティについて
/// translate → rotate → scale を掛けて、Sprite の四角形をエンティティの位置を中心に塗る。
/// Sprite がないエンティティは何も描かない。
pub struct RenderSystem<S: DrawingSurface> {
    surface: S,
}

impl<S: DrawingSurface> RenderSystem<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn draw_sprite(&self, transform: &Transform, sprite: &Sprite) -> Result<(), EngineError> {
        self.surface.save();
        let result = self.fill_sprite(transform, sprite);
        // 途中で失敗しても save したぶんは必ず戻す
        self.surface.restore();
        result
    }

    fn fill_sprite(&self, transform: &Transform, sprite: &Sprite) -> Result<(), EngineError> {
        self.surface.translate(transform.x, transform.y)?;
        self.surface.rotate(transform.rotation)?;
        self.surface.scale(transform.scale_x, transform.scale_y)?;

        self.surface.set_global_alpha(sprite.opacity);
        self.surface.set_fill_color(&sprite.color);
        self.surface.fill_rect(
            -sprite.half_width(),
            -sprite.half_height(),
            sprite.width,
            sprite.height,
        );
        Ok(())
    }
}

impl<S: DrawingSurface> System for RenderSystem<S> {
    fn update(&mut self, world: &mut World, _delta_time: f64) {
        self.surface.clear();

        // ID 順に描くので、あとから作ったエンティティが上に重なる
        for entity in world.entities_with::<Transform>() {
            let (Some(transform), Some(sprite)) = (
                world.get_component::<Transform>(entity),
                world.get_component::<Sprite>(entity),
            ) else {
                continue;
            };

            if let Err(e) = self.draw_sprite(transform, sprite) {
                warn!("RenderSystem: Failed to draw entity {}: {}", entity.0, e);
            }
        }
    }
}
