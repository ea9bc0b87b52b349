// src/app/demo.rs
//! 一番シンプルなデモ: 壁で跳ね返る四角が一個。

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::app::engine::Engine;
use crate::components::{Sprite, Transform, Velocity};
use crate::config::defaults::{DEMO_SQUARE_COLOR, DEMO_SQUARE_SIZE, DEMO_SQUARE_SPEED};
use crate::ecs::entity::Entity;
use crate::ecs::scene::Scene;
use crate::render::DrawingSurface;
use crate::systems::{MovementSystem, RenderSystem, WallBounceSystem};

/// Scene にデモ一式 (システム 3 つと四角一個) を組み立てる。
///
/// システムの順番は Movement → Render → WallBounce。四角は画面の真ん中から右下へ動き出す。
pub fn build_simple_scene<S: DrawingSurface + 'static>(
    scene: &mut Scene,
    surface: S,
    width: f64,
    height: f64,
) -> Entity {
    scene.add_system(MovementSystem::new());
    scene.add_system(RenderSystem::new(surface));

    let square = scene.create_entity();
    scene.register_component(Transform::new(square, width / 2.0, height / 2.0));
    scene.register_component(Sprite::with_color(
        square,
        DEMO_SQUARE_SIZE,
        DEMO_SQUARE_SIZE,
        DEMO_SQUARE_COLOR,
    ));
    scene.register_component(Velocity::new(square, DEMO_SQUARE_SPEED, DEMO_SQUARE_SPEED));

    scene.add_system(WallBounceSystem::new(width, height));
    square
}

/// JS から呼ぶデモの入口。`start()` を呼べば動き出すよ。
#[wasm_bindgen(js_name = createSimpleExample)]
pub fn create_simple_example(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
    let engine = Engine::with_canvas(canvas)?;
    let (width, height) = engine.canvas_size();
    build_simple_scene(&mut engine.scene().borrow_mut(), engine.context(), width, height);
    Ok(engine)
}
