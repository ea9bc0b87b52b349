// src/app/engine.rs

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::frame_clock::FrameClock;
use crate::app::scene_state::SceneState;
use crate::components::{ComponentRecord, Sprite, Transform, Velocity};
use crate::config::EngineConfig;
use crate::ecs::entity::Entity;
use crate::ecs::scene::Scene;
use crate::ecs::system::SystemId;
use crate::error::EngineError;
use crate::logging;
use crate::systems::{MovementSystem, RenderSystem, WallBounceSystem};

/// ブラウザの `performance.now()` (ミリ秒)。
fn now_ms() -> Result<f64, EngineError> {
    let window = web_sys::window().ok_or_else(|| EngineError::Browser("no global `window`".into()))?;
    let performance = window
        .performance()
        .ok_or_else(|| EngineError::Browser("`window.performance` is unavailable".into()))?;
    Ok(performance.now())
}

/// requestAnimationFrame のループ本体。
///
/// コールバックのクロージャは `Weak` で自分を指すので、Engine が捨てられたらループも止まる。
struct FrameLoop {
    scene: Rc<RefCell<Scene>>,
    clock: RefCell<FrameClock>,
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn new(scene: Rc<RefCell<Scene>>) -> Self {
        FrameLoop {
            scene,
            clock: RefCell::new(FrameClock::new()),
            running: Cell::new(false),
            frame_id: Cell::new(None),
            callback: RefCell::new(None),
        }
    }

    /// 1 フレーム分: 経過時間を計って Scene を進め、走ってる間は次のフレームを予約する。
    fn tick(self: &Rc<Self>) {
        self.frame_id.set(None);
        let now = match now_ms() {
            Ok(now) => now,
            Err(e) => {
                error!("Engine: Stopping frame loop: {}", e);
                self.running.set(false);
                return;
            }
        };
        let delta_time = self.clock.borrow_mut().advance(now);
        self.scene.borrow_mut().update(delta_time);

        if self.running.get() {
            if let Err(e) = self.schedule() {
                error!("Engine: Failed to request next frame: {}", e);
                self.running.set(false);
            }
        }
    }

    fn schedule(self: &Rc<Self>) -> Result<(), EngineError> {
        if self.callback.borrow().is_none() {
            let weak: Weak<FrameLoop> = Rc::downgrade(self);
            let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
                if let Some(frame_loop) = weak.upgrade() {
                    frame_loop.tick();
                }
            }) as Box<dyn FnMut(f64)>);
            *self.callback.borrow_mut() = Some(closure);
        }

        let window = web_sys::window().ok_or_else(|| EngineError::Browser("no global `window`".into()))?;
        let callback = self.callback.borrow();
        if let Some(closure) = callback.as_ref() {
            let id = window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .map_err(EngineError::browser)?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    fn cancel(&self) {
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    error!("Engine: cancelAnimationFrame failed: {:?}", e);
                }
            }
        }
    }
}

/// JS から使うエンジン本体だよ！
///
/// Canvas を一枚受け取って Scene を一個持つ。`start()` で requestAnimationFrame の
/// ループが回り始めて、毎フレーム `Scene::update(経過秒数)` が呼ばれる。
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    context: Rc<CanvasRenderingContext2d>,
    scene: Rc<RefCell<Scene>>,
    frame_loop: Rc<FrameLoop>,
}

#[wasm_bindgen]
impl Engine {
    /// Canvas から Engine を作る。システムはまだ一個も入ってない。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        Ok(Self::with_canvas(canvas)?)
    }

    /// 設定 JSON から Engine を作る (canvas は `canvasId` で探す)。
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<Engine, JsValue> {
        let config = EngineConfig::from_json(config_json)?;
        Ok(Self::with_config(&config)?)
    }

    /// フレームループを開始する。もう走ってたら何もしない。
    pub fn start(&self) -> Result<(), JsValue> {
        if self.frame_loop.running.get() {
            return Ok(());
        }
        self.frame_loop.running.set(true);
        self.frame_loop.clock.borrow_mut().start(now_ms()?);
        info!("Engine: Started");
        self.frame_loop.tick();
        Ok(())
    }

    /// フレームループを止める。止まってたら何もしない。
    pub fn stop(&self) {
        if !self.frame_loop.running.get() {
            return;
        }
        self.frame_loop.running.set(false);
        self.frame_loop.cancel();
        info!("Engine: Stopped");
    }

    /// 止めてから Scene を全部片付ける (システムの on_destroy も呼ばれる)。
    pub fn destroy(&self) {
        self.stop();
        self.scene.borrow_mut().clear();
        self.frame_loop.clock.borrow_mut().reset();
        self.frame_loop.callback.borrow_mut().take();
        debug!("Engine: Destroyed");
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.frame_loop.running.get()
    }

    /// 手動で 1 フレーム進める (ループを回さずに動かしたいとき用)。
    pub fn update(&self, delta_time: f64) {
        self.scene.borrow_mut().update(delta_time);
    }

    // --- Scene の操作 ---

    #[wasm_bindgen(js_name = createEntity)]
    pub fn create_entity(&self) -> usize {
        self.scene.borrow_mut().create_entity().id()
    }

    #[wasm_bindgen(js_name = removeEntity)]
    pub fn remove_entity(&self, entity_id: usize) {
        self.scene.borrow_mut().remove_entity(Entity(entity_id));
    }

    #[wasm_bindgen(js_name = entityCount)]
    pub fn entity_count(&self) -> usize {
        self.scene.borrow().entity_count()
    }

    #[wasm_bindgen(js_name = addTransform)]
    pub fn add_transform(&self, entity_id: usize, x: f64, y: f64) {
        self.scene
            .borrow_mut()
            .register_component(Transform::new(Entity(entity_id), x, y));
    }

    #[wasm_bindgen(js_name = addVelocity)]
    pub fn add_velocity(&self, entity_id: usize, vx: f64, vy: f64) {
        self.scene
            .borrow_mut()
            .register_component(Velocity::new(Entity(entity_id), vx, vy));
    }

    /// `color` を省略すると白。
    #[wasm_bindgen(js_name = addSprite)]
    pub fn add_sprite(&self, entity_id: usize, width: f64, height: f64, color: Option<String>) {
        let entity = Entity(entity_id);
        let sprite = match color {
            Some(color) => Sprite::with_color(entity, width, height, color),
            None => Sprite::new(entity, width, height),
        };
        self.scene.borrow_mut().register_component(sprite);
    }

    /// `{"type": "Transform", "entityId": 0, ...}` 形式のコンポーネントを登録する。
    /// 読めない入力 (null とか) はエラーで返すよ。
    #[wasm_bindgen(js_name = registerComponent)]
    pub fn register_component_json(&self, json: &str) -> Result<(), JsValue> {
        let record = ComponentRecord::from_json(json)?;
        debug!("Engine: Registering {} for entity {}", record.kind(), record.entity().0);
        self.scene.borrow_mut().register_record(record);
        Ok(())
    }

    /// Scene の状態を JSON 文字列で返す (デバッグ用)。
    #[wasm_bindgen(js_name = sceneStateJson)]
    pub fn scene_state_json(&self) -> Result<String, JsValue> {
        let state = SceneState::capture(&self.scene.borrow());
        Ok(state.to_json()?)
    }

    // --- システム ---

    #[wasm_bindgen(js_name = addMovementSystem)]
    pub fn add_movement_system(&self) -> usize {
        self.scene.borrow_mut().add_system(MovementSystem::new()).index()
    }

    #[wasm_bindgen(js_name = addRenderSystem)]
    pub fn add_render_system(&self) -> usize {
        self.scene
            .borrow_mut()
            .add_system(RenderSystem::new(Rc::clone(&self.context)))
            .index()
    }

    /// Canvas の大きさを壁にして跳ね返すシステム。
    #[wasm_bindgen(js_name = addWallBounceSystem)]
    pub fn add_wall_bounce_system(&self) -> usize {
        let (width, height) = self.canvas_size();
        self.scene
            .borrow_mut()
            .add_system(WallBounceSystem::new(width, height))
            .index()
    }

    #[wasm_bindgen(js_name = removeSystem)]
    pub fn remove_system(&self, system_id: usize) -> bool {
        self.scene
            .borrow_mut()
            .remove_system(SystemId::from_index(system_id))
            .is_some()
    }

    #[wasm_bindgen(js_name = systemCount)]
    pub fn system_count(&self) -> usize {
        self.scene.borrow().system_count()
    }
}

// --- Rust 側からだけ使うメソッド ---
impl Engine {
    pub fn with_canvas(canvas: HtmlCanvasElement) -> Result<Engine, EngineError> {
        let context = canvas
            .get_context("2d")
            .map_err(EngineError::browser)?
            .ok_or_else(|| EngineError::Browser("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::Browser("2d context has an unexpected type".into()))?;

        let scene = Rc::new(RefCell::new(Scene::new()));
        let frame_loop = Rc::new(FrameLoop::new(Rc::clone(&scene)));
        debug!("Engine: Created for a {}x{} canvas", canvas.width(), canvas.height());

        Ok(Engine {
            canvas,
            context: Rc::new(context),
            scene,
            frame_loop,
        })
    }

    pub fn with_config(config: &EngineConfig) -> Result<Engine, EngineError> {
        logging::init(config.level_filter()?);

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| EngineError::Browser("no document".into()))?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| EngineError::Browser(format!("no element with id `{}`", config.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::Browser(format!("`{}` is not a canvas", config.canvas_id)))?;

        let engine = Self::with_canvas(canvas)?;
        if config.systems.movement {
            engine.add_movement_system();
        }
        if config.systems.render {
            engine.add_render_system();
        }
        if config.auto_start {
            engine.start().map_err(|e| EngineError::Browser(format!("{:?}", e)))?;
        }
        Ok(engine)
    }

    /// 中の Scene。Rust から独自のシステムやコンポーネントを足したいときに使う。
    pub fn scene(&self) -> Rc<RefCell<Scene>> {
        Rc::clone(&self.scene)
    }

    pub fn context(&self) -> Rc<CanvasRenderingContext2d> {
        Rc::clone(&self.context)
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.frame_loop.running.set(false);
        self.frame_loop.cancel();
    }
}
