// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logging;
pub mod render;
pub mod systems;

pub use app::{Engine, FrameClock};
pub use components::{ComponentRecord, Sprite, Transform, Velocity};
pub use config::EngineConfig;
pub use ecs::{Component, ComponentStore, Entity, EntityAllocator, Scene, System, SystemId, World};
pub use error::EngineError;

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::debug!("Panic hook set!");
}
