// src/app/mod.rs
//! ブラウザとつなぐ部分: フレームループを回す Engine と、そのまわり。

pub mod demo;
pub mod engine;
pub mod frame_clock;
pub mod scene_state;

pub use engine::Engine;
pub use frame_clock::FrameClock;
pub use scene_state::SceneState;
