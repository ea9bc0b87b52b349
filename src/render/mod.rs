// src/render/mod.rs
//! 描画先 (Canvas 2D) を抽象化したモジュール。

pub mod surface;

pub use surface::DrawingSurface;

#[cfg(test)]
pub(crate) mod recording;
