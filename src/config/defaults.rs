// src/config/defaults.rs
//! コンポーネントやエンジンの既定値をまとめた定数だよ。

// --- Transform ---
pub const DEFAULT_ROTATION: f64 = 0.0; // ラジアン
pub const DEFAULT_SCALE: f64 = 1.0;

// --- Sprite ---
pub const DEFAULT_SPRITE_COLOR: &str = "#ffffff"; // 白
pub const DEFAULT_SPRITE_OPACITY: f64 = 1.0; // 不透明

// --- Engine ---
pub const DEFAULT_CANVAS_ID: &str = "canvas";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- デモ (create_simple_example) ---
pub const DEMO_SQUARE_SIZE: f64 = 50.0;
pub const DEMO_SQUARE_COLOR: &str = "#4ecdc4";
pub const DEMO_SQUARE_SPEED: f64 = 100.0; // px / 秒
