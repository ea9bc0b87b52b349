// src/systems/mod.rs
//! エンジンに付属するシステムたち。

pub mod bounce_system;
pub mod movement_system;
pub mod render_system;

pub use bounce_system::WallBounceSystem;
pub use movement_system::MovementSystem;
pub use render_system::RenderSystem;
