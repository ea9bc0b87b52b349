// src/ecs/mod.rs
//! ECS (Entity-Component-System) のコア実装。

pub mod component;
pub mod entity;
pub mod scene;
pub mod system;
pub mod world;

// `crate::ecs::X` で使えるように再エクスポート
pub use component::{Component, ComponentStore};
pub use entity::{Entity, EntityAllocator};
pub use scene::Scene;
pub use system::{System, SystemId, SystemScheduler};
pub use world::World;
