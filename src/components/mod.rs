// src/components/mod.rs

// エンジンに最初から入ってるコンポーネントたち！
pub mod record;
pub mod sprite;
pub mod transform;
pub mod velocity;

pub use record::ComponentRecord;
pub use sprite::Sprite;
pub use transform::Transform;
pub use velocity::Velocity;
