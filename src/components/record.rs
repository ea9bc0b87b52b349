// src/components/record.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::{Sprite, Transform, Velocity};
use crate::ecs::entity::Entity;
use crate::error::EngineError;

/// このエンジンが知ってるコンポーネントを全部まとめたタグ付き enum だよ。
///
/// JS からは `{"type": "Transform", "entityId": 0, "x": 10, "y": 20}` みたいな
/// JSON で渡してもらう。Rust 側の型名で区別するから、タイポはパースの時点でエラーになる！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentRecord {
    Transform(Transform),
    Velocity(Velocity),
    Sprite(Sprite),
}

impl ComponentRecord {
    /// JSON 文字列からコンポーネントを読む。
    ///
    /// `null` や壊れた JSON、知らない `type` は `EngineError::InvalidComponent`。
    /// キーになる `entityId` が取れないものは登録できないからね。
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidComponent(format!("malformed JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, EngineError> {
        if !value.is_object() {
            return Err(EngineError::InvalidComponent(format!(
                "expected a JSON object, got {}",
                value
            )));
        }
        serde_json::from_value(value).map_err(|e| EngineError::InvalidComponent(e.to_string()))
    }

    pub fn entity(&self) -> Entity {
        match self {
            ComponentRecord::Transform(transform) => transform.entity_id,
            ComponentRecord::Velocity(velocity) => velocity.entity_id,
            ComponentRecord::Sprite(sprite) => sprite.entity_id,
        }
    }

    /// ログ用の種類名。
    pub fn kind(&self) -> &'static str {
        match self {
            ComponentRecord::Transform(_) => "Transform",
            ComponentRecord::Velocity(_) => "Velocity",
            ComponentRecord::Sprite(_) => "Sprite",
        }
    }
}

impl From<Transform> for ComponentRecord {
    fn from(transform: Transform) -> Self {
        ComponentRecord::Transform(transform)
    }
}

impl From<Velocity> for ComponentRecord {
    fn from(velocity: Velocity) -> Self {
        ComponentRecord::Velocity(velocity)
    }
}

impl From<Sprite> for ComponentRecord {
    fn from(sprite: Sprite) -> Self {
        ComponentRecord::Sprite(sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_transform() {
        let record = ComponentRecord::from_json(
            r#"{"type": "Transform", "entityId": 3, "x": 10, "y": 20}"#,
        )
        .expect("valid transform");

        assert_eq!(record, ComponentRecord::Transform(Transform::new(Entity(3), 10.0, 20.0)));
        assert_eq!(record.entity(), Entity(3));
        assert_eq!(record.kind(), "Transform");
    }

    #[test]
    fn parses_sprite_with_default_color() {
        let record =
            ComponentRecord::from_json(r#"{"type": "Sprite", "entityId": 0, "width": 8, "height": 4}"#)
                .expect("valid sprite");

        assert_eq!(record, ComponentRecord::Sprite(Sprite::new(Entity(0), 8.0, 4.0)));
    }

    #[test]
    fn null_is_rejected() {
        let result = ComponentRecord::from_json("null");
        assert!(matches!(result, Err(EngineError::InvalidComponent(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = ComponentRecord::from_json("{\"type\": ");
        assert!(matches!(result, Err(EngineError::InvalidComponent(_))));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = ComponentRecord::from_json(r#"{"type": "Health", "entityId": 0}"#);
        assert!(matches!(result, Err(EngineError::InvalidComponent(_))));
    }

    #[test]
    fn missing_entity_id_is_rejected() {
        let result = ComponentRecord::from_json(r#"{"type": "Velocity", "vx": 1}"#);
        assert!(matches!(result, Err(EngineError::InvalidComponent(_))));
    }
}
