// src/error.rs
//! エンジンのエラー型。
//!
//! ECS のコア操作 (取得・削除など) は失敗しない。「無い」は `None` で返すだけ。
//! ここにあるのは、JS から来た入力のパースやブラウザ API まわりで起きる失敗だよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EngineError {
    /// JS から渡されたコンポーネントが読めなかった (null、壊れた JSON、知らない type など)。
    #[error("invalid component: {0}")]
    InvalidComponent(String),

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// window / document / canvas / 2D コンテキストが取れなかった。
    #[error("browser API unavailable: {0}")]
    Browser(String),

    /// Canvas への描画呼び出しが失敗した。
    #[error("draw call failed: {0}")]
    Draw(String),

    #[error("failed to serialize scene state: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// JS 側の例外を文字列にして `Browser` にする。
    pub fn browser(value: JsValue) -> Self {
        EngineError::Browser(format!("{:?}", value))
    }

    pub fn draw(value: JsValue) -> Self {
        EngineError::Draw(format!("{:?}", value))
    }
}

impl From<EngineError> for JsValue {
    fn from(error: EngineError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
