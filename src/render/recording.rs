// src/render/recording.rs
//! テスト用: 描画呼び出しを記録するだけの DrawingSurface。

use std::cell::RefCell;

use super::DrawingSurface;
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    ClearRect(f64, f64, f64, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64, f64),
    GlobalAlpha(f64),
    FillColor(String),
    FillRect(f64, f64, f64, f64),
}

pub(crate) struct RecordingSurface {
    width: f64,
    height: f64,
    calls: RefCell<Vec<DrawCall>>,
    /// true なら translate が失敗する (エラー処理のテスト用)。
    fail_transforms: bool,
}

impl RecordingSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: RefCell::new(Vec::new()),
            fail_transforms: false,
        }
    }

    pub(crate) fn failing(width: f64, height: f64) -> Self {
        Self {
            fail_transforms: true,
            ..Self::new(width, height)
        }
    }

    pub(crate) fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn fill_rects(&self) -> Vec<DrawCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, DrawCall::FillRect(..)))
            .collect()
    }

    fn push(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCall::ClearRect(x, y, width, height));
    }

    fn save(&self) {
        self.push(DrawCall::Save);
    }

    fn restore(&self) {
        self.push(DrawCall::Restore);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), EngineError> {
        if self.fail_transforms {
            return Err(EngineError::Draw("translate rejected".to_string()));
        }
        self.push(DrawCall::Translate(x, y));
        Ok(())
    }

    fn rotate(&self, angle: f64) -> Result<(), EngineError> {
        self.push(DrawCall::Rotate(angle));
        Ok(())
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), EngineError> {
        self.push(DrawCall::Scale(x, y));
        Ok(())
    }

    fn set_global_alpha(&self, alpha: f64) {
        self.push(DrawCall::GlobalAlpha(alpha));
    }

    fn set_fill_color(&self, color: &str) {
        self.push(DrawCall::FillColor(color.to_string()));
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCall::FillRect(x, y, width, height));
    }
}
