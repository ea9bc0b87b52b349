// src/render/surface.rs

use std::rc::Rc;

use web_sys::CanvasRenderingContext2d;

use crate::error::EngineError;

/// RenderSystem が使う描画先の操作だけを切り出したトレイトだよ。
///
/// 本番は `CanvasRenderingContext2d` がそのまま実装する。
/// テストでは呼び出しを記録するだけのダミーを差し込めるから、ブラウザなしでも確かめられる！
pub trait DrawingSurface {
    /// 描画先の (幅, 高さ)。
    fn size(&self) -> (f64, f64);
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn save(&self);
    fn restore(&self);
    fn translate(&self, x: f64, y: f64) -> Result<(), EngineError>;
    fn rotate(&self, angle: f64) -> Result<(), EngineError>;
    fn scale(&self, x: f64, y: f64) -> Result<(), EngineError>;
    fn set_global_alpha(&self, alpha: f64);
    fn set_fill_color(&self, color: &str);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);

    /// 全体をまっさらにする。
    fn clear(&self) {
        let (width, height) = self.size();
        self.clear_rect(0.0, 0.0, width, height);
    }
}

impl DrawingSurface for CanvasRenderingContext2d {
    fn size(&self) -> (f64, f64) {
        self.canvas()
            .map(|canvas| (canvas.width() as f64, canvas.height() as f64))
            .unwrap_or((0.0, 0.0))
    }

    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), EngineError> {
        CanvasRenderingContext2d::translate(self, x, y).map_err(EngineError::draw)
    }

    fn rotate(&self, angle: f64) -> Result<(), EngineError> {
        CanvasRenderingContext2d::rotate(self, angle).map_err(EngineError::draw)
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), EngineError> {
        CanvasRenderingContext2d::scale(self, x, y).map_err(EngineError::draw)
    }

    fn set_global_alpha(&self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_fill_color(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }
}

/// `Rc` 越しでも描画先として使えるようにする (Engine とシステムで同じ Canvas を共有するため)。
impl<T: DrawingSurface + ?Sized> DrawingSurface for Rc<T> {
    fn size(&self) -> (f64, f64) {
        (**self).size()
    }

    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height)
    }

    fn save(&self) {
        (**self).save()
    }

    fn restore(&self) {
        (**self).restore()
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), EngineError> {
        (**self).translate(x, y)
    }

    fn rotate(&self, angle: f64) -> Result<(), EngineError> {
        (**self).rotate(angle)
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), EngineError> {
        (**self).scale(x, y)
    }

    fn set_global_alpha(&self, alpha: f64) {
        (**self).set_global_alpha(alpha)
    }

    fn set_fill_color(&self, color: &str) {
        (**self).set_fill_color(color)
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        (**self).fill_rect(x, y, width, height)
    }
}
