// src/app/frame_clock.rs

/// フレームごとの経過時間 (秒) を計る時計。
///
/// ブラウザの `performance.now()` (ミリ秒) を渡してもらって、前回からの差を秒で返すだけ。
/// ブラウザに依存しないので普通のテストで確かめられるよ。
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last_seconds: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 計測開始。次の `advance` はここからの経過時間になる。
    pub fn start(&mut self, now_ms: f64) {
        self.last_seconds = Some(now_ms / 1000.0);
    }

    /// 前回の `start` / `advance` からの経過秒数を返して、基準を今に進める。
    /// まだ始まってなければ 0。時計が戻っても負の値は返さない。
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let now = now_ms / 1000.0;
        let delta = self.last_seconds.map_or(0.0, |last| (now - last).max(0.0));
        self.last_seconds = Some(now);
        delta
    }

    pub fn reset(&mut self) {
        self.last_seconds = None;
    }

    pub fn is_started(&self) -> bool {
        self.last_seconds.is_some()
    }
}
