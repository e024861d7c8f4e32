//! Frame rate measurement and pacing

use std::time::Duration;

use crate::core::context::Color;
use crate::render::Canvas;

/// Frames averaged per measurement.
pub const FPS_SAMPLE: u32 = 10;

/// Rolling frames-per-second estimate, updated every `FPS_SAMPLE` frames.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: u32,
    since: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: u32) -> Self {
        Self {
            frames: 0,
            since: now,
            fps: 60.0,
        }
    }

    /// Counts a presented frame that ended at `now`.
    pub fn frame(&mut self, now: u32) {
        self.frames += 1;
        if self.frames == FPS_SAMPLE {
            let elapsed = now.saturating_sub(self.since).max(1);
            self.fps = (FPS_SAMPLE * 1000) as f32 / elapsed as f32;
            self.frames = 0;
            self.since = now;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn draw(&self, canvas: &mut Canvas<'_>) {
        canvas.text(10, 10, &format!("FPS: {:.2}", self.fps), 1.0, Color::RED);
    }
}

/// Sleeps away what is left of a frame's time slot. A cap of 0 disables it.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    cap: u32,
    last: u32,
}

impl FrameLimiter {
    pub fn new(cap: u32, now: u32) -> Self {
        Self { cap, last: now }
    }

    /// Time to wait before the next frame, given the current time.
    pub fn remaining(&self, now: u32) -> Option<Duration> {
        if self.cap == 0 {
            return None;
        }
        let slot = 1000 / self.cap;
        let spent = now.saturating_sub(self.last);
        (spent < slot).then(|| Duration::from_millis(u64::from(slot - spent)))
    }

    /// Marks the start of a new frame.
    pub fn reset(&mut self, now: u32) {
        self.last = now;
    }
}
