//! Image widget

use crate::core::context::Color;
use crate::core::{next_widget_id, Focus, Rect, Size, Widget, WidgetId};
use crate::render::{Canvas, Texture};

/// Relative size change at the extreme of the pulse. Negative shrinks.
pub const IMAGE_SCALE: f32 = -0.3;
/// Pulses per second.
pub const IMAGE_SPEED: f32 = 2.0;

/// Scale applied to a focused image at time `ticks`.
pub fn pulse_factor(ticks: u32) -> f32 {
    let period = (1000.0 / IMAGE_SPEED) as u32;
    let phase = (ticks % period) as f32 / period as f32;
    if phase < 0.5 {
        1.0 + IMAGE_SCALE * phase * 2.0
    } else {
        1.0 + IMAGE_SCALE * (1.0 - phase) * 2.0
    }
}

/// Displays a texture at its natural size, pulsing about its centre while focused.
pub struct Image {
    id: WidgetId,
    texture: Texture,
    xalign: f32,
    yalign: f32,
}

impl Image {
    pub fn new(texture: Texture) -> Self {
        Self {
            id: next_widget_id(),
            texture,
            xalign: 0.5,
            yalign: 0.5,
        }
    }

    pub fn align(mut self, xalign: f32, yalign: f32) -> Self {
        self.xalign = xalign;
        self.yalign = yalign;
        self
    }
}

impl Widget for Image {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        Size::new(self.texture.width, self.texture.height)
    }

    fn render(&self, canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        let natural = self.size();
        let x = area.x as f32 + self.xalign * (area.width - natural.width) as f32;
        let y = area.y as f32 + (1.0 - self.yalign) * (area.height - natural.height) as f32;

        let (mut w, mut h) = (natural.width as f32, natural.height as f32);
        if focus.is_focused() {
            let factor = pulse_factor(canvas.ticks());
            w *= factor;
            h *= factor;
        }

        canvas.texture(
            &self.texture,
            x - (w - natural.width as f32) / 2.0,
            y - (h - natural.height as f32) / 2.0,
            w,
            h,
            Color::WHITE,
        );
    }
}
