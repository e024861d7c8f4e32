//! Credits roll shown behind the title screen

use crate::core::context::Color;
use crate::render::Canvas;

/// A caption and the names listed under it.
#[derive(Debug, Clone, Copy)]
pub struct CreditSection {
    pub caption: &'static str,
    pub items: &'static [&'static str],
}

pub const CREDITS: &[CreditSection] = &[
    CreditSection {
        caption: "Programming",
        items: &["Walter van Niftrik", "Kris McAulay"],
    },
    CreditSection {
        caption: "Graphics",
        items: &["Kris McAulay"],
    },
    CreditSection {
        caption: "Chess Engine",
        items: &["Walter van Niftrik"],
    },
];

const X: i32 = 620;
const Y: i32 = 270;
const ITEM_DROP: i32 = 40;
const FADE_MS: u32 = 1000;

const CAPTION: Color = Color::new(0.55, 0.75, 0.95, 0.0);
const ITEM: Color = Color::new(1.0, 1.0, 1.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    CaptionIn,
    Items,
    CaptionOut,
    Done,
}

/// Time-driven animation: a caption fades in, each item fades in, holds and
/// fades out under it, the caption fades out, then the next section starts.
#[derive(Debug, Clone)]
pub struct Credits {
    sections: &'static [CreditSection],
    section: usize,
    item: usize,
    phase: Phase,
    start: u32,
}

impl Credits {
    pub fn new(sections: &'static [CreditSection], now: u32) -> Self {
        Self {
            sections,
            section: 0,
            item: 0,
            phase: Phase::CaptionIn,
            start: now,
        }
    }

    /// Starts over from the first section.
    pub fn reset(&mut self, now: u32) {
        self.section = 0;
        self.item = 0;
        self.phase = Phase::CaptionIn;
        self.start = now;
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advances the animation to the canvas time and draws the current frame.
    pub fn draw(&mut self, canvas: &mut Canvas<'_>) {
        let now = canvas.ticks();
        let Some(section) = self.sections.get(self.section) else {
            self.phase = Phase::Done;
            return;
        };
        let elapsed = now.saturating_sub(self.start);
        let mut caption = CAPTION;

        match self.phase {
            Phase::CaptionIn => {
                if elapsed < FADE_MS {
                    caption.a = fraction(elapsed);
                } else {
                    caption.a = 1.0;
                    self.enter(Phase::Items, now);
                }
                canvas.text_right(X, Y, section.caption, 1.0, caption);
            }
            Phase::Items => {
                caption.a = 1.0;
                canvas.text_right(X, Y, section.caption, 1.0, caption);

                let Some(name) = section.items.get(self.item) else {
                    self.item = 0;
                    self.enter(Phase::CaptionOut, now);
                    return;
                };
                let mut item = ITEM;
                item.a = if elapsed < FADE_MS {
                    fraction(elapsed)
                } else if elapsed < 2 * FADE_MS {
                    1.0
                } else if elapsed < 3 * FADE_MS {
                    1.0 - fraction(elapsed - 2 * FADE_MS)
                } else {
                    self.start = now;
                    self.item += 1;
                    if self.item >= section.items.len() {
                        self.item = 0;
                        self.phase = Phase::CaptionOut;
                    }
                    return;
                };
                canvas.text_right(X, Y - ITEM_DROP, name, 1.0, item);
            }
            Phase::CaptionOut => {
                let text = if elapsed < FADE_MS {
                    caption.a = 1.0 - fraction(elapsed);
                    section.caption
                } else if let Some(next) = self.sections.get(self.section + 1) {
                    // The next caption starts out fully transparent
                    self.section += 1;
                    self.enter(Phase::CaptionIn, now);
                    next.caption
                } else {
                    self.phase = Phase::Done;
                    return;
                };
                canvas.text_right(X, Y, text, 1.0, caption);
            }
            Phase::Done => {}
        }
    }

    fn enter(&mut self, phase: Phase, now: u32) {
        self.phase = phase;
        self.start = now;
    }
}

fn fraction(elapsed: u32) -> f32 {
    elapsed as f32 / FADE_MS as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Font, Primitive, RenderList};

    const ONE: &[CreditSection] = &[
        CreditSection {
            caption: "Code",
            items: &["Alice", "Bob"],
        },
        CreditSection {
            caption: "Art",
            items: &["Carol"],
        },
    ];

    /// Draws one frame at `now` and returns every text with its y and alpha.
    fn frame(credits: &mut Credits, now: u32) -> Vec<(String, f32, f32)> {
        let font = Font::monospace(8, 16);
        let mut list = RenderList::new();
        credits.draw(&mut Canvas::new(&mut list, &font, now));
        list.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, y, color, .. } => Some((text.clone(), *y, color.a)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_caption_fades_in() {
        let mut credits = Credits::new(ONE, 0);
        assert_eq!(frame(&mut credits, 0), vec![("Code".to_string(), 270.0, 0.0)]);
        assert_eq!(frame(&mut credits, 500), vec![("Code".to_string(), 270.0, 0.5)]);
        assert_eq!(frame(&mut credits, 1000), vec![("Code".to_string(), 270.0, 1.0)]);
    }

    #[test]
    fn test_items_fade_hold_and_fade_out() {
        let mut credits = Credits::new(ONE, 0);
        frame(&mut credits, 1000);

        let texts = frame(&mut credits, 1250);
        assert_eq!(texts[0], ("Code".to_string(), 270.0, 1.0));
        assert_eq!(texts[1], ("Alice".to_string(), 230.0, 0.25));
        assert_eq!(frame(&mut credits, 2500)[1].2, 1.0);
        assert_eq!(frame(&mut credits, 3750)[1].2, 0.25);

        // Item finished: only the caption this frame, then the next name
        assert_eq!(frame(&mut credits, 4000).len(), 1);
        assert_eq!(frame(&mut credits, 4000)[1], ("Bob".to_string(), 230.0, 0.0));
    }

    #[test]
    fn test_caption_fades_out_then_next_section() {
        let mut credits = Credits::new(ONE, 0);
        frame(&mut credits, 1000);
        frame(&mut credits, 4000);
        frame(&mut credits, 7000);

        assert_eq!(frame(&mut credits, 7500), vec![("Code".to_string(), 270.0, 0.5)]);
        assert_eq!(frame(&mut credits, 8000), vec![("Art".to_string(), 270.0, 0.0)]);
        assert_eq!(frame(&mut credits, 8500), vec![("Art".to_string(), 270.0, 0.5)]);
    }

    #[test]
    fn test_finishes_after_last_section_and_resets() {
        let mut credits = Credits::new(&ONE[1..], 0);
        frame(&mut credits, 1000);
        frame(&mut credits, 4000);
        frame(&mut credits, 4000);
        assert!(frame(&mut credits, 5000).is_empty());
        assert!(credits.is_done());
        assert!(frame(&mut credits, 6000).is_empty());

        credits.reset(10_000);
        assert!(!credits.is_done());
        assert_eq!(frame(&mut credits, 10_000), vec![("Art".to_string(), 270.0, 0.0)]);
    }
}
