//! Test doubles shared by the unit tests

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use image::RgbaImage;

use crate::app::Platform;
use crate::core::{next_widget_id, Context, Focus, Key, Rect, Session, Size, UiEvent, Widget, WidgetId};
use crate::driver::{Board, Game, Move, MoveHistory, Scene, SelectorMove};
use crate::input::RawInput;
use crate::render::{Canvas, Font, RenderList, Texture, TextureId, TextureUpload};
use crate::theme::Assets;

/// Assets with an 8x16 monospace font and a blank title image.
pub fn assets() -> Assets {
    Assets::new(Font::monospace(8, 16), Texture::blank(640, 480))
}

pub fn context<'a>(assets: &'a Assets, session: &'a mut Session) -> Context<'a> {
    Context::new(assets, session)
}

/// Configurable widget that records what happens to it.
pub struct Probe {
    id: WidgetId,
    size: Size,
    enabled: bool,
    input: bool,
    consume: bool,
    events: Option<Rc<RefCell<Vec<UiEvent>>>>,
    renders: Option<Rc<RefCell<Vec<(Rect, Focus)>>>>,
    drops: Option<(Rc<RefCell<Vec<usize>>>, usize)>,
}

impl Probe {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            id: next_widget_id(),
            size: Size::new(width, height),
            enabled: true,
            input: false,
            consume: false,
            events: None,
            renders: None,
            drops: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn input(mut self, input: bool) -> Self {
        self.input = input;
        self
    }

    /// Report every event as handled.
    pub fn consume_all(mut self) -> Self {
        self.consume = true;
        self
    }

    pub fn record(mut self, events: Rc<RefCell<Vec<UiEvent>>>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn track(mut self, renders: Rc<RefCell<Vec<(Rect, Focus)>>>) -> Self {
        self.renders = Some(renders);
        self
    }

    /// Push `tag` onto `log` when dropped.
    pub fn on_drop(mut self, log: Rc<RefCell<Vec<usize>>>, tag: usize) -> Self {
        self.drops = Some((log, tag));
        self
    }
}

impl Widget for Probe {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn accepts_input(&self) -> bool {
        self.input
    }

    fn render(&self, _canvas: &mut Canvas<'_>, area: Rect, focus: Focus) {
        if let Some(renders) = &self.renders {
            renders.borrow_mut().push((area, focus));
        }
    }

    fn on_event(&mut self, event: UiEvent, _ctx: &mut Context<'_>) -> bool {
        if let Some(events) = &self.events {
            events.borrow_mut().push(event);
        }
        self.consume
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        if let Some((log, tag)) = &self.drops {
            log.borrow_mut().push(*tag);
        }
    }
}

/// Hands out sequential texture ids and remembers what it saw.
#[derive(Debug, Default)]
pub struct RecordingUpload {
    pub uploaded: Vec<(u32, u32)>,
    pub released: Vec<TextureId>,
}

impl TextureUpload for RecordingUpload {
    fn upload(&mut self, image: &RgbaImage) -> TextureId {
        self.uploaded.push(image.dimensions());
        TextureId(self.uploaded.len() as u32)
    }

    fn release(&mut self, id: TextureId) {
        self.released.push(id);
    }
}

/// Scratch directory removed on drop.
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(tag: &str) -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let path = std::env::temp_dir().join(format!(
            "dreamchess-ui-{}-{}-{}",
            tag,
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Platform fed from a script of per-frame input batches.
///
/// The first `poll_input` of a frame takes the next batch; `present` ends
/// the frame. Closes itself after `max_frames` frames.
pub struct ScriptedPlatform {
    script: VecDeque<Vec<RawInput>>,
    current: VecDeque<RawInput>,
    batch_taken: bool,
    pub held: HashSet<Key>,
    pub ticks: u32,
    pub closed: bool,
    pub max_frames: usize,
    /// Text of every presented frame, concatenated.
    pub frames: Vec<String>,
    pub upload: RecordingUpload,
    pub slept: Vec<Duration>,
}

impl ScriptedPlatform {
    pub fn new(script: Vec<Vec<RawInput>>) -> Self {
        Self {
            script: script.into(),
            current: VecDeque::new(),
            batch_taken: false,
            held: HashSet::new(),
            ticks: 0,
            closed: false,
            max_frames: 50,
            frames: Vec::new(),
            upload: RecordingUpload::default(),
            slept: Vec::new(),
        }
    }

    pub fn last_frame(&self) -> &str {
        self.frames.last().map_or("", String::as_str)
    }
}

impl TextureUpload for ScriptedPlatform {
    fn upload(&mut self, image: &RgbaImage) -> TextureId {
        self.upload.upload(image)
    }

    fn release(&mut self, id: TextureId) {
        self.upload.release(id);
    }
}

impl Platform for ScriptedPlatform {
    fn poll_input(&mut self) -> Option<RawInput> {
        if !self.batch_taken {
            self.batch_taken = true;
            self.current.extend(self.script.pop_front().unwrap_or_default());
        }
        self.current.pop_front()
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn ticks(&self) -> u32 {
        self.ticks
    }

    fn present(&mut self, list: &RenderList, _font: &Font) {
        self.frames.push(list.texts().collect());
        self.batch_taken = false;
        self.ticks += 16;
    }

    fn should_close(&self) -> bool {
        self.closed || self.frames.len() >= self.max_frames
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
        self.ticks += duration.as_millis() as u32;
    }
}

#[derive(Debug, Default)]
pub struct RecordingGame {
    pub want_move: bool,
    pub history: MoveHistory,
    pub moves: Vec<Move>,
    pub calls: Vec<&'static str>,
}

impl RecordingGame {
    pub fn wanting_move() -> Self {
        Self {
            want_move: true,
            ..Self::default()
        }
    }
}

impl Game for RecordingGame {
    fn make_move(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    fn retract_move(&mut self) {
        self.calls.push("retract_move");
    }

    fn move_now(&mut self) {
        self.calls.push("move_now");
    }

    fn view_prev(&mut self) {
        self.calls.push("view_prev");
    }

    fn view_next(&mut self) {
        self.calls.push("view_next");
    }

    fn undo(&mut self) {
        self.calls.push("undo");
    }

    fn want_move(&self) -> bool {
        self.want_move
    }

    fn move_history(&self) -> MoveHistory {
        self.history.clone()
    }

    fn quit(&mut self) {
        self.calls.push("quit");
    }
}

#[derive(Debug, Default)]
pub struct RecordingScene {
    pub selector: usize,
    pub renders: usize,
    pub selector_moves: Vec<SelectorMove>,
    pub highlights: Vec<Option<usize>>,
    pub camera: Vec<(f32, f32)>,
}

impl Scene for RecordingScene {
    fn render(&mut self, _board: &Board) {
        self.renders += 1;
    }

    fn move_selector(&mut self, direction: SelectorMove) {
        self.selector_moves.push(direction);
    }

    fn selector(&self) -> usize {
        self.selector
    }

    fn select_piece(&mut self, square: Option<usize>) {
        self.highlights.push(square);
    }

    fn move_camera(&mut self, forward: f32, sideways: f32) {
        self.camera.push((forward, sideways));
    }
}
