//! The UI driver: title menu, gameplay frames and the game-facing entry points

mod board;
mod credits;
mod frame;
mod game;
mod hud;
mod selection;

pub use board::*;
pub use credits::*;
pub use frame::*;
pub use game::*;
pub use hud::MOVE_LIST_LEN;
pub use selection::*;

use tracing::{debug, info, warn};

use crate::app::Platform;
use crate::config::UiConfig;
use crate::core::context::Color;
use crate::core::{GameConfig, Key, Session, TitleStatus, UiEvent};
use crate::dialog::{Dialog, DialogPosition, DialogStack, DialogStyle};
use crate::error::AssetError;
use crate::input::{camera_motion, convert, dispatch_to_dialogs, BoardCommand};
use crate::menus;
use crate::render::{Canvas, RenderList, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::theme::{Assets, PieceSet, ThemeList, ThemeTextures};

/// Owns the dialog stack and everything drawn in 2D.
pub struct UiDriver<P: Platform> {
    platform: P,
    config: UiConfig,
    assets: Assets,
    themes: ThemeList,
    theme: Option<ThemeTextures>,
    stack: DialogStack,
    session: Session,
    board: Board,
    in_check: Option<Colour>,
    flip_board: bool,
    selection: Selection,
    /// Only the first title screen waits for a key press.
    wait_for_key: bool,
    credits: Credits,
    show_fps: bool,
    fps: FpsCounter,
    limiter: FrameLimiter,
    list: RenderList,
}

impl<P: Platform> UiDriver<P> {
    /// Loads the font, the title image and the theme listings from the
    /// configured data directory.
    pub fn init(mut platform: P, config: UiConfig) -> Result<Self, AssetError> {
        let assets = Assets::load(&mut platform, &config.data_dir)?;
        let themes = ThemeList::scan(&config.data_dir)?;
        info!(
            data_dir = %config.data_dir.display(),
            themes = themes.themes.len(),
            "ui initialised"
        );
        Ok(Self::with_assets(platform, config, assets, themes))
    }

    pub fn with_assets(platform: P, config: UiConfig, assets: Assets, themes: ThemeList) -> Self {
        let now = platform.ticks();
        Self {
            show_fps: config.show_fps,
            limiter: FrameLimiter::new(config.fps_cap, now),
            fps: FpsCounter::new(now),
            platform,
            config,
            assets,
            themes,
            theme: None,
            stack: DialogStack::new(),
            session: Session::default(),
            board: Board::default(),
            in_check: None,
            flip_board: false,
            selection: Selection::default(),
            wait_for_key: true,
            credits: Credits::new(CREDITS, now),
            list: RenderList::new(),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn dialogs(&self) -> &DialogStack {
        &self.stack
    }

    /// Frees every texture and hands the platform back.
    pub fn shutdown(mut self) -> P {
        self.unload_theme();
        self.platform.release(self.assets.title.id);
        self.platform.release(self.assets.font.glyph('a').id);
        debug!("ui shut down");
        self.platform
    }

    /// Runs the title screen until a game is started. `None` means the user
    /// quit or closed the window.
    pub fn menu(&mut self) -> Result<Option<GameConfig>, AssetError> {
        self.session.reset_title();
        self.in_check = None;
        self.selection.reset();
        self.credits.reset(self.platform.ticks());
        let dialog = menus::title(&self.assets.font, &self.themes);
        self.open_dialog(dialog);

        loop {
            self.stack.cleanup();
            while let Some(raw) = self.platform.poll_input() {
                if self.wait_for_key {
                    if raw.is_press() {
                        self.wait_for_key = false;
                    }
                } else {
                    dispatch_to_dialogs(&mut self.stack, convert(&raw), &self.assets, &mut self.session);
                }
                if raw.is_key(Key::F) {
                    self.toggle_fps();
                    continue;
                }
                if self.session.title == TitleStatus::Quit {
                    info!("quit from title screen");
                    return Ok(None);
                }
            }
            if self.platform.should_close() {
                self.close_all();
                return Ok(None);
            }

            self.list.clear();
            let ticks = self.platform.ticks();
            let mut canvas = Canvas::new(&mut self.list, &self.assets.font, ticks);
            canvas.texture(
                &self.assets.title,
                0.0,
                0.0,
                SCREEN_WIDTH as f32,
                SCREEN_HEIGHT as f32,
                Color::new(1.0, 1.0, 1.0, 0.95),
            );
            if self.session.title == TitleStatus::Start {
                canvas.text(390, 30, "Loading...", 3.0, Color::WHITE);
                self.present();
                return self.start_game().map(Some);
            }
            self.credits.draw(&mut canvas);
            if self.wait_for_key {
                canvas.text_bouncy(140, 30, "Press any key or button to start", 1.5, Color::WHITE);
            } else {
                self.stack.render(&mut canvas, &DialogStyle::TITLE, &DialogPosition::TITLE);
            }
            self.present();
        }
    }

    fn start_game(&mut self) -> Result<GameConfig, AssetError> {
        let theme = self.themes.theme(self.session.theme).ok_or_else(|| AssetError::Missing {
            kind: "theme",
            path: self.config.data_dir.join("themes"),
        })?;
        let pieces = self.themes.piece_set(self.session.pieces).unwrap_or_default();
        let board = self.themes.board(self.session.board).unwrap_or_default();
        let config = self.session.game_config(theme, pieces, board);

        self.unload_theme();
        let textures = ThemeTextures::load(&mut self.platform, &self.config.data_dir, &config.theme)?;
        self.assets.pieces = textures.pieces;
        self.theme = Some(textures);
        self.flip_board = config.flip_board;
        info!(?config, "starting game");
        Ok(config)
    }

    fn unload_theme(&mut self) {
        if let Some(theme) = self.theme.take() {
            debug!("unloading theme");
            theme.release(&mut self.platform);
            self.assets.pieces = [PieceSet::placeholder(); 2];
        }
    }

    /// Takes the position the game is now in.
    pub fn update(&mut self, board: &Board, last_move: Option<&Move>) {
        if let Some(mv) = last_move {
            debug!(source = mv.source, destination = mv.destination, "board updated");
        }
        self.board = board.clone();
        self.in_check = (board.state == BoardState::Check).then_some(board.turn);
    }

    /// One gameplay frame: draw, then handle input and square selection.
    pub fn poll(&mut self, game: &mut dyn Game, scene: &mut dyn Scene) {
        self.draw_scene(&*game, scene);

        if self.session.quit_to_menu {
            info!("leaving game for title screen");
            self.session.quit_to_menu = false;
            self.selection.reset();
            self.unload_theme();
            game.quit();
            return;
        }

        let picked = self.read_input(game, scene);
        let step = self.selection.step(
            picked,
            &self.board,
            self.flip_board,
            game.want_move(),
            self.session.promotion,
        );
        match step {
            SelectionStep::Idle => {}
            SelectionStep::ClearHighlight => scene.select_piece(None),
            SelectionStep::AskPromotion(colour) => {
                self.session.promotion = None;
                let dialog = menus::promote(&self.assets.font, self.assets.pieces(colour));
                self.open_dialog(dialog);
            }
            SelectionStep::Move(mv) => {
                debug!(?mv, "move entered");
                game.make_move(mv);
            }
        }
    }

    pub fn show_message(&mut self, msg: &str) {
        let dialog = menus::message(&self.assets.font, msg);
        self.open_dialog(dialog);
    }

    pub fn show_result(&mut self, result: &GameResult) {
        let dialog = menus::victory(&self.assets.font, &self.assets, result);
        self.open_dialog(dialog);
    }

    fn draw_scene(&mut self, game: &dyn Game, scene: &mut dyn Scene) {
        self.stack.cleanup();
        self.list.clear();
        let history = game.move_history();
        let ticks = self.platform.ticks();

        let mut canvas = Canvas::new(&mut self.list, &self.assets.font, ticks);
        if let Some(theme) = &self.theme {
            hud::draw_backdrop(&mut canvas, &theme.backdrop);
        }
        hud::draw_move_list(&mut canvas, &history, Color::WHITE, Color::YELLOW);
        hud::draw_capture_list(&mut canvas, &self.board, Color::WHITE);
        hud::draw_name_plates(&mut canvas, &self.assets);
        hud::draw_check(&mut canvas, self.in_check);

        scene.render(&self.board);

        self.stack.render(&mut canvas, &DialogStyle::INGAME, &DialogPosition::INGAME);
        self.present();
    }

    /// Drains this frame's input. Returns the square picked on the board, if any.
    fn read_input(&mut self, game: &mut dyn Game, scene: &mut dyn Scene) -> Option<usize> {
        let platform = &self.platform;
        if let Some((forward, sideways)) = camera_motion(|key| platform.is_held(key), self.fps.fps()) {
            if forward != 0.0 || sideways != 0.0 {
                scene.move_camera(forward, sideways);
            }
            while self.platform.poll_input().is_some() {}
            return None;
        }

        let mut picked = None;
        while let Some(raw) = self.platform.poll_input() {
            let event = convert(&raw);
            if event == UiEvent::None {
                continue;
            }
            if !self.stack.is_empty() {
                let commands = dispatch_to_dialogs(&mut self.stack, event, &self.assets, &mut self.session);
                for command in commands {
                    debug!(?command, "game command");
                    command.apply(game);
                }
                continue;
            }
            let Some(command) = BoardCommand::from_event(event) else {
                continue;
            };
            match command {
                BoardCommand::Selector(direction) => scene.move_selector(direction),
                BoardCommand::Select => {
                    let square = scene.selector();
                    scene.select_piece(Some(square));
                    picked = Some(square);
                }
                BoardCommand::SystemMenu => {
                    let dialog = menus::system(&self.assets.font);
                    self.open_dialog(dialog);
                }
                BoardCommand::GameMenu => {
                    let dialog = menus::ingame(&self.assets.font);
                    self.open_dialog(dialog);
                }
                BoardCommand::ViewPrev => game.view_prev(),
                BoardCommand::ViewNext => game.view_next(),
                BoardCommand::Undo => game.undo(),
                BoardCommand::ToggleFps => self.toggle_fps(),
            }
        }
        picked
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        if let Err(e) = self.stack.open(dialog) {
            warn!(%e, "dialog not opened");
        }
    }

    fn close_all(&mut self) {
        while self.stack.close().is_ok() {}
    }

    fn toggle_fps(&mut self) {
        self.show_fps = !self.show_fps;
        debug!(show_fps = self.show_fps, "fps counter toggled");
    }

    /// Finishes the frame in `self.list`: FPS overlay, present, pacing.
    fn present(&mut self) {
        if self.show_fps {
            let ticks = self.platform.ticks();
            self.fps.draw(&mut Canvas::new(&mut self.list, &self.assets.font, ticks));
        }
        self.platform.present(&self.list, &self.assets.font);

        if let Some(wait) = self.limiter.remaining(self.platform.ticks()) {
            self.platform.sleep(wait);
        }
        let now = self.platform.ticks();
        self.limiter.reset(now);
        self.fps.frame(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawInput;
    use crate::testing::{self, RecordingGame, RecordingScene, ScriptedPlatform, TempDir};
    use image::RgbaImage;
    use std::time::Duration;

    fn driver(script: Vec<Vec<RawInput>>) -> UiDriver<ScriptedPlatform> {
        let themes = ThemeList {
            themes: vec!["classic".into()],
            ..ThemeList::default()
        };
        UiDriver::with_assets(ScriptedPlatform::new(script), UiConfig::default(), testing::assets(), themes)
    }

    fn key(key: Key) -> RawInput {
        RawInput::key(key)
    }

    fn white_pawn_at(square: usize) -> Board {
        let mut board = Board::default();
        board.squares[square] = Some(Piece::new(PieceKind::Pawn, Colour::White));
        board
    }

    fn theme_dir() -> TempDir {
        let dir = TempDir::new("driver");
        let theme = dir.path().join("themes").join("classic");
        std::fs::create_dir_all(&theme).unwrap();
        RgbaImage::new(64, 64).save(theme.join("backdrop.png")).unwrap();
        RgbaImage::new(64, 64).save(theme.join("board.png")).unwrap();
        RgbaImage::new(448, 128).save(theme.join("pieces.png")).unwrap();
        dir
    }

    #[test]
    fn test_menu_start_loads_theme() {
        let dir = theme_dir();
        let config = UiConfig {
            data_dir: dir.path().to_path_buf(),
            ..UiConfig::default()
        };
        let themes = ThemeList::scan(dir.path()).unwrap();
        let script = vec![vec![], vec![key(Key::A)], vec![key(Key::Enter)]];
        let mut driver =
            UiDriver::with_assets(ScriptedPlatform::new(script), config, testing::assets(), themes);

        let game = driver.menu().unwrap().unwrap();
        assert_eq!(game.theme, "classic");
        assert_eq!(game.cpu_level, 1);
        assert!(!game.flip_board);

        let frames = &driver.platform().frames;
        assert_eq!(frames.len(), 3);
        assert!(frames[0].contains("Press any key or button to start"));
        assert!(frames[1].contains("Start Game"));
        assert!(frames[2].contains("Loading..."));
        assert_eq!(driver.platform().upload.uploaded.len(), 3);

        let platform = driver.shutdown();
        assert_eq!(platform.upload.released.len(), 5);
    }

    #[test]
    fn test_menu_quit() {
        let mut events = vec![key(Key::Down); 4];
        events.push(key(Key::Enter));
        let mut driver = driver(vec![vec![key(Key::A)], events]);
        assert_eq!(driver.menu().unwrap(), None);
        assert!(driver.dialogs().is_empty());
    }

    #[test]
    fn test_menu_toggles_fps_and_closes_with_window() {
        let mut driver = driver(vec![vec![key(Key::A), key(Key::F)]]);
        driver.platform_mut().max_frames = 2;
        assert_eq!(driver.menu().unwrap(), None);
        assert!(driver.platform().last_frame().contains("FPS: "));
        assert!(driver.dialogs().is_empty());
    }

    #[test]
    fn test_menu_rolls_credits() {
        let mut driver = driver(vec![]);
        driver.platform_mut().max_frames = 70;
        assert_eq!(driver.menu().unwrap(), None);
        let frames = &driver.platform().frames;
        assert!(frames[0].contains(CREDITS[0].caption));
        assert!(frames.iter().any(|f| f.contains(CREDITS[0].items[0])));
        assert!(frames.iter().all(|f| !f.contains(CREDITS[1].caption)));
    }

    #[test]
    fn test_window_closed_before_menu() {
        let mut driver = driver(vec![]);
        driver.platform_mut().closed = true;
        assert_eq!(driver.menu().unwrap(), None);
        assert!(driver.platform().frames.is_empty());
    }

    #[test]
    fn test_move_entry() {
        let mut driver = driver(vec![vec![key(Key::Enter)], vec![key(Key::Enter)], vec![]]);
        driver.update(&white_pawn_at(12), None);
        let mut game = RecordingGame::wanting_move();
        let mut scene = RecordingScene {
            selector: 12,
            ..RecordingScene::default()
        };

        driver.poll(&mut game, &mut scene);
        scene.selector = 28;
        driver.poll(&mut game, &mut scene);
        assert!(game.moves.is_empty());
        driver.poll(&mut game, &mut scene);

        assert_eq!(scene.highlights, vec![Some(12), Some(28), None]);
        assert_eq!(game.moves, vec![Move { source: 12, destination: 28, promotion: None }]);
        assert_eq!(scene.renders, 3);
    }

    #[test]
    fn test_promotion_dialog() {
        let script = vec![vec![key(Key::Enter)], vec![key(Key::Enter)], vec![], vec![key(Key::Right), key(Key::Enter)]];
        let mut driver = driver(script);
        driver.update(&white_pawn_at(52), None);
        let mut game = RecordingGame::wanting_move();
        let mut scene = RecordingScene {
            selector: 52,
            ..RecordingScene::default()
        };

        driver.poll(&mut game, &mut scene);
        scene.selector = 60;
        driver.poll(&mut game, &mut scene);
        driver.poll(&mut game, &mut scene);
        assert_eq!(driver.dialogs().depth(), 1);

        driver.poll(&mut game, &mut scene);
        assert!(driver.dialogs().is_empty());
        assert_eq!(
            game.moves,
            vec![Move { source: 52, destination: 60, promotion: Some(PieceKind::Rook) }]
        );
    }

    #[test]
    fn test_ingame_dialog_commands() {
        let script = vec![vec![key(Key::G)], vec![key(Key::Down), key(Key::Enter)], vec![key(Key::Escape)], vec![]];
        let mut driver = driver(script);
        let mut game = RecordingGame::wanting_move();
        let mut scene = RecordingScene::default();

        driver.poll(&mut game, &mut scene);
        assert_eq!(driver.dialogs().depth(), 1);
        driver.poll(&mut game, &mut scene);
        assert!(driver.platform().last_frame().contains("Retract Move"));
        assert_eq!(game.calls, vec!["move_now"]);
        driver.poll(&mut game, &mut scene);
        assert!(driver.dialogs().is_empty());
        driver.poll(&mut game, &mut scene);
        assert!(!driver.platform().last_frame().contains("Retract Move"));
    }

    #[test]
    fn test_board_shortcuts() {
        let script = vec![vec![key(Key::Left), key(Key::P), key(Key::N), key(Key::U), key(Key::Num1)]];
        let mut driver = driver(script);
        let mut game = RecordingGame::default();
        let mut scene = RecordingScene::default();
        driver.poll(&mut game, &mut scene);
        assert_eq!(scene.selector_moves, vec![SelectorMove::Left]);
        assert_eq!(game.calls, vec!["view_prev", "view_next", "undo"]);
    }

    #[test]
    fn test_quit_to_menu() {
        let script = vec![
            vec![key(Key::Escape)],
            vec![key(Key::Down), key(Key::Enter)],
            vec![key(Key::Enter)],
            vec![],
        ];
        let mut driver = driver(script);
        let mut game = RecordingGame::wanting_move();
        let mut scene = RecordingScene::default();

        for _ in 0..3 {
            driver.poll(&mut game, &mut scene);
        }
        assert!(driver.dialogs().is_empty());
        assert!(game.calls.is_empty());

        driver.poll(&mut game, &mut scene);
        assert_eq!(game.calls, vec!["quit"]);
        assert_eq!(driver.dialogs().pending(), 0);
    }

    #[test]
    fn test_camera_modifier_swallows_input() {
        let mut driver = driver(vec![vec![key(Key::Enter), key(Key::G)]]);
        driver.platform_mut().held.extend([Key::Control, Key::Up]);
        let mut game = RecordingGame::wanting_move();
        let mut scene = RecordingScene::default();

        driver.poll(&mut game, &mut scene);
        assert_eq!(scene.camera.len(), 1);
        assert!((scene.camera[0].0 - 0.6).abs() < 1e-5);
        assert_eq!(scene.camera[0].1, 0.0);
        assert!(scene.highlights.is_empty());
        assert!(driver.dialogs().is_empty());
    }

    #[test]
    fn test_check_banner_and_hud() {
        let mut driver = driver(vec![]);
        let mut board = white_pawn_at(12);
        board.turn = Colour::Black;
        board.state = BoardState::Check;
        driver.update(&board, None);

        let mut game = RecordingGame {
            history: MoveHistory {
                moves: vec!["e4".into()],
                view: Some(0),
            },
            ..RecordingGame::default()
        };
        let mut scene = RecordingScene::default();
        driver.poll(&mut game, &mut scene);
        let frame = driver.platform().last_frame();
        assert!(frame.contains("Black is in check!"));
        assert!(frame.contains("1.e4"));

        board.state = BoardState::Normal;
        driver.update(&board, None);
        driver.poll(&mut game, &mut scene);
        assert!(!driver.platform().last_frame().contains("in check"));
    }

    #[test]
    fn test_engine_message_and_result() {
        let mut driver = driver(vec![vec![], vec![key(Key::Enter)]]);
        let mut game = RecordingGame::default();
        let mut scene = RecordingScene::default();

        driver.show_message("Engine not found");
        driver.poll(&mut game, &mut scene);
        assert!(driver.platform().last_frame().contains("Important message from engine"));
        driver.poll(&mut game, &mut scene);
        assert!(driver.dialogs().is_empty());

        driver.show_result(&GameResult {
            code: ResultCode::Draw,
            reason: "Stalemate".to_string(),
        });
        assert!(driver.dialogs().current().unwrap().is_modal());
    }

    #[test]
    fn test_frame_cap_sleeps() {
        let config = UiConfig {
            fps_cap: 50,
            ..UiConfig::default()
        };
        let platform = ScriptedPlatform::new(vec![]);
        let mut driver = UiDriver::with_assets(platform, config, testing::assets(), ThemeList::default());
        let mut game = RecordingGame::default();
        let mut scene = RecordingScene::default();
        driver.poll(&mut game, &mut scene);
        driver.poll(&mut game, &mut scene);
        assert_eq!(driver.platform().slept, vec![Duration::from_millis(4); 2]);
    }
}
