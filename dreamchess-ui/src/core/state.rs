//! Menu choices and UI flags shared between callbacks and the driver

use serde::{Deserialize, Serialize};

use crate::driver::PieceKind;

/// Who moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Ui,
    Engine,
}

/// Game types offered on the title screen, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameType {
    #[default]
    HumanVsCpu,
    CpuVsHuman,
    HumanVsHuman,
}

impl GameType {
    pub const LABELS: [&'static str; 3] = ["Human vs. CPU", "CPU vs. Human", "Human vs. Human"];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(GameType::HumanVsCpu),
            1 => Some(GameType::CpuVsHuman),
            2 => Some(GameType::HumanVsHuman),
            _ => None,
        }
    }

    /// Players for white and black.
    pub fn players(self) -> [PlayerKind; 2] {
        match self {
            GameType::HumanVsCpu => [PlayerKind::Ui, PlayerKind::Engine],
            GameType::CpuVsHuman => [PlayerKind::Engine, PlayerKind::Ui],
            GameType::HumanVsHuman => [PlayerKind::Ui, PlayerKind::Ui],
        }
    }

    /// The board is shown from black's side when the engine plays white.
    pub fn flip_board(self) -> bool {
        self == GameType::CpuVsHuman
    }
}

/// Where the title screen is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleStatus {
    #[default]
    Choosing,
    Start,
    Quit,
}

/// Configuration of a new game, handed to the caller of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub cpu_level: u8,
    pub theme: String,
    pub pieces: String,
    pub board: String,
    pub flip_board: bool,
    pub player_name: String,
}

/// State written by widget callbacks and read back by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub game_type: GameType,
    /// 1 to 4.
    pub cpu_level: u8,
    pub theme: usize,
    pub pieces: usize,
    pub board: usize,
    pub player_name: String,
    pub title: TitleStatus,
    /// Set by the quit dialog, consumed by the next poll.
    pub quit_to_menu: bool,
    /// Piece picked in the promotion dialog.
    pub promotion: Option<PieceKind>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            game_type: GameType::default(),
            cpu_level: 1,
            theme: 0,
            pieces: 0,
            board: 0,
            player_name: String::new(),
            title: TitleStatus::default(),
            quit_to_menu: false,
            promotion: None,
        }
    }
}

impl Session {
    /// Forget the previous title screen's choices.
    pub fn reset_title(&mut self) {
        *self = Session::default();
    }

    pub fn flip_board(&self) -> bool {
        self.game_type.flip_board()
    }

    pub fn game_config(&self, theme: &str, pieces: &str, board: &str) -> GameConfig {
        let [white, black] = self.game_type.players();
        GameConfig {
            white,
            black,
            cpu_level: self.cpu_level,
            theme: theme.to_string(),
            pieces: pieces.to_string(),
            board: board.to_string(),
            flip_board: self.flip_board(),
            player_name: self.player_name.clone(),
        }
    }
}
