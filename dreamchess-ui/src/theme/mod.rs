//! Asset loading: font, title screen, theme textures and theme listings

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::driver::{Colour, PieceKind};
use crate::error::AssetError;
use crate::render::{Font, Texture, TextureId, TextureUpload};

/// Size piece images are shown at, whatever the atlas resolution.
pub const PIECE_SIZE: i32 = 64;

/// Cells of a piece atlas row, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiPiece {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
    Avatar,
}

impl GuiPiece {
    pub const ALL: [GuiPiece; 7] = [
        GuiPiece::King,
        GuiPiece::Queen,
        GuiPiece::Rook,
        GuiPiece::Knight,
        GuiPiece::Bishop,
        GuiPiece::Pawn,
        GuiPiece::Avatar,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl From<PieceKind> for GuiPiece {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => GuiPiece::Pawn,
            PieceKind::Knight => GuiPiece::Knight,
            PieceKind::Bishop => GuiPiece::Bishop,
            PieceKind::Rook => GuiPiece::Rook,
            PieceKind::Queen => GuiPiece::Queen,
            PieceKind::King => GuiPiece::King,
        }
    }
}

/// Piece images of one colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceSet([Texture; 7]);

impl PieceSet {
    /// Blank squares, used until a theme has been loaded.
    pub fn placeholder() -> Self {
        Self([Texture::blank(PIECE_SIZE, PIECE_SIZE); 7])
    }

    /// Row `row` of a 7x2 atlas.
    pub fn from_atlas(atlas: &Texture, row: i32) -> Self {
        let cell_w = atlas.width / 7;
        let cell_h = atlas.height / 2;
        Self(std::array::from_fn(|i| {
            atlas
                .region(i as i32 * cell_w, row * cell_h, cell_w, cell_h)
                .sized(PIECE_SIZE, PIECE_SIZE)
        }))
    }

    pub fn get(&self, piece: GuiPiece) -> &Texture {
        &self.0[piece.index()]
    }
}

/// Long-lived assets every screen needs.
#[derive(Debug, Clone)]
pub struct Assets {
    pub font: Font,
    pub title: Texture,
    /// White then black. Placeholders until a theme is loaded.
    pub pieces: [PieceSet; 2],
}

impl Assets {
    /// Loads `font.png`, `font.wid` and `menu_title.png` from `data_dir`.
    pub fn load(upload: &mut dyn TextureUpload, data_dir: &Path) -> Result<Self, AssetError> {
        let font = load_font(upload, data_dir)?;
        let title = load_texture(upload, &data_dir.join("menu_title.png"))?;
        Ok(Self::new(font, title))
    }

    pub fn new(font: Font, title: Texture) -> Self {
        Self {
            font,
            title,
            pieces: [PieceSet::placeholder(); 2],
        }
    }

    pub fn pieces(&self, colour: Colour) -> &PieceSet {
        &self.pieces[colour.index()]
    }
}

/// Decodes a PNG and uploads it.
pub fn load_texture(upload: &mut dyn TextureUpload, path: &Path) -> Result<Texture, AssetError> {
    let image = image::open(path)
        .map_err(|source| AssetError::Texture {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let id = upload.upload(&image);
    debug!(path = %path.display(), width, height, "texture loaded");
    Ok(Texture::full(id, width as i32, height as i32))
}

/// Reads the glyph atlas and its 256-byte width table.
pub fn load_font(upload: &mut dyn TextureUpload, data_dir: &Path) -> Result<Font, AssetError> {
    let atlas = load_texture(upload, &data_dir.join("font.png"))?;
    let path = data_dir.join("font.wid");
    let bytes = fs::read(&path).map_err(|source| AssetError::FontWidths {
        path: path.clone(),
        source,
    })?;
    let widths: &[u8; 256] = bytes
        .get(..256)
        .and_then(|b| b.try_into().ok())
        .ok_or(AssetError::FontWidthsTruncated { path, len: bytes.len() })?;
    Ok(Font::from_atlas(atlas, widths))
}

/// Textures of the theme in use.
#[derive(Debug, Clone)]
pub struct ThemeTextures {
    pub backdrop: Texture,
    pub board: Texture,
    pub pieces: [PieceSet; 2],
    ids: Vec<TextureId>,
}

impl ThemeTextures {
    /// Loads `themes/<name>/{backdrop,board,pieces}.png`.
    pub fn load(upload: &mut dyn TextureUpload, data_dir: &Path, name: &str) -> Result<Self, AssetError> {
        let dir = data_dir.join("themes").join(name);
        info!(theme = name, "loading theme");
        let backdrop = load_texture(upload, &dir.join("backdrop.png"))?;
        let board = load_texture(upload, &dir.join("board.png"))?;
        let atlas = load_texture(upload, &dir.join("pieces.png"))?;
        Ok(Self {
            backdrop,
            board,
            pieces: [PieceSet::from_atlas(&atlas, 0), PieceSet::from_atlas(&atlas, 1)],
            ids: vec![backdrop.id, board.id, atlas.id],
        })
    }

    pub fn release(self, upload: &mut dyn TextureUpload) {
        for id in self.ids {
            upload.release(id);
        }
    }
}

/// Names offered on the title screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeList {
    pub themes: Vec<String>,
    pub pieces: Vec<String>,
    pub boards: Vec<String>,
}

impl ThemeList {
    /// Lists `themes/`, `pieces/` and `boards/`. Only `themes/` is required.
    pub fn scan(data_dir: &Path) -> Result<Self, AssetError> {
        let themes = list_dir(&data_dir.join("themes"))?;
        if themes.is_empty() {
            return Err(AssetError::Missing {
                kind: "themes",
                path: data_dir.join("themes"),
            });
        }
        let optional = |name: &str| {
            list_dir(&data_dir.join(name)).unwrap_or_else(|e| {
                warn!(%e, "skipping {name} listing");
                Vec::new()
            })
        };
        Ok(Self {
            themes,
            pieces: optional("pieces"),
            boards: optional("boards"),
        })
    }

    pub fn theme(&self, index: usize) -> Option<&str> {
        self.themes.get(index).map(String::as_str)
    }

    pub fn piece_set(&self, index: usize) -> Option<&str> {
        self.pieces.get(index).map(String::as_str)
    }

    pub fn board(&self, index: usize) -> Option<&str> {
        self.boards.get(index).map(String::as_str)
    }
}

/// Sorted names of the entries in `path`, skipping dot-entries.
fn list_dir(path: &Path) -> Result<Vec<String>, AssetError> {
    let listing_error = |source| AssetError::Listing {
        path: PathBuf::from(path),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(listing_error)? {
        let name = entry.map_err(listing_error)?.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
