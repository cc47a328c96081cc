//! Board representation for Othello

pub mod bitboard;
pub mod board;
pub mod state;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use state::GameState;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The four corner squares, in raster order
pub const CORNERS: [Pos; 4] = [
    Pos { row: 0, col: 0 },
    Pos { row: 0, col: 7 },
    Pos { row: 7, col: 0 },
    Pos { row: 7, col: 7 },
];

/// Cell contents / disc colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Serialization symbol: `X` for Black, `O` for White, `-` for empty
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '-',
        }
    }

    #[inline]
    pub fn from_symbol(c: char) -> Option<Stone> {
        match c {
            'X' => Some(Stone::Black),
            'O' => Some(Stone::White),
            '-' => Some(Stone::Empty),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Position `steps` units along `dir`, if it exists on the board
    #[inline]
    pub fn step(self, dir: Direction, steps: i32) -> Option<Pos> {
        let r = i32::from(self.row) + i32::from(dir.dr) * steps;
        let c = i32::from(self.col) + i32::from(dir.dc) * steps;
        if !Pos::is_valid(r, c) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r, c) = (r as u8, c as u8);
        Some(Pos::new(r, c))
    }

    /// All 64 positions in raster order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Up to 8 existing King-move neighbors, in raster order of the 3x3 window
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        DIRECTIONS.into_iter().filter_map(move |d| self.step(d, 1))
    }

    /// Two-character coordinate: column letter then row digit (e.g. `D3`)
    pub fn to_coord(self) -> String {
        let file = char::from(b'A' + self.col);
        let rank = char::from(b'1' + self.row);
        format!("{file}{rank}")
    }

    /// Inverse of [`to_coord`](Self::to_coord); `None` unless exactly `A1`..`H8`
    pub fn from_coord(text: &str) -> Option<Pos> {
        let mut chars = text.chars();
        let (file, rank) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        let col = u32::from(file).checked_sub(u32::from('A'))?;
        let row = u32::from(rank).checked_sub(u32::from('1'))?;
        if col >= BOARD_SIZE as u32 || row >= BOARD_SIZE as u32 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let pos = Pos::new(row as u8, col as u8);
        Some(pos)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Unit step between two adjacent squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// Vector `to - from`; used to project a ray from `from` through `to`
    #[inline]
    pub fn between(from: Pos, to: Pos) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let (dr, dc) = (
            to.row as i8 - from.row as i8,
            to.col as i8 - from.col as i8,
        );
        Self { dr, dc }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}

/// The 8 directions in raster order over the 3x3 window, center excluded.
/// The index of each entry is the neighbor-ring slot used by stability patterns.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];
