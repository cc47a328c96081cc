//! Line protocol spoken with the game referee
//!
//! ```text
//! START <B|W> <seconds>   -> 1
//! MOVE <64-char board>    -> <move>, e.g. D3
//! STOP                    -> (session ends)
//! PLAY                    -> (session ends)
//! ```
//!
//! The board is 64 characters in raster order: `-` empty, `X` Black,
//! `O` White. Any error ends the session; there is no error reply.

use tracing::{debug, info};

use crate::board::{Board, GameState, Pos, Stone, TOTAL_CELLS};
use crate::engine::AIEngine;
use crate::error::{GameError, Result};
use crate::rules::{has_legal_move, Move};

/// One parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { own_color: Stone, time_budget_secs: u32 },
    Move { board: String },
    Stop,
    /// Accepted but not played; ends the session like `STOP`
    Play,
}

impl Command {
    /// Parse a line; extra trailing tokens are ignored
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("START") => {
                let color = tokens.next().unwrap_or_default();
                let time = tokens.next().unwrap_or_default();
                let state = new_game(color, time)?;
                Ok(Self::Start {
                    own_color: state.own_color,
                    time_budget_secs: state.time_budget_secs,
                })
            }
            Some("MOVE") => Ok(Self::Move {
                board: tokens.next().unwrap_or_default().to_string(),
            }),
            Some("STOP") => Ok(Self::Stop),
            Some("PLAY") => Ok(Self::Play),
            _ => Err(GameError::UnknownCommand(line.trim().to_string())),
        }
    }
}

/// Answer to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// `START` accepted
    Ready,
    Move(Move),
    /// `STOP` received; nothing is printed
    Stop,
}

impl Reply {
    /// Text to write back, if any
    pub fn line(&self) -> Option<String> {
        match self {
            Self::Ready => Some("1".to_string()),
            Self::Move(mov) => Some(mov.serialize()),
            Self::Stop => None,
        }
    }
}

/// Fresh game from the `START` parameters.
///
/// `color` must be `B` or `W`; `time` a whole number of seconds, at least 1.
pub fn new_game(color: &str, time: &str) -> Result<GameState> {
    let own_color = match color {
        "B" => Stone::Black,
        "W" => Stone::White,
        other => return Err(GameError::InvalidColor(other.to_string())),
    };
    let time_budget_secs = time
        .parse::<u32>()
        .ok()
        .filter(|&secs| secs >= 1)
        .ok_or_else(|| GameError::InvalidTimeBudget(time.to_string()))?;
    Ok(GameState::new(own_color, time_budget_secs))
}

/// Parse a 64-character board
pub fn parse_board(text: &str) -> Result<Board> {
    let len = text.chars().count();
    if len != TOTAL_CELLS {
        return Err(GameError::MalformedBoard(format!(
            "expected {TOTAL_CELLS} squares, got {len}"
        )));
    }

    let mut board = Board::empty();
    for (idx, c) in text.chars().enumerate() {
        let stone = Stone::from_symbol(c).ok_or_else(|| {
            GameError::MalformedBoard(format!("unexpected {c:?} at square {idx}"))
        })?;
        board.place_stone(Pos::from_index(idx), stone);
    }
    Ok(board)
}

/// Serialize `board` in the wire format
pub fn serialize_board(board: &Board) -> String {
    Pos::all().map(|pos| board.get(pos).symbol()).collect()
}

/// Replace the board of `state` and recount the discs.
///
/// On error `state` is left as it was.
pub fn load_board(text: &str, state: &mut GameState) -> Result<()> {
    let board = parse_board(text)?;
    state.set_board(board);
    Ok(())
}

/// One referee session: a `START` followed by any number of `MOVE`s.
#[derive(Debug)]
pub struct Session {
    engine: AIEngine,
    state: Option<GameState>,
}

impl Session {
    #[must_use]
    pub fn new(engine: AIEngine) -> Self {
        Self {
            engine,
            state: None,
        }
    }

    /// Game state after the last command, `None` before `START`
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match Command::parse(line)? {
            Command::Start {
                own_color,
                time_budget_secs,
            } => {
                info!(?own_color, time_budget_secs, "game started");
                self.state = Some(GameState::new(own_color, time_budget_secs));
                Ok(Reply::Ready)
            }
            Command::Move { board } => {
                let mut state = self.state.ok_or(GameError::NotStarted)?;
                load_board(&board, &mut state)?;
                if !has_legal_move(&state.board, state.own_color) {
                    return Err(GameError::NoLegalMoves(state.own_color));
                }
                debug!("position to move:\n{}", state.board);

                let result = self.engine.decide_move_with_stats(&state);
                self.state = Some(state);
                Ok(Reply::Move(result.best_move))
            }
            Command::Stop => {
                info!("stop received");
                Ok(Reply::Stop)
            }
            Command::Play => {
                info!("PLAY is not supported, ending session");
                Ok(Reply::Stop)
            }
        }
    }
}
