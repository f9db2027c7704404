//! Game lifecycle: `InProgress` until a four-in-a-row (`Won`) or, under
//! [`DrawPolicy::Declare`], a saturated board (`BoardFull`).
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, IllegalMove, Player};
use crate::winner::{self, Win};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    InProgress,
    Won(Win),
    BoardFull,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// What a saturated board without a winner means.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DrawPolicy {
    /// Stop with [`Status::BoardFull`].
    #[default]
    Declare,
    /// Stay in progress; every further move is rejected as illegal.
    Ignore,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error("game is already over")]
    GameOver,
}

/// One session: a board plus its terminal bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: Status,
    policy: DrawPolicy,
}

impl Game {
    pub fn new(policy: DrawPolicy) -> Self {
        Self {
            board: Board::new(),
            status: Status::InProgress,
            policy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    pub fn is_legal(&self, column: usize) -> bool {
        !self.status.is_terminal() && self.board.is_legal(column)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.status = Status::InProgress;
    }

    /// Drops a piece for the side to move, re-evaluates the board, and
    /// passes the turn.
    pub fn play(&mut self, column: usize) -> Result<Status, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        let player = self.board.current_player();
        let row = self.board.try_apply_move(column)?;
        debug!(?player, column, row, "move accepted");

        if let Some(win) = winner::find_winning_line(&self.board) {
            info!(player = ?win.player, cells = ?win.cells, "four in a row");
            self.status = Status::Won(win);
        } else if self.board.is_full() && self.policy == DrawPolicy::Declare {
            info!("board full without a winner");
            self.status = Status::BoardFull;
        }
        self.board.toggle_player();
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DrawPolicy::default())
    }
}
