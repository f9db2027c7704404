//! Connect 4 rules engine.
//! A [`Board`] is an owned value: the driver creates it, feeds it 1-based
//! column moves and asks it for a winner. [`Game`] wraps a board with the
//! turn/terminal bookkeeping a play loop needs.
mod board;
mod game;
mod winner;

pub use board::{Board, Cell, IllegalMove, Player, HEIGHT, WIDTH};
pub use game::{DrawPolicy, Game, GameError, Status};
pub use winner::{find_winner, find_winning_line, Win};
