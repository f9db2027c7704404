//! Four-in-a-row detection.
//!
//! Candidate lines are anchored only on rows `0..=HEIGHT-4` and always run
//! upward (or sideways), so no bounds checks are needed while scanning.
//! Horizontal, vertical and rising lines start in columns `0..=WIDTH-4`,
//! falling ones in `3..WIDTH`; anything outside those anchors is not a win.
//! The order the lines are tried in decides which win is reported when a board
//! holds more than one, and must stay stable.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player, HEIGHT, WIDTH};

const RUN: usize = 4;

/// Column/row step of a scan direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Step(isize, isize);

const HORIZONTAL: Step = Step(1, 0);
const VERTICAL: Step = Step(0, 1);
const RISING: Step = Step(1, 1);
const FALLING: Step = Step(-1, 1);

/// A completed four-in-a-row. `cells` are 0-based `(column, row)` pairs
/// starting at the anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub cells: [(usize, usize); RUN],
}

type Line = [(usize, usize); RUN];

/// Every candidate line in reporting order.
static LINES: Lazy<Vec<Line>> = Lazy::new(generate_lines);

fn generate_lines() -> Vec<Line> {
    let mut lines = Vec::new();
    for row in 0..=HEIGHT - RUN {
        for col in 0..=WIDTH - RUN {
            for step in [HORIZONTAL, VERTICAL, RISING] {
                lines.push(line_from(col, row, step));
            }
        }
        for col in RUN - 1..WIDTH {
            lines.push(line_from(col, row, FALLING));
        }
    }
    lines
}

fn line_from(col: usize, row: usize, Step(dc, dr): Step) -> Line {
    let mut line = [(col, row); RUN];
    for (offset, cell) in line.iter_mut().enumerate() {
        let offset = offset as isize;
        *cell = (
            (col as isize + dc * offset) as usize,
            (row as isize + dr * offset) as usize,
        );
    }
    line
}

/// First four-in-a-row in scan order, with its cells.
pub fn find_winning_line(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|line| {
        let (col, row) = line[0];
        let player = board.cell_at(col, row).owner()?;
        line[1..]
            .iter()
            .all(|&(c, r)| board.cell_at(c, r) == Cell::Taken(player))
            .then_some(Win {
                player,
                cells: *line,
            })
    })
}

pub fn find_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|win| win.player)
}
