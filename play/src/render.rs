use std::io::{self, Write};

use connect4::{Board, Player, HEIGHT, WIDTH};

/// Draws the grid top row first, then the floor and the 1-based column labels.
pub fn render<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for row in (0..HEIGHT).rev() {
        write!(out, "|")?;
        for col in 0..WIDTH {
            let marker = board.cell_at(col, row).owner().map_or(' ', Player::marker);
            write!(out, "{marker}|")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}=", "==".repeat(WIDTH))?;

    write!(out, " ")?;
    for col in 1..=WIDTH {
        write!(out, "{col} ")?;
    }
    writeln!(out)
}
