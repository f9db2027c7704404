use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use connect4::{DrawPolicy, Game, Status, Win};
use tracing::{debug, trace};

use crate::render::render;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Finish {
    Won(Win),
    Draw,
    /// Input ran out before the game ended.
    Quit,
}

/// Plays one session from `input` to `output` until a terminal status or
/// end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    policy: DrawPolicy,
) -> Result<Finish> {
    let mut game = Game::new(policy);
    render(game.board(), &mut output).context("failed to draw board")?;

    loop {
        let Some(column) = read_move(&game, &mut input, &mut output)? else {
            debug!("input closed, quitting");
            return Ok(Finish::Quit);
        };
        let status = game.play(column)?;
        render(game.board(), &mut output).context("failed to draw board")?;

        match status {
            Status::InProgress => {}
            Status::Won(win) => {
                writeln!(output, "\nWinner = {}", win.player.marker())?;
                return Ok(Finish::Won(win));
            }
            Status::BoardFull => {
                writeln!(output, "\nDraw")?;
                return Ok(Finish::Draw);
            }
        }
    }
}

/// Prompts until a legal column is entered. `None` once input is exhausted.
fn read_move<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>> {
    let mut column = 0;
    let mut line = Vec::new();
    while !game.is_legal(column) {
        write!(
            output,
            "\nMove {} (Control-D to quit): ",
            game.current_player().marker()
        )?;
        output.flush()?;

        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("failed to read move")?;
        if read == 0 {
            return Ok(None);
        }
        column = parse_column(&line);
        let entered = String::from_utf8_lossy(&line);
        trace!(input = entered.trim_end(), column, "move entered");
    }
    Ok(Some(column))
}

/// Leading-integer parse over raw bytes: junk after the digits is ignored
/// and anything that does not start with a non-negative number becomes the
/// illegal column 0.
fn parse_column(line: &[u8]) -> usize {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let rest = &line[start..];
    let rest = rest.strip_prefix(b"+").unwrap_or(rest);
    rest.iter()
        .take_while(|b| b.is_ascii_digit())
        .try_fold(0usize, |acc, &b| {
            acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
        })
        .unwrap_or(0)
}
