//! The interaction loop: read commands, drive the session, print results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use scacco_core::{Board, Color, Move, Square};

use crate::command::{Command, HELP, Pointer, parse_command};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::geometry::BoardGeometry;
use crate::render::render;
use crate::session::{ClickOutcome, Session};

/// The presentation shell, owning the game session and its window layout.
///
/// Runs synchronously on the caller's thread; every engine call happens
/// between two input lines, so nothing observes a half-made move.
pub struct Shell {
    session: Session,
    geometry: BoardGeometry,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell with the starting position, White to move.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let geometry = BoardGeometry::new(config.width, config.height)?;
        Ok(Self {
            session: Session::new(),
            geometry,
            config,
        })
    }

    /// The game in progress.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ShellError> {
        info!(width = self.config.width, height = self.config.height, "shell starting");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }

        info!("shell shutting down");
        Ok(())
    }

    /// Execute one parsed command, writing its result to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ShellError> {
        match cmd {
            Command::Click(pointer) => self.handle_click(pointer, out),
            Command::Move(mv) => self.handle_move(mv, out),
            Command::Show => {
                writeln!(out, "{}", render(&self.session, self.config.glyphs))?;
                Ok(())
            }
            Command::Moves(square) => self.handle_moves(square, out),
            Command::Check => {
                for color in Color::ALL {
                    let status = if self.session.in_check(color) {
                        "in check"
                    } else {
                        "not in check"
                    };
                    writeln!(out, "{}: {status}", color.name())?;
                }
                Ok(())
            }
            Command::Turn => {
                writeln!(out, "{} to move", self.session.turn().name())?;
                Ok(())
            }
            Command::NewGame => self.reset(Board::starting_position(), Color::White, out),
            Command::Position { board, turn } => self.reset(board, turn, out),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn handle_click<W: Write>(&mut self, pointer: Pointer, out: &mut W) -> Result<(), ShellError> {
        let square = match pointer {
            Pointer::Square(sq) => sq,
            Pointer::Pixel { x, y } => match self.geometry.square_at(x, y) {
                Some(sq) => sq,
                None => {
                    debug!(x, y, "click outside the board");
                    writeln!(out, "ignored ({x}, {y}): outside the board")?;
                    return Ok(());
                }
            },
        };

        let outcome = self.session.click(square);
        self.report(outcome, out)
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), ShellError> {
        self.session.deselect();
        let outcome = match self.session.click(mv.from) {
            ClickOutcome::Selected(_) => self.session.click(mv.to),
            other => other,
        };
        self.report(outcome, out)
    }

    fn handle_moves<W: Write>(
        &mut self,
        square: Option<Square>,
        out: &mut W,
    ) -> Result<(), ShellError> {
        let (from, destinations) = match square {
            Some(sq) => (sq, self.session.destinations_from(sq)),
            None => match self.session.selection() {
                Some(selection) => (selection.square, selection.destinations),
                None => {
                    writeln!(out, "no selection")?;
                    return Ok(());
                }
            },
        };

        if destinations.is_empty() {
            writeln!(out, "{from}: no legal moves")?;
        } else {
            writeln!(out, "{from}: {destinations}")?;
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> Result<(), ShellError> {
        if let ClickOutcome::Moved { .. } = outcome {
            let turn = self.session.turn();
            writeln!(out, "{outcome}; {} to move", turn.name())?;
            if self.session.in_check(turn) {
                writeln!(out, "{} is in check", turn.name())?;
            }
        } else {
            writeln!(out, "{outcome}")?;
        }
        Ok(())
    }

    fn reset<W: Write>(&mut self, board: Board, turn: Color, out: &mut W) -> Result<(), ShellError> {
        self.session = Session::from_position(board, turn);
        info!(position = %board, turn = turn.name(), "position set");
        writeln!(out, "{} to move", turn.name())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut shell = Shell::new(ShellConfig::default()).unwrap();
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pixel_clicks_drive_a_move() {
        let out = run_script("click 450 650\nclick 450 450\n");
        assert_eq!(out, "selected e2 white pawn: e4 e3\nmoved e2e4; black to move\n");
    }

    #[test]
    fn click_outside_the_window() {
        let out = run_script("click 900 10\n");
        assert_eq!(out, "ignored (900, 10): outside the board\n");
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let out = run_script("castle\nturn\n");
        assert_eq!(out, "error: unknown command: castle\nwhite to move\n");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_script("quit\nturn\n");
        assert_eq!(out, "");
    }

    #[test]
    fn moves_without_selection() {
        let out = run_script("moves\nmoves b1\nmoves e4\n");
        assert_eq!(out, "no selection\nb1: a3 c3\ne4: no legal moves\n");
    }

    #[test]
    fn window_too_small() {
        let config = ShellConfig {
            width: 4,
            ..ShellConfig::default()
        };
        assert!(matches!(
            Shell::new(config),
            Err(ShellError::WindowTooSmall { width: 4, .. })
        ));
    }
}
