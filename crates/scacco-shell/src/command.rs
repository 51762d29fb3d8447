//! Shell command parsing.

use scacco_core::{Board, Color, Move, Square};

use crate::error::ShellError;

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// Pixel coordinates inside the virtual window.
    Pixel { x: u32, y: u32 },
    /// A square named directly.
    Square(Square),
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `click <x> <y>` | `click <square>` | `<square>` -- pointer input.
    Click(Pointer),
    /// `move <from><to>` -- shorthand for two clicks.
    Move(Move),
    /// `show` | `d` -- render the board.
    Show,
    /// `moves [<square>]` -- legal destinations of the selection or a square.
    Moves(Option<Square>),
    /// `check` -- report which kings are attacked.
    Check,
    /// `turn` -- report the side to move.
    Turn,
    /// `new` -- reset to the starting position.
    NewGame,
    /// `position startpos | position <placement> [w|b]` -- set up a position.
    Position { board: Board, turn: Color },
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the shell.
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  click <x> <y>         click at pixel coordinates
  click <square> | <square>
                        click a square, e.g. e2
  move <from><to>       click two squares, e.g. move e2e4
  show | d              draw the board
  moves [<square>]      legal destinations of the selection or a square
  check                 report kings in check
  turn                  report the side to move
  new                   start a new game
  position startpos | position <placement> [w|b]
                        set up a position
  help                  this text
  quit                  exit";

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Err(ShellError::UnknownCommand {
            command: String::new(),
        });
    };

    match head {
        "click" => parse_click(args),
        "move" => parse_move(args),
        "show" | "d" => Ok(Command::Show),
        "moves" => match args.first() {
            Some(arg) => Ok(Command::Moves(Some(parse_square(arg)?))),
            None => Ok(Command::Moves(None)),
        },
        "check" => Ok(Command::Check),
        "turn" => Ok(Command::Turn),
        "new" => Ok(Command::NewGame),
        "position" => parse_position(args),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => match Square::from_algebraic(other) {
            Some(sq) => Ok(Command::Click(Pointer::Square(sq))),
            None => Err(ShellError::UnknownCommand {
                command: other.to_string(),
            }),
        },
    }
}

/// Parse `click` arguments: either one square or two pixel coordinates.
fn parse_click(args: &[&str]) -> Result<Command, ShellError> {
    match args {
        [] => Err(ShellError::MissingArgument {
            command: "click",
            argument: "square or pixel coordinates",
        }),
        [square] => Ok(Command::Click(Pointer::Square(parse_square(square)?))),
        [x, y, ..] => Ok(Command::Click(Pointer::Pixel {
            x: parse_pixel(x)?,
            y: parse_pixel(y)?,
        })),
    }
}

fn parse_move(args: &[&str]) -> Result<Command, ShellError> {
    let text = args.first().ok_or(ShellError::MissingArgument {
        command: "move",
        argument: "move in coordinate notation",
    })?;
    let mv = Move::from_coordinate(text).ok_or_else(|| ShellError::InvalidMove {
        value: text.to_string(),
    })?;
    Ok(Command::Move(mv))
}

/// Parse `position` arguments.
///
/// Supports:
/// - `position startpos`
/// - `position <placement> [w|b]` (White moves when the color is omitted)
fn parse_position(args: &[&str]) -> Result<Command, ShellError> {
    let (&first, rest) = args.split_first().ok_or(ShellError::MissingArgument {
        command: "position",
        argument: "startpos or a placement string",
    })?;

    if first == "startpos" {
        return Ok(Command::Position {
            board: Board::starting_position(),
            turn: Color::White,
        });
    }

    let board: Board = first.parse()?;
    let turn = match rest.first() {
        None => Color::White,
        Some(text) => parse_color(text)?,
    };
    Ok(Command::Position { board, turn })
}

fn parse_color(text: &str) -> Result<Color, ShellError> {
    let mut chars = text.chars();
    match (chars.next().and_then(Color::from_fen_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(ShellError::InvalidColor {
            value: text.to_string(),
        }),
    }
}

fn parse_square(text: &str) -> Result<Square, ShellError> {
    Square::from_algebraic(text).ok_or_else(|| ShellError::InvalidSquare {
        value: text.to_string(),
    })
}

fn parse_pixel(text: &str) -> Result<u32, ShellError> {
    text.parse().map_err(|_| ShellError::InvalidCoordinate {
        value: text.to_string(),
    })
}
