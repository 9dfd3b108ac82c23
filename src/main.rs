//! Cube Solver
//!
//! Paint the stickers of a scrambled 3x3x3 cube, then ask for a move
//! sequence that solves it, printed as plain turn-by-turn instructions.
//! Painting happens in an interactive terminal session or from a 54-symbol
//! color string; a 3D viewer shows the painted cube next to the solution.

mod visualization;

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use cubesolve::facelet::{format_net, ParseError, FACELET_COUNT};
use cubesolve::session::DEFAULT_VISIBLE_LINES;
use cubesolve::{moves, Color, Face, Intent, Session, SolverConfig, TwoPhaseSolver};

/// Paints a Rubik's cube and prints how to solve it.
#[derive(Parser)]
#[command(name = "cubesolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: Options,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct Options {
    /// Longest solution the search accepts, in moves.
    #[arg(long, global = true, default_value_t = 23)]
    max_length: u8,
    /// Number of result lines shown at once.
    #[arg(long, global = true, default_value_t = DEFAULT_VISIBLE_LINES)]
    visible_lines: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Paint the cube from a color string and print the solution.
    ///
    /// COLORS lists 54 stickers using W Y R O G B X, faces in U R F D L B
    /// order, each face row by row. Whitespace is ignored and center
    /// stickers keep their fixed colors.
    Solve { colors: String },
    /// Print readable instructions for a move string such as "R U R' U'".
    Translate {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Paint and solve from an interactive prompt (default).
    Interactive,
    /// Show the painted cube in a 3D viewer, stepping through the solution.
    View { colors: String },
}

/// Problems with user-typed cube input.
#[derive(Debug, Error, PartialEq, Eq)]
enum InputError {
    #[error("expected 54 color symbols, found {0}")]
    Length(usize),
    #[error(transparent)]
    Symbol(#[from] ParseError),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0} is not a number")]
    Number(String),
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = SolverConfig {
        max_length: cli.options.max_length,
    };
    let session = Session::with_visible_lines(
        TwoPhaseSolver::new(config),
        cli.options.visible_lines,
    );

    match cli.command {
        Some(Command::Solve { colors }) => run_solve(session, &colors),
        Some(Command::Translate { moves }) => run_translate(&moves.join(" ")),
        Some(Command::View { colors }) => run_view(session, &colors),
        Some(Command::Interactive) | None => run_interactive(session),
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Paints every non-center sticker from a color string.
fn paint_from_colors(
    session: &mut Session<TwoPhaseSolver>,
    colors: &str,
) -> Result<(), InputError> {
    let symbols: Vec<char> = colors.chars().filter(|c| !c.is_whitespace()).collect();
    if symbols.len() != FACELET_COUNT {
        return Err(InputError::Length(symbols.len()));
    }

    for (face_index, face_symbols) in symbols.chunks(9).enumerate() {
        let face = Face::ALL[face_index];
        for (cell, &symbol) in face_symbols.iter().enumerate() {
            session.paint(face, cell / 3, cell % 3, Color::from_char(symbol)?);
        }
    }
    Ok(())
}

fn run_solve(mut session: Session<TwoPhaseSolver>, colors: &str) {
    if let Err(e) = paint_from_colors(&mut session, colors) {
        eprintln!("Invalid colors: {}", e);
        return;
    }

    session.request_solve();
    for line in session.result() {
        println!("{}", line);
    }
}

fn run_translate(move_string: &str) {
    for line in moves::translate(move_string) {
        println!("{}", line);
    }
}

fn run_view(mut session: Session<TwoPhaseSolver>, colors: &str) {
    if let Err(e) = paint_from_colors(&mut session, colors) {
        eprintln!("Invalid colors: {}", e);
        return;
    }

    session.request_solve();
    println!("Controls: Left/Right step through the solution");
    visualization::display(session.model().clone(), session.result().to_vec());
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum PromptCommand {
    Intent(Intent),
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  paint <face> <row> <col>   paint a sticker (face U R F D L B, row/col 0-2)
  color <symbol>             select W Y R O G B, or X to erase
  solve                      solve the painted cube
  scroll <lines>             scroll the solution (negative scrolls up)
  show                       print the cube and the visible solution
  help                       show this list
  quit                       leave";

fn parse_index(word: &str) -> Result<usize, InputError> {
    word.parse().map_err(|_| InputError::Number(word.to_string()))
}

fn parse_symbol(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

fn parse_line(line: &str) -> Result<Option<PromptCommand>, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (verb.to_ascii_lowercase().as_str(), args) {
        ("paint" | "p", [face, row, col]) => {
            let face = parse_symbol(face)
                .ok_or(InputError::Usage("paint <face> <row> <col>"))?
                .to_ascii_uppercase();
            PromptCommand::Intent(Intent::Paint {
                face: Face::from_char(face)?,
                row: parse_index(row)?,
                col: parse_index(col)?,
            })
        }
        ("paint" | "p", _) => return Err(InputError::Usage("paint <face> <row> <col>")),
        ("color" | "c", [symbol]) => {
            let symbol = parse_symbol(symbol).ok_or(InputError::Usage("color <symbol>"))?;
            PromptCommand::Intent(Intent::SelectColor(Color::from_char(symbol)?))
        }
        ("color" | "c", _) => return Err(InputError::Usage("color <symbol>")),
        ("solve", []) => PromptCommand::Intent(Intent::Solve),
        ("scroll", [delta]) => {
            let delta = delta
                .parse()
                .map_err(|_| InputError::Number(delta.to_string()))?;
            PromptCommand::Intent(Intent::Scroll(delta))
        }
        ("scroll", _) => return Err(InputError::Usage("scroll <lines>")),
        ("show", []) => PromptCommand::Show,
        ("help" | "?", _) => PromptCommand::Help,
        ("quit" | "exit" | "q", _) => PromptCommand::Quit,
        _ => return Err(InputError::Unknown(line.trim().to_string())),
    };

    Ok(Some(command))
}

/// Formats the cube, the palette selection and the visible solution window.
fn render(session: &Session<TwoPhaseSolver>) -> String {
    let mut output = format_net(session.model());
    output.push_str(&format!(
        "\nSelected color: {}\n",
        session.selected_color().symbol()
    ));

    let total = session.result().len();
    if total > 0 {
        let first = session.scroll_offset() + 1;
        let last = session.scroll_offset() + session.visible_result().len();
        output.push_str(&format!("\nSolution (lines {}-{} of {}):\n", first, last, total));
        for line in session.visible_result() {
            output.push_str(line);
            output.push('\n');
        }
    }

    output
}

fn run_interactive(mut session: Session<TwoPhaseSolver>) {
    println!("{}", HELP);
    println!();
    print!("{}", render(&session));

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(PromptCommand::Quit)) => break,
            Ok(Some(PromptCommand::Help)) => println!("{}", HELP),
            Ok(Some(PromptCommand::Show)) => print!("{}", render(&session)),
            Ok(Some(PromptCommand::Intent(intent))) => {
                session.dispatch(intent);
                if matches!(intent, Intent::Solve | Intent::Scroll(_)) {
                    print!("{}", render(&session));
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}
