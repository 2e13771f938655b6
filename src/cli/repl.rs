//! Interactive calculator loop.
//!
//! Reads lines from stdin and treats every whitespace-separated word as one
//! key press: digits and `.` edit the display, operators chain, `=` sends the
//! expression out for evaluation, and the remaining words cover memory,
//! history, and clearing. The current display is shown in the prompt.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, Write};

use crate::cli::commands::build_runtime;
use crate::cli::output::{OutputFormat, format_panel};
use crate::cli::parser::Cli;
use crate::core::{Operator, Session, UnaryFunction};
use crate::error::Result;
use crate::eval::{ExpressionEvaluator, OpenAiEvaluator};

/// Key reference printed by the `help` command.
const HELP_TEXT: &str = "\
Keys:
  0-9 .          digits and decimal point (append to the display)
  + - * /        operators (aliases: ×, ÷)
  =              evaluate the current expression (alias: eval)
  sqrt % ^       square root, percent, exponent
  del            remove the last character (alias: back)
  c              clear the display (alias: ce)
  ac             clear display, history, and memory
  m+ m- mc mr    memory add, subtract, clear, recall
  panel          toggle the history and memory panel (alias: hist)
  clear-history  remove all recorded calculations
  help           show this reference (alias: ?)
  quit           exit (aliases: exit, q)";

/// A single calculator key press.
#[derive(Debug, Clone, PartialEq)]
enum Key {
    Token(String),
    Op(Operator),
    Function(UnaryFunction),
    Equals,
    Backspace,
    ClearEntry,
    AllClear,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
    MemoryRecall,
    Panel,
    ClearHistory,
    Help,
    Quit,
}

/// Runs the interactive loop until `quit` or end of input.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// An empty string; all interaction happens on stdout/stderr directly.
///
/// # Errors
///
/// Returns an error if the async runtime cannot start or stdin fails.
pub fn run(cli: &Cli) -> Result<String> {
    let evaluator = OpenAiEvaluator::new(&cli.evaluator_config());
    let runtime = build_runtime()?;
    let mut session = Session::new();

    println!("aicalc interactive calculator (model: {})", cli.model);
    println!("Type 'help' for the key reference, 'quit' to exit.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        if session.panel_open() {
            print!(
                "{}",
                format_panel(session.history(), session.memory_value(), OutputFormat::Text)
            );
        }
        print!("[{}] ", session.display());
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        for word in line.split_whitespace() {
            if !dispatch(&mut session, &runtime, &evaluator, word) {
                return Ok(String::new());
            }
        }
    }

    Ok(String::new())
}

/// Applies one input word to the session. Returns `false` on `quit`.
fn dispatch<E>(
    session: &mut Session,
    runtime: &tokio::runtime::Runtime,
    evaluator: &E,
    word: &str,
) -> bool
where
    E: ExpressionEvaluator + ?Sized,
{
    let Some(key) = parse_key(word) else {
        notify(
            "Unknown key",
            &format!("'{word}' is not a calculator key. Type 'help' for the key reference."),
        );
        return true;
    };

    match key {
        Key::Token(token) => session.press_token(&token),
        Key::Op(op) => session.press_operator(op),
        Key::Function(function) => session.press_function(function),
        Key::Equals => {
            if let Err(err) = runtime.block_on(session.submit(evaluator)) {
                notify("Calculation Error", &err.to_string());
            }
        }
        Key::Backspace => session.press_backspace(),
        Key::ClearEntry => session.clear_entry(),
        Key::AllClear => session.all_clear(),
        Key::MemoryAdd => session.memory_add(),
        Key::MemorySubtract => session.memory_subtract(),
        Key::MemoryClear => session.memory_clear(),
        Key::MemoryRecall => {
            session.memory_recall();
        }
        Key::Panel => session.toggle_panel(),
        Key::ClearHistory => session.clear_history(),
        Key::Help => println!("{HELP_TEXT}"),
        Key::Quit => return false,
    }

    true
}

/// Maps an input word onto a calculator key.
fn parse_key(word: &str) -> Option<Key> {
    if let Some(op) = Operator::from_symbol(word) {
        return Some(Key::Op(op));
    }
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Some(Key::Token(word.to_string()));
    }

    match word.to_lowercase().as_str() {
        "=" | "eval" => Some(Key::Equals),
        "sqrt" => Some(Key::Function(UnaryFunction::Sqrt)),
        "%" => Some(Key::Function(UnaryFunction::Percent)),
        "^" | "pow" => Some(Key::Function(UnaryFunction::Exponent)),
        "del" | "back" => Some(Key::Backspace),
        "c" | "ce" => Some(Key::ClearEntry),
        "ac" => Some(Key::AllClear),
        "m+" => Some(Key::MemoryAdd),
        "m-" => Some(Key::MemorySubtract),
        "mc" => Some(Key::MemoryClear),
        "mr" => Some(Key::MemoryRecall),
        "panel" | "hist" => Some(Key::Panel),
        "clear-history" => Some(Key::ClearHistory),
        "help" | "?" => Some(Key::Help),
        "quit" | "exit" | "q" => Some(Key::Quit),
        _ => None,
    }
}

/// Prints a notification line to stderr.
fn notify(title: &str, message: &str) {
    if message.is_empty() {
        eprintln!("{title}: An unknown error occurred.");
    } else {
        eprintln!("{title}: {message}");
    }
}
