//! # Line Shell
//!
//! Stands in for the storefront page: each input line is one user action,
//! each output line one JSON envelope.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         One Line, One Response                          │
//! │                                                                         │
//! │  stdin ── "add 1" ──► ShellCommand::from_str ──► execute()             │
//! │                              │                        │                 │
//! │                        ShellParseError          commands::cart         │
//! │                              │                        │                 │
//! │                              ▼                        ▼                 │
//! │                      ┌───────────────────────────────────────┐         │
//! │                      │ Envelope { data | error, changes }    │         │
//! │                      └───────────────────┬───────────────────┘         │
//! │                                          ▼                              │
//! │  stdout ◄── {"data":{...},"changes":["cart"]}                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use mangal_core::{FormField, ProductId, StateChange, UnknownFormField};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::commands::{cart, catalog, order, view};
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Lines the shell accepts, printed by `help`.
const HELP: &[&str] = &[
    "menu",
    "store",
    "cart",
    "add <product id>",
    "remove <product id>",
    "toggle",
    "close",
    "checkout",
    "cancel",
    "set <name|phone|address> <value>",
    "submit",
    "help",
    "quit",
];

/// Errors from reading a line as a [`ShellCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid product id '{0}'")]
    InvalidProductId(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownFormField),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Menu,
    Store,
    Cart,
    Add(ProductId),
    Remove(ProductId),
    Toggle,
    Close,
    Checkout,
    Cancel,
    /// Field plus the rest of the line, inner spaces kept
    Set(FormField, String),
    Submit,
    Help,
    Quit,
}

/// Splits off the first word; the remainder has its leading space removed.
fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

fn parse_product_id(command: &'static str, arg: &str) -> Result<ProductId, ShellParseError> {
    if arg.is_empty() {
        return Err(ShellParseError::MissingArgument {
            command,
            argument: "product id",
        });
    }
    arg.parse()
        .map_err(|_| ShellParseError::InvalidProductId(arg.to_string()))
}

impl FromStr for ShellCommand {
    type Err = ShellParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (head, rest) = split_word(line.trim());
        if head.is_empty() {
            return Err(ShellParseError::Empty);
        }

        let command = match head.to_lowercase().as_str() {
            "menu" => ShellCommand::Menu,
            "store" => ShellCommand::Store,
            "cart" => ShellCommand::Cart,
            "add" => ShellCommand::Add(parse_product_id("add", rest)?),
            "remove" => ShellCommand::Remove(parse_product_id("remove", rest)?),
            "toggle" => ShellCommand::Toggle,
            "close" => ShellCommand::Close,
            "checkout" => ShellCommand::Checkout,
            "cancel" => ShellCommand::Cancel,
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(ShellParseError::MissingArgument {
                        command: "set",
                        argument: "field",
                    });
                }
                ShellCommand::Set(field.parse()?, value.to_string())
            }
            "submit" => ShellCommand::Submit,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ShellParseError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

/// Everything the shell holds for the life of the process.
#[derive(Debug, Default)]
pub struct ShellState {
    pub session: SessionState,
    pub config: ConfigState,
}

impl ShellState {
    pub fn new(session: SessionState, config: ConfigState) -> Self {
        ShellState { session, config }
    }

    fn drain_changes(&mut self) -> Vec<StateChange> {
        self.session.with_session_mut(|_, s| s.drain_changes())
    }
}

/// What gets printed for one line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub changes: Vec<StateChange>,
}

impl Envelope {
    fn from_result(result: Result<Value, ApiError>, changes: Vec<StateChange>) -> Self {
        match result {
            Ok(data) => Envelope {
                data: Some(data),
                error: None,
                changes,
            },
            Err(error) => Envelope {
                data: None,
                error: Some(error),
                changes,
            },
        }
    }
}

/// Runs one command against the state and serializes its response.
pub fn execute(state: &mut ShellState, command: ShellCommand) -> Result<Value, ApiError> {
    let value = match command {
        ShellCommand::Menu => serde_json::to_value(catalog::list_products(&state.session))?,
        ShellCommand::Store => serde_json::to_value(catalog::get_store_info(&state.config))?,
        ShellCommand::Cart => serde_json::to_value(cart::get_cart(&state.session, &state.config))?,
        ShellCommand::Add(id) => {
            serde_json::to_value(cart::add_to_cart(&mut state.session, &state.config, id)?)?
        }
        ShellCommand::Remove(id) => {
            serde_json::to_value(cart::remove_from_cart(&mut state.session, &state.config, id)?)?
        }
        ShellCommand::Toggle => serde_json::to_value(view::toggle_cart(&mut state.session))?,
        ShellCommand::Close => serde_json::to_value(view::close_cart(&mut state.session)?)?,
        ShellCommand::Checkout => {
            serde_json::to_value(view::proceed_to_order(&mut state.session)?)?
        }
        ShellCommand::Cancel => serde_json::to_value(view::cancel_order(&mut state.session)?)?,
        ShellCommand::Set(field, value) => {
            serde_json::to_value(order::update_form(&mut state.session, field, value))?
        }
        ShellCommand::Submit => serde_json::to_value(order::submit_order(&mut state.session)?)?,
        ShellCommand::Help => serde_json::to_value(HELP)?,
        ShellCommand::Quit => Value::Null,
    };
    Ok(value)
}

/// Parses and executes one line, pairing the outcome with the drained changes.
pub fn handle_line(state: &mut ShellState, line: &str) -> Envelope {
    let result = line
        .parse::<ShellCommand>()
        .map_err(ApiError::from)
        .and_then(|command| {
            debug!(?command, "executing");
            execute(state, command)
        });

    if let Err(err) = &result {
        warn!(line = %line.trim(), code = ?err.code, "rejected: {}", err.message);
    }

    Envelope::from_result(result, state.drain_changes())
}

fn write_envelope<W: Write>(output: &mut W, envelope: &Envelope, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, envelope)
    } else {
        serde_json::to_writer(&mut *output, envelope)
    }
    .map_err(io::Error::from)?;
    writeln!(output)?;
    output.flush()
}

/// Reads lines until EOF or `quit`, writing one JSON envelope per line.
///
/// Blank lines are skipped without a response. A line that is not valid
/// UTF-8 gets a `PARSE_ERROR` envelope and reading continues.
pub fn run_loop<R, W>(state: &mut ShellState, mut input: R, mut output: W, pretty: bool) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let envelope = match std::str::from_utf8(&buf) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if matches!(line.parse::<ShellCommand>(), Ok(ShellCommand::Quit)) {
                    info!("quit requested");
                    break;
                }
                handle_line(state, line)
            }
            Err(err) => {
                warn!(%err, "rejected line with invalid UTF-8");
                let error = ApiError::from(ShellParseError::InvalidUtf8);
                Envelope::from_result(Err(error), state.drain_changes())
            }
        };

        write_envelope(&mut output, &envelope, pretty)?;
    }
    Ok(())
}
