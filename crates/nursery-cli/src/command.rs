//! Shell command parsing
//!
//! One line of input maps to one [`ShellCommand`]:
//!
//! | Input | Meaning |
//! |---|---|
//! | `add <id>` | add one unit |
//! | `set <id> <n>` | set quantity, `n <= 0` removes |
//! | `inc <id>` / `dec <id>` | quantity ± 1 |
//! | `rm <id>` | remove entry |
//! | `go <view>`, `home`, `plants`, `cart` | navigate |
//! | `checkout` | acknowledgement |
//! | `show`, `help`, `quit` | shell control |

use nursery_catalog::ItemId;
use nursery_core::{Action, ParseViewError, View};
use std::num::ParseIntError;

/// Parsed shell input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Storefront action
    Action(Action),
    /// Re-render the current screen
    Show,
    /// Print command help
    Help,
    /// Leave the shell
    Quit,
}

/// Shell input error; reported without ending the session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Verb not recognised
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// Required argument absent
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// Verb
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// Extra tokens after a complete command
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// Argument is not a valid integer
    #[error("invalid number '{value}': {source}")]
    InvalidNumber {
        /// Raw token
        value: String,
        /// Parse failure
        #[source]
        source: ParseIntError,
    },

    /// Unknown screen name
    #[error(transparent)]
    InvalidView(#[from] ParseViewError),
}

/// Command reference shown by `help`
pub const HELP: &str = "\
Commands:
  add <id>        add one of an item to the cart
  set <id> <n>    set quantity (0 or less removes)
  inc <id>        increase quantity by one
  dec <id>        decrease quantity by one
  rm <id>         remove an item from the cart
  go <view>       switch to home, plants or cart
  checkout        check out
  show            redraw the current screen
  help            show this help
  quit            leave the shop";

/// Parse one line. Blank lines and `#` comments yield `None`.
///
/// # Errors
/// Returns a [`CommandError`] for unknown verbs or bad arguments
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => action(Action::AddOne { id: item_id("add", tokens.next())? }),
        "set" => {
            let id = item_id("set", tokens.next())?;
            let raw = tokens.next().ok_or(CommandError::MissingArgument {
                command: "set",
                argument: "a quantity",
            })?;
            action(Action::SetQuantity {
                id,
                quantity: number(raw)?,
            })
        }
        "inc" | "+" => action(Action::Increment { id: item_id("inc", tokens.next())? }),
        "dec" | "-" => action(Action::Decrement { id: item_id("dec", tokens.next())? }),
        "rm" | "remove" => action(Action::Remove { id: item_id("rm", tokens.next())? }),
        "go" => {
            let raw = tokens.next().ok_or(CommandError::MissingArgument {
                command: "go",
                argument: "a view (home, plants, cart)",
            })?;
            action(Action::Navigate { to: raw.parse()? })
        }
        "home" => action(Action::Navigate { to: View::Home }),
        "plants" | "browse" => action(Action::Navigate { to: View::Browse }),
        "cart" => action(Action::Navigate { to: View::Cart }),
        "checkout" => action(Action::Checkout),
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };

    if let Some(extra) = tokens.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }
    Ok(Some(command))
}

#[inline]
fn action(action: Action) -> ShellCommand {
    ShellCommand::Action(action)
}

fn item_id(command: &'static str, token: Option<&str>) -> Result<ItemId, CommandError> {
    let raw = token.ok_or(CommandError::MissingArgument {
        command,
        argument: "an item id",
    })?;
    raw.parse().map_err(|source| CommandError::InvalidNumber {
        value: raw.to_string(),
        source,
    })
}

fn number(raw: &str) -> Result<i64, CommandError> {
    raw.parse().map_err(|source| CommandError::InvalidNumber {
        value: raw.to_string(),
        source,
    })
}
