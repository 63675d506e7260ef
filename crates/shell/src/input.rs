//! Text command parsing.
//!
//! Arguments are whitespace-separated; wrap an argument in double quotes to keep
//! spaces (`add 7 "Oat milk" 4`). Numeric arguments are left as text so the
//! inventory core does the validating.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?} (try \"help\")")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unterminated quote")]
    UnterminatedQuote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        id: String,
        name: String,
        quantity: String,
        expiry_date: Option<String>,
    },
    Remove {
        id: String,
    },
    Adjust {
        id: String,
        delta: String,
    },
    AdjustByName {
        name: String,
        delta: String,
    },
    List,
    Low,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <id> <name> <quantity> [expiry]   add a product
  remove <id>                           remove a product
  adjust <id> <delta>                   change quantity (delta may be negative)
  adjust-name <name> <delta>            change quantity, picking the product by name
  list                                  show products sorted by quantity
  low                                   show low-stock products
  json                                  print products as JSON
  help                                  show this text
  quit                                  exit";

const ADD_USAGE: &str = "add <id> <name> <quantity> [expiry]";
const REMOVE_USAGE: &str = "remove <id>";
const ADJUST_USAGE: &str = "adjust <id> <delta>";
const ADJUST_NAME_USAGE: &str = "adjust-name <name> <delta>";

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let tokens = tokenize(line)?;
        let Some((head, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match (head.to_ascii_lowercase().as_str(), args) {
            ("add", [id, name, quantity]) => Self::Add {
                id: id.clone(),
                name: name.clone(),
                quantity: quantity.clone(),
                expiry_date: None,
            },
            ("add", [id, name, quantity, expiry]) => Self::Add {
                id: id.clone(),
                name: name.clone(),
                quantity: quantity.clone(),
                expiry_date: Some(expiry.clone()),
            },
            ("add", _) => return Err(ParseError::Usage(ADD_USAGE)),
            ("remove" | "rm", [id]) => Self::Remove { id: id.clone() },
            ("remove" | "rm", _) => return Err(ParseError::Usage(REMOVE_USAGE)),
            ("adjust", [id, delta]) => Self::Adjust {
                id: id.clone(),
                delta: delta.clone(),
            },
            ("adjust", _) => return Err(ParseError::Usage(ADJUST_USAGE)),
            ("adjust-name", [name, delta]) => Self::AdjustByName {
                name: name.clone(),
                delta: delta.clone(),
            },
            ("adjust-name", _) => return Err(ParseError::Usage(ADJUST_NAME_USAGE)),
            ("list" | "ls", []) => Self::List,
            ("low", []) => Self::Low,
            ("json", []) => Self::Json,
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            _ => return Err(ParseError::UnknownCommand(head.clone())),
        };
        Ok(Some(command))
    }

    /// Whether the command can change inventory state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Remove { .. } | Self::Adjust { .. } | Self::AdjustByName { .. }
        )
    }
}

fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
