//! Commands the interactive shell accepts.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ProductId};
use storefront_crud::{CrudCommand, ProductForm};
use storefront_navigation::NavCommand;

/// One UI event, as dispatched into a `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiCommand {
    SignIn {
        username: String,
        #[serde(default)]
        password: String,
    },
    SignOut,
    /// A tutorial toolbar button.
    Toolbar { control: NavCommand },
    /// Menu click or typed URL fragment, e.g. `Inventory/3`.
    Navigate { state: String },
    Crud { command: CrudCommand },
}

impl UiCommand {
    fn crud(command: CrudCommand) -> Self {
        UiCommand::Crud { command }
    }
}

/// Text syntax, one command per line:
///
/// ```text
/// login <user> [password]      logout
/// click <control-id>           go [state]
/// new | select <id> | deselect | cancel | delete <id>
/// filter [text]                save <product form as JSON>
/// {"type": ...}                (any command as JSON)
/// ```
impl FromStr for UiCommand {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.starts_with('{') {
            return serde_json::from_str(line)
                .map_err(|e| DomainError::validation(format!("invalid command JSON: {e}")));
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let product_id = |what: &str| -> Result<ProductId, DomainError> {
            if rest.is_empty() {
                return Err(DomainError::validation(format!("usage: {what} <id>")));
            }
            rest.parse()
        };

        let command = match verb {
            "login" => {
                let mut parts = rest.split_whitespace();
                let username = parts
                    .next()
                    .ok_or_else(|| DomainError::validation("usage: login <user> [password]"))?;
                UiCommand::SignIn {
                    username: username.to_string(),
                    password: parts.next().unwrap_or_default().to_string(),
                }
            }
            "logout" => UiCommand::SignOut,
            "click" => {
                let control = NavCommand::from_control_id(rest)
                    .ok_or_else(|| DomainError::validation(format!("unknown control '{rest}'")))?;
                UiCommand::Toolbar { control }
            }
            "go" => UiCommand::Navigate {
                state: rest.to_string(),
            },
            "new" => UiCommand::crud(CrudCommand::NewProduct),
            "select" => UiCommand::crud(CrudCommand::RowSelected(product_id("select")?)),
            "deselect" => UiCommand::crud(CrudCommand::Deselect),
            "cancel" => UiCommand::crud(CrudCommand::Cancel),
            "delete" => UiCommand::crud(CrudCommand::Delete(product_id("delete")?)),
            "filter" => UiCommand::crud(CrudCommand::FilterChanged(rest.to_string())),
            "save" => {
                let form: ProductForm = serde_json::from_str(rest)
                    .map_err(|e| DomainError::validation(format!("invalid product form: {e}")))?;
                UiCommand::crud(CrudCommand::Save(form))
            }
            other => return Err(DomainError::validation(format!("unknown command '{other}'"))),
        };

        Ok(command)
    }
}
