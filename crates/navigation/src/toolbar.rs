use serde::{Deserialize, Serialize};

use crate::controller::{NavigationController, NavigationOutcome};

/// The buttons every tutorial view carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavCommand {
    LogIn,
    LogOut,
    OpenPrivate,
    OpenPublic,
    OpenDefault,
    OpenWrong,
}

impl NavCommand {
    pub const ALL: [NavCommand; 6] = [
        NavCommand::LogIn,
        NavCommand::LogOut,
        NavCommand::OpenPrivate,
        NavCommand::OpenPublic,
        NavCommand::OpenDefault,
        NavCommand::OpenWrong,
    ];

    /// Stable id of the control.
    pub fn control_id(self) -> &'static str {
        match self {
            NavCommand::LogIn => "login",
            NavCommand::LogOut => "logout",
            NavCommand::OpenPrivate => "toPrivate",
            NavCommand::OpenPublic => "toPublic",
            NavCommand::OpenDefault => "toDefault",
            NavCommand::OpenWrong => "toWrong",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            NavCommand::LogIn => "Log In",
            NavCommand::LogOut => "Log Out",
            NavCommand::OpenPrivate => "Open Private",
            NavCommand::OpenPublic => "Open Public",
            NavCommand::OpenDefault => "Open Default",
            NavCommand::OpenWrong => "Open Wrong",
        }
    }

    /// Navigation target, for the commands that navigate.
    pub fn target(self) -> Option<&'static str> {
        match self {
            NavCommand::OpenPrivate => Some("private"),
            NavCommand::OpenPublic => Some("public"),
            NavCommand::OpenDefault => Some(""),
            NavCommand::OpenWrong => Some("Wrong"),
            NavCommand::LogIn | NavCommand::LogOut => None,
        }
    }

    pub fn from_control_id(id: &str) -> Option<NavCommand> {
        NavCommand::ALL.into_iter().find(|c| c.control_id() == id)
    }
}

/// What the view shows after a toolbar button was clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarResponse {
    pub control_id: &'static str,
    pub notification: Option<&'static str>,
    pub navigation: Option<NavigationOutcome>,
    /// Error indicator on the clicked control.
    pub error_indicator: bool,
}

/// Decision table behind the tutorial buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationToolbar;

impl NavigationToolbar {
    pub fn buttons(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        NavCommand::ALL.into_iter().map(|c| (c.control_id(), c.caption()))
    }

    pub fn apply<V>(&self, command: NavCommand, nav: &mut NavigationController<V>) -> ToolbarResponse {
        match command {
            NavCommand::LogIn | NavCommand::LogOut => {
                let granted = command == NavCommand::LogIn;
                nav.gate().set_open(granted);
                ToolbarResponse {
                    control_id: command.control_id(),
                    notification: Some(if granted { "Access Granted" } else { "Access Revoked" }),
                    navigation: None,
                    error_indicator: false,
                }
            }
            _ => {
                let target = command.target().unwrap_or_default();
                let outcome = nav.navigate(target);
                ToolbarResponse {
                    control_id: command.control_id(),
                    notification: None,
                    error_indicator: outcome.shows_error_indicator(),
                    navigation: Some(outcome),
                }
            }
        }
    }
}
