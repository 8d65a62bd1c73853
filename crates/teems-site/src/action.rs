#![forbid(unsafe_code)]

//! Host action strings.
//!
//! Interactive markup carries a `data-action` attribute. The browser bridge
//! hands the string back on click and it is parsed here into a [`Msg`].
//!
//! | Action | Message |
//! |--------|---------|
//! | `toggle-menu` | [`Msg::ToggleMenu`] |
//! | `toggle-search` | [`Msg::ToggleSearch`] |
//! | `navigate:/path` | [`Msg::Navigate`] |
//! | `acknowledge` | [`Msg::Acknowledge`] |
//! | `open-concept:<slug>` | [`Msg::OpenConcept`] |
//! | `close-concept` | [`Msg::CloseConcept`] |
//! | `toggle-faq:<slug>` | [`Msg::ToggleFaq`] |

use std::fmt;
use std::str::FromStr;

use teems_widgets::ContentKey;
use teems_widgets::gate::ACKNOWLEDGE_ACTION;
use teems_widgets::nav::{NAVIGATE_ACTION, TOGGLE_MENU_ACTION};

use crate::app::Msg;
use crate::content::{ConceptKey, FaqKey};

pub const TOGGLE_SEARCH_ACTION: &str = "toggle-search";
pub const OPEN_CONCEPT_ACTION: &str = "open-concept";
pub const CLOSE_CONCEPT_ACTION: &str = "close-concept";
pub const TOGGLE_FAQ_ACTION: &str = "toggle-faq";

/// Errors from parsing an action string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// The string was empty or whitespace.
    Empty,
    /// No action has this name.
    UnknownAction(String),
    /// The action needs a `:argument`.
    MissingArgument(&'static str),
    /// The action takes no argument but one was given.
    UnexpectedArgument(&'static str),
    /// The slug names no content entry.
    UnknownKey { action: &'static str, key: String },
    /// Navigation target is not an absolute path.
    InvalidPath(String),
}

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty action"),
            Self::UnknownAction(name) => write!(f, "unknown action {name:?}"),
            Self::MissingArgument(action) => write!(f, "action {action:?} needs an argument"),
            Self::UnexpectedArgument(action) => {
                write!(f, "action {action:?} takes no argument")
            }
            Self::UnknownKey { action, key } => write!(f, "unknown key {key:?} for {action:?}"),
            Self::InvalidPath(path) => write!(f, "navigation path must start with '/': {path:?}"),
        }
    }
}

impl std::error::Error for ActionParseError {}

fn keyed<K: ContentKey>(action: &'static str, arg: Option<&str>) -> Result<K, ActionParseError> {
    let slug = arg.ok_or(ActionParseError::MissingArgument(action))?;
    K::from_slug(slug).ok_or_else(|| ActionParseError::UnknownKey {
        action,
        key: slug.to_string(),
    })
}

fn bare(action: &'static str, arg: Option<&str>, msg: Msg) -> Result<Msg, ActionParseError> {
    match arg {
        None => Ok(msg),
        Some(_) => Err(ActionParseError::UnexpectedArgument(action)),
    }
}

/// Parse a `data-action` value.
pub fn parse_action(action: &str) -> Result<Msg, ActionParseError> {
    let action = action.trim();
    if action.is_empty() {
        return Err(ActionParseError::Empty);
    }
    let (name, arg) = match action.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (action, None),
    };
    match name {
        TOGGLE_MENU_ACTION => bare(TOGGLE_MENU_ACTION, arg, Msg::ToggleMenu),
        TOGGLE_SEARCH_ACTION => bare(TOGGLE_SEARCH_ACTION, arg, Msg::ToggleSearch),
        ACKNOWLEDGE_ACTION => bare(ACKNOWLEDGE_ACTION, arg, Msg::Acknowledge),
        CLOSE_CONCEPT_ACTION => bare(CLOSE_CONCEPT_ACTION, arg, Msg::CloseConcept),
        NAVIGATE_ACTION => {
            let path = arg.ok_or(ActionParseError::MissingArgument(NAVIGATE_ACTION))?;
            if !path.starts_with('/') {
                return Err(ActionParseError::InvalidPath(path.to_string()));
            }
            Ok(Msg::Navigate(path.to_string()))
        }
        OPEN_CONCEPT_ACTION => keyed::<ConceptKey>(OPEN_CONCEPT_ACTION, arg).map(Msg::OpenConcept),
        TOGGLE_FAQ_ACTION => keyed::<FaqKey>(TOGGLE_FAQ_ACTION, arg).map(Msg::ToggleFaq),
        other => Err(ActionParseError::UnknownAction(other.to_string())),
    }
}

impl FromStr for Msg {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_action(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_actions() {
        assert_eq!(parse_action("toggle-menu"), Ok(Msg::ToggleMenu));
        assert_eq!(parse_action(" toggle-search "), Ok(Msg::ToggleSearch));
        assert_eq!(parse_action("acknowledge"), Ok(Msg::Acknowledge));
        assert_eq!(parse_action("close-concept"), Ok(Msg::CloseConcept));
    }

    #[test]
    fn keyed_actions() {
        assert_eq!(
            "open-concept:ssg".parse::<Msg>(),
            Ok(Msg::OpenConcept(ConceptKey::Ssg))
        );
        assert_eq!(
            parse_action("toggle-faq:justVercel"),
            Ok(Msg::ToggleFaq(FaqKey::JustVercel))
        );
        assert_eq!(
            parse_action("navigate:/hosting-comparison"),
            Ok(Msg::Navigate("/hosting-comparison".into()))
        );
    }

    #[test]
    fn rejects_malformed_actions() {
        assert_eq!(parse_action(""), Err(ActionParseError::Empty));
        assert_eq!(
            parse_action("explode"),
            Err(ActionParseError::UnknownAction("explode".into()))
        );
        assert_eq!(
            parse_action("open-concept"),
            Err(ActionParseError::MissingArgument("open-concept"))
        );
        assert_eq!(
            parse_action("toggle-menu:now"),
            Err(ActionParseError::UnexpectedArgument("toggle-menu"))
        );
        assert_eq!(
            parse_action("toggle-faq:pricing"),
            Err(ActionParseError::UnknownKey {
                action: "toggle-faq",
                key: "pricing".into(),
            })
        );
        assert_eq!(
            parse_action("navigate:people"),
            Err(ActionParseError::InvalidPath("people".into()))
        );
    }

    #[test]
    fn errors_display_the_offending_input() {
        let err = parse_action("toggle-faq:pricing").unwrap_err();
        assert!(err.to_string().contains("pricing"));
    }
}
