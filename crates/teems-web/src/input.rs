#![forbid(unsafe_code)]

//! JSON schema for everything the page script sends to the bridge.
//!
//! The script is expected to provide:
//! - the `data-action` string of a clicked element, verbatim,
//! - the `data-escape-action` string of an open dialog when Escape is pressed,
//! - `popstate` paths,
//! - `getBoundingClientRect()` of each `[data-observe]` region, shifted into
//!   document coordinates,
//! - the scrolled viewport rectangle.
//!
//! Every message carries a `kind` tag:
//!
//! ```json
//! {"kind":"hydrated"}
//! {"kind":"action","action":"toggle-faq:quarto"}
//! {"kind":"route","path":"/people"}
//! {"kind":"layout","target":"mission","x":0,"y":1200,"width":1280,"height":640}
//! {"kind":"viewport","x":0,"y":300,"width":1280,"height":800}
//! ```

use serde::{Deserialize, Serialize};
use teems_core::event::Event;
use teems_core::geometry::Rect;
use teems_runtime::HostOutputs;
use teems_site::Msg;
use teems_site::action::{ActionParseError, parse_action};
use teems_site::pages::canonical_path;

/// One message from the page script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostInput {
    Hydrated,
    Action {
        action: String,
    },
    Route {
        path: String,
    },
    Layout {
        target: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Viewport {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Where a decoded input enters the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Queue as a host event.
    Event(Event),
    /// Send straight to the model.
    Message(Msg),
}

impl HostInput {
    /// Encode as a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a JSON string.
    ///
    /// Errors occur if the JSON does not match the schema.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Resolve into a runner event or model message.
    ///
    /// Only action strings can fail, when they name no known action.
    pub fn into_dispatch(self) -> Result<Dispatch, ActionParseError> {
        Ok(match self {
            Self::Hydrated => Dispatch::Event(Event::Hydrated),
            Self::Action { action } => Dispatch::Message(parse_action(&action)?),
            Self::Route { path } => {
                Dispatch::Event(Event::RouteChanged(canonical_path(&path).to_string()))
            }
            Self::Layout {
                target,
                x,
                y,
                width,
                height,
            } => Dispatch::Event(Event::Layout {
                target: target.into(),
                bounds: Rect::new(x, y, width, height),
            }),
            Self::Viewport {
                x,
                y,
                width,
                height,
            } => Dispatch::Event(Event::Viewport(Rect::new(x, y, width, height))),
        })
    }
}

/// What the page script should apply after one input.
///
/// `html` replaces the contents of the mount element; each entry of
/// `navigations` is pushed onto the history stack in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<String>,
}

impl From<HostOutputs> for FrameOutput {
    fn from(outputs: HostOutputs) -> Self {
        Self {
            html: outputs.html,
            navigations: outputs.navigations,
            logs: outputs.logs,
        }
    }
}

impl FrameOutput {
    /// Encode as a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use teems_site::content::FaqKey;

    #[test]
    fn decodes_each_kind() {
        assert_eq!(
            HostInput::from_json_str(r#"{"kind":"hydrated"}"#).unwrap(),
            HostInput::Hydrated
        );
        assert_eq!(
            HostInput::from_json_str(r#"{"kind":"action","action":"toggle-faq:quarto"}"#).unwrap(),
            HostInput::Action {
                action: "toggle-faq:quarto".into()
            }
        );
        assert_eq!(
            HostInput::from_json_str(
                r#"{"kind":"layout","target":"mission","x":0,"y":1200.5,"width":1280,"height":640}"#
            )
            .unwrap(),
            HostInput::Layout {
                target: "mission".into(),
                x: 0.0,
                y: 1200.5,
                width: 1280.0,
                height: 640.0,
            }
        );
    }

    #[test]
    fn encoding_is_tagged_by_kind() {
        let json = HostInput::Route {
            path: "/models".into(),
        }
        .to_json_string()
        .unwrap();
        assert_eq!(json, r#"{"kind":"route","path":"/models"}"#);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(HostInput::from_json_str(r#"{"kind":"scroll"}"#).is_err());
        assert!(HostInput::from_json_str(r#"{"kind":"route"}"#).is_err());
    }

    #[test]
    fn dispatch_routes_actions_to_messages_and_geometry_to_events() {
        assert_eq!(
            HostInput::Action {
                action: "toggle-faq:cms".into()
            }
            .into_dispatch(),
            Ok(Dispatch::Message(Msg::ToggleFaq(FaqKey::Cms)))
        );
        assert_eq!(
            HostInput::Viewport {
                x: 0.0,
                y: 10.0,
                width: 100.0,
                height: 50.0
            }
            .into_dispatch(),
            Ok(Dispatch::Event(Event::Viewport(Rect::new(0.0, 10.0, 100.0, 50.0))))
        );
        assert!(matches!(
            HostInput::Action {
                action: "explode".into()
            }
            .into_dispatch(),
            Err(ActionParseError::UnknownAction(_))
        ));
    }

    #[test]
    fn route_paths_are_canonicalized() {
        assert_eq!(
            HostInput::Route {
                path: "/hosting-comparison/".into()
            }
            .into_dispatch(),
            Ok(Dispatch::Event(Event::RouteChanged("/hosting-comparison".into())))
        );
    }

    #[test]
    fn empty_output_encodes_as_empty_object() {
        assert_eq!(FrameOutput::default().to_json_string().unwrap(), "{}");
        let out = FrameOutput {
            html: None,
            navigations: vec!["/people".into()],
            logs: vec![],
        };
        assert_eq!(out.to_json_string().unwrap(), r#"{"navigations":["/people"]}"#);
    }
}
