//! Whole-session tests through the JSON bridge, the way the page script
//! talks to it.

use std::rc::Rc;

use proptest::prelude::*;
use teems_runtime::{MemoryStorage, StorageBackend};
use teems_web::{FrameOutput, HostInput, SiteHost};

fn frame(host: &mut SiteHost, json: &str) -> FrameOutput {
    serde_json::from_str(&host.handle_json(json).unwrap()).unwrap()
}

#[test]
fn acknowledgement_survives_a_reload() {
    let storage = Rc::new(MemoryStorage::new());

    let mut page = SiteHost::new("/", storage.clone(), 2026);
    let out = frame(&mut page, r#"{"kind":"hydrated"}"#);
    assert!(out.html.unwrap().contains("I Understand"));
    let out = frame(&mut page, r#"{"kind":"action","action":"acknowledge"}"#);
    assert!(!out.html.unwrap().contains("I Understand"));
    assert_eq!(
        storage
            .get("natcap-teems-disclaimer-acknowledged")
            .unwrap()
            .as_deref(),
        Some("true")
    );

    let mut reloaded = SiteHost::new("/people", storage, 2026);
    let out = frame(&mut reloaded, r#"{"kind":"hydrated"}"#);
    assert!(!out.html.unwrap().contains("I Understand"));
}

#[test]
fn scrolling_reveals_the_mission_section() {
    let mut page = SiteHost::new("/", Rc::new(MemoryStorage::new()), 2026);
    frame(&mut page, r#"{"kind":"hydrated"}"#);
    let out = frame(
        &mut page,
        r#"{"kind":"layout","target":"mission","x":0,"y":1000,"width":1280,"height":600}"#,
    );
    assert_eq!(out, FrameOutput::default());

    let out = frame(
        &mut page,
        r#"{"kind":"viewport","x":0,"y":0,"width":1280,"height":800}"#,
    );
    // The first observation reports the section as outside the viewport.
    assert!(out.html.is_some());
    assert!(!page.model().home().mission.is_visible());

    let out = frame(
        &mut page,
        r#"{"kind":"viewport","x":0,"y":700,"width":1280,"height":800}"#,
    );
    assert!(out.html.is_some());
    assert!(page.model().home().mission.is_visible());
}

#[test]
fn back_button_route_is_not_pushed_again() {
    let mut page = SiteHost::new("/models", Rc::new(MemoryStorage::new()), 2026);
    frame(&mut page, r#"{"kind":"hydrated"}"#);
    let out = frame(&mut page, r#"{"kind":"route","path":"/"}"#);
    assert!(out.navigations.is_empty());
    assert!(out.html.unwrap().contains(r#"data-route="/""#));
    assert_eq!(page.location(), Some("/"));
}

#[test]
fn directory_index_urls_keep_their_page_after_hydration() {
    let mut page = SiteHost::new("/people/", Rc::new(MemoryStorage::new()), 2026);
    let out = frame(&mut page, r#"{"kind":"hydrated"}"#);
    let html = out.html.unwrap();
    assert!(html.contains(r#"data-route="/people""#));
    assert!(!html.contains("This page could not be found."));

    let out = frame(&mut page, r#"{"kind":"route","path":"/hosting-comparison/"}"#);
    assert!(out.html.unwrap().contains("Hosting Platform Comparison"));
    assert_eq!(page.location(), Some("/hosting-comparison"));
}

fn input() -> impl Strategy<Value = HostInput> {
    let action = prop::sample::select(vec![
        "toggle-menu",
        "toggle-search",
        "acknowledge",
        "navigate:/",
        "navigate:/hosting-comparison",
        "open-concept:ssr",
        "close-concept",
        "toggle-faq:learning",
        "bogus",
        "navigate:relative",
    ]);
    let target = prop::sample::select(vec!["mission", "collaborators", "cta", "footer", "elsewhere"]);
    prop_oneof![
        Just(HostInput::Hydrated),
        action.prop_map(|a| HostInput::Action { action: a.to_string() }),
        prop::sample::select(vec!["/", "/people", "/models", "/hosting-comparison"])
            .prop_map(|p| HostInput::Route { path: p.to_string() }),
        (target, 0.0f64..4000.0, 1.0f64..900.0).prop_map(|(t, y, h)| HostInput::Layout {
            target: t.to_string(),
            x: 0.0,
            y,
            width: 1280.0,
            height: h,
        }),
        (0.0f64..4000.0).prop_map(|y| HostInput::Viewport {
            x: 0.0,
            y,
            width: 1280.0,
            height: 800.0,
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_input_sequence_is_handled(inputs in prop::collection::vec(input(), 0..40)) {
        let mut page = SiteHost::new("/", Rc::new(MemoryStorage::new()), 2026);
        let mut revealed_mission = false;
        for input in inputs {
            let invalid = matches!(
                &input,
                HostInput::Action { action } if action == "bogus" || action == "navigate:relative"
            );
            let result = page.handle(input);
            prop_assert_eq!(result.is_err(), invalid);

            // Reveals never reverse while the home page stays mounted.
            let visible = page.model().home().mission.is_visible();
            if page.model().route() == "/" {
                prop_assert!(visible || !revealed_mission);
                revealed_mission = visible;
            } else {
                revealed_mission = false;
            }
        }
    }
}
