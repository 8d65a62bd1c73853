//! End-to-end interaction flows through the step runner.
//!
//! Each test plays the browser: it pushes host events and parsed
//! `data-action` messages, steps the program, and inspects the model and
//! the rendered markup.

use std::rc::Rc;

use teems_core::event::Event;
use teems_core::geometry::Rect;
use teems_render::{Element, Node};
use teems_runtime::state_persistence::UnavailableStorage;
use teems_runtime::{MemoryStorage, Model, StepProgram, StorageBackend};
use teems_site::action::parse_action;
use teems_site::content::{ConceptKey, FaqKey};
use teems_site::{Msg, PageId, SiteModel};
use teems_widgets::gate::{ACK_STORAGE_KEY, GatePhase};
use teems_widgets::modal::ESCAPE_ACTION_ATTR;

fn boot(route: &str, storage: Rc<dyn StorageBackend>) -> StepProgram<SiteModel> {
    let mut prog = StepProgram::new(SiteModel::new(route, storage, 2026));
    prog.init();
    prog.push_event(Event::Hydrated);
    prog.step();
    prog
}

fn click(prog: &mut StepProgram<SiteModel>, action: &str) {
    let msg = parse_action(action).expect("valid action");
    prog.send(msg);
    prog.step();
}

fn view(prog: &StepProgram<SiteModel>) -> Node {
    prog.model().view()
}

fn count_class(node: &Node, class: &str) -> usize {
    node.find_all(&|el: &Element| el.has_class(class)).len()
}

fn layout(target: &'static str, y: f64) -> Event {
    Event::Layout {
        target: target.into(),
        bounds: Rect::new(0.0, y, 1000.0, 400.0),
    }
}

// ---------------------------------------------------------------------------
// Acknowledgement gate
// ---------------------------------------------------------------------------

#[test]
fn notice_shows_until_acknowledged_and_stays_dismissed_across_reloads() {
    let storage = Rc::new(MemoryStorage::new());

    let mut first = boot("/", storage.clone());
    assert!(first.model().gate().is_visible());
    assert!(view(&first).find_by_attr("role", "alertdialog").is_some());

    click(&mut first, "acknowledge");
    assert_eq!(first.model().gate().phase(), GatePhase::Dismissed);
    assert!(view(&first).find_by_attr("role", "alertdialog").is_none());
    assert_eq!(storage.get(ACK_STORAGE_KEY).unwrap().as_deref(), Some("true"));

    // A fresh page load over the same storage.
    let second = boot("/models", storage.clone());
    assert_eq!(second.model().gate().phase(), GatePhase::Dismissed);
    assert!(view(&second).find_by_attr("role", "alertdialog").is_none());
}

#[test]
fn any_stored_flag_value_dismisses_the_notice() {
    let storage = Rc::new(MemoryStorage::with_entries([(ACK_STORAGE_KEY, "yes")]));
    let prog = boot("/", storage);
    assert_eq!(prog.model().gate().phase(), GatePhase::Dismissed);

    let empty = Rc::new(MemoryStorage::with_entries([(ACK_STORAGE_KEY, "")]));
    let prog = boot("/", empty);
    assert!(prog.model().gate().is_visible());
}

#[test]
fn unavailable_storage_shows_notice_every_time_and_dismisses_for_the_session() {
    let storage: Rc<dyn StorageBackend> = Rc::new(UnavailableStorage::new("private mode"));
    let mut prog = boot("/", storage.clone());
    assert!(prog.model().gate().is_visible());

    click(&mut prog, "acknowledge");
    assert!(!prog.model().gate().is_visible());

    let reloaded = boot("/", storage);
    assert!(reloaded.model().gate().is_visible());
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn menu_toggles_and_closes_on_navigation() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    let _ = prog.take_outputs();

    click(&mut prog, "toggle-menu");
    assert!(prog.model().menu().is_open());
    let node = view(&prog);
    let panel = node
        .find_all(&|el: &Element| el.has_class("nav-mobile"))
        .into_iter()
        .next()
        .expect("mobile menu");
    assert!(panel.has_class("open"));

    click(&mut prog, "navigate:/people");
    assert!(!prog.model().menu().is_open());
    assert_eq!(prog.model().page(), PageId::People);
    assert_eq!(prog.location(), Some("/people"));

    let outputs = prog.take_outputs();
    assert_eq!(outputs.navigations, vec!["/people".to_string()]);
    let html = outputs.html.expect("frame rendered");
    assert!(html.contains(r#"data-route="/people""#));
    assert!(html.contains("To be implemented"));
}

#[test]
fn history_traversal_closes_menu() {
    let mut prog = boot("/models", Rc::new(MemoryStorage::new()));
    click(&mut prog, "toggle-menu");
    prog.push_event(Event::RouteChanged("/".into()));
    prog.step();
    assert!(!prog.model().menu().is_open());
    assert_eq!(prog.model().page(), PageId::Home);
    assert!(prog.take_outputs().navigations.is_empty());
}

#[test]
fn unknown_route_renders_not_found() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    click(&mut prog, "navigate:/nope");
    assert_eq!(prog.model().page(), PageId::NotFound);
    let node = view(&prog);
    assert!(node.text_content().contains("This page could not be found."));
}

#[test]
fn search_toggle_shows_input() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    assert!(view(&prog).find_by_attr("id", "site-search").is_none());
    click(&mut prog, "toggle-search");
    assert!(view(&prog).find_by_attr("id", "site-search").is_some());
    click(&mut prog, "toggle-search");
    assert!(!prog.model().search_open());
}

// ---------------------------------------------------------------------------
// Hosting page components
// ---------------------------------------------------------------------------

#[test]
fn concept_overlay_opens_replaces_and_closes() {
    let mut prog = boot("/hosting-comparison", Rc::new(MemoryStorage::new()));
    click(&mut prog, "acknowledge");
    assert!(view(&prog).find_by_attr("role", "dialog").is_none());

    click(&mut prog, "open-concept:isr");
    assert_eq!(prog.model().concepts().selected(), Some(ConceptKey::Isr));
    let node = view(&prog);
    let title = node.find_by_attr("id", "concept-title").expect("overlay title");
    assert_eq!(
        Node::from(title.clone()).text_content(),
        "Incremental Static Regeneration"
    );

    click(&mut prog, "open-concept:seo");
    assert_eq!(prog.model().concepts().selected(), Some(ConceptKey::Seo));
    assert_eq!(
        view(&prog)
            .find_all(&|el: &Element| el.attr_value("role") == Some("dialog"))
            .len(),
        1
    );

    click(&mut prog, "close-concept");
    assert!(!prog.model().concepts().is_open());
    assert!(view(&prog).find_by_attr("role", "dialog").is_none());
}

#[test]
fn escape_closes_the_concept_overlay_but_not_the_notice() {
    let mut prog = boot("/hosting-comparison", Rc::new(MemoryStorage::new()));
    assert!(
        view(&prog)
            .find(&|el: &Element| el.attr_value(ESCAPE_ACTION_ATTR).is_some())
            .is_none()
    );
    click(&mut prog, "acknowledge");

    click(&mut prog, "open-concept:ssr");
    let node = view(&prog);
    let escape = node
        .find(&|el: &Element| el.attr_value(ESCAPE_ACTION_ATTR).is_some())
        .and_then(|el| el.attr_value(ESCAPE_ACTION_ATTR))
        .expect("escape hook on the overlay")
        .to_string();
    click(&mut prog, &escape);
    assert!(!prog.model().concepts().is_open());
}

#[test]
fn questions_expand_independently() {
    let mut prog = boot("/hosting-comparison", Rc::new(MemoryStorage::new()));
    click(&mut prog, "toggle-faq:quarto");
    click(&mut prog, "toggle-faq:cms");
    assert!(prog.model().faq().is_open(FaqKey::Quarto));
    assert!(prog.model().faq().is_open(FaqKey::Cms));
    assert_eq!(count_class(&view(&prog), "faq-panel"), 2);

    click(&mut prog, "toggle-faq:quarto");
    assert!(!prog.model().faq().is_open(FaqKey::Quarto));
    assert_eq!(count_class(&view(&prog), "faq-panel"), 1);
}

#[test]
fn leaving_the_hosting_page_resets_its_components() {
    let mut prog = boot("/hosting-comparison", Rc::new(MemoryStorage::new()));
    click(&mut prog, "open-concept:cdn");
    click(&mut prog, "toggle-faq:hybrid");
    click(&mut prog, "navigate:/");
    click(&mut prog, "navigate:/hosting-comparison");
    assert!(!prog.model().concepts().is_open());
    assert_eq!(prog.model().faq().open_count(), 0);
}

// ---------------------------------------------------------------------------
// Scroll reveals
// ---------------------------------------------------------------------------

#[test]
fn sections_reveal_once_they_scroll_into_view() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    assert!(prog.model().home().hero.is_visible());
    assert!(!prog.model().home().mission.is_visible());

    prog.push_event(Event::Viewport(Rect::new(0.0, 0.0, 1000.0, 800.0)));
    prog.push_event(layout("mission", 1200.0));
    prog.push_event(layout("footer", 4000.0));
    prog.step();
    assert!(!prog.model().home().mission.is_visible());

    prog.push_event(Event::Viewport(Rect::new(0.0, 600.0, 1000.0, 800.0)));
    prog.step();
    assert!(prog.model().home().mission.is_visible());
    let node = view(&prog);
    let mission = node.find_by_attr("data-observe", "mission").expect("mission section");
    assert!(mission.has_class("is-visible"));

    // Scrolling away never hides a revealed section.
    prog.push_event(Event::Viewport(Rect::new(0.0, 0.0, 1000.0, 800.0)));
    prog.step();
    assert!(prog.model().home().mission.is_visible());
    assert!(!prog.model().footer().is_visible());
}

#[test]
fn route_change_forgets_old_layout() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    prog.push_event(Event::Viewport(Rect::new(0.0, 0.0, 1000.0, 800.0)));
    prog.push_event(layout("mission", 2000.0));
    prog.step();
    assert_eq!(prog.viewport().target_count(), 1);

    click(&mut prog, "navigate:/models");
    assert_eq!(prog.viewport().target_count(), 0);
    // Only the footer remains observed off the home page.
    assert_eq!(prog.active_subscriptions().len(), 1);

    click(&mut prog, "navigate:/");
    assert!(prog.model().home().hero.is_visible());
    assert!(!prog.model().home().mission.is_visible());
}

#[test]
fn footer_reveals_on_every_page() {
    let mut prog = boot("/people", Rc::new(MemoryStorage::new()));
    prog.push_event(Event::Viewport(Rect::new(0.0, 0.0, 1000.0, 800.0)));
    prog.push_event(layout("footer", 500.0));
    prog.step();
    assert!(prog.model().footer().is_visible());
    assert!(prog.active_subscriptions().is_empty());
}

#[test]
fn direct_messages_match_parsed_actions() {
    let mut prog = boot("/", Rc::new(MemoryStorage::new()));
    prog.send(Msg::Navigate("/hosting-comparison".into()));
    prog.step();
    assert_eq!(prog.model().page(), PageId::HostingComparison);
    assert_eq!(prog.model().route(), "/hosting-comparison");
}
