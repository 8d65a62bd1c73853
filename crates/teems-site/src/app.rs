#![forbid(unsafe_code)]

//! Top-level site model.
//!
//! One [`SiteModel`] owns every component instance on the current page plus
//! the layout-level state (menu, search bar, notice, footer). Messages come
//! from host events, parsed `data-action` strings, and viewport
//! subscriptions. Page-level state is rebuilt whenever the route changes,
//! mirroring a remount; layout-level state survives navigation.

use std::fmt;
use std::rc::Rc;

use teems_core::event::Event;
use teems_core::intersection::IntersectionEntry;
use teems_render::{Element, Node};
use teems_runtime::{Cmd, Model, StorageBackend, Subscription};
use teems_widgets::StatefulWidget;
use teems_widgets::accordion::AccordionState;
use teems_widgets::gate::AcknowledgementGate;
use teems_widgets::nav::NavMenuState;
use teems_widgets::overlay::OverlayState;
use teems_widgets::reveal::RevealState;

use crate::chrome;
use crate::content::site::NOTICE;
use crate::content::{ConceptKey, FaqKey};
use crate::pages::home::HomeSections;
use crate::pages::{self, PageId};

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// Site message.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Client scripts took over the server-rendered page.
    Hydrated,
    /// The location changed (link, history, or initial load).
    RouteChanged(String),
    /// Open or close the mobile menu.
    ToggleMenu,
    /// Open or close the header search bar.
    ToggleSearch,
    /// A navigation link was activated.
    Navigate(String),
    /// The notice's confirm button was pressed.
    Acknowledge,
    /// Show a concept's details.
    OpenConcept(ConceptKey),
    /// Dismiss the concept overlay.
    CloseConcept,
    /// Expand or collapse one question.
    ToggleFaq(FaqKey),
    /// An observed section reported an intersection.
    SectionEntered(IntersectionEntry),
    /// Host events with no model-level meaning.
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Hydrated => Self::Hydrated,
            Event::RouteChanged(path) => Self::RouteChanged(path),
            // Geometry feeds subscriptions inside the runner.
            Event::Layout { .. } | Event::Viewport(_) => Self::Noop,
        }
    }
}

// ---------------------------------------------------------------------------
// SiteModel
// ---------------------------------------------------------------------------

/// Page-level component state, rebuilt on every route change.
#[derive(Debug, Clone, Default)]
struct PageState {
    home: HomeSections,
    concepts: OverlayState<ConceptKey>,
    faq: AccordionState<FaqKey>,
}

/// Top-level site state.
pub struct SiteModel {
    storage: Rc<dyn StorageBackend>,
    route: String,
    page: PageId,
    hydrated: bool,
    menu: NavMenuState,
    search_open: bool,
    gate: AcknowledgementGate,
    footer: RevealState,
    state: PageState,
    copyright_year: i32,
}

impl fmt::Debug for SiteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteModel")
            .field("storage", &self.storage.name())
            .field("route", &self.route)
            .field("page", &self.page)
            .field("hydrated", &self.hydrated)
            .field("menu_open", &self.menu.is_open())
            .field("search_open", &self.search_open)
            .field("gate", &self.gate.phase())
            .finish_non_exhaustive()
    }
}

impl SiteModel {
    /// A server-rendered (not yet hydrated) model at `route`.
    pub fn new(route: impl Into<String>, storage: Rc<dyn StorageBackend>, copyright_year: i32) -> Self {
        let route = route.into();
        Self {
            storage,
            page: PageId::from_path(&route),
            route,
            hydrated: false,
            menu: NavMenuState::new(),
            search_open: false,
            gate: AcknowledgementGate::new(),
            footer: chrome::footer_reveal(),
            state: PageState::default(),
            copyright_year,
        }
    }

    /// Current location path.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Page rendered for the current route.
    #[must_use]
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Whether client scripts are running.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Mobile menu state.
    #[must_use]
    pub fn menu(&self) -> &NavMenuState {
        &self.menu
    }

    /// Whether the header search bar is open.
    #[must_use]
    pub fn search_open(&self) -> bool {
        self.search_open
    }

    /// Disclaimer gate.
    #[must_use]
    pub fn gate(&self) -> &AcknowledgementGate {
        &self.gate
    }

    /// Concept overlay on the hosting page.
    #[must_use]
    pub fn concepts(&self) -> &OverlayState<ConceptKey> {
        &self.state.concepts
    }

    /// Question list on the hosting page.
    #[must_use]
    pub fn faq(&self) -> &AccordionState<FaqKey> {
        &self.state.faq
    }

    /// Home section reveals.
    #[must_use]
    pub fn home(&self) -> &HomeSections {
        &self.state.home
    }

    /// Footer reveal.
    #[must_use]
    pub fn footer(&self) -> &RevealState {
        &self.footer
    }

    fn mount_page(&mut self) {
        self.state = PageState::default();
        if self.hydrated && self.page == PageId::Home {
            self.state.home.mount();
        }
    }

    fn on_route_changed(&mut self, path: String) {
        self.menu.on_navigate();
        if path == self.route {
            return;
        }
        let page = PageId::from_path(&path);
        tracing::debug!(from = %self.route, to = %path, ?page, "route changed");
        self.route = path;
        self.page = page;
        self.mount_page();
    }

    fn main_content(&self) -> Node {
        match self.page {
            PageId::Home => pages::home::view(&self.state.home),
            PageId::HostingComparison => {
                pages::hosting::view(&self.state.concepts, &self.state.faq)
            }
            PageId::People | PageId::Models | PageId::NotFound => {
                pages::placeholder::view(self.page)
            }
        }
    }
}

impl Model for SiteModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Hydrated => {
                if self.hydrated {
                    return Cmd::none();
                }
                self.hydrated = true;
                self.gate.hydrate(self.storage.as_ref());
                if self.page == PageId::Home {
                    self.state.home.mount();
                }
                tracing::debug!(route = %self.route, gate = ?self.gate.phase(), "site hydrated");
            }
            Msg::RouteChanged(path) => self.on_route_changed(path),
            Msg::ToggleMenu => self.menu.toggle_menu(),
            Msg::ToggleSearch => self.search_open = !self.search_open,
            Msg::Navigate(path) => {
                self.menu.on_navigate();
                return Cmd::navigate(path);
            }
            Msg::Acknowledge => self.gate.acknowledge(self.storage.as_ref()),
            Msg::OpenConcept(key) => {
                if self.page == PageId::HostingComparison {
                    self.state.concepts.open(key);
                } else {
                    tracing::trace!(?key, page = ?self.page, "concept overlay not mounted");
                }
            }
            Msg::CloseConcept => self.state.concepts.close(),
            Msg::ToggleFaq(key) => {
                if self.page == PageId::HostingComparison {
                    self.state.faq.toggle(key);
                }
            }
            Msg::SectionEntered(entry) => {
                if !self.state.home.observe(&entry) {
                    self.footer.observe(&entry);
                }
            }
            Msg::Noop => {}
        }
        Cmd::none()
    }

    fn view(&self) -> Node {
        Element::new("div")
            .class("site-root")
            .attr("data-route", self.route.clone())
            .child(chrome::header(&self.route, &self.menu, self.search_open))
            .child(Element::new("main").class("site-main").child(self.main_content()))
            .child(chrome::footer(&self.footer, self.copyright_year))
            .child(NOTICE.render(&self.gate))
            .into()
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        if !self.hydrated {
            return vec![];
        }
        let mut subs = Vec::new();
        if self.page == PageId::Home {
            subs.extend(self.state.home.subscriptions(Msg::SectionEntered));
        }
        subs.extend(self.footer.subscription(Msg::SectionEntered));
        subs
    }
}
