#![forbid(unsafe_code)]

//! Interactive components for the TEEMs site.
//!
//! Each component splits into a state type (owned by the page model and
//! mutated only through its operations) and a widget that renders that state
//! into markup. Interactive markup carries `data-action` attributes that the
//! host bridge turns back into messages.

pub mod accordion;
pub mod comparison;
pub mod gate;
pub mod modal;
pub mod nav;
pub mod overlay;
pub mod reveal;

use std::fmt::Debug;
use std::hash::Hash;

use teems_render::Node;

/// A renderable component.
pub trait Widget {
    /// Render the widget to markup.
    fn render(&self) -> Node;
}

/// A `StatefulWidget` renders from state owned elsewhere.
pub trait StatefulWidget {
    type State;

    /// Render the widget for `state`.
    fn render(&self, state: &Self::State) -> Node;
}

/// A member of a small fixed enumeration of content identifiers.
///
/// Keys round-trip through their slug, which is what markup and host
/// actions carry.
pub trait ContentKey: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every key, in display order.
    const ALL: &'static [Self];

    /// Stable identifier used in markup.
    fn slug(self) -> &'static str;

    /// Look a key up by slug.
    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.slug() == slug)
    }
}

/// Format a `name:slug` action string.
pub(crate) fn keyed_action(name: &str, slug: &str) -> String {
    format!("{name}:{slug}")
}

#[cfg(test)]
pub(crate) mod test_keys {
    use super::ContentKey;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl ContentKey for Fruit {
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Pear, Fruit::Plum];

        fn slug(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Pear => "pear",
                Fruit::Plum => "plum",
            }
        }
    }

    #[test]
    fn slugs_round_trip() {
        for &key in Fruit::ALL {
            assert_eq!(Fruit::from_slug(key.slug()), Some(key));
        }
        assert_eq!(Fruit::from_slug("banana"), None);
    }
}
