//! Card model: the deck of sections and the card's tunables.

mod route;

pub use route::{RouteMap, FINAL_PREFIX};

/// What a section is for, beyond showing its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Plain text page.
    Message,
    /// The page with the confirm button and the runaway button.
    Question {
        /// Route shown when the confirm button is pressed.
        yes_route: String,
    },
    /// A closing page; showing it launches the flower burst.
    Final,
}

/// One named page of the card.
#[derive(Debug, Clone)]
pub struct Section {
    /// Route name selecting this section.
    pub route: String,
    /// Title shown in the card header.
    pub title: String,
    /// Body lines, rendered centered.
    pub lines: Vec<String>,
    /// Section behavior.
    pub kind: SectionKind,
}

impl Section {
    /// A plain message section.
    pub fn message(route: &str, title: &str, lines: &[&str]) -> Self {
        Self {
            route: route.to_string(),
            title: title.to_string(),
            lines: lines.iter().map(ToString::to_string).collect(),
            kind: SectionKind::Message,
        }
    }

    /// The question section, wired to its confirm target.
    pub fn question(route: &str, title: &str, lines: &[&str], yes_route: &str) -> Self {
        Self {
            kind: SectionKind::Question {
                yes_route: yes_route.to_string(),
            },
            ..Self::message(route, title, lines)
        }
    }

    /// A final section.
    pub fn finale(route: &str, title: &str, lines: &[&str]) -> Self {
        Self {
            kind: SectionKind::Final,
            ..Self::message(route, title, lines)
        }
    }
}

/// Tunables for the card as a whole.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Triggers before the runaway button freezes.
    pub max_escapes: u32,
    /// Edge padding of the runaway placement, in cells.
    pub placement_padding: u16,
    /// Confirm button label.
    pub yes_label: String,
    /// Runaway button label.
    pub no_label: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            max_escapes: 6,
            // Cells are roughly 8x16 px, so 2 cells approximate the default
            // 16-unit inset of the placement geometry.
            placement_padding: 2,
            yes_label: "Yes".to_string(),
            no_label: "Ask me later".to_string(),
        }
    }
}

/// The deck: declared sections, in order.
#[derive(Debug, Clone)]
pub struct Deck {
    sections: Vec<Section>,
}

impl Deck {
    /// Build a deck from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The built-in card.
    pub fn standard() -> Self {
        Self::new(vec![
            Section::message(
                "welcome",
                "A little card for you",
                &[
                    "Someone made you a card.",
                    "",
                    "Turn the pages with ← and →.",
                ],
            ),
            Section::message(
                "message",
                "Before anything else",
                &[
                    "Some days deserve a small surprise,",
                    "and today it's yours.",
                ],
            ),
            Section::question(
                "question",
                "One small question",
                &["Will you keep me company today?"],
                "final-card",
            ),
            Section::finale(
                "final-card",
                "It's settled",
                &["You said yes!", "", "Flowers for you."],
            ),
        ])
    }

    /// Declared sections, in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by route name.
    pub fn get(&self, route: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.route == route)
    }

    /// Scan the declared route names into a [`RouteMap`].
    pub fn route_map(&self) -> RouteMap {
        RouteMap::new(self.sections.iter().map(|s| s.route.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_routes_in_order() {
        let deck = Deck::standard();
        let map = deck.route_map();
        assert_eq!(
            map.routes(),
            &["welcome", "message", "question", "final-card"]
        );
    }

    #[test]
    fn test_question_section_targets_a_final_route() {
        let deck = Deck::standard();
        let map = deck.route_map();
        let question = deck.get("question").unwrap();
        match &question.kind {
            SectionKind::Question { yes_route } => {
                assert!(map.contains(yes_route));
                assert!(map.is_final(yes_route));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_final_section_is_declared_final() {
        let deck = Deck::standard();
        let map = deck.route_map();
        let finale = deck.get("final-card").unwrap();
        assert_eq!(finale.kind, SectionKind::Final);
        assert!(map.is_final(&finale.route));
    }
}
