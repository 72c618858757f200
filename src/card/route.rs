//! Route resolution: which section is showing.
//!
//! The route list is a direct scan of the deck's declared sections, in
//! order. Resolution is forgiving: a declared name resolves to itself and
//! anything else falls back to the first declared route, so a stale or
//! mistyped fragment still lands somewhere sensible.

/// Route names with a given prefix count as "final" and launch the
/// flower burst when shown.
pub const FINAL_PREFIX: &str = "final";

/// Ordered route names scanned from the deck.
#[derive(Debug, Clone)]
pub struct RouteMap {
    routes: Vec<String>,
    final_prefix: String,
}

impl RouteMap {
    /// Build a route map from declared names, in declaration order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: names.into_iter().map(Into::into).collect(),
            final_prefix: FINAL_PREFIX.to_string(),
        }
    }

    /// Override the final-route prefix.
    #[must_use]
    pub fn with_final_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.final_prefix = prefix.into();
        self
    }

    /// All declared routes, in order.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// The first declared route, if any.
    pub fn first(&self) -> Option<&str> {
        self.routes.first().map(String::as_str)
    }

    /// Whether a route name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.iter().any(|r| r == name)
    }

    /// Resolve a fragment to a declared route.
    ///
    /// A leading `#` is tolerated. Unknown fragments fall back to the first
    /// declared route; `None` only when no routes are declared at all.
    pub fn resolve<'a>(&'a self, fragment: &'a str) -> Option<&'a str> {
        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        if self.contains(name) {
            Some(name)
        } else {
            self.first()
        }
    }

    /// Whether a route name designates a final section.
    pub fn is_final(&self, name: &str) -> bool {
        name.starts_with(&self.final_prefix)
    }

    /// The route after `name`, wrapping at the end.
    pub fn next_after(&self, name: &str) -> Option<&str> {
        let index = self.routes.iter().position(|r| r == name)?;
        let next = (index + 1) % self.routes.len();
        Some(&self.routes[next])
    }

    /// The route before `name`, wrapping at the start.
    pub fn previous_before(&self, name: &str) -> Option<&str> {
        let index = self.routes.iter().position(|r| r == name)?;
        let previous = (index + self.routes.len() - 1) % self.routes.len();
        Some(&self.routes[previous])
    }

    /// The route at a zero-based position.
    pub fn at(&self, index: usize) -> Option<&str> {
        self.routes.get(index).map(String::as_str)
    }
}
