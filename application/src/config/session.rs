//! Session options
//!
//! Values read once at startup that stay fixed for the whole session.

use menu_domain::Language;

/// Startup options for a browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Ordering affordances enabled
    pub order_mode: bool,
    /// Overrides the configured default language
    pub language: Option<Language>,
}

impl SessionOptions {
    pub fn with_order_mode(mut self, order_mode: bool) -> Self {
        self.order_mode = order_mode;
        self
    }

    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}

/// Whether a page URL requests order mode
///
/// True only when the first `order` query parameter is exactly `true`.
pub fn order_mode_from_url(url: &str) -> bool {
    let Some((_, rest)) = url.split_once('?') else {
        return false;
    };
    let query = rest.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == "order").then_some(value)
        })
        .next()
        .is_some_and(|value| value == "true")
}
