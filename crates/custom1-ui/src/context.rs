//! Theme-wide state, passed through Leptos context instead of globals.

use std::sync::Arc;

use custom1_core::{Config, ContentSource, StaticContent};
use leptos::prelude::*;

/// Shared view state of one theme shell.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    /// Whether the search modal is open.
    pub search_open: RwSignal<bool>,

    /// Whether page content is still loading; the content slot fades in once false.
    pub loading: RwSignal<bool>,

    /// Dark colour scheme.
    pub dark_mode: RwSignal<bool>,

    /// Keyword highlighted in list items (search page only).
    pub keyword: RwSignal<String>,
}

impl ThemeContext {
    /// Fresh state: closed modal, not loading, light mode, no keyword.
    pub fn new() -> Self {
        Self {
            search_open: RwSignal::new(false),
            loading: RwSignal::new(false),
            dark_mode: RwSignal::new(false),
            keyword: RwSignal::new(String::new()),
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a theme context and provide it to the current owner's children.
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext::new();
    provide_context(ctx);
    ctx
}

/// Theme context already in scope, or a new one provided here.
pub fn ensure_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(provide_theme_context)
}

/// Theme context of the enclosing shell, or a detached one outside a shell.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

/// Configuration provided by the application, or defaults.
pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}

/// Shared handle to the content source.
pub type SharedContent = Arc<dyn ContentSource>;

/// Content source provided by the application, or an empty one.
pub fn use_content() -> SharedContent {
    use_context::<SharedContent>().unwrap_or_else(|| Arc::new(StaticContent::default()) as SharedContent)
}
