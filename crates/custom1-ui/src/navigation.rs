//! Top navigation bar with its slide-in drawer menu.

use custom1_core::ThemeConfig;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::context::use_config;

/// A drawer menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,

    /// Font Awesome icon class.
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            icon: None,
        }
    }

    /// Set the icon class.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Drawer entries enabled by the theme configuration.
pub fn menu_items(theme: &ThemeConfig) -> Vec<NavItem> {
    let mut items = vec![NavItem::new("Home", "/").with_icon("fas fa-home")];
    if theme.menu_archive {
        items.push(NavItem::new("Archive", "/archive").with_icon("fas fa-archive"));
    }
    if theme.menu_category {
        items.push(NavItem::new("Category", "/category").with_icon("fas fa-folder"));
    }
    if theme.menu_tag {
        items.push(NavItem::new("Tag", "/tag").with_icon("fas fa-tag"));
    }
    if theme.menu_search {
        items.push(NavItem::new("Search", "/search").with_icon("fas fa-search"));
    }
    items
}

/// Drawer visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// State after pressing the toggle button.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Closed => "Menu",
            Self::Open => "Close",
        }
    }

    /// Classes of the dimming overlay.
    pub fn overlay_class(self) -> &'static str {
        match self {
            Self::Closed => {
                "fixed inset-0 bg-black bg-opacity-50 transition-opacity duration-300 opacity-0 pointer-events-none"
            }
            Self::Open => "fixed inset-0 bg-black bg-opacity-50 transition-opacity duration-300 opacity-100",
        }
    }

    /// Classes of the sliding panel.
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Closed => {
                "fixed left-0 top-0 h-full w-80 bg-white dark:bg-gray-900 shadow-xl transform z-20 transition-transform duration-300 -translate-x-full"
            }
            Self::Open => {
                "fixed left-0 top-0 h-full w-80 bg-white dark:bg-gray-900 shadow-xl transform z-20 transition-transform duration-300 translate-x-0"
            }
        }
    }
}

/// Sticky top bar: logo, menu toggle and the drawer.
#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_config();
    let drawer = RwSignal::new(DrawerState::Closed);
    let items = menu_items(&config.theme);

    view! {
      <nav class="sticky top-0 w-full bg-white z-30 dark:bg-black border-b border-[#CCCCCC]">
        <div class="h-20 w-full flex items-center">
          <div class="flex items-center relative z-30 ml-4">
            <a href="/" class="flex items-center">
              <img src="/favicon.ico" alt="Logo" width="48" height="48" class="rounded-sm" />
            </a>

            <button
              on:click=move |_| drawer.update(|d| *d = d.toggled())
              class="text-base hover:border-b border-gray-900 dark:border-gray-100 transition-all duration-200 ml-4 font-normal flex items-center"
              aria-label="Toggle Menu"
              aria-expanded=move || drawer.get().is_open().to_string()
            >
              {move || drawer.get().label()}
              <Show when=move || !drawer.get().is_open()>
                <svg class="ml-1 w-4 h-4" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                  <path d="M12 15l-6-6h12z" fill="currentColor" />
                </svg>
              </Show>
            </button>
          </div>

          <div
            class=move || drawer.get().overlay_class()
            on:click=move |_| drawer.set(DrawerState::Closed)
          ></div>

          <aside class=move || drawer.get().panel_class() aria-hidden=move || (!drawer.get().is_open()).to_string()>
            <div class="p-8">
              <div class="mt-12">
                <h2 class="text-xl font-bold mb-4">"Menu"</h2>
                <MenuList items=items drawer=drawer />
              </div>
            </div>
          </aside>
        </div>
      </nav>
    }
}

/// Drawer link list; following a link closes the drawer.
#[component]
fn MenuList(items: Vec<NavItem>, drawer: RwSignal<DrawerState>) -> impl IntoView {
    view! {
      <ul class="space-y-2">
        {items
          .into_iter()
          .map(|item| {
            view! {
              <li>
                <a
                  href=item.url
                  class="menu-link flex items-center py-2 hover:underline"
                  on:click=move |_| drawer.set(DrawerState::Closed)
                >
                  {item.icon.map(|icon| view! { <i class=format!("mr-4 {icon}")></i> })}
                  {item.label}
                </a>
              </li>
            }
          })
          .collect_view()}
      </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_creation() {
        let item = NavItem::new("Home", "/");
        assert_eq!(item.label, "Home");
        assert_eq!(item.url, "/");
        assert!(item.icon.is_none());
    }

    #[test]
    fn test_menu_items_follow_flags() {
        let mut theme = ThemeConfig::default();
        let urls: Vec<_> = menu_items(&theme).into_iter().map(|i| i.url).collect();
        assert_eq!(urls, vec!["/", "/archive", "/category", "/tag", "/search"]);

        theme.menu_tag = false;
        theme.menu_search = false;
        let urls: Vec<_> = menu_items(&theme).into_iter().map(|i| i.url).collect();
        assert_eq!(urls, vec!["/", "/archive", "/category"]);
    }

    #[test]
    fn test_drawer_toggle_parity() {
        for presses in 0..10 {
            let state = (0..presses).fold(DrawerState::Closed, |s, _| s.toggled());
            assert_eq!(state.is_open(), presses % 2 == 1);
        }
    }

    #[test]
    fn test_drawer_labels() {
        assert_eq!(DrawerState::Closed.label(), "Menu");
        assert_eq!(DrawerState::Open.label(), "Close");
    }

    #[test]
    fn test_drawer_classes() {
        assert!(DrawerState::Closed.panel_class().ends_with("-translate-x-full"));
        assert!(DrawerState::Open.panel_class().ends_with(" translate-x-0"));
        assert!(DrawerState::Closed.overlay_class().contains("pointer-events-none"));
        assert!(DrawerState::Open.overlay_class().contains("opacity-100"));
    }

    #[test]
    fn test_nav_item_serialization() {
        let item = NavItem::new("Tag", "/tag").with_icon("fas fa-tag");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"Tag\""));
        assert!(json.contains("\"icon\":\"fas fa-tag\""));
    }
}
