//! custom1 UI Components
//!
//! Leptos components of the custom1 blog theme.
//!
//! # Components
//!
//! ## Shell
//! - [`ThemeLayout`] - Picks the body for a page purpose and wraps it in [`LayoutBase`]
//! - [`NavBar`] - Sticky bar with the slide-in drawer menu
//! - [`Footer`] - Copyright, filing links and the dark-mode switch
//!
//! ## Lists
//! - [`BlogItem`] - Post summary card following the viewport width
//! - [`BlogListPage`] / [`BlogListScroll`] - Paginated and load-more lists
//!
//! ## Search
//! - [`SearchModal`] - Modal search over every post (Ctrl/Cmd+K)
//! - [`SearchInput`] - Keyword form of the search page
//!
//! # Example
//!
//! ```ignore
//! use custom1_core::{PagePurpose, StaticContent, ContentSource};
//! use custom1_ui::ThemeLayout;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Home(content: StaticContent) -> impl IntoView {
//!     view! { <ThemeLayout purpose=PagePurpose::Index props=content.index_props(1) /> }
//! }
//! ```

#![recursion_limit = "256"]

pub mod article;
pub mod blog_item;
pub mod context;
pub mod footer;
pub mod layouts;
pub mod lists;
pub mod navigation;
pub mod search;
pub mod shell;
pub mod viewport;

pub use article::{ArticleAround, ArticleInfo, ArticleLock, NotionPage, RecommendPosts};
pub use blog_item::{BlogItem, Highlighted, PageIcon};
pub use context::{SharedContent, ThemeContext, provide_theme_context, use_config, use_content, use_theme};
pub use footer::{BeiAnGongAn, DarkModeButton, Footer};
pub use layouts::{
    Layout404, LayoutArchive, LayoutBase, LayoutCategoryIndex, LayoutIndex, LayoutPostList, LayoutSearch,
    LayoutSlug, LayoutTagIndex, ThemeLayout,
};
pub use lists::{BlogArchiveItem, BlogListPage, BlogListScroll, BlogPostBar};
pub use navigation::{DrawerState, NavBar, NavItem, menu_items};
pub use search::{SearchBox, SearchInput, SearchModal, SearchResultItem, SearchResults, SearchShortcut};
pub use shell::{AdKind, AdSlot, JumpToTopButton, Style, TopBar};
pub use viewport::{sample_viewport_width, use_viewport_width};
