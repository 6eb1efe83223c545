//! custom1 Core Library
//!
//! Configuration, content records and the pure layout rules behind the custom1
//! blog theme. Nothing in this crate touches the DOM, so every rule the
//! components rely on can be unit-tested natively.

pub mod config;
pub mod content;
pub mod error;
pub mod footer;
pub mod highlight;
pub mod layout;
pub mod page;
pub mod source;

pub use config::{Config, PostListStyle, SiteConfig, ThemeConfig};
pub use content::{ArchiveGroup, CategoryOption, Post, PostKind, PostSummary, TagOption};
pub use error::{CoreError, Result};
pub use layout::{BlogItemLayout, ScreenClass, blog_item_layout};
pub use page::{LayoutBody, LayoutPlan, ListVariant, PagePurpose, PageProps, TopSlot, select_layout};
pub use source::{ContentSource, StaticContent};
