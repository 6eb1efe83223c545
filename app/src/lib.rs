use std::{borrow::Cow, sync::Arc};

use custom1_core::{Config, ContentSource, PagePurpose, PageProps, StaticContent};
use custom1_ui::{SharedContent, ThemeLayout, provide_theme_context, use_content};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_params_map,
    path,
};

/// Site configuration compiled into the bundle.
const SITE_CONFIG: &str = include_str!("../site/config.toml");

/// Exported content compiled into the bundle.
const SITE_CONTENT: &str = include_str!("../site/content.json");

fn load_config() -> Config {
    Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|err| {
        log::error!("invalid site config, using defaults: {err}");
        Config::default()
    })
}

fn load_content() -> StaticContent {
    StaticContent::from_json(SITE_CONTENT).unwrap_or_else(|err| {
        log::error!("invalid site content, rendering none: {err}");
        StaticContent::default()
    })
}

/// Routed page kinds; several share a page purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    Page,
    Category,
    Tag,
    CategoryIndex,
    TagIndex,
    Search,
    Archive,
    NotFound,
    Slug,
}

impl SiteRoute {
    /// Purpose and props of the route, reading route parameters through `param`.
    ///
    /// A slug without a post resolves to the not-found purpose.
    pub fn resolve(
        self,
        content: &dyn ContentSource,
        param: impl Fn(&str) -> Option<String>,
    ) -> (PagePurpose, PageProps) {
        match self {
            Self::Home => (PagePurpose::Index, content.index_props(1)),
            Self::Page => {
                let page = param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
                (PagePurpose::List, content.index_props(page))
            }
            Self::Category => {
                let name = param("name").unwrap_or_default();
                (PagePurpose::List, content.category_props(&name))
            }
            Self::Tag => {
                let name = param("name").unwrap_or_default();
                (PagePurpose::List, content.tag_props(&name))
            }
            Self::CategoryIndex => (PagePurpose::CategoryIndex, content.category_index_props()),
            Self::TagIndex => (PagePurpose::TagIndex, content.tag_index_props()),
            Self::Search => {
                let keyword = param("keyword").unwrap_or_default();
                (PagePurpose::Search, content.search_props(keyword.trim()))
            }
            Self::Archive => (PagePurpose::Archive, content.archive_props()),
            Self::NotFound => (PagePurpose::NotFound, content.base_props()),
            Self::Slug => {
                let slug = param("slug").unwrap_or_default();
                let props = content.slug_props(&slug);
                let purpose = if props.post.is_some() {
                    PagePurpose::Slug
                } else {
                    PagePurpose::NotFound
                };
                (purpose, props)
            }
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = load_config();
    let title = config.site.title.clone();
    provide_context(config);
    provide_context::<SharedContent>(Arc::new(load_content()));
    provide_theme_context();

    view! {
      <Title text=title />

      <Router>
        <main>
          <Routes fallback=|| view! { <RoutedPage route=SiteRoute::NotFound /> }>
            <Route path=path!("/") view=|| view! { <RoutedPage route=SiteRoute::Home /> } />
            <Route path=path!("/page/:page") view=|| view! { <RoutedPage route=SiteRoute::Page /> } />
            <Route path=path!("/archive") view=|| view! { <RoutedPage route=SiteRoute::Archive /> } />
            <Route path=path!("/category") view=|| view! { <RoutedPage route=SiteRoute::CategoryIndex /> } />
            <Route path=path!("/category/:name") view=|| view! { <RoutedPage route=SiteRoute::Category /> } />
            <Route path=path!("/tag") view=|| view! { <RoutedPage route=SiteRoute::TagIndex /> } />
            <Route path=path!("/tag/:name") view=|| view! { <RoutedPage route=SiteRoute::Tag /> } />
            <Route path=path!("/search") view=|| view! { <RoutedPage route=SiteRoute::Search /> } />
            <Route path=path!("/search/:keyword") view=|| view! { <RoutedPage route=SiteRoute::Search /> } />
            <Route path=path!("/404") view=|| view! { <RoutedPage route=SiteRoute::NotFound /> } />
            <Route path=path!("/*slug") view=|| view! { <RoutedPage route=SiteRoute::Slug /> } />
          </Routes>
        </main>
      </Router>
    }
}

/// Builds props from the route parameters and renders the theme.
#[component]
fn RoutedPage(route: SiteRoute) -> impl IntoView {
    let content = use_content();
    let params = use_params_map();

    move || {
        let params = params.get();
        let (purpose, props) = route.resolve(content.as_ref(), |key| decoded(params.get(key)));
        view! { <ThemeLayout purpose=purpose props=props /> }
    }
}

fn decoded(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let decoded = urlencoding::decode(&raw).map(Cow::into_owned);
    Some(decoded.unwrap_or(raw))
}
