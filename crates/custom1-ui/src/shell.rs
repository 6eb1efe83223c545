//! Pieces of the page shell around every body.

use leptos::prelude::*;

use crate::context::use_config;

/// Theme-scoped global rules.
const THEME_CSS: &str = r#"
.dark body {
  background-color: black;
}

.forbid-copy {
  user-select: none;
  -webkit-user-select: none;
  -ms-user-select: none;
}

#theme-simple .blog-item-title {
  color: black;
}

.dark #theme-simple .blog-item-title {
  color: #d1d5db;
}

.notion {
  margin-top: 0 !important;
  margin-bottom: 0 !important;
}

#theme-simple .menu-link {
  text-decoration: none;
  color: inherit;
  cursor: pointer;
}
"#;

/// Global stylesheet of the theme.
#[component]
pub fn Style() -> impl IntoView {
    view! { <style>{THEME_CSS}</style> }
}

/// Announcement strip above the navigation bar.
#[component]
pub fn TopBar(
    /// Announcement HTML.
    content: String,
) -> impl IntoView {
    view! {
      <header id="top-bar" class="w-full px-4 py-2 text-center text-sm bg-[#f6f6f6] dark:bg-gray-900">
        <div id="announcement-content" inner_html=content></div>
      </header>
    }
}

/// Classes of the content slot; it fades in once loading ends.
pub fn loading_class(loading: bool) -> &'static str {
    if loading {
        "transition ease-in-out duration-300 transform opacity-0 -translate-y-16"
    } else {
        "transition ease-in-out duration-700 transform opacity-100 translate-y-0"
    }
}

/// Fixed button scrolling the window back to the top.
#[component]
pub fn JumpToTopButton() -> impl IntoView {
    let jump = move |_| window().scroll_to_with_x_and_y(0.0, 0.0);

    view! {
      <div class="fixed right-4 bottom-4 z-20">
        <button
          class="w-10 h-10 rounded-full bg-[#F5F5F5] hover:bg-[#EAEAEA] text-black shadow"
          aria-label="Back to top"
          title="Back to top"
          on:click=jump
        >
          <i class="fas fa-arrow-up"></i>
        </button>
      </div>
    }
}

/// Where an ad unit sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdKind {
    /// Below the page content.
    Native,
    /// Inside an article.
    InArticle,
}

impl AdKind {
    /// `data-ad-layout` value.
    pub fn layout(self) -> &'static str {
        match self {
            Self::Native => "",
            Self::InArticle => "in-article",
        }
    }

    /// `data-ad-format` value.
    pub fn format(self) -> &'static str {
        match self {
            Self::Native => "auto",
            Self::InArticle => "fluid",
        }
    }
}

/// AdSense unit, rendered only when a client id is configured.
#[component]
pub fn AdSlot(kind: AdKind) -> impl IntoView {
    use_config().site.adsense_client_id.map(|client| {
        view! {
          <ins
            class="adsbygoogle w-full py-1"
            style="display: block"
            data-ad-client=client
            data-ad-layout=kind.layout()
            data-ad-format=kind.format()
            data-full-width-responsive="true"
          ></ins>
        }
    })
}
