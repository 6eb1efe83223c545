//! Post summary card used by every list body.

use custom1_core::{
    BlogItemLayout, PostSummary, blog_item_layout,
    content::category_href,
    highlight::{HIGHLIGHT_CLASS, Highlighter},
};
use leptos::prelude::*;

use crate::{
    context::{use_config, use_theme},
    viewport::use_viewport_width,
};

/// How a page icon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Image URL.
    Image,
    /// Emoji or other text.
    Text,
}

impl IconKind {
    pub fn of(icon: &str) -> Self {
        if icon.starts_with("http") || icon.starts_with('/') || icon.starts_with("data:") {
            Self::Image
        } else {
            Self::Text
        }
    }
}

/// One post in a list.
///
/// Layout follows the viewport width: stacked below the large-screen
/// breakpoint, a text/cover row at or above it.
#[component]
pub fn BlogItem(
    /// The post to summarize.
    post: PostSummary,
) -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let width = use_viewport_width();
    let layout = Memo::new(move |_| blog_item_layout(width.get()));

    let dom_id = post.item_dom_id();
    let style_key = dom_id.clone();
    let href = post.link();
    let date = post.display_date().map(str::to_string);
    let icon = post.page_icon.clone().filter(|_| config.site.post_title_icon);
    let cover = post
        .page_cover_thumbnail
        .clone()
        .filter(|_| config.theme.simple_post_cover_enable);
    let summary = post.summary.clone().unwrap_or_default();

    let cover_view = cover.map(|src| {
        let href = href.clone();
        view! {
          <div class="article-cover flex-shrink-0 overflow-hidden" style=move || layout.get().cover_style()>
            <a href=href>
              <img
                src=src
                alt=""
                loading="lazy"
                class="w-full h-full object-cover object-center cursor-pointer"
              />
            </a>
          </div>
        }
    });

    view! {
      <div
        id=dom_id
        class="blog-item my-0 border-b border-[#cccccc] dark:border-gray-200 p-4 sm:p-8"
        style=move || layout.get().container_style()
      >
        {move || layout.get().style_block(&style_key).map(|css| view! { <style>{css}</style> })}
        <div class=move || layout.get().row_class()>
          <article class="article-info flex-1 min-w-0">
            <div class="flex items-baseline mb-4">
              {post
                .category
                .clone()
                .map(|category| {
                  let category_link = category_href(&category);
                  view! {
                    <span class=move || layout.get().category_class()>
                      <a href=category_link class="menu-link">
                        {category}
                      </a>
                    </span>
                  }
                })}
              <span class=move || layout.get().date_class()>{date}</span>
            </div>

            <h2 class="mb-0">
              <a
                href=href.clone()
                class=move || layout.get().title_class()
                style=move || BlogItemLayout::clamp_style(layout.get().title_lines)
              >
                {icon.map(|icon| view! { <PageIcon icon=icon /> })}
                <Highlighted text=post.title.clone() keyword=theme.keyword />
              </a>
            </h2>

            <a href=href.clone()>
              <div
                class=move || layout.get().summary_class()
                style=move || BlogItemLayout::clamp_style(layout.get().summary_lines)
              >
                <Highlighted text=summary keyword=theme.keyword />
              </div>
            </a>

            <div class=move || layout.get().button_wrapper_class()>
              <a
                href=href
                class="inline-flex items-center justify-center bg-[#F5F5F5] hover:bg-[#EAEAEA] text-black font-medium transition-all duration-200"
                style=move || layout.get().button.style()
              >
                "More"
              </a>
            </div>
          </article>

          {cover_view}
        </div>
      </div>
    }
}

/// Page icon before a title: an image for URLs, inline text for emoji.
#[component]
pub fn PageIcon(icon: String) -> impl IntoView {
    match IconKind::of(&icon) {
        IconKind::Image => {
            view! { <img src=icon alt="" class="inline w-8 h-8 mr-2 align-middle" /> }.into_any()
        }
        IconKind::Text => view! { <span class="mr-2">{icon}</span> }.into_any(),
    }
}

/// Text with keyword matches wrapped in highlight spans.
#[component]
pub fn Highlighted(
    /// Text to render.
    #[prop(into)]
    text: String,
    /// Keyword to highlight; blank means none.
    #[prop(into)]
    keyword: Signal<String>,
) -> impl IntoView {
    move || {
        Highlighter::new(&keyword.get())
            .fragments(&text)
            .into_iter()
            .map(|fragment| {
                let class = fragment.matched.then_some(HIGHLIGHT_CLASS);
                view! { <span class=class>{fragment.text}</span> }
            })
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use custom1_core::Config;

    use super::*;

    fn render(post: PostSummary, config: Config) -> String {
        Owner::new().with(|| {
            provide_context(config);
            view! { <BlogItem post=post /> }.to_html()
        })
    }

    #[test]
    fn test_bare_post_has_no_cover_or_category() {
        let post = PostSummary {
            id: "x".to_string(),
            title: "Bare".to_string(),
            ..Default::default()
        };
        let html = render(post, Config::default());

        assert!(html.contains("id=\"blog-item-x\""));
        assert!(!html.contains("article-cover"));
        assert!(!html.contains("/category/"));
    }

    #[test]
    fn test_large_screen_card_reserves_min_height() {
        let mut config = Config::default();
        config.theme.simple_post_cover_enable = true;
        let post = PostSummary {
            id: "x".to_string(),
            title: "Full".to_string(),
            category: Some("Life".to_string()),
            page_cover_thumbnail: Some("https://example.com/cover.png".to_string()),
            ..Default::default()
        };
        let html = render(post, config);

        assert!(html.contains("style=\"min-height: 398px"));
        assert!(html.contains("#blog-item-x { min-height: 398px; }"));
        assert!(html.contains("article-cover"));
        assert!(html.contains("href=\"/category/Life\""));
        assert!(html.contains("text-[32px]"));
        assert!(!html.contains("lg:text-"));
    }

    #[test]
    fn test_icon_kind() {
        assert_eq!(IconKind::of("https://example.com/i.png"), IconKind::Image);
        assert_eq!(IconKind::of("/icons/a.svg"), IconKind::Image);
        assert_eq!(IconKind::of("🦀"), IconKind::Text);
        assert_eq!(IconKind::of(""), IconKind::Text);
    }
}
