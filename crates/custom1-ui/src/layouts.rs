//! Page layouts: the shared shell and one body per page purpose.

use std::time::Duration;

use custom1_core::{
    ArchiveGroup, CategoryOption, LayoutBody, ListVariant, PagePurpose, PageProps, Post, PostKind,
    PostSummary, TagOption, TopSlot, select_layout,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::{
    article::{ArticleAround, ArticleInfo, ArticleLock, NotionPage, RecommendPosts},
    context::{ensure_theme_context, use_config, use_theme},
    footer::Footer,
    lists::{BlogArchiveItem, BlogListPage, BlogListScroll, BlogPostBar},
    navigation::NavBar,
    search::{SearchInput, SearchModal, SearchShortcut},
    shell::{AdKind, AdSlot, JumpToTopButton, Style, TopBar, loading_class},
};

/// Selector of the rendered article body, checked before redirecting to `/404`.
pub const ARTICLE_SELECTOR: &str = "#article-wrapper #notion-article";

/// Shell shared by every page: navigation, content slot, footer and overlays.
#[component]
pub fn LayoutBase(
    /// Every post, searched by the modal.
    all_posts: Vec<PostSummary>,
    children: Children,
) -> impl IntoView {
    let config = use_config();
    let theme = ensure_theme_context();

    Effect::new(move |_| {
        let dark = theme.dark_mode.get();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
                log::warn!("failed to toggle dark class: {err:?}");
            }
        }
    });

    let top_bar = config
        .theme
        .simple_top_bar
        .then(|| config.theme.simple_top_bar_content.clone())
        .flatten();

    view! {
      <div class=move || if theme.dark_mode.get() { "dark" } else { "" }>
        <div
          id="theme-simple"
          class=format!(
            "{} min-h-screen flex flex-col dark:text-gray-300 bg-white dark:bg-black scroll-smooth",
            config.site.font_style,
          )
        >
          <Style />
          {top_bar.map(|content| view! { <TopBar content=content /> })}
          <NavBar />

          <div id="container-wrapper" class="w-full flex-1 flex items-start max-w-[1600px] mx-auto pt-12 px-4">
            <div id="container-inner" class="w-full flex-grow min-h-fit">
              <div class=move || loading_class(theme.loading.get())>{children()}</div>
              <AdSlot kind=AdKind::Native />
            </div>
          </div>

          <JumpToTopButton />
          <SearchModal posts=all_posts />
          <SearchShortcut />
          <Footer />
        </div>
      </div>
    }
}

/// Filter bar followed by the configured list variant.
#[component]
pub fn LayoutPostList(
    posts: Vec<PostSummary>,
    variant: ListVariant,
    #[prop(default = 1)] page: usize,
    #[prop(default = None)] tag: Option<String>,
    #[prop(default = None)] category: Option<String>,
) -> impl IntoView {
    let list = match variant {
        ListVariant::Paginated => view! { <BlogListPage posts=posts page=page /> }.into_any(),
        ListVariant::InfiniteScroll => view! { <BlogListScroll posts=posts /> }.into_any(),
    };

    view! {
      <BlogPostBar tag=tag category=category />
      {list}
    }
}

/// Home page.
#[component]
pub fn LayoutIndex(posts: Vec<PostSummary>, variant: ListVariant, page: usize) -> impl IntoView {
    view! { <LayoutPostList posts=posts variant=variant page=page /> }
}

/// Search results: the post list with the keyword highlighted.
#[component]
pub fn LayoutSearch(
    posts: Vec<PostSummary>,
    variant: ListVariant,
    keyword: String,
    top_slot: TopSlot,
) -> impl IntoView {
    let theme = use_theme();
    theme.keyword.set(keyword.clone());
    on_cleanup(move || {
        theme.keyword.try_set(String::new());
    });

    let input = (top_slot == TopSlot::SearchInput).then(|| view! { <SearchInput keyword=keyword /> });

    view! {
      {input}
      <LayoutPostList posts=posts variant=variant />
    }
}

/// Posts grouped by month.
#[component]
pub fn LayoutArchive(archive_posts: Vec<ArchiveGroup>) -> impl IntoView {
    view! {
      <div class="mb-10 pb-20 md:py-12 p-3 min-h-screen w-full">
        {archive_posts.into_iter().map(|group| view! { <BlogArchiveItem group=group /> }).collect_view()}
      </div>
    }
}

/// One article, behind its password form when locked.
#[component]
pub fn LayoutSlug(
    post: Post,
    prev: Option<PostSummary>,
    next: Option<PostSummary>,
    recommend_posts: Vec<PostSummary>,
) -> impl IntoView {
    let config = use_config();
    let width_class = if config.site.full_width {
        "px-2"
    } else {
        "px-2 xl:max-w-4xl 2xl:max-w-6xl"
    };

    let locked = RwSignal::new(post.is_locked());
    let is_post = post.summary.kind == PostKind::Post;
    let post = StoredValue::new(post);
    let around = StoredValue::new((prev, next, recommend_posts));

    let validate_password = Callback::new(move |attempt: String| {
        let ok = post.with_value(|p| p.check_password(&attempt));
        if ok {
            locked.set(false);
        }
        ok
    });

    view! {
      <Show
        when=move || !locked.get()
        fallback=move || view! { <ArticleLock validate_password=validate_password /> }
      >
        <div class=width_class>
          <ArticleInfo post=post.with_value(|p| p.summary.clone()) />
          <div id="article-wrapper">
            <NotionPage content=post.with_value(|p| p.content_html.clone()) />
          </div>
          <AdSlot kind=AdKind::InArticle />
          {is_post
            .then(|| {
              let (prev, next, recommend) = around.get_value();
              view! {
                <ArticleAround prev=prev next=next />
                <RecommendPosts posts=recommend />
              }
            })}
        </div>
      </Show>
    }
}

/// Not-found body.
///
/// With no post, schedules a check after the configured wait and moves to
/// `/404` if no article body rendered meanwhile.
#[component]
pub fn Layout404(#[prop(default = None)] post: Option<Post>) -> impl IntoView {
    let config = use_config();
    let path = use_location().pathname;

    if post.is_none() && path.get_untracked() != "/404" {
        let navigate = use_navigate();
        let wait = Duration::from_millis(config.waiting_time_for_404_ms());
        let check = move || {
            if !article_rendered() {
                navigate("/404", Default::default());
                log::warn!("page not found: {}", path.get_untracked());
            }
        };
        match set_timeout_with_handle(check, wait) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::error!("failed to schedule not-found check: {err:?}"),
        }
    }

    view! { <div class="py-16 text-center text-xl">"404 Not found."</div> }
}

fn article_rendered() -> bool {
    matches!(document().query_selector(ARTICLE_SELECTOR), Ok(Some(_)))
}

/// Every category with its post count.
#[component]
pub fn LayoutCategoryIndex(category_options: Vec<CategoryOption>) -> impl IntoView {
    view! {
      <div id="category-list" class="duration-200 flex flex-wrap">
        {category_options
          .into_iter()
          .map(|category| {
            view! {
              <a href=category.href()>
                <div class="hover:text-black dark:hover:text-white dark:text-gray-300 dark:hover:bg-gray-600 px-5 cursor-pointer py-2 hover:bg-gray-100">
                  <i class="mr-4 fas fa-folder"></i>
                  {category.label()}
                </div>
              </a>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Every tag in its colour.
#[component]
pub fn LayoutTagIndex(tag_options: Vec<TagOption>) -> impl IntoView {
    view! {
      <div id="tags-list" class="duration-200 flex flex-wrap">
        {tag_options
          .into_iter()
          .map(|tag| {
            let class = format!(
              "cursor-pointer inline-block rounded hover:bg-gray-500 hover:text-white duration-200 mr-2 py-1 px-2 text-xs whitespace-nowrap dark:hover:text-white text-gray-600 hover:shadow-xl dark:border-gray-400 {} dark:bg-gray-800",
              tag.background_class(),
            );
            view! {
              <div class="p-2">
                <a href=tag.href() class=class>
                  <div class="font-light dark:text-gray-400">
                    <i class="mr-1 fas fa-tag"></i>
                    " "
                    {tag.label()}
                  </div>
                </a>
              </div>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Render a page purpose inside the shell.
#[component]
pub fn ThemeLayout(purpose: PagePurpose, props: PageProps) -> impl IntoView {
    let all_posts = props.all_posts.clone();

    view! { <LayoutBase all_posts=all_posts>{layout_body(purpose, props)}</LayoutBase> }
}

fn layout_body(purpose: PagePurpose, props: PageProps) -> AnyView {
    let plan = select_layout(purpose, &use_config().site);
    let PageProps {
        posts,
        page,
        post,
        prev,
        next,
        recommend_posts,
        category_options,
        tag_options,
        archive_posts,
        keyword,
        tag,
        category,
        ..
    } = props;

    match plan.body {
        LayoutBody::PostList(variant) => match purpose {
            PagePurpose::Index => view! { <LayoutIndex posts=posts variant=variant page=page /> }.into_any(),
            PagePurpose::Search => {
                view! {
                  <LayoutSearch
                    posts=posts
                    variant=variant
                    keyword=keyword.unwrap_or_default()
                    top_slot=plan.top_slot
                  />
                }
                    .into_any()
            }
            _ => {
                view! { <LayoutPostList posts=posts variant=variant page=page tag=tag category=category /> }
                    .into_any()
            }
        },
        LayoutBody::Archive => view! { <LayoutArchive archive_posts=archive_posts /> }.into_any(),
        LayoutBody::Article => match post {
            Some(post) => {
                view! { <LayoutSlug post=post prev=prev next=next recommend_posts=recommend_posts /> }.into_any()
            }
            None => view! { <Layout404 /> }.into_any(),
        },
        LayoutBody::NotFound => view! { <Layout404 post=post /> }.into_any(),
        LayoutBody::CategoryIndex => {
            view! { <LayoutCategoryIndex category_options=category_options /> }.into_any()
        }
        LayoutBody::TagIndex => view! { <LayoutTagIndex tag_options=tag_options /> }.into_any(),
    }
}
