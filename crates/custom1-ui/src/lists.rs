//! Post list bodies: paginated, load-more and archive.

use custom1_core::{
    ArchiveGroup, PostSummary,
    page::{Pagination, page_slice},
};
use leptos::prelude::*;

use crate::{blog_item::BlogItem, context::use_config};

/// Header above a list showing the active tag or category filter.
#[component]
pub fn BlogPostBar(
    /// Active tag filter.
    tag: Option<String>,
    /// Active category filter.
    category: Option<String>,
) -> impl IntoView {
    let filter = tag
        .map(|t| ("fas fa-tag", t))
        .or_else(|| category.map(|c| ("fas fa-folder-open", c)));

    filter.map(|(icon, name)| {
        view! {
          <div class="flex items-center py-6 text-2xl font-light dark:text-gray-200">
            <i class=format!("mr-2 {icon}")></i>
            {name}
          </div>
        }
    })
}

/// Message shown for an empty list.
#[component]
fn EmptyList() -> impl IntoView {
    view! { <p class="py-16 text-center text-gray-500">"No posts found."</p> }
}

/// One page of posts with previous/next links.
#[component]
pub fn BlogListPage(
    /// All posts of the list.
    posts: Vec<PostSummary>,
    /// Current page, 1-based.
    #[prop(default = 1)]
    page: usize,
) -> impl IntoView {
    let per_page = use_config().site.posts_per_page;
    let pagination = Pagination::new(page, posts.len(), per_page);
    let visible = page_slice(&posts, pagination.page, per_page).to_vec();
    let empty = visible.is_empty();

    view! {
      <div class="w-full">
        <div id="posts-wrapper">
          {visible.into_iter().map(|post| view! { <BlogItem post=post /> }).collect_view()}
        </div>
        {empty.then(|| view! { <EmptyList /> })}
        <PaginationLinks pagination=pagination />
      </div>
    }
}

/// Previous/next page links.
#[component]
fn PaginationLinks(pagination: Pagination) -> impl IntoView {
    let show = pagination.total_pages > 1;
    show.then(move || {
        view! {
          <div class="flex justify-between items-center py-8 text-sm font-medium">
            {pagination
              .prev_href
              .map(|href| {
                view! {
                  <a href=href class="menu-link px-4 py-2 rounded-full bg-[#F5F5F5] hover:bg-[#EAEAEA] text-black">
                    "← Newer"
                  </a>
                }
              })}
            <span class="text-gray-500">{pagination.page} " / " {pagination.total_pages}</span>
            {pagination
              .next_href
              .map(|href| {
                view! {
                  <a href=href class="menu-link px-4 py-2 rounded-full bg-[#F5F5F5] hover:bg-[#EAEAEA] text-black">
                    "Older →"
                  </a>
                }
              })}
          </div>
        }
    })
}

/// Growing list revealing `posts_per_page` more posts per step.
#[component]
pub fn BlogListScroll(
    /// All posts of the list.
    posts: Vec<PostSummary>,
) -> impl IntoView {
    let per_page = use_config().site.posts_per_page;
    let total = posts.len();
    let shown = RwSignal::new(per_page);
    let posts = StoredValue::new(posts);

    view! {
      <div class="w-full">
        <div id="posts-wrapper">
          <For
            each=move || posts.with_value(|all| all.iter().take(shown.get()).cloned().collect::<Vec<_>>())
            key=|post| post.id.clone()
            children=move |post| view! { <BlogItem post=post /> }
          />
        </div>
        {(total == 0).then(|| view! { <EmptyList /> })}
        <div class="flex justify-center py-8">
          <Show
            when=move || shown.get() < total
            fallback=move || {
              (total > 0).then(|| view! { <span class="text-gray-500 text-sm">"No more posts"</span> })
            }
          >
            <button
              class="px-6 py-2 rounded-full bg-[#F5F5F5] hover:bg-[#EAEAEA] text-black font-medium transition-all duration-200"
              on:click=move |_| shown.update(|n| *n += per_page)
            >
              "Load more"
            </button>
          </Show>
        </div>
      </div>
    }
}

/// Posts of one month in the archive.
#[component]
pub fn BlogArchiveItem(group: ArchiveGroup) -> impl IntoView {
    view! {
      <div>
        <div id=group.title.clone() class="pt-16 pb-4 text-3xl dark:text-gray-300">
          {group.title.clone()}
        </div>
        <ul>
          {group
            .posts
            .into_iter()
            .map(|post| {
              let date = post.display_date().map(str::to_string);
              view! {
                <li class="border-l-2 p-1 text-xs md:text-base items-center hover:scale-x-105 hover:border-gray-500 dark:hover:border-gray-300 dark:border-gray-400 transform duration-500">
                  <div id=post.id.clone()>
                    <span class="text-gray-400">{date}</span>
                    " "
                    <a href=post.link() class="dark:text-gray-400 dark:hover:text-gray-300 overflow-x-hidden hover:underline cursor-pointer text-gray-600">
                      {post.title.clone()}
                    </a>
                  </div>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </div>
    }
}
