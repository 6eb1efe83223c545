//! Article page parts.

use custom1_core::{PostSummary, content::{category_href, tag_href}};
use leptos::prelude::*;

/// Rendered article body.
///
/// The `notion-article` id is what the not-found check looks for.
#[component]
pub fn NotionPage(
    /// Pre-rendered body HTML.
    content: String,
) -> impl IntoView {
    view! { <div id="notion-article" class="notion mx-auto overflow-hidden" inner_html=content></div> }
}

/// Title and metadata above the article.
#[component]
pub fn ArticleInfo(post: PostSummary) -> impl IntoView {
    let date = post.display_date().map(str::to_string);
    let has_tags = !post.tags.is_empty();

    view! {
      <section class="flex-wrap flex mt-2 text-gray-400 dark:text-gray-400 font-light leading-8">
        <div class="w-full">
          <h1 class="font-bold text-3xl text-black dark:text-white">{post.title.clone()}</h1>

          <div class="flex flex-wrap items-center gap-x-4 py-2 text-sm">
            {post
              .category
              .clone()
              .map(|category| {
                let category_link = category_href(&category);
                view! {
                  <a href=category_link class="hover:underline">
                    <i class="fas fa-folder-open mr-1"></i>
                    {category}
                  </a>
                }
              })}
            {date.map(|d| view! { <time class="article-date">{d}</time> })}
          </div>

          {has_tags
            .then(|| {
              view! {
                <div class="flex flex-wrap gap-2 text-xs">
                  {post
                    .tags
                    .iter()
                    .map(|tag| {
                      view! {
                        <a href=tag_href(tag) class="px-2 py-0.5 rounded bg-gray-100 dark:bg-gray-800 hover:underline">
                          "#"
                          {tag.clone()}
                        </a>
                      }
                    })
                    .collect_view()}
                </div>
              }
            })}
        </div>
      </section>
    }
}

/// Password form shown instead of a locked article.
#[component]
pub fn ArticleLock(
    /// Returns whether the attempt unlocks the article.
    validate_password: Callback<String, bool>,
) -> impl IntoView {
    let attempt = RwSignal::new(String::new());
    let failed = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ok = validate_password.run(attempt.get_untracked());
        failed.set(!ok);
    };

    view! {
      <div id="article-lock" class="w-full flex justify-center items-center h-96">
        <form class="text-center space-y-4" on:submit=submit>
          <div class="font-bold">"Please enter the password:"</div>
          <div class="flex mx-4">
            <input
              type="password"
              class="outline-none w-full text-sm pl-5 rounded-l transition focus:shadow-lg dark:text-gray-300 font-light leading-10 text-black bg-gray-100 dark:bg-gray-500"
              prop:value=move || attempt.get()
              on:input=move |ev| attempt.set(event_target_value(&ev))
            />
            <button type="submit" class="px-3 whitespace-nowrap cursor-pointer items-center justify-center py-2 bg-black text-white rounded-r duration-300">
              <i class="duration-200 cursor-pointer fas fa-key mr-1"></i>
              "Submit"
            </button>
          </div>
          <Show when=move || failed.get()>
            <div class="text-red-500 animate__shakeX">"Password incorrect."</div>
          </Show>
        </form>
      </div>
    }
}

/// Links to the neighbouring posts.
#[component]
pub fn ArticleAround(prev: Option<PostSummary>, next: Option<PostSummary>) -> impl IntoView {
    (prev.is_some() || next.is_some()).then(move || {
        view! {
          <section class="text-gray-800 dark:text-gray-400 h-12 flex items-center justify-between space-x-5 my-4">
            {prev
              .map(|p| {
                view! {
                  <a href=p.link() class="text-sm cursor-pointer justify-start items-center flex hover:underline duration-300">
                    <i class="mr-1 fas fa-angle-double-left"></i>
                    {p.title.clone()}
                  </a>
                }
              })}
            {next
              .map(|p| {
                view! {
                  <a href=p.link() class="text-sm cursor-pointer justify-end items-center flex hover:underline duration-300">
                    {p.title.clone()}
                    <i class="ml-1 my-1 fas fa-angle-double-right"></i>
                  </a>
                }
              })}
          </section>
        }
    })
}

/// Related posts under an article.
#[component]
pub fn RecommendPosts(posts: Vec<PostSummary>) -> impl IntoView {
    (!posts.is_empty()).then(move || {
        view! {
          <div class="pt-8 text-gray-800 dark:text-gray-300">
            <div class="mb-2 text-xl font-bold">"Related posts"</div>
            <ul class="list-disc pl-6 text-sm">
              {posts
                .into_iter()
                .map(|p| {
                  view! {
                    <li class="py-1">
                      <a href=p.link() class="hover:underline">
                        {p.title.clone()}
                      </a>
                    </li>
                  }
                })
                .collect_view()}
            </ul>
          </div>
        }
    })
}
