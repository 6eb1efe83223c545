//! Search input, results and the Ctrl/Cmd+K modal.

use custom1_core::{PostSummary, content::search_posts, page::search_href};
use leptos::{ev, prelude::*};
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use crate::{blog_item::Highlighted, context::use_theme};

/// Results shown in the modal.
const MODAL_RESULT_LIMIT: usize = 10;

/// A single search result item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    /// Result URL.
    pub url: String,

    /// Result title.
    pub title: String,

    /// Result summary.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&PostSummary> for SearchResultItem {
    fn from(post: &PostSummary) -> Self {
        Self {
            url: post.link(),
            title: post.title.clone(),
            description: post.summary.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// First results for a query over `posts`; a blank query yields nothing.
pub fn modal_results(posts: &[PostSummary], query: &str) -> Vec<SearchResultItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    search_posts(posts, query.trim())
        .iter()
        .take(MODAL_RESULT_LIMIT)
        .map(SearchResultItem::from)
        .collect()
}

/// Search box input component.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(default = "Search...".to_string())]
    placeholder: String,
    /// Signal to track the current query.
    query: RwSignal<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
      <div class="flex-1">
        <input
          node_ref=input_ref
          type="text"
          class="w-full outline-none bg-transparent text-lg py-2 dark:text-gray-200"
          placeholder=placeholder
          prop:value=move || query.get()
          on:input=move |ev| query.set(event_target_value(&ev))
        />
      </div>
    }
}

/// Search results list component.
#[component]
pub fn SearchResults(
    /// The search results to display.
    results: Signal<Vec<SearchResultItem>>,
    /// The current search query, highlighted in titles.
    query: Signal<String>,
) -> impl IntoView {
    view! {
      <div class="max-h-96 overflow-y-auto">
        <Show
          when=move || !results.get().is_empty()
          fallback=move || {
            let q = query.get();
            (!q.trim().is_empty())
              .then(|| {
                view! { <div class="py-6 text-center text-gray-500">"No results found for \"" {q} "\""</div> }
              })
          }
        >
          <ul class="divide-y divide-gray-100 dark:divide-gray-700">
            <For
              each=move || results.get()
              key=|item| item.url.clone()
              children=move |item| view! { <SearchResultRow item=item query=query /> }
            />
          </ul>
        </Show>
      </div>
    }
}

#[component]
fn SearchResultRow(item: SearchResultItem, query: Signal<String>) -> impl IntoView {
    view! {
      <li class="py-2">
        <a href=item.url.clone() class="block hover:bg-gray-50 dark:hover:bg-gray-800 rounded px-2">
          <span class="block font-medium">
            <Highlighted text=item.title.clone() keyword=query />
          </span>
          {item.description.map(|d| view! { <span class="block text-sm text-gray-500 truncate">{d}</span> })}
        </a>
      </li>
    }
}

/// Modal search over every post, opened by the theme's `search_open` flag.
#[component]
pub fn SearchModal(
    /// Posts to search.
    posts: Vec<PostSummary>,
) -> impl IntoView {
    let open = use_theme().search_open;
    let query = RwSignal::new(String::new());
    let posts = StoredValue::new(posts);
    let results = Signal::derive(move || posts.with_value(|all| modal_results(all, &query.get())));

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    };

    view! {
      <Show when=move || open.get()>
        <div
          class="fixed inset-0 z-50 flex items-start justify-center pt-24 bg-black bg-opacity-50"
          on:click=move |_| open.set(false)
          on:keydown=on_keydown
        >
          <div
            class="w-full max-w-xl mx-4 rounded-lg bg-white dark:bg-gray-900 shadow-xl p-4"
            on:click=|ev: ev::MouseEvent| ev.stop_propagation()
          >
            <div class="flex items-center border-b border-gray-200 dark:border-gray-700">
              <i class="fas fa-search mr-3 text-gray-400"></i>
              <SearchBox query=query />
              <button class="ml-3 text-2xl text-gray-500" on:click=move |_| open.set(false) aria-label="Close search">
                "×"
              </button>
            </div>
            <SearchResults results=results query=query.into() />
            <div class="pt-3 text-xs text-gray-400 text-right">"Press Esc to close"</div>
          </div>
        </div>
      </Show>
    }
}

/// Whether a key event is the open-search shortcut (Ctrl+K or Cmd+K).
pub fn is_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key.eq_ignore_ascii_case("k") && (ctrl || meta)
}

/// Global Ctrl/Cmd+K handler opening the search modal.
#[component]
pub fn SearchShortcut() -> impl IntoView {
    let open = use_theme().search_open;
    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_search_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            open.set(true);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Keyword form on the search page; submitting navigates to the result list.
#[component]
pub fn SearchInput(
    /// Keyword currently searched.
    #[prop(into)]
    keyword: String,
) -> impl IntoView {
    let navigate = use_navigate();
    let value = RwSignal::new(keyword);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let href = search_href(&value.get_untracked());
        log::debug!("search submit: {href}");
        navigate(&href, Default::default());
    };

    view! {
      <form class="flex w-full bg-gray-100 dark:bg-gray-800 rounded-lg my-6" on:submit=submit>
        <input
          type="text"
          class="flex-1 outline-none bg-transparent px-4 py-3 dark:text-gray-200"
          placeholder="Search posts"
          prop:value=move || value.get()
          on:input=move |ev| value.set(event_target_value(&ev))
        />
        <button type="submit" class="px-4 text-gray-500 hover:text-black dark:hover:text-white" aria-label="Search">
          <i class="fas fa-search"></i>
        </button>
      </form>
    }
}
