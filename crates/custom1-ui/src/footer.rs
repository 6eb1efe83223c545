//! Page footer: copyright, filing links and the dark-mode switch.

use custom1_core::footer::{copyright_range_now, gongan_href};
use leptos::prelude::*;

use crate::context::{use_config, use_theme};

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let site = config.site;
    let copyright = copyright_range_now(site.since.as_deref());
    let owner = site.author.clone().unwrap_or_else(|| site.title.clone());
    let bei_an_link = site.bei_an_link.clone();

    view! {
      <footer class="relative w-full bg-black text-gray-300 px-6 border-t">
        <DarkModeButton class="text-center pt-4" />

        <div class="container mx-auto max-w-4xl py-6 flex justify-center items-center">
          <div class="text-center text-sm space-y-1">
            <p>
              <span class="fas fa-copyright mr-1"></span>
              {copyright}
              " "
              {owner}
            </p>
            {site
              .bei_an
              .map(|text| {
                view! {
                  <a href=bei_an_link class="no-underline hover:underline">
                    {text}
                  </a>
                }
              })}
            {site.bei_an_gongan.map(|text| view! { <BeiAnGongAn text=text /> })}
          </div>
        </div>
      </footer>
    }
}

/// Public security filing line, linked to the registry lookup when it carries a number.
#[component]
pub fn BeiAnGongAn(text: String) -> impl IntoView {
    let href = gongan_href(&text);
    view! {
      <p class="flex justify-center items-center">
        {match href {
          Some(href) => {
            view! {
              <a href=href target="_blank" rel="noreferrer" class="no-underline hover:underline">
                {text}
              </a>
            }
              .into_any()
          }
          None => view! { <span>{text}</span> }.into_any(),
        }}
      </p>
    }
}

/// Light/dark switch bound to the theme context.
#[component]
pub fn DarkModeButton(
    /// Wrapper classes.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let theme = use_theme();
    view! {
      <div class=class>
        <button
          class="text-sm hover:underline"
          aria-label="Toggle dark mode"
          on:click=move |_| theme.dark_mode.update(|dark| *dark = !*dark)
        >
          {move || if theme.dark_mode.get() { "☀ Light" } else { "☾ Dark" }}
        </button>
      </div>
    }
}
