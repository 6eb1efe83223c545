//! End-to-end checks: a JSON site driven through every page purpose.

use custom1_core::{
    Config, ContentSource, LayoutBody, ListVariant, PagePurpose, StaticContent, TopSlot,
    blog_item_layout, highlight::highlight, page::Pagination, select_layout,
};

const SITE: &str = r#"
[site]
title = "Theme Test"
since = "2020"
post_list_style = "page"
posts_per_page = 2

[theme]
simple_post_cover_enable = true
"#;

const CONTENT: &str = r#"{
  "posts": [
    {
      "id": "p1", "title": "Leptos in practice", "slug": "article/leptos",
      "category": "Rust", "date": {"start_date": "2024-05-02"},
      "summary": "Signals and views", "pageCoverThumbnail": "/img/leptos.png",
      "tags": ["rust", "wasm"], "contentHtml": "<p>body</p>"
    },
    {
      "id": "p2", "title": "Notes without a category", "slug": "article/notes",
      "createdTime": "2024-04-11", "summary": "Plain notes", "tags": ["life"]
    },
    {
      "id": "p3", "title": "Locked", "slug": "article/locked",
      "date": {"start_date": "2024-04-01"}, "password": "open sesame", "tags": ["rust"]
    },
    {
      "id": "about", "title": "About", "slug": "about", "type": "Page"
    }
  ],
  "tagOptions": [
    {"name": "rust", "color": "orange"},
    {"name": "draft", "color": "gray"}
  ]
}"#;

fn fixture() -> (Config, StaticContent) {
    let config = Config::from_toml_str(SITE).expect("config");
    let content = StaticContent::from_json(CONTENT).expect("content");
    (config, content)
}

#[test]
fn test_index_is_paginated() {
    let (config, content) = fixture();
    let plan = select_layout(PagePurpose::Index, &config.site);
    assert_eq!(plan.body, LayoutBody::PostList(ListVariant::Paginated));

    let props = content.index_props(1);
    assert_eq!(props.posts.len(), 3);
    let pagination = Pagination::new(props.page, props.posts.len(), config.site.posts_per_page);
    assert_eq!(pagination.total_pages, 2);
    assert_eq!(pagination.next_href.as_deref(), Some("/page/2"));
}

#[test]
fn test_search_page() {
    let (config, content) = fixture();
    let plan = select_layout(PagePurpose::Search, &config.site);
    assert_eq!(plan.top_slot, TopSlot::SearchInput);

    let props = content.search_props("leptos");
    assert_eq!(props.posts.len(), 1);
    let fragments = highlight(&props.posts[0].title, "leptos");
    assert!(fragments[0].matched);
}

#[test]
fn test_archive_groups() {
    let (_, content) = fixture();
    let props = content.archive_props();
    let titles: Vec<_> = props.archive_posts.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["2024-05", "2024-04"]);
    assert_eq!(props.archive_posts[1].posts.len(), 2);
}

#[test]
fn test_tag_index_labels() {
    let (_, content) = fixture();
    let props = content.tag_index_props();
    let labels: Vec<_> = props.tag_options.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["rust(2)", "draft", "wasm(1)", "life(1)"]);
}

#[test]
fn test_category_index() {
    let (_, content) = fixture();
    let props = content.category_index_props();
    assert_eq!(props.category_options.len(), 1);
    assert_eq!(props.category_options[0].href(), "/category/Rust");
}

#[test]
fn test_locked_article() {
    let (_, content) = fixture();
    let props = content.slug_props("article/locked");
    let post = props.post.expect("post");
    assert!(post.is_locked());
    assert!(post.check_password("open sesame"));
}

#[test]
fn test_missing_slug_falls_to_not_found() {
    let (config, content) = fixture();
    let props = content.slug_props("article/nope");
    assert!(props.post.is_none());
    assert_eq!(
        select_layout(PagePurpose::NotFound, &config.site).body,
        LayoutBody::NotFound
    );
    assert_eq!(config.waiting_time_for_404_ms(), 8000);
}

#[test]
fn test_item_without_category_or_cover() {
    let (_, content) = fixture();
    let notes = content
        .records()
        .iter()
        .find(|p| p.id == "p2")
        .expect("notes post");

    assert!(notes.category.is_none());
    assert!(notes.page_cover_thumbnail.is_none());
    assert_eq!(notes.display_date(), Some("2024-04-11"));

    let layout = blog_item_layout(1200);
    assert!(layout.style_block(&notes.item_dom_id()).is_none());
}
