//! Page purposes, layout selection, pagination and page props.

use serde::{Deserialize, Serialize};

use crate::{
    config::{PostListStyle, SiteConfig},
    content::{ArchiveGroup, CategoryOption, Post, PostSummary, TagOption},
};

/// What the routed page is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagePurpose {
    Index,
    List,
    Search,
    Archive,
    Slug,
    NotFound,
    CategoryIndex,
    TagIndex,
}

impl PagePurpose {
    /// All purposes, in routing order.
    pub const ALL: [PagePurpose; 8] = [
        Self::Index,
        Self::List,
        Self::Search,
        Self::Archive,
        Self::Slug,
        Self::NotFound,
        Self::CategoryIndex,
        Self::TagIndex,
    ];
}

/// How a post list body renders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    Paginated,
    InfiniteScroll,
}

impl From<PostListStyle> for ListVariant {
    fn from(style: PostListStyle) -> Self {
        match style {
            PostListStyle::Page => Self::Paginated,
            PostListStyle::Scroll => Self::InfiniteScroll,
        }
    }
}

/// Content above the body inside the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopSlot {
    None,
    SearchInput,
}

/// Purpose-specific body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutBody {
    PostList(ListVariant),
    Archive,
    Article,
    NotFound,
    CategoryIndex,
    TagIndex,
}

/// A shell arrangement: what goes in the top slot and which body follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub top_slot: TopSlot,
    pub body: LayoutBody,
}

/// Map a page purpose to its layout.
///
/// Index and search both delegate to the post list body; search adds its own
/// input on top unless an external (Algolia) search is configured.
pub fn select_layout(purpose: PagePurpose, site: &SiteConfig) -> LayoutPlan {
    let list = LayoutBody::PostList(site.post_list_style.into());

    let (top_slot, body) = match purpose {
        PagePurpose::Index | PagePurpose::List => (TopSlot::None, list),
        PagePurpose::Search => {
            let top = if site.algolia_app_id.is_some() {
                TopSlot::None
            } else {
                TopSlot::SearchInput
            };
            (top, list)
        }
        PagePurpose::Archive => (TopSlot::None, LayoutBody::Archive),
        PagePurpose::Slug => (TopSlot::None, LayoutBody::Article),
        PagePurpose::NotFound => (TopSlot::None, LayoutBody::NotFound),
        PagePurpose::CategoryIndex => (TopSlot::None, LayoutBody::CategoryIndex),
        PagePurpose::TagIndex => (TopSlot::None, LayoutBody::TagIndex),
    };

    LayoutPlan { top_slot, body }
}

/// Previous/next links for a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pagination {
    /// Compute links for `page` of a list with `post_count` posts.
    pub fn new(page: usize, post_count: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = post_count.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        let prev_href = match page {
            1 => None,
            2 => Some("/".to_string()),
            n => Some(page_href(n - 1)),
        };
        let next_href = (page < total_pages).then(|| page_href(page + 1));

        Self {
            page,
            total_pages,
            prev_href,
            next_href,
        }
    }
}

/// Link to a numbered list page.
pub fn page_href(page: usize) -> String {
    if page <= 1 {
        "/".to_string()
    } else {
        format!("/page/{page}")
    }
}

/// Link to the search page for a keyword.
pub fn search_href(keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        "/search".to_string()
    } else {
        format!("/search/{}", urlencoding::encode(keyword))
    }
}

/// Slice of `posts` shown on a 1-based page.
pub fn page_slice(posts: &[PostSummary], page: usize, per_page: usize) -> &[PostSummary] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(posts.len());
    let end = start.saturating_add(per_page).min(posts.len());
    &posts[start..end]
}

/// Everything a layout may read, assembled by the content source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageProps {
    /// Posts for the list body (already filtered by tag/category/keyword).
    pub posts: Vec<PostSummary>,

    /// Every post, for the search modal.
    pub all_posts: Vec<PostSummary>,

    /// Current page for paginated lists, 1-based.
    pub page: usize,

    /// Article for slug pages.
    pub post: Option<Post>,

    /// Neighbouring posts of the article.
    pub prev: Option<PostSummary>,
    pub next: Option<PostSummary>,

    /// Posts sharing tags or category with the article.
    pub recommend_posts: Vec<PostSummary>,

    pub category_options: Vec<CategoryOption>,
    pub tag_options: Vec<TagOption>,
    pub archive_posts: Vec<ArchiveGroup>,

    /// Search keyword.
    pub keyword: Option<String>,

    /// Active tag filter.
    pub tag: Option<String>,

    /// Active category filter.
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(style: &str) -> SiteConfig {
        SiteConfig {
            post_list_style: PostListStyle::from(style.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_style_selects_paginated() {
        let plan = select_layout(PagePurpose::Index, &site("page"));
        assert_eq!(plan.body, LayoutBody::PostList(ListVariant::Paginated));
    }

    #[test]
    fn test_other_styles_select_infinite_scroll() {
        for style in ["scroll", "infinite", "", "PAGE"] {
            let plan = select_layout(PagePurpose::List, &site(style));
            assert_eq!(plan.body, LayoutBody::PostList(ListVariant::InfiniteScroll));
        }
    }

    #[test]
    fn test_search_delegates_to_list_with_input() {
        let plan = select_layout(PagePurpose::Search, &site("page"));
        assert_eq!(plan.top_slot, TopSlot::SearchInput);
        assert_eq!(plan.body, LayoutBody::PostList(ListVariant::Paginated));

        let mut algolia = site("page");
        algolia.algolia_app_id = Some("APP".to_string());
        let plan = select_layout(PagePurpose::Search, &algolia);
        assert_eq!(plan.top_slot, TopSlot::None);
    }

    #[test]
    fn test_each_purpose_maps_to_one_body() {
        let cfg = site("page");
        let bodies: Vec<_> = PagePurpose::ALL
            .iter()
            .map(|p| select_layout(*p, &cfg).body)
            .collect();

        assert_eq!(bodies[3], LayoutBody::Archive);
        assert_eq!(bodies[4], LayoutBody::Article);
        assert_eq!(bodies[5], LayoutBody::NotFound);
        assert_eq!(bodies[6], LayoutBody::CategoryIndex);
        assert_eq!(bodies[7], LayoutBody::TagIndex);
        for purpose in PagePurpose::ALL {
            if purpose != PagePurpose::Search {
                assert_eq!(select_layout(purpose, &cfg).top_slot, TopSlot::None);
            }
        }
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 30, 12);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.prev_href, None);
        assert_eq!(p.next_href.as_deref(), Some("/page/2"));
    }

    #[test]
    fn test_pagination_second_page_links_home() {
        let p = Pagination::new(2, 30, 12);
        assert_eq!(p.prev_href.as_deref(), Some("/"));
        assert_eq!(p.next_href.as_deref(), Some("/page/3"));
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(3, 30, 12);
        assert_eq!(p.prev_href.as_deref(), Some("/page/2"));
        assert_eq!(p.next_href, None);
    }

    #[test]
    fn test_pagination_clamps_out_of_range() {
        let p = Pagination::new(9, 5, 12);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.prev_href, None);
        assert_eq!(p.next_href, None);

        assert_eq!(Pagination::new(0, 0, 12).page, 1);
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("  "), "/search");
        assert_eq!(search_href("rust"), "/search/rust");
        assert_eq!(search_href(" a b "), "/search/a%20b");
    }

    #[test]
    fn test_page_slice() {
        let posts: Vec<_> = (0..5)
            .map(|i| PostSummary {
                id: i.to_string(),
                ..Default::default()
            })
            .collect();

        assert_eq!(page_slice(&posts, 1, 2).len(), 2);
        assert_eq!(page_slice(&posts, 3, 2)[0].id, "4");
        assert!(page_slice(&posts, 4, 2).is_empty());
        assert_eq!(page_slice(&posts, 0, 2)[0].id, "0");
    }
}
