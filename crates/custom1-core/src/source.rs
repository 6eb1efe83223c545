//! Content source abstraction.
//!
//! The theme never fetches content itself; a [`ContentSource`] hands it
//! records, and the provided methods shape them into [`PageProps`] for each
//! page purpose.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::{
    content::{self, CategoryOption, Post, PostSummary, TagOption},
    error::{CoreError, Result},
    page::PageProps,
};

/// Number of recommended posts under an article.
pub const RECOMMEND_COUNT: usize = 6;

/// Supplier of post records.
pub trait ContentSource: Send + Sync {
    /// Every record (posts, pages, notices...), in display order.
    fn records(&self) -> &[PostSummary];

    /// Full post for a slug.
    fn post(&self, slug: &str) -> Option<Post>;

    /// Declared tag options, possibly including unused tags.
    fn declared_tags(&self) -> &[TagOption] {
        &[]
    }

    /// Ordinary posts only.
    fn published(&self) -> Vec<PostSummary> {
        self.records()
            .iter()
            .filter(|p| p.is_post())
            .cloned()
            .collect()
    }

    /// Categories with post counts, in order of first use.
    fn category_options(&self) -> Vec<CategoryOption> {
        let mut options: Vec<CategoryOption> = Vec::new();
        for name in self.published().iter().filter_map(|p| p.category.clone()) {
            match options.iter_mut().find(|o| o.name == name) {
                Some(option) => option.count += 1,
                None => options.push(CategoryOption { name, count: 1 }),
            }
        }
        options
    }

    /// Declared tags with counts, followed by undeclared tags in use.
    fn tag_options(&self) -> Vec<TagOption> {
        let mut options: Vec<TagOption> = self
            .declared_tags()
            .iter()
            .map(|t| TagOption {
                count: 0,
                ..t.clone()
            })
            .collect();

        for tag in self.published().iter().flat_map(|p| p.tags.clone()) {
            match options.iter_mut().find(|o| o.name == tag) {
                Some(option) => option.count += 1,
                None => options.push(TagOption {
                    name: tag,
                    color: "default".to_string(),
                    count: 1,
                }),
            }
        }
        options
    }

    /// Base props shared by every page.
    fn base_props(&self) -> PageProps {
        PageProps {
            all_posts: self.published(),
            page: 1,
            ..Default::default()
        }
    }

    /// Home page and numbered list pages.
    fn index_props(&self, page: usize) -> PageProps {
        let base = self.base_props();
        PageProps {
            posts: base.all_posts.clone(),
            page: page.max(1),
            ..base
        }
    }

    /// Posts in one category.
    fn category_props(&self, category: &str) -> PageProps {
        let base = self.base_props();
        let posts = base
            .all_posts
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect();
        PageProps {
            posts,
            category: Some(category.to_string()),
            ..base
        }
    }

    /// Posts carrying one tag.
    fn tag_props(&self, tag: &str) -> PageProps {
        let base = self.base_props();
        let posts = base
            .all_posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .cloned()
            .collect();
        PageProps {
            posts,
            tag: Some(tag.to_string()),
            ..base
        }
    }

    /// Posts matching a keyword.
    fn search_props(&self, keyword: &str) -> PageProps {
        let base = self.base_props();
        let posts = content::search_posts(&base.all_posts, keyword);
        debug!(keyword, found = posts.len(), "search");
        PageProps {
            posts,
            keyword: Some(keyword.to_string()),
            ..base
        }
    }

    /// Posts grouped by month.
    fn archive_props(&self) -> PageProps {
        let base = self.base_props();
        PageProps {
            archive_posts: content::group_by_month(&base.all_posts),
            ..base
        }
    }

    /// One article with its neighbours and recommendations.
    ///
    /// `post` stays `None` when the slug is unknown; the not-found layout
    /// handles that case.
    fn slug_props(&self, slug: &str) -> PageProps {
        let base = self.base_props();
        let Some(post) = self.post(slug) else {
            debug!(slug, "no post for slug");
            return base;
        };

        let posts = &base.all_posts;
        let (prev, next) = match posts.iter().position(|p| p.id == post.summary.id) {
            Some(index) if posts.len() > 1 => {
                let prev = if index == 0 {
                    posts.last()
                } else {
                    posts.get(index - 1)
                };
                let next = posts.get(index + 1).or(posts.first());
                (prev.cloned(), next.cloned())
            }
            _ => (None, None),
        };

        let recommend_posts = recommend(posts, &post.summary);

        PageProps {
            post: Some(post),
            prev,
            next,
            recommend_posts,
            ..base
        }
    }

    /// All categories.
    fn category_index_props(&self) -> PageProps {
        PageProps {
            category_options: self.category_options(),
            ..self.base_props()
        }
    }

    /// All tags.
    fn tag_index_props(&self) -> PageProps {
        PageProps {
            tag_options: self.tag_options(),
            ..self.base_props()
        }
    }
}

/// Posts sharing a tag with `current`, excluding it.
fn recommend(posts: &[PostSummary], current: &PostSummary) -> Vec<PostSummary> {
    if current.tags.is_empty() {
        return Vec::new();
    }
    posts
        .iter()
        .filter(|p| p.id != current.id)
        .filter(|p| p.tags.iter().any(|t| current.tags.contains(t)))
        .take(RECOMMEND_COUNT)
        .cloned()
        .collect()
}

/// Site content document as exported by the content provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDocument {
    #[serde(default)]
    posts: Vec<Post>,
    #[serde(default)]
    tag_options: Vec<TagOption>,
}

/// In-memory content source backed by a JSON document.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    posts: Vec<Post>,
    summaries: Vec<PostSummary>,
    tags: Vec<TagOption>,
}

impl StaticContent {
    /// Parse a content document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        Self::new(doc.posts, doc.tag_options)
    }

    /// Build from records, rejecting blank ids and duplicate slugs.
    pub fn new(posts: Vec<Post>, tags: Vec<TagOption>) -> Result<Self> {
        let mut slugs = HashSet::new();
        for post in &posts {
            if post.summary.id.trim().is_empty() {
                return Err(CoreError::content(format!(
                    "post \"{}\" has no id",
                    post.summary.title
                )));
            }
            if !post.summary.slug.is_empty() && !slugs.insert(post.summary.slug.as_str()) {
                return Err(CoreError::content(format!(
                    "duplicate slug: {}",
                    post.summary.slug
                )));
            }
        }

        let summaries = posts.iter().map(|p| p.summary.clone()).collect();
        Ok(Self {
            posts,
            summaries,
            tags,
        })
    }
}

impl ContentSource for StaticContent {
    fn records(&self) -> &[PostSummary] {
        &self.summaries
    }

    fn post(&self, slug: &str) -> Option<Post> {
        let slug = slug.trim_matches('/');
        self.posts
            .iter()
            .find(|p| p.summary.slug.trim_matches('/') == slug)
            .cloned()
    }

    fn declared_tags(&self) -> &[TagOption] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostKind;

    fn post(id: &str, category: Option<&str>, tags: &[&str]) -> Post {
        Post {
            summary: PostSummary {
                id: id.to_string(),
                title: format!("Title {id}"),
                slug: format!("article/{id}"),
                category: category.map(str::to_string),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
            content_html: format!("<p>{id}</p>"),
            password: None,
        }
    }

    fn source() -> StaticContent {
        let mut about = post("about", None, &[]);
        about.summary.kind = PostKind::Page;

        StaticContent::new(
            vec![
                post("a", Some("Notes"), &["rust"]),
                post("b", Some("Life"), &["rust", "web"]),
                post("c", Some("Notes"), &[]),
                about,
            ],
            vec![
                TagOption {
                    name: "rust".to_string(),
                    color: "orange".to_string(),
                    count: 0,
                },
                TagOption {
                    name: "unused".to_string(),
                    color: "gray".to_string(),
                    count: 0,
                },
            ],
        )
        .expect("valid content")
    }

    #[test]
    fn test_published_excludes_pages() {
        assert_eq!(source().published().len(), 3);
    }

    #[test]
    fn test_category_options() {
        let options = source().category_options();
        assert_eq!(
            options,
            vec![
                CategoryOption {
                    name: "Notes".to_string(),
                    count: 2
                },
                CategoryOption {
                    name: "Life".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_tag_options_keep_declared_colors_and_zero_counts() {
        let options = source().tag_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].name, "rust");
        assert_eq!(options[0].color, "orange");
        assert_eq!(options[0].count, 2);
        assert_eq!(options[1].name, "unused");
        assert_eq!(options[1].count, 0);
        assert_eq!(options[2].name, "web");
        assert_eq!(options[2].color, "default");
    }

    #[test]
    fn test_slug_props_neighbours_wrap() {
        let props = source().slug_props("article/a");
        assert_eq!(props.post.as_ref().map(|p| p.summary.id.as_str()), Some("a"));
        assert_eq!(props.prev.map(|p| p.id), Some("c".to_string()));
        assert_eq!(props.next.map(|p| p.id), Some("b".to_string()));
        assert_eq!(props.recommend_posts.len(), 1);
        assert_eq!(props.recommend_posts[0].id, "b");
    }

    #[test]
    fn test_slug_props_unknown_slug() {
        let props = source().slug_props("article/missing");
        assert!(props.post.is_none());
        assert!(props.prev.is_none());
    }

    #[test]
    fn test_slug_lookup_ignores_slashes() {
        assert!(source().post("/article/b/").is_some());
    }

    #[test]
    fn test_filters() {
        let src = source();
        assert_eq!(src.category_props("Notes").posts.len(), 2);
        assert_eq!(src.tag_props("web").posts.len(), 1);
        assert_eq!(src.tag_props("web").tag.as_deref(), Some("web"));
        assert_eq!(src.search_props("title b").posts.len(), 1);
        assert_eq!(src.index_props(0).page, 1);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = StaticContent::new(vec![post("a", None, &[]), post("a", None, &[])], vec![])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "posts": [
                {"id": "1", "title": "One", "slug": "article/one", "contentHtml": "<p>1</p>"}
            ],
            "tagOptions": [{"name": "rust", "color": "red"}]
        }"#;
        let src = StaticContent::from_json(json).expect("parse content");
        assert_eq!(src.records().len(), 1);
        assert_eq!(src.post("article/one").map(|p| p.content_html), Some("<p>1</p>".to_string()));
        assert_eq!(src.tag_options()[0].count, 0);
    }
}
