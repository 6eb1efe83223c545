//! Content records supplied by the content source.
//!
//! Field names follow the Notion export format (camelCase), so records can be
//! deserialized straight from the content provider's JSON.

use serde::{Deserialize, Serialize};

/// Kind of Notion page behind a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    /// An ordinary blog post.
    #[default]
    Post,
    /// A standalone page (about, links...).
    Page,
    /// Announcement content.
    Notice,
    /// Menu entry.
    Menu,
    /// Sub-menu entry.
    SubMenu,
    /// Anything the theme does not know about.
    #[serde(other)]
    Other,
}

/// Publish date as exported by Notion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDate {
    /// Start date, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Read-only summary of one post, used for list rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Notion page id.
    pub id: String,

    /// Post title.
    pub title: String,

    /// URL slug (without leading slash).
    #[serde(default)]
    pub slug: String,

    /// Destination link.
    #[serde(default)]
    pub href: String,

    /// Category name.
    #[serde(default)]
    pub category: Option<String>,

    /// Publish date.
    #[serde(default)]
    pub date: Option<PostDate>,

    /// Creation time, used when no publish date is set.
    #[serde(default)]
    pub created_time: Option<String>,

    /// Excerpt shown in lists.
    #[serde(default)]
    pub summary: Option<String>,

    /// Page icon (emoji or image URL).
    #[serde(default)]
    pub page_icon: Option<String>,

    /// Cover thumbnail URL.
    #[serde(default)]
    pub page_cover_thumbnail: Option<String>,

    /// Record discriminator.
    #[serde(default, rename = "type")]
    pub kind: PostKind,

    /// Tag names.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostSummary {
    /// Date shown in lists: the publish date, else the creation time.
    pub fn display_date(&self) -> Option<&str> {
        self.date
            .as_ref()
            .and_then(|d| d.start_date.as_deref())
            .or(self.created_time.as_deref())
    }

    /// Whether this record is an ordinary post.
    pub fn is_post(&self) -> bool {
        self.kind == PostKind::Post
    }

    /// Link target, derived from the slug when no href was supplied.
    pub fn link(&self) -> String {
        if self.href.is_empty() {
            format!("/{}", self.slug.trim_start_matches('/'))
        } else {
            self.href.clone()
        }
    }

    /// DOM id of the list item rendering this post.
    pub fn item_dom_id(&self) -> String {
        format!("blog-item-{}", self.id)
    }
}

/// A full post: summary plus rendered body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// List-level fields.
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Rendered article body.
    #[serde(default)]
    pub content_html: String,

    /// Password protecting the article, if any.
    #[serde(default)]
    pub password: Option<String>,
}

impl Post {
    /// Whether the article needs a password before rendering.
    pub fn is_locked(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Check a password attempt.
    pub fn check_password(&self, attempt: &str) -> bool {
        match self.password.as_deref() {
            Some(expected) if !expected.is_empty() => expected == attempt.trim(),
            _ => true,
        }
    }
}

/// A category with its post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub name: String,
    pub count: usize,
}

impl CategoryOption {
    /// Label shown in the category index, always with the count.
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.count)
    }

    /// Link to the category listing.
    pub fn href(&self) -> String {
        category_href(&self.name)
    }
}

/// A tag with its Notion colour and post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    pub name: String,
    #[serde(default = "default_tag_color")]
    pub color: String,
    #[serde(default)]
    pub count: usize,
}

fn default_tag_color() -> String {
    "default".to_string()
}

impl TagOption {
    /// Label shown in the tag index; the count is omitted when zero.
    pub fn label(&self) -> String {
        if self.count > 0 {
            format!("{}({})", self.name, self.count)
        } else {
            self.name.clone()
        }
    }

    /// Link to the tag listing, with the name URL-encoded.
    pub fn href(&self) -> String {
        tag_href(&self.name)
    }

    /// Notion background class for the tag colour.
    pub fn background_class(&self) -> String {
        format!("notion-{}_background", self.color)
    }
}

/// Posts published in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveGroup {
    /// Month key, `YYYY-MM`.
    pub title: String,
    pub posts: Vec<PostSummary>,
}

/// Link to a category listing.
pub fn category_href(name: &str) -> String {
    format!("/category/{name}")
}

/// Link to a tag listing.
pub fn tag_href(name: &str) -> String {
    format!("/tag/{}", urlencoding::encode(name))
}

/// Group posts by publish month, keeping the order in which months first appear.
///
/// Records that are not posts, or carry no parseable date, are skipped.
pub fn group_by_month(posts: &[PostSummary]) -> Vec<ArchiveGroup> {
    let mut groups: Vec<ArchiveGroup> = Vec::new();

    for post in posts.iter().filter(|p| p.is_post()) {
        let Some(month) = post.display_date().and_then(month_key) else {
            continue;
        };

        match groups.iter_mut().find(|g| g.title == month) {
            Some(group) => group.posts.push(post.clone()),
            None => groups.push(ArchiveGroup {
                title: month,
                posts: vec![post.clone()],
            }),
        }
    }

    groups
}

/// `YYYY-MM` prefix of a date string.
fn month_key(date: &str) -> Option<String> {
    let date = date.trim();
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?.get(..2)?;

    let valid = year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && month.chars().all(|c| c.is_ascii_digit());

    valid.then(|| format!("{year}-{month}"))
}

/// Posts whose title, summary, category or tags contain the keyword,
/// ignoring case. An empty keyword matches everything.
pub fn search_posts(posts: &[PostSummary], keyword: &str) -> Vec<PostSummary> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| {
            let contains = |s: &str| s.to_lowercase().contains(&needle);
            contains(&post.title)
                || post.summary.as_deref().is_some_and(contains)
                || post.category.as_deref().is_some_and(contains)
                || post.tags.iter().any(|t| contains(t))
        })
        .cloned()
        .collect()
}
