//! Site and theme configuration.
//!
//! Options are resolved in layers, lowest priority first: the theme's own
//! default table, the site configuration (the global table), and, for native
//! loads, `CUSTOM1__SECTION__KEY` environment variables.

use std::path::Path;

use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Theme-level defaults, overridden by anything in the site configuration.
const THEME_DEFAULTS: &str = r#"
[theme]
simple_post_cover_enable = false
simple_top_bar = false
menu_archive = true
menu_category = true
menu_tag = true
menu_search = true
"#;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CUSTOM1";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global (site-wide) options.
    pub site: SiteConfig,

    /// Options owned by the custom1 theme.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// How the post list body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostListStyle {
    /// Numbered pages with previous/next links (`"page"`).
    Page,
    /// A growing list with a load-more control (any other value).
    Scroll,
}

impl From<String> for PostListStyle {
    fn from(value: String) -> Self {
        if value == "page" {
            Self::Page
        } else {
            Self::Scroll
        }
    }
}

impl From<PostListStyle> for String {
    fn from(style: PostListStyle) -> Self {
        match style {
            PostListStyle::Page => "page".to_string(),
            PostListStyle::Scroll => "scroll".to_string(),
        }
    }
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// First year of publication, used for the copyright range.
    #[serde(default)]
    pub since: Option<String>,

    /// ICP filing number shown in the footer.
    #[serde(default)]
    pub bei_an: Option<String>,

    /// Link target for the ICP filing number.
    #[serde(default = "default_bei_an_link")]
    pub bei_an_link: String,

    /// Public security filing text, e.g. "京公网安备11010502030143号".
    #[serde(default)]
    pub bei_an_gongan: Option<String>,

    /// Font family utility class applied to the theme root.
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// List body style.
    #[serde(default = "default_post_list_style")]
    pub post_list_style: PostListStyle,

    /// Posts per list page (and per load-more step).
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,

    /// Whether titles are prefixed with the page icon.
    #[serde(default = "default_true")]
    pub post_title_icon: bool,

    /// Seconds to wait for an article to render before redirecting to `/404`.
    #[serde(default = "default_waiting_time_for_404")]
    pub post_waiting_time_for_404: u64,

    /// Algolia application id; when set the search page drops its own input.
    #[serde(default)]
    pub algolia_app_id: Option<String>,

    /// AdSense client id; ad slots render only when set.
    #[serde(default)]
    pub adsense_client_id: Option<String>,

    /// Render articles without the max-width constraint.
    #[serde(default)]
    pub full_width: bool,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Show cover images in the post list.
    #[serde(default)]
    pub simple_post_cover_enable: bool,

    /// Show the announcement bar above the navigation bar.
    #[serde(default)]
    pub simple_top_bar: bool,

    /// HTML content of the announcement bar.
    #[serde(default)]
    pub simple_top_bar_content: Option<String>,

    /// Drawer menu entries.
    #[serde(default = "default_true")]
    pub menu_archive: bool,

    #[serde(default = "default_true")]
    pub menu_category: bool,

    #[serde(default = "default_true")]
    pub menu_tag: bool,

    #[serde(default = "default_true")]
    pub menu_search: bool,
}

// Default value functions
fn default_bei_an_link() -> String {
    "https://beian.miit.gov.cn/".to_string()
}

fn default_font_style() -> String {
    "font-sans".to_string()
}

fn default_post_list_style() -> PostListStyle {
    PostListStyle::Page
}

fn default_posts_per_page() -> usize {
    12
}

fn default_waiting_time_for_404() -> u64 {
    8
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "custom1".to_string(),
            author: None,
            description: None,
            since: None,
            bei_an: None,
            bei_an_link: default_bei_an_link(),
            bei_an_gongan: None,
            font_style: default_font_style(),
            post_list_style: default_post_list_style(),
            posts_per_page: default_posts_per_page(),
            post_title_icon: true,
            post_waiting_time_for_404: default_waiting_time_for_404(),
            algolia_app_id: None,
            adsense_client_id: None,
            full_width: false,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            simple_post_cover_enable: false,
            simple_top_bar: false,
            simple_top_bar_content: None,
            menu_archive: true,
            menu_category: true,
            menu_tag: true,
            menu_search: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str::<toml::Table>(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a file with environment overrides on top.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = Self::layers()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an in-memory TOML document.
    ///
    /// This is the loader used in the browser, where the site configuration
    /// is embedded into the bundle.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = Self::layers()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Builder seeded with the theme default table.
    fn layers() -> ConfigBuilder<DefaultState> {
        config::Config::builder().add_source(File::from_str(THEME_DEFAULTS, FileFormat::Toml))
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.posts_per_page == 0 {
            return Err(CoreError::config("site.posts_per_page must be positive"));
        }

        if self.theme.simple_top_bar && self.theme.simple_top_bar_content.is_none() {
            tracing::warn!("theme.simple_top_bar is enabled without simple_top_bar_content");
        }

        Ok(())
    }

    /// Waiting time before the not-found redirect, in milliseconds.
    pub fn waiting_time_for_404_ms(&self) -> u64 {
        self.site.post_waiting_time_for_404 * 1000
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Blog"
author = "Tester"
since = "2021"
bei_an = "京ICP备00000000号"
post_list_style = "scroll"
posts_per_page = 6
post_title_icon = false
post_waiting_time_for_404 = 3

[theme]
simple_post_cover_enable = true
menu_tag = false
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Blog");
        assert_eq!(config.site.author.as_deref(), Some("Tester"));
        assert_eq!(config.site.since.as_deref(), Some("2021"));
        assert_eq!(config.site.post_list_style, PostListStyle::Scroll);
        assert_eq!(config.site.posts_per_page, 6);
        assert!(!config.site.post_title_icon);
        assert_eq!(config.waiting_time_for_404_ms(), 3000);
        assert!(config.theme.simple_post_cover_enable);
        assert!(!config.theme.menu_tag);
        assert!(config.theme.menu_archive);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Minimal"
"#,
        )
        .expect("load config");

        assert_eq!(config.site.font_style, "font-sans");
        assert_eq!(config.site.post_list_style, PostListStyle::Page);
        assert_eq!(config.site.posts_per_page, 12);
        assert!(config.site.post_title_icon);
        assert_eq!(config.site.post_waiting_time_for_404, 8);
        assert_eq!(config.site.bei_an_link, "https://beian.miit.gov.cn/");
        assert!(!config.theme.simple_post_cover_enable);
        assert!(!config.theme.simple_top_bar);
        assert!(config.theme.menu_search);
    }

    #[test]
    fn test_site_table_overrides_theme_defaults() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Override"

[theme]
simple_top_bar = true
simple_top_bar_content = "<b>hello</b>"
"#,
        )
        .expect("load config");

        assert!(config.theme.simple_top_bar);
        assert_eq!(
            config.theme.simple_top_bar_content.as_deref(),
            Some("<b>hello</b>")
        );
    }

    #[test]
    fn test_since_accepts_integer() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "Numeric"
since = 2019
"#,
        )
        .expect("load config");

        assert_eq!(config.site.since.as_deref(), Some("2019"));
    }

    #[test]
    fn test_post_list_style_from_string() {
        assert_eq!(PostListStyle::from("page".to_string()), PostListStyle::Page);
        assert_eq!(
            PostListStyle::from("scroll".to_string()),
            PostListStyle::Scroll
        );
        assert_eq!(PostListStyle::from("Page".to_string()), PostListStyle::Scroll);
        assert_eq!(PostListStyle::from(String::new()), PostListStyle::Scroll);
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str(
            r#"
[site]
title = ""
"#,
        );
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_page_size() {
        let result = Config::from_toml_str(
            r#"
[site]
title = "Zero"
posts_per_page = 0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_missing_site_table() {
        assert!(Config::from_toml_str("[theme]\nsimple_top_bar = true\n").is_err());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_config_invalid_toml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[site\ntitle = ").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.title, "Test Blog");
        assert!(config.theme.simple_post_cover_enable);
    }
}
