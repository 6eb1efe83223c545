//! Check command - validate configuration and content

use std::path::Path;

use chrono::Datelike;
use color_eyre::eyre::{Result, bail};
use custom1_core::{Config, ContentSource, PostListStyle, StaticContent, footer::leading_year};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and, when given, the exported content document.
pub fn run(config_path: &Path, content_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?content_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nResolved theme options:");
        print_options(cfg);

        println!("\nChecking configuration values...");
        check_config_values(cfg, chrono::Local::now().year(), &mut result);
    }

    if let Some(path) = content_path {
        println!("\nChecking content...");
        check_content(path, &mut result);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn print_options(config: &Config) {
    let site = &config.site;
    let theme = &config.theme;
    let list_style = match site.post_list_style {
        PostListStyle::Page => "page",
        PostListStyle::Scroll => "scroll",
    };

    println!("  title:             {}", site.title);
    println!("  post list:         {list_style}, {} per page", site.posts_per_page);
    println!("  404 wait:          {}s", site.post_waiting_time_for_404);
    println!("  post covers:       {}", theme.simple_post_cover_enable);
    println!("  top bar:           {}", theme.simple_top_bar);
    println!(
        "  menu:              archive={} category={} tag={} search={}",
        theme.menu_archive, theme.menu_category, theme.menu_tag, theme.menu_search
    );
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, current_year: i32, result: &mut ValidationResult) {
    let site = &config.site;

    if let Some(since) = site.since.as_deref() {
        match leading_year(since) {
            Some(year) if year > current_year => {
                result.add_warning(format!("site.since ({since}) is in the future"));
            }
            Some(_) => {}
            None => result.add_warning(format!("site.since ({since}) does not start with a year")),
        }
    }

    if site.algolia_app_id.is_some() && !config.theme.menu_search {
        result.add_warning("site.algolia_app_id is set but theme.menu_search is disabled");
    }

    if config.theme.simple_top_bar && config.theme.simple_top_bar_content.is_none() {
        result.add_warning("theme.simple_top_bar is enabled without simple_top_bar_content");
    }

    if site.post_waiting_time_for_404 == 0 {
        result.add_warning("site.post_waiting_time_for_404 is 0; missing pages redirect immediately");
    }

    println!("  ✓ Configuration values checked");
}

/// Validate an exported content document.
fn check_content(path: &Path, result: &mut ValidationResult) {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            result.add_error(format!("{}: Failed to read file: {e}", path.display()));
            return;
        }
    };

    let content = match StaticContent::from_json(&json) {
        Ok(content) => content,
        Err(e) => {
            result.add_error(format!("{}: {e}", path.display()));
            return;
        }
    };

    let posts = content.published();
    for post in posts.iter().filter(|p| p.display_date().is_none()) {
        result.add_warning(format!("post \"{}\" has no date", post.title));
    }

    println!(
        "  ✓ {} records, {} posts, {} categories, {} tags",
        content.records().len(),
        posts.len(),
        content.category_options().len(),
        content.tag_options().len()
    );
}
