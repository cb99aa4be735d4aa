//! NAVTREE_* environment overrides.
//!
//! Kept in its own test binary: the variables are process-wide and would leak
//! into the local-config tests running in parallel.

use std::fs;

use tempfile::TempDir;

use navtree::config::{local_config_path, Settings};
use navtree::domain::NavEntry;

const VARS: [(&str, &str); 4] = [
    ("NAVTREE_PAGE__FRAME_NAME", "content"),
    ("NAVTREE_HOOKS__LINK_CLICK", "openTopic"),
    ("NAVTREE_ESCAPE_HTML", "false"),
    ("NAVTREE_OUTPUT", "$NAVTREE_TEST_SITE/topics.html"),
];

#[test]
fn given_env_vars_when_load_then_override_local_config() {
    // Arrange
    let project = TempDir::new().unwrap();
    let local = r#"
escape_html = true
output = "local.html"

[page]
frame_name = "local-frame"
stylesheet = "/docs/nav.css"

[hooks]
link_click = "localClick"
"#;
    fs::write(local_config_path(project.path()), local).unwrap();
    std::env::set_var("NAVTREE_TEST_SITE", "/srv/site");
    for (key, value) in VARS {
        std::env::set_var(key, value);
    }

    // Act
    let result = Settings::load(Some(project.path()));

    for (key, _) in VARS {
        std::env::remove_var(key);
    }
    std::env::remove_var("NAVTREE_TEST_SITE");

    // Assert
    let settings = result.expect("load settings");
    assert_eq!(settings.page.frame_name, "content");
    assert_eq!(settings.hooks.link_click, "openTopic");
    assert!(!settings.escape_html);
    assert_eq!(
        settings.output.as_deref(),
        Some(std::path::Path::new("/srv/site/topics.html"))
    );
    // untouched by env, still from the local file
    assert_eq!(settings.page.stylesheet, "/docs/nav.css");
    assert_eq!(settings.hooks.menu_toggle, "toggleHamburgerMenu");

    let html = settings
        .renderer()
        .render_item(&NavEntry::new("<b>Intro</b>", "/intro/"));
    assert!(html.contains(r#"onclick="openTopic(this, '/intro/')" target="content""#));
    assert!(html.contains("<b>Intro</b>"));
}
