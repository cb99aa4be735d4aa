//! Navigation tree to markup rendering
//!
//! Produces the sidebar `<nav>` tree and the surrounding page shell. The
//! client-side behavior (menu toggle, frame loading, link clicks) lives in
//! script supplied by the site; the renderer only wires handler names into
//! the markup via [`ClientHooks`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::entities::{NavContext, NavEntry};

/// Expandability indicator shown after the title of entries with children.
pub const TRIANGLE: &str = r#"<div class="triangle">&#x25b6;</div>"#;

/// Hamburger glyph on the menu toggle button.
pub const HAMBURGER: &str = "&#x2630;";

/// Names of the client-side functions the markup calls into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientHooks {
    /// Called as `link_click(element, url)`; retargets the content frame
    pub link_click: String,
    /// Called with no arguments when the hamburger button is pressed
    pub menu_toggle: String,
    /// Called as `frame_loaded(element)` once the frame finishes loading
    pub frame_loaded: String,
}

impl Default for ClientHooks {
    fn default() -> Self {
        Self {
            link_click: "handleLinkClick".into(),
            menu_toggle: "toggleHamburgerMenu".into(),
            frame_loaded: "iframeLoaded".into(),
        }
    }
}

/// Fixed parts of the page around the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageShell {
    pub stylesheet: String,
    pub script: String,
    /// Name of the content frame; nav links target it
    pub frame_name: String,
    /// Initial frame source (welcome page)
    pub frame_src: String,
    pub frame_title: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            stylesheet: "/blog/assets/topics.css".into(),
            script: "/blog/assets/topics.js".into(),
            frame_name: "frame".into(),
            frame_src: "../welcome/".into(),
            frame_title: "topic content".into(),
        }
    }
}

/// Stateless renderer; every call is an independent pure transformation.
#[derive(Debug, Clone)]
pub struct NavTreeRenderer {
    hooks: ClientHooks,
    shell: PageShell,
    escape: bool,
}

impl Default for NavTreeRenderer {
    fn default() -> Self {
        Self::new(ClientHooks::default(), PageShell::default())
    }
}

impl NavTreeRenderer {
    pub fn new(hooks: ClientHooks, shell: PageShell) -> Self {
        Self {
            hooks,
            shell,
            escape: true,
        }
    }

    /// Toggle escaping of titles and attribute values.
    ///
    /// With escaping off, data is interpolated verbatim, so titles may carry
    /// inline markup and a quote in a url breaks the onclick attribute.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Render one `<li>` with its label and, recursively, its children.
    pub fn render_item(&self, entry: &NavEntry) -> String {
        let mut classes = String::new();
        if entry.is_ordered() {
            classes.push_str(" ordered");
        }
        if entry.is_top() {
            classes.push_str(" top");
        }

        let indicator = if entry.has_children() { TRIANGLE } else { "" };

        format!(
            r#"<li class="{classes}"><a class="nav-link" onclick="{hook}(this, '{url}')" target="{target}">{title}{indicator}</a>{nested}</li>"#,
            hook = self.attr(&self.hooks.link_click),
            url = self.js_string_attr(&entry.url),
            target = self.attr(&self.shell.frame_name),
            title = self.text(&entry.title),
            nested = self.render_list(entry.children.as_deref()),
        )
    }

    /// Render a `<ul>` of items in input order; empty string for no entries.
    pub fn render_list(&self, entries: Option<&[NavEntry]>) -> String {
        let entries = match entries {
            Some(entries) if !entries.is_empty() => entries,
            _ => return String::new(),
        };
        let items: String = entries.iter().map(|e| self.render_item(e)).collect();
        format!("<ul>{items}</ul>")
    }

    /// Render the full page fragment: assets, menu toggle, nav tree and content frame.
    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, data: &NavContext) -> String {
        debug!("render: {} entries", data.entry_count());
        let shell = &self.shell;
        let hooks = &self.hooks;
        format!(
            r#"<link rel="stylesheet" href="{stylesheet}">
<script src="{script}"></script>
<button class="hamburger" onclick="{menu_toggle}()">{HAMBURGER}</button>
<nav>
{nav}
</nav>
<section class="topic-content">
  <iframe
    name="{frame_name}"
    onload="{frame_loaded}(this)"
    src="{frame_src}"
    title="{frame_title}"></iframe>
</section>
"#,
            stylesheet = self.attr(&shell.stylesheet),
            script = self.attr(&shell.script),
            menu_toggle = self.attr(&hooks.menu_toggle),
            nav = self.render_list(data.nav()),
            frame_name = self.attr(&shell.frame_name),
            frame_loaded = self.attr(&hooks.frame_loaded),
            frame_src = self.attr(&shell.frame_src),
            frame_title = self.attr(&shell.frame_title),
        )
    }

    fn text(&self, s: &str) -> String {
        if self.escape {
            escape_html(s)
        } else {
            s.to_string()
        }
    }

    fn attr(&self, s: &str) -> String {
        self.text(s)
    }

    /// A value placed inside a single-quoted JS string inside an attribute.
    fn js_string_attr(&self, s: &str) -> String {
        if self.escape {
            escape_html(&escape_js_string(s))
        } else {
            s.to_string()
        }
    }
}

/// Escape text for HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a single-quoted JS string literal.
pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
