//! Parsed email document.
//!
//! [`Document`] wraps a kuchiki DOM together with the original raw source
//! string. Both views are needed: content checks read the rendered body text,
//! while markers a parser may strip or normalize (scripts, event handlers,
//! pre-header divs, base64 image sources, viewport/media-query tokens) are
//! detected against the raw source. The document is immutable for the whole
//! lifetime of an analysis run.

mod eml;

pub use eml::{decode_quoted_printable, extract_html_from_eml};

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PREHEADER_RAW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div[^>]*style\s*=\s*["'][^"']*display\s*:\s*none[^"']*["'][^>]*>(.*?)</div>"#)
        .expect("valid preheader regex")
});

static TAG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag-strip regex"));

/// An immutable parsed email: DOM plus original raw HTML source.
pub struct Document {
    raw: String,
    dom: NodeRef,
}

impl Document {
    /// Parse raw HTML into a document. Parsing never fails: html5ever
    /// produces a tree for any input, so malformed emails degrade to
    /// missing elements rather than errors.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let dom = kuchiki::parse_html().one(raw.as_str());
        Self { raw, dom }
    }

    /// The original, unparsed source.
    pub fn raw_source(&self) -> &str {
        &self.raw
    }

    /// Size of the raw source in bytes (UTF-8).
    pub fn byte_size(&self) -> usize {
        self.raw.len()
    }

    /// All elements matching a CSS selector list, in document order.
    /// An invalid selector yields no matches.
    pub fn select(&self, selectors: &str) -> Vec<NodeDataRef<ElementData>> {
        match self.dom.select(selectors) {
            Ok(iter) => iter.collect(),
            Err(()) => Vec::new(),
        }
    }

    /// First element matching a CSS selector list.
    pub fn select_first(&self, selectors: &str) -> Option<NodeDataRef<ElementData>> {
        self.dom.select_first(selectors).ok()
    }

    /// Number of elements matching a CSS selector list.
    pub fn count(&self, selectors: &str) -> usize {
        match self.dom.select(selectors) {
            Ok(iter) => iter.count(),
            Err(()) => 0,
        }
    }

    /// Rendered text content of the body, as an email client would show it
    /// with all markup removed. Empty string when there is no body.
    pub fn body_text(&self) -> String {
        self.select_first("body")
            .map(|body| body.as_node().text_contents())
            .unwrap_or_default()
    }

    /// Text of the `<title>` element, if present and non-empty.
    pub fn title_text(&self) -> Option<String> {
        let title = self.select_first("title")?;
        let text = title.as_node().text_contents().trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Hidden pre-header text, if any.
    ///
    /// Looks for a `display:none` div in the DOM first, then falls back to a
    /// raw-source scan so that a sanitizing parse cannot hide the pre-header.
    pub fn preheader_text(&self) -> Option<String> {
        let dom_hit = self
            .select_first(r#"div[style*="display:none"], div[style*="display: none"]"#)
            .map(|div| div.as_node().text_contents().trim().to_string());
        if let Some(text) = dom_hit {
            return Some(text);
        }

        PREHEADER_RAW.captures(&self.raw).map(|caps| {
            TAG_STRIP
                .replace_all(caps.get(1).map_or("", |m| m.as_str()), " ")
                .trim()
                .to_string()
        })
    }
}

/// Read an attribute value from an element as an owned string.
pub fn attr(el: &NodeDataRef<ElementData>, name: &str) -> Option<String> {
    el.attributes.borrow().get(name).map(str::to_string)
}

/// Whether an element carries an attribute, regardless of its value.
pub fn has_attr(el: &NodeDataRef<ElementData>, name: &str) -> bool {
    el.attributes.borrow().get(name).is_some()
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("byte_size", &self.raw.len())
            .finish_non_exhaustive()
    }
}
