use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Inline tags allowed in the message slot. The slot is a `<span>`, so
/// block elements are unwrapped and only their text is kept.
const MESSAGE_TAGS: &[&str] = &["b", "strong", "i", "em", "u", "br", "a"];

/// Link schemes allowed in message links
const LINK_SCHEMES: &[&str] = &["https", "mailto"];

/// Tags dropped together with their content
const DROPPED_WITH_CONTENT: &[&str] = &["script", "style"];

/// Sanitize a notification message before it lands in the message slot.
///
/// Only `href` survives, and only on links; links open with
/// rel="noopener noreferrer".
pub fn sanitize_message(html: &str) -> String {
  let link_attrs: HashSet<&str> = std::iter::once("href").collect();

  Builder::empty()
    .tags(MESSAGE_TAGS.iter().copied().collect())
    .clean_content_tags(DROPPED_WITH_CONTENT.iter().copied().collect())
    .url_schemes(LINK_SCHEMES.iter().copied().collect())
    .tag_attributes(std::iter::once(("a", link_attrs)).collect())
    .link_rel(Some("noopener noreferrer"))
    .clean(html)
    .to_string()
}

/// Strip all HTML tags, returning plain text.
pub fn strip_html(html: &str) -> String {
  let without_tags = TAG.replace_all(html, "");
  decode_entities(&without_tags)
}

fn decode_entities(text: &str) -> String {
  text
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&#x27;", "'")
    .replace("&#x2F;", "/")
    .replace("&#47;", "/")
    .replace("&amp;", "&") // last, avoids double-decoding
}
