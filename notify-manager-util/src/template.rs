use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Class carried by every mounted notification container. The mounted
/// notifications are looked up by this class.
pub const CONTAINER_CLASS: &str = "bootstrap-notify-container";

/// Built-in popup template.
///
/// Placeholders: `{0}` type, `{1}` title, `{2}` message, `{3}` url, `{4}` target.
pub const DEFAULT_TEMPLATE: &str = concat!(
    r#"<div data-notify="container" "#,
    r#"class="bootstrap-notify-container alert alert-{0}" role="alert">"#,
    r#"<button type="button" aria-hidden="true" class="close" data-notify="dismiss">×</button>"#,
    r#"<div class="notification-content">"#,
    r#"<span data-notify="icon"></span>"#,
    r#"<span data-notify="message">{2}</span>"#,
    r#"</div>"#,
    r#"</div>"#,
);

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").unwrap());

static ICON_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span data-notify="icon"(?P<attrs>[^>]*)>"#).unwrap());

/// Values substituted into a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFields<'a> {
    pub kind: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub url: &'a str,
    pub target: &'a str,
}

impl<'a> TemplateFields<'a> {
    pub fn new(kind: &'a str, message: &'a str) -> Self {
        Self {
            kind,
            message,
            url: "#",
            target: "_blank",
            ..Default::default()
        }
    }

    fn get(&self, index: usize) -> Option<&'a str> {
        match index {
            0 => Some(self.kind),
            1 => Some(self.title),
            2 => Some(self.message),
            3 => Some(self.url),
            4 => Some(self.target),
            _ => None,
        }
    }
}

/// Substitute the positional placeholders of `template`.
///
/// Unknown indices are left as written.
pub fn render_template(template: &str, fields: &TemplateFields<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| fields.get(i))
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Put the icon class on the first `data-notify="icon"` span.
///
/// Templates without an icon slot are returned unchanged.
pub fn fill_icon_slot(html: &str, icon: &str) -> String {
    if !ICON_SLOT.is_match(html) {
        tracing::trace!("template has no icon slot");
        return html.to_string();
    }

    ICON_SLOT
        .replacen(html, 1, |caps: &Captures<'_>| {
            format!(r#"<span data-notify="icon" class="{}"{}>"#, icon, &caps["attrs"])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_template() {
        let html = render_template(DEFAULT_TEMPLATE, &TemplateFields::new("success", "Saved"));

        let opening = concat!(
            r#"<div data-notify="container" class="bootstrap-notify-container "#,
            r#"alert alert-success" role="alert">"#,
        );
        assert!(html.starts_with(opening));
        assert!(html.contains(r#"<span data-notify="message">Saved</span>"#));
        assert!(html.contains(CONTAINER_CLASS));
        assert!(html.contains(r#"data-notify="dismiss""#));
        assert!(!html.contains("{0}"));
        assert!(!html.contains("{2}"));
    }

    #[test]
    fn test_render_all_placeholders() {
        let fields = TemplateFields {
            kind: "info",
            title: "Title",
            message: "Body",
            url: "https://example.com",
            target: "_self",
        };
        let html = render_template("{0}|{1}|{2}|{3}|{4}", &fields);
        assert_eq!(html, "info|Title|Body|https://example.com|_self");
    }

    #[test]
    fn test_render_unknown_placeholder_untouched() {
        let html = render_template("{2} {9} {10}", &TemplateFields::new("x", "m"));
        assert_eq!(html, "m {9} {10}");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let html = render_template("{2}-{2}", &TemplateFields::new("x", "ab"));
        assert_eq!(html, "ab-ab");
    }

    #[test]
    fn test_fill_icon_slot() {
        let html = fill_icon_slot(r#"<span data-notify="icon"></span>"#, "bi bi-check-circle");
        assert_eq!(html, r#"<span data-notify="icon" class="bi bi-check-circle"></span>"#);
    }

    #[test]
    fn test_fill_icon_slot_keeps_other_attributes() {
        let html = fill_icon_slot(r#"<span data-notify="icon" id="i"></span>"#, "x");
        assert_eq!(html, r#"<span data-notify="icon" class="x" id="i"></span>"#);
    }

    #[test]
    fn test_fill_icon_slot_without_slot() {
        assert_eq!(fill_icon_slot("<div>{2}</div>", "x"), "<div>{2}</div>");
    }
}
