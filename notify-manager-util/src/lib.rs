pub mod kind;
pub mod options;
pub mod sanitizer;
pub mod template;

pub use kind::{ALERT_ICON, DEFAULT_SEVERITY, NotificationKind, SUCCESS_ICON};
pub use options::{
    Animation, DisplayOptions, HorizontalAlign, NotificationContent, NotificationId, OnClose,
    Placement, VerticalEdge,
};
pub use sanitizer::{sanitize_message, strip_html};
pub use template::{
    CONTAINER_CLASS, DEFAULT_TEMPLATE, TemplateFields, fill_icon_slot, render_template,
};

/// Render the popup markup the way a bootstrap-notify style renderer would:
/// template placeholders first, then the icon slot. The message is sanitized.
pub fn render_popup(template: &str, kind: &str, content: &NotificationContent) -> String {
    let severity = NotificationKind::from(kind).severity();
    let message = sanitize_message(&content.message);
    let html = render_template(template, &TemplateFields::new(&severity, &message));
    fill_icon_slot(&html, &content.icon)
}
