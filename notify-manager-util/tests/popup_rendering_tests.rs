//! Integration tests for popup markup rendering
//!
//! These tests run the full template pipeline (kind classification,
//! placeholder substitution, icon slot, message sanitizing) the way a
//! renderer consumes it.

use notify_manager_util::{
    ALERT_ICON, CONTAINER_CLASS, DEFAULT_TEMPLATE, NotificationContent, NotificationKind,
    SUCCESS_ICON, render_popup, strip_html,
};

fn content(kind: &str, message: &str) -> NotificationContent {
    NotificationContent {
        message: message.to_string(),
        icon: NotificationKind::from(kind).icon().to_string(),
    }
}

#[test]
fn test_success_popup_markup() {
    let html = render_popup(DEFAULT_TEMPLATE, "success", &content("success", "Saved"));

    assert!(html.contains(CONTAINER_CLASS), "container class must be present for lookup");
    assert!(html.contains("alert-success"));
    assert!(html.contains(&format!(r#"class="{}""#, SUCCESS_ICON)));
    assert!(html.contains(r#"<span data-notify="message">Saved</span>"#));
    assert!(html.contains(r#"role="alert""#));
}

#[test]
fn test_error_popup_markup() {
    let html = render_popup(DEFAULT_TEMPLATE, "error", &content("error", "Upload failed"));

    assert!(html.contains("alert-error"));
    assert!(html.contains(&format!(r#"class="{}""#, ALERT_ICON)));
    assert_eq!(strip_html(&html), "×Upload failed");
}

#[test]
fn test_hostile_kind_cannot_break_out_of_class_attribute() {
    let kind = r#"x" onmouseover="alert(1)"#;
    let html = render_popup(DEFAULT_TEMPLATE, kind, &content(kind, "hi"));

    assert!(!html.contains("onmouseover=\""));
    assert!(html.contains("alert-xonmouseoveralert1"));
}

#[test]
fn test_hostile_message_is_sanitized() {
    let html = render_popup(
        DEFAULT_TEMPLATE,
        "error",
        &content("error", "<script>alert(1)</script><b>Denied</b>"),
    );

    assert!(!html.contains("<script"));
    assert!(html.contains("<b>Denied</b>"));
}

#[test]
fn test_custom_template_without_icon_slot() {
    let html = render_popup(
        r#"<div class="toast toast-{0}">{2}</div>"#,
        "warning",
        &content("warning", "Low disk"),
    );
    assert_eq!(html, r#"<div class="toast toast-warning">Low disk</div>"#);
}

#[test]
fn test_empty_message_accepted() {
    let html = render_popup(DEFAULT_TEMPLATE, "success", &content("success", ""));
    assert!(html.contains(r#"<span data-notify="message"></span>"#));
}
