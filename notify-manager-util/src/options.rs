use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a mounted notification element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Callback fired by the renderer once a notification closes on its own
/// (timer expiry or the dismiss button).
pub type OnClose = Box<dyn FnOnce()>;

/// What the popup shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub message: String,
    pub icon: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub from: VerticalEdge,
    pub align: HorizontalAlign,
}

/// Named enter/exit transitions, interpreted by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub enter: String,
    pub exit: String,
}

/// Full display instruction handed to the renderer alongside the content.
#[derive(Serialize)]
pub struct DisplayOptions {
    /// Handle the renderer must mount the element under
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: String,
    pub allow_dismiss: bool,
    pub newest_on_top: bool,
    /// Auto-dismiss timer in milliseconds
    pub timer: u32,
    pub placement: Placement,
    pub animate: Animation,
    pub template: String,
    #[serde(skip)]
    pub on_close: Option<OnClose>,
}

impl DisplayOptions {
    /// Take the close callback, leaving `None` behind so it fires at most once
    pub fn take_on_close(&mut self) -> Option<OnClose> {
        self.on_close.take()
    }
}

impl fmt::Debug for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("allow_dismiss", &self.allow_dismiss)
            .field("newest_on_top", &self.newest_on_top)
            .field("timer", &self.timer)
            .field("placement", &self.placement)
            .field("animate", &self.animate)
            .field("template", &self.template)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
