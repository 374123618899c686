use notify_manager_util::{DisplayOptions, NotificationContent, NotificationId};
use std::rc::Rc;

/// Page the notifications live on: viewport size and mounted popups.
pub trait Surface {
    /// Current viewport width in logical pixels
    fn viewport_width(&self) -> u32;

    /// Handles of the mounted notification elements, oldest first
    fn mounted_notifications(&self) -> Vec<NotificationId>;

    /// Unmount an element without running its close callback
    fn remove(&self, id: NotificationId) -> anyhow::Result<()>;
}

/// Popup engine that mounts, animates and eventually closes notifications.
///
/// Implementations must call `options.on_close` at most once, when the popup
/// closes on its own, and must not hold internal borrows while doing so.
pub trait Renderer {
    fn display(&self, content: NotificationContent, options: DisplayOptions) -> anyhow::Result<()>;
}

impl<T: Surface + ?Sized> Surface for Rc<T> {
    fn viewport_width(&self) -> u32 {
        (**self).viewport_width()
    }

    fn mounted_notifications(&self) -> Vec<NotificationId> {
        (**self).mounted_notifications()
    }

    fn remove(&self, id: NotificationId) -> anyhow::Result<()> {
        (**self).remove(id)
    }
}

impl<T: Renderer + ?Sized> Renderer for Rc<T> {
    fn display(&self, content: NotificationContent, options: DisplayOptions) -> anyhow::Result<()> {
        (**self).display(content, options)
    }
}
