use crate::surface::{Renderer, Surface};
use anyhow::bail;
use notify_manager_util::{
    Animation, DisplayOptions, NotificationContent, NotificationId, OnClose, Placement,
    render_popup, strip_html,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// A notification element mounted on the simulated page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedNotification {
    pub id: NotificationId,
    pub kind: String,
    pub content: NotificationContent,
    pub html: String,
    pub allow_dismiss: bool,
    pub newest_on_top: bool,
    pub timer: u32,
    pub placement: Placement,
    pub animate: Animation,
}

impl MountedNotification {
    /// Visible text of the popup
    pub fn text(&self) -> String {
        strip_html(&self.html)
    }
}

/// In-memory page standing in for the browser DOM and the popup engine.
///
/// Elements are kept in mount order. Timers are not run here; whoever drives
/// the page calls [`SimulatedPage::expire`] when a popup's timer elapses.
#[derive(Default)]
pub struct SimulatedPage {
    viewport_width: Cell<u32>,
    mounted: RefCell<Vec<MountedNotification>>,
    pending: RefCell<HashMap<NotificationId, OnClose>>,
}

impl SimulatedPage {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width: Cell::new(viewport_width),
            ..Default::default()
        }
    }

    /// Simulate a window resize
    pub fn set_viewport_width(&self, width: u32) {
        tracing::debug!(width, "viewport resized");
        self.viewport_width.set(width);
    }

    /// Snapshot of the mounted elements in mount order
    pub fn mounted(&self) -> Vec<MountedNotification> {
        self.mounted.borrow().clone()
    }

    /// Mounted elements in the order they appear on screen, top first
    pub fn stacked(&self) -> Vec<MountedNotification> {
        let mut stacked = self.mounted();
        if stacked.last().is_some_and(|n| n.newest_on_top) {
            stacked.reverse();
        }
        stacked
    }

    pub fn get(&self, id: NotificationId) -> Option<MountedNotification> {
        self.mounted.borrow().iter().find(|n| n.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.mounted.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.borrow().is_empty()
    }

    /// The popup's timer elapsed. Returns false if it was already gone.
    pub fn expire(&self, id: NotificationId) -> bool {
        self.close(id)
    }

    /// The user clicked the dismiss button.
    pub fn dismiss(&self, id: NotificationId) -> anyhow::Result<bool> {
        match self.get(id) {
            Some(n) if !n.allow_dismiss => bail!("notification {id} cannot be dismissed"),
            Some(_) => Ok(self.close(id)),
            None => Ok(false),
        }
    }

    fn unmount(&self, id: NotificationId) -> bool {
        let mut mounted = self.mounted.borrow_mut();
        match mounted.iter().position(|n| n.id == id) {
            Some(pos) => {
                mounted.remove(pos);
                true
            }
            None => false,
        }
    }

    fn close(&self, id: NotificationId) -> bool {
        if !self.unmount(id) {
            return false;
        }

        // Borrow released before the callback runs; it may call back into the page.
        let on_close = self.pending.borrow_mut().remove(&id);
        if let Some(on_close) = on_close {
            on_close();
        }
        tracing::trace!(%id, "notification closed");
        true
    }
}

impl Surface for SimulatedPage {
    fn viewport_width(&self) -> u32 {
        self.viewport_width.get()
    }

    fn mounted_notifications(&self) -> Vec<NotificationId> {
        self.mounted.borrow().iter().map(|n| n.id).collect()
    }

    fn remove(&self, id: NotificationId) -> anyhow::Result<()> {
        if self.unmount(id) {
            self.pending.borrow_mut().remove(&id);
            tracing::trace!(%id, "notification removed");
        }
        Ok(())
    }
}

impl Renderer for SimulatedPage {
    fn display(
        &self,
        content: NotificationContent,
        mut options: DisplayOptions,
    ) -> anyhow::Result<()> {
        let id = options.id;
        if self.get(id).is_some() {
            bail!("notification {id} is already mounted");
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            match serde_json::to_string(&options) {
                Ok(json) => tracing::trace!(%id, options = %json, "display"),
                Err(err) => tracing::warn!("Failed to serialize display options: {}", err),
            }
        }

        let html = render_popup(&options.template, &options.kind, &content);
        if let Some(on_close) = options.take_on_close() {
            self.pending.borrow_mut().insert(id, on_close);
        }

        self.mounted.borrow_mut().push(MountedNotification {
            id,
            kind: options.kind,
            content,
            html,
            allow_dismiss: options.allow_dismiss,
            newest_on_top: options.newest_on_top,
            timer: options.timer,
            placement: options.placement,
            animate: options.animate,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_manager_util::{DEFAULT_TEMPLATE, HorizontalAlign, VerticalEdge};
    use std::rc::Rc;

    fn options(id: u64, on_close: Option<OnClose>) -> DisplayOptions {
        DisplayOptions {
            id: NotificationId(id),
            kind: "success".to_string(),
            allow_dismiss: true,
            newest_on_top: true,
            timer: 3000,
            placement: Placement {
                from: VerticalEdge::Top,
                align: HorizontalAlign::Right,
            },
            animate: Animation {
                enter: "in".to_string(),
                exit: "out".to_string(),
            },
            template: DEFAULT_TEMPLATE.to_string(),
            on_close,
        }
    }

    fn content(message: &str) -> NotificationContent {
        NotificationContent {
            message: message.to_string(),
            icon: "bi bi-check-circle".to_string(),
        }
    }

    fn counter() -> (Rc<Cell<u32>>, OnClose) {
        let fired = Rc::new(Cell::new(0));
        let inner = fired.clone();
        (fired, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn test_display_mounts_in_order() {
        let page = SimulatedPage::new(1024);
        page.display(content("a"), options(1, None)).unwrap();
        page.display(content("b"), options(2, None)).unwrap();

        assert_eq!(page.mounted_notifications(), vec![NotificationId(1), NotificationId(2)]);
        assert_eq!(page.stacked()[0].id, NotificationId(2));
        assert_eq!(page.get(NotificationId(1)).unwrap().text(), "×a");
    }

    #[test]
    fn test_display_duplicate_id_fails() {
        let page = SimulatedPage::new(1024);
        page.display(content("a"), options(1, None)).unwrap();
        let err = page.display(content("b"), options(1, None)).unwrap_err();
        assert!(err.to_string().contains("already mounted"));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_expire_fires_callback_once() {
        let page = SimulatedPage::new(1024);
        let (fired, on_close) = counter();
        page.display(content("a"), options(1, Some(on_close))).unwrap();

        assert!(page.expire(NotificationId(1)));
        assert!(!page.expire(NotificationId(1)));
        assert_eq!(fired.get(), 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_remove_skips_callback() {
        let page = SimulatedPage::new(1024);
        let (fired, on_close) = counter();
        page.display(content("a"), options(1, Some(on_close))).unwrap();

        page.remove(NotificationId(1)).unwrap();
        assert!(!page.expire(NotificationId(1)));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_dismiss_respects_allow_dismiss() {
        let page = SimulatedPage::new(1024);
        let mut opts = options(1, None);
        opts.allow_dismiss = false;
        page.display(content("a"), opts).unwrap();

        assert!(page.dismiss(NotificationId(1)).is_err());
        assert_eq!(page.len(), 1);
        assert!(!page.dismiss(NotificationId(42)).unwrap());
    }

    #[test]
    fn test_stacked_without_newest_on_top() {
        let page = SimulatedPage::new(1024);
        for id in 1..=2 {
            let mut opts = options(id, None);
            opts.newest_on_top = false;
            page.display(content("x"), opts).unwrap();
        }
        assert_eq!(page.stacked()[0].id, NotificationId(1));
    }

    #[test]
    fn test_resize() {
        let page = SimulatedPage::new(1024);
        page.set_viewport_width(375);
        assert_eq!(page.viewport_width(), 375);
    }
}
