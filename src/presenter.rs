use crate::state::MobileTracker;
use crate::surface::{Renderer, Surface};
use notify_manager_config::NotificationsConfig;
use notify_manager_util::{
    Animation, DEFAULT_TEMPLATE, DisplayOptions, HorizontalAlign, NotificationContent,
    NotificationId, NotificationKind, OnClose, Placement, VerticalEdge,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Decides whether a notification can appear right away or must first evict
/// an older one, then hands a full display instruction to the renderer.
///
/// On mobile viewports at most `max_mobile_visible` notifications stay on
/// screen; the oldest mounted one is evicted to make room. Desktop
/// notifications are never throttled or tracked.
///
/// The viewport is classified again at every decision point, so a resize
/// between two steps is honoured immediately.
pub struct NotificationPresenter<S, R> {
    surface: S,
    renderer: R,
    config: NotificationsConfig,
    state: Rc<RefCell<MobileTracker>>,
}

impl<S: Surface, R: Renderer> NotificationPresenter<S, R> {
    pub fn new(surface: S, renderer: R, config: NotificationsConfig) -> Self {
        Self {
            surface,
            renderer,
            config,
            state: Rc::new(RefCell::new(MobileTracker::new())),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.surface.viewport_width() <= self.config.mobile_breakpoint
    }

    /// Number of notifications shown in mobile mode that are still open
    pub fn visible_mobile_count(&self) -> usize {
        self.state.borrow().count()
    }

    /// Show a notification.
    ///
    /// `kind` is `"success"` or anything else; `message` is passed through
    /// as is. Errors from the surface or the renderer are returned untouched.
    pub fn show_notification(&self, kind: &str, message: &str) -> anyhow::Result<NotificationId> {
        let kind = NotificationKind::from(kind);

        if self.is_mobile() {
            self.make_room()?;
        }

        let id = self.state.borrow_mut().allocate_id();
        if self.is_mobile() {
            self.state.borrow_mut().track(id);
        }

        let content = NotificationContent {
            message: message.to_string(),
            icon: kind.icon().to_string(),
        };
        let options = self.display_options(id, &kind);
        trace!(%id, kind = kind.as_str(), "delegating to renderer");

        if let Err(err) = self.renderer.display(content, options) {
            // never mounted, so it must not hold a mobile slot
            self.state.borrow_mut().release(id);
            return Err(err);
        }
        debug!(
            %id,
            mobile_count = self.visible_mobile_count(),
            "notification shown"
        );
        Ok(id)
    }

    /// Evict the oldest mounted notification if the mobile cap is reached.
    fn make_room(&self) -> anyhow::Result<()> {
        let max = self.config.effective_max_mobile_visible();
        let mounted = self.surface.mounted_notifications();

        let dropped = self.state.borrow_mut().retain_mounted(&mounted);
        if dropped > 0 {
            debug!(dropped, "forgot mobile notifications that are no longer mounted");
        }

        if self.visible_mobile_count() < max {
            return Ok(());
        }

        let Some(&oldest) = mounted.first() else {
            return Ok(());
        };

        self.surface.remove(oldest)?;
        let released = self.state.borrow_mut().evicted(oldest);
        debug!(
            evicted = %oldest,
            released = ?released,
            max,
            "mobile notification cap reached"
        );
        Ok(())
    }

    fn display_options(&self, id: NotificationId, kind: &NotificationKind) -> DisplayOptions {
        let align = if self.is_mobile() {
            HorizontalAlign::Center
        } else {
            HorizontalAlign::Right
        };

        DisplayOptions {
            id,
            kind: kind.as_str().to_string(),
            allow_dismiss: self.config.allow_dismiss,
            newest_on_top: self.config.newest_on_top,
            timer: self.config.timer_ms,
            placement: Placement {
                from: VerticalEdge::Top,
                align,
            },
            animate: Animation {
                enter: self.config.enter_animation.clone(),
                exit: self.config.exit_animation.clone(),
            },
            template: self
                .config
                .template
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            on_close: Some(release_on_close(Rc::downgrade(&self.state), id)),
        }
    }
}

/// Close callback: frees the notification's mobile slot if it holds one.
fn release_on_close(state: Weak<RefCell<MobileTracker>>, id: NotificationId) -> OnClose {
    Box::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        if state.borrow_mut().release(id) {
            debug!(%id, "mobile notification closed");
        }
    })
}
