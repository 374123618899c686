use crate::handlers::Command;
use crate::presenter::NotificationPresenter;
use crate::rendering::SimulatedPage;
use notify_manager_config::NotificationsConfig;
use notify_manager_util::NotificationId;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

/// Drive a presenter over a simulated page from commands read on `input`,
/// writing replies to `out`.
///
/// Must run inside a [`tokio::task::LocalSet`]; popup timers are local tasks.
pub async fn run<I, W>(
    config: NotificationsConfig,
    viewport_width: u32,
    input: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let page = Rc::new(SimulatedPage::new(viewport_width));
    let presenter = NotificationPresenter::new(page.clone(), page.clone(), config);

    info!(viewport_width, mobile = presenter.is_mobile(), "ready");

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!("Ignoring input: {}", err);
                continue;
            }
        };

        match command {
            Command::Show { kind, message } => {
                match presenter.show_notification(&kind, &message) {
                    Ok(id) => {
                        let count = presenter.visible_mobile_count();
                        writeln!(out, "shown {id} (mobile count {count})")?;
                        // the popup engine owns the timer; use what it was given
                        if let Some(mounted) = page.get(id) {
                            let timer = Duration::from_millis(u64::from(mounted.timer));
                            schedule_expiry(page.clone(), id, timer);
                        }
                    }
                    Err(err) => error!("Failed to show notification: {:#}", err),
                }
            }
            Command::Resize(width) => {
                page.set_viewport_width(width);
                let mode = if presenter.is_mobile() { "mobile" } else { "desktop" };
                writeln!(out, "viewport {width}px ({mode})")?;
            }
            Command::Dismiss(id) => match page.dismiss(id) {
                Ok(true) => writeln!(out, "dismissed {id}")?,
                Ok(false) => writeln!(out, "no notification {id}")?,
                Err(err) => warn!("Failed to dismiss notification: {}", err),
            },
            Command::List => {
                if page.is_empty() {
                    writeln!(out, "no notifications")?;
                }
                for n in page.stacked() {
                    writeln!(
                        out,
                        "{:>4} [{}] {:?} {}ms ({}) {}",
                        n.id.0,
                        n.kind,
                        n.placement.align,
                        n.timer,
                        n.animate.enter,
                        n.text()
                    )?;
                }
                writeln!(
                    out,
                    "{} mounted, mobile count {}",
                    page.len(),
                    presenter.visible_mobile_count()
                )?;
            }
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

fn schedule_expiry(page: Rc<SimulatedPage>, id: NotificationId, timer: Duration) {
    tokio::task::spawn_local(async move {
        tokio::time::sleep(timer).await;
        if page.expire(id) {
            debug!(%id, "notification timed out");
        }
    });
}
