use crate::config::NOTICE_SECONDS;
use eframe::egui::{Align2, Area, Context, Frame, Id, Order};
use std::time::Duration;

struct Notice {
    text: String,
    expires_at: f64,
}

/// Short-lived messages drawn over the bottom of the screen.
/// Times are seconds from `InputState::time`.
#[derive(Default)]
pub struct Notices {
    queue: Vec<Notice>,
}

impl Notices {
    pub fn show(&mut self, text: impl Into<String>, now: f64) {
        self.queue.push(Notice {
            text: text.into(),
            expires_at: now + NOTICE_SECONDS,
        });
    }

    pub fn prune(&mut self, now: f64) {
        self.queue.retain(|notice| notice.expires_at > now);
    }

    pub fn active(&self, now: f64) -> impl Iterator<Item = &str> {
        self.queue
            .iter()
            .filter(move |notice| notice.expires_at > now)
            .map(|notice| notice.text.as_str())
    }

    /// Time until the next notice disappears.
    pub fn next_expiry(&self, now: f64) -> Option<Duration> {
        self.queue
            .iter()
            .map(|notice| notice.expires_at - now)
            .filter(|left| *left > 0.0)
            .min_by(f64::total_cmp)
            .map(Duration::from_secs_f64)
    }

    pub fn render(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);
        if self.queue.is_empty() {
            return;
        }

        Area::new(Id::new("notices"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .interactable(false)
            .show(ctx, |ui| {
                for text in self.active(now) {
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(text);
                    });
                }
            });

        if let Some(left) = self.next_expiry(now) {
            ctx.request_repaint_after(left);
        }
    }
}
