//! Toast line and console messages

use crate::api::HrmsApi;
use crate::app::App;
use crate::models::ToastKind;

impl<A: HrmsApi> App<A> {
    pub fn render_toast(&self) -> Option<String> {
        let toast = self.notifier.current()?;
        let theme = &self.theme;
        let (icon, colour) = match toast.kind {
            ToastKind::Success => ("✓", theme.success),
            ToastKind::Error => ("✗", theme.error),
        };
        Some(theme.paint(&format!("{} {}", icon, toast.message), colour))
    }

    /// Drain queued console messages into printable text
    pub fn render_messages(&mut self) -> Option<String> {
        let messages = self.take_messages();
        if messages.is_empty() {
            return None;
        }
        Some(
            messages
                .iter()
                .map(|msg| self.theme.paint(msg, self.theme.foreground_dim))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
