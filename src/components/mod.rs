//! Text components for the HRMS Pro console
//!
//! These modules extend the `App` struct with rendering methods.
//! They only read state; nothing here talks to the server.

mod attendance;
mod dashboard;
mod employees;
mod header;
mod notice;

use crate::api::HrmsApi;
use crate::app::App;
use crate::models::View;

impl<A: HrmsApi> App<A> {
    /// Full screen for the active view
    pub fn render(&self) -> String {
        let body = match self.view {
            View::Dashboard => self.render_dashboard(),
            View::Employees => self.render_employees(),
            View::Attendance => self.render_attendance(),
        };

        let mut out = self.render_header();
        out.push('\n');
        out.push_str(&body);
        if let Some(toast) = self.render_toast() {
            out.push('\n');
            out.push_str(&toast);
        }
        out
    }
}
