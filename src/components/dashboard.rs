//! Dashboard view: counters, top performance, recent activity

use crate::api::{AttendanceStatus, HrmsApi};
use crate::app::App;

const BAR_WIDTH: usize = 20;
const FEED_LEN: usize = 5;

/// Fixed-width bar for an attendance percentage
pub(super) fn rate_bar(rate: f64) -> String {
    let filled = ((rate.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

impl<A: HrmsApi> App<A> {
    pub fn render_dashboard(&self) -> String {
        let theme = &self.theme;
        let stats = &self.stats;
        let mut out = String::new();

        if stats.total_employees == 0 {
            out.push_str(&theme.paint(
                "Welcome to HRMS Pro! The database is currently empty. \
                 Use /seed to restore demo data.\n\n",
                theme.info,
            ));
        }

        out.push_str(&format!(
            "Total Staff: {}   {}   {}\n",
            theme.bold(&stats.total_employees.to_string()),
            theme.paint(&format!("Present Today: {}", stats.present_today), theme.success),
            theme.paint(&format!("Absent Today: {}", stats.absent_today), theme.error),
        ));

        out.push_str(&format!("\n{}\n", theme.paint("Top Performance", theme.accent_purple)));
        for emp in self.employees.iter().take(FEED_LEN) {
            let colour = if emp.attendance_rate > 75.0 {
                theme.success
            } else {
                theme.warning
            };
            out.push_str(&format!(
                "  {:<20} {} {:>3}%\n",
                emp.name,
                theme.paint(&rate_bar(emp.attendance_rate), colour),
                emp.attendance_rate.round()
            ));
        }

        out.push_str(&format!("\n{}\n", theme.paint("Recent Activity", theme.info)));
        if stats.recent_activity.is_empty() {
            out.push_str(&theme.paint("  No activity yet\n", theme.foreground_muted));
        }
        for act in stats.recent_activity.iter().take(FEED_LEN) {
            let colour = match act.status {
                AttendanceStatus::Present => theme.success,
                AttendanceStatus::Absent => theme.error,
            };
            let department = act.department.as_deref().unwrap_or("N/A");
            let date = act
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} {} ({})  {}  {}\n",
                theme.paint("●", colour),
                act.name,
                department,
                theme.paint(&act.status.to_string(), colour),
                theme.paint(
                    format!("{} {}", date, act.time.as_deref().unwrap_or("Just now")).trim(),
                    theme.foreground_muted
                ),
            ));
        }

        if !stats.department_stats.is_empty() {
            out.push_str(&format!("\n{}\n", theme.paint("Departments", theme.info)));
            for dept in &stats.department_stats {
                out.push_str(&format!("  {:<20} {}\n", dept.name, dept.count));
            }
        }
        out
    }
}
