//! Attendance marking table and the history panel

use crate::api::{AttendanceStatus, HrmsApi};
use crate::app::App;

impl<A: HrmsApi> App<A> {
    pub fn render_attendance(&self) -> String {
        let theme = &self.theme;
        let mut out = format!(
            "{}\n",
            theme.paint(
                &format!("Mark attendance for {}", self.selected_date.format("%Y-%m-%d")),
                theme.accent_purple
            )
        );

        let rows = self.filtered_employees();
        if rows.is_empty() {
            out.push_str(&theme.paint("  No employees found\n", theme.foreground_muted));
        }
        for emp in rows {
            out.push_str(&format!(
                "  {:<5} {:<20} {:<14} {}\n",
                emp.id,
                emp.name,
                emp.department,
                theme.paint(
                    &format!("/present {0}  /absent {0}  /history {0}", emp.id),
                    theme.foreground_muted
                ),
            ));
        }

        if let Some(panel) = self.render_history() {
            out.push('\n');
            out.push_str(&panel);
        }
        out
    }

    /// History panel, present until dismissed
    pub fn render_history(&self) -> Option<String> {
        let emp = self.selected_employee.as_ref()?;
        let theme = &self.theme;

        let mut out = format!(
            "{} {}\n",
            theme.bold(&format!("History: {}", emp.name)),
            theme.paint("(/close to dismiss)", theme.foreground_muted)
        );
        if self.history.is_empty() {
            out.push_str(&theme.paint("  No records found\n", theme.foreground_muted));
        }
        for record in &self.history {
            let colour = match record.status {
                AttendanceStatus::Present => theme.success,
                AttendanceStatus::Absent => theme.error,
            };
            out.push_str(&format!(
                "  {}  {:<8} {}\n",
                record.date.format("%Y-%m-%d"),
                theme.paint(&record.status.to_string(), colour),
                record.timestamp.as_deref().unwrap_or("")
            ));
        }
        Some(out)
    }
}
