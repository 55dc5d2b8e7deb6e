//! Employee list with the add/edit form and delete confirmation

use crate::api::HrmsApi;
use crate::app::App;

impl<A: HrmsApi> App<A> {
    pub fn render_employees(&self) -> String {
        let theme = &self.theme;
        let mut out = String::new();

        let title = match self.edit_id {
            Some(id) => format!("Edit Employee #{}", id),
            None => "Add New Employee".to_string(),
        };
        out.push_str(&format!("{}\n", theme.paint(&title, theme.accent_purple)));
        let form = &self.form;
        for (label, value) in [
            ("code", &form.emp_code),
            ("name", &form.name),
            ("email", &form.email),
            ("department", &form.department),
        ] {
            out.push_str(&format!("  {:<11} {}\n", label, value));
        }
        let hint = if self.is_loading {
            "Saving..."
        } else if self.is_editing() {
            "/set <field> <value>, /save to update, /cancel to discard"
        } else {
            "/add <code> \"<name>\" <email> \"<dept>\", or /set then /save"
        };
        out.push_str(&theme.paint(&format!("  {}\n", hint), theme.foreground_muted));

        if let Some(pending) = &self.pending_delete {
            out.push_str(&format!(
                "\n{}\n",
                theme.paint(
                    &format!(
                        "Delete {} (#{})? This cannot be undone. /confirm or /cancel",
                        pending.name, pending.id
                    ),
                    theme.error
                )
            ));
        }

        let rows = self.filtered_employees();
        out.push_str(&format!(
            "\n{}\n",
            theme.bold(&format!(
                "{:<5} {:<8} {:<20} {:<26} {:<14} {:>5}",
                "ID", "CODE", "NAME", "EMAIL", "DEPARTMENT", "RATE"
            ))
        ));
        if rows.is_empty() {
            out.push_str(&theme.paint("  No employees found\n", theme.foreground_muted));
        }
        for emp in rows {
            out.push_str(&format!(
                "{:<5} {:<8} {:<20} {:<26} {:<14} {:>4}%\n",
                emp.id,
                emp.emp_code,
                emp.name,
                emp.email,
                emp.department,
                emp.attendance_rate.round()
            ));
        }
        out
    }
}
