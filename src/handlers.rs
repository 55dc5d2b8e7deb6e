//! Server calls and command handling for the HRMS Pro console
//!
//! Every mutating call follows the same cycle: issue the request, and only
//! after the server accepts it re-fetch both mirrors. Nothing is applied
//! locally ahead of the server.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future;
use tracing::{debug, info, warn};

use crate::api::{ApiResult, AttendanceMark, AttendanceStatus, HrmsApi};
use crate::app::App;
use crate::models::{Command, Submission, ToastKind, View};

const HELP: &str = "Available commands:\n\
    /dashboard, /employees, /attendance   switch view\n\
    /refresh                              reload employees and stats\n\
    /search [term]                        filter by name or code (plain text works too)\n\
    /add <code> \"<name>\" <email> \"<dept>\" add an employee\n\
    /edit <id>, /set <field> <value>      edit an employee, then /save\n\
    /delete <id>, /confirm                delete an employee (/cancel to keep)\n\
    /date <YYYY-MM-DD>                    day to mark attendance for\n\
    /present <id>, /absent <id>           mark attendance\n\
    /history <id>, /close                 show or hide attendance history\n\
    /dismiss                              clear the current notification\n\
    /seed                                 restore demo data\n\
    /quit                                 exit";

impl<A: HrmsApi> App<A> {
    /// Run a blocking API call on smol's blocking pool
    fn background<T, F>(&self, call: F) -> impl Future<Output = ApiResult<T>> + Send + 'static
    where
        T: Send + 'static,
        F: FnOnce(&A) -> ApiResult<T> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        smol::unblock(move || call(api.as_ref()))
    }

    /// Re-fetch employees and stats together; either both mirrors are replaced or neither is.
    pub async fn refresh(&mut self) -> bool {
        let employees = self.background(|api| api.list_employees());
        let stats = self.background(|api| api.stats());

        match future::try_join(employees, stats).await {
            Ok((employees, stats)) => {
                debug!(
                    employees = employees.len(),
                    total = stats.total_employees,
                    "refreshed mirrors"
                );
                self.employees = employees;
                self.stats = stats;
                true
            }
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping cached data");
                false
            }
        }
    }

    /// Create or update from the form, depending on whether an edit is in progress
    pub async fn submit_employee(&mut self) -> Submission {
        if self.is_loading {
            return Submission::Busy;
        }
        if !self.form.is_submittable() {
            return Submission::Incomplete;
        }

        self.is_loading = true;
        let fields = self.form.to_fields();
        let outcome = match self.edit_id {
            Some(id) => self
                .background(move |api| api.update_employee(id, &fields))
                .await
                .map(|emp| (emp, "Employee Updated Successfully!")),
            None => self
                .background(move |api| api.create_employee(&fields))
                .await
                .map(|emp| (emp, "Employee Added Successfully!")),
        };

        let submission = match outcome {
            Ok((emp, message)) => {
                info!(id = emp.id, code = %emp.emp_code, "employee saved");
                self.cancel_edit();
                self.refresh().await;
                self.notifier.show(message, ToastKind::Success);
                Submission::Saved
            }
            Err(e) => {
                warn!(error = %e, "employee save rejected");
                self.notifier.show("Error: check ID or Email", ToastKind::Error);
                Submission::Rejected
            }
        };
        self.is_loading = false;
        submission
    }

    /// Second step of a delete. Without a pending request this does nothing.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(pending) = self.pending_delete.take() else {
            return false;
        };

        let id = pending.id;
        match self.background(move |api| api.delete_employee(id)).await {
            Ok(()) => {
                info!(id, name = %pending.name, "employee deleted");
                if self.edit_id == Some(id) {
                    self.cancel_edit();
                }
                self.refresh().await;
                self.notifier.show("Employee deleted.", ToastKind::Error);
                true
            }
            Err(e) => {
                warn!(id, error = %e, "delete failed");
                self.notifier.show("Failed to delete", ToastKind::Error);
                false
            }
        }
    }

    pub async fn mark_attendance(
        &mut self,
        employee_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> bool {
        let mark = AttendanceMark {
            employee_id,
            date,
            status,
        };

        match self.background(move |api| api.mark_attendance(&mark)).await {
            Ok(()) => {
                info!(employee_id, %date, %status, "attendance marked");
                self.refresh().await;
                // An open history must come from the server, not from a local append.
                if self.selected_employee.as_ref().map(|emp| emp.id) == Some(employee_id) {
                    self.fetch_history(employee_id).await;
                }
                self.notifier.show(format!("Marked {}", status), status.into());
                true
            }
            Err(e) => {
                warn!(employee_id, %date, error = %e, "marking attendance failed");
                self.notifier.show("Failed to mark", ToastKind::Error);
                false
            }
        }
    }

    /// Load one employee's history into the history panel
    pub async fn fetch_history(&mut self, employee_id: i64) -> bool {
        let Some(emp) = self.employee(employee_id).cloned() else {
            self.notifier
                .show(format!("No employee with id {}", employee_id), ToastKind::Error);
            return false;
        };

        match self
            .background(move |api| api.attendance_history(employee_id))
            .await
        {
            Ok(records) => {
                debug!(employee_id, records = records.len(), "history loaded");
                self.history = records;
                self.selected_employee = Some(emp);
                true
            }
            Err(e) => {
                warn!(employee_id, error = %e, "history fetch failed");
                self.notifier.show("Failed to load history", ToastKind::Error);
                false
            }
        }
    }

    pub async fn restore_demo_data(&mut self) -> bool {
        match self.background(|api| api.seed()).await {
            Ok(()) => {
                info!("demo data restored");
                self.refresh().await;
                self.notifier.show("Demo Data Restored!", ToastKind::Success);
                true
            }
            Err(e) => {
                warn!(error = %e, "seeding failed");
                self.notifier.show("Failed to restore", ToastKind::Error);
                false
            }
        }
    }

    /// Handle one slash command. Returns false when the console should exit.
    pub async fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Help => self.messages.push(HELP.to_string()),
            Command::Show(view) => self.set_view(view),
            Command::Refresh => {
                if !self.refresh().await {
                    self.messages
                        .push("Refresh failed; showing the last loaded data.".to_string());
                }
            }
            Command::Search(term) => self.set_search(term),
            Command::Add(form) => {
                self.edit_id = None;
                self.form = form;
                self.view = View::Employees;
                self.handle_submission().await;
            }
            Command::Edit(id) => {
                if !self.start_edit(id) {
                    self.messages.push(format!("No employee with id {}", id));
                }
            }
            Command::Set { field, value } => self.form.set(field, value),
            Command::Save => self.handle_submission().await,
            Command::Cancel => {
                if self.pending_delete.is_some() {
                    self.cancel_delete();
                } else {
                    self.cancel_edit();
                }
            }
            Command::Delete(id) => {
                if !self.request_delete(id) {
                    self.messages.push(format!("No employee with id {}", id));
                }
            }
            Command::Confirm => {
                if self.pending_delete.is_none() {
                    self.messages.push("Nothing to confirm.".to_string());
                } else {
                    self.confirm_delete().await;
                }
            }
            Command::Date(date) => self.set_date(date),
            Command::Mark {
                employee_id,
                status,
            } => {
                let date = self.selected_date;
                self.mark_attendance(employee_id, date, status).await;
            }
            Command::History(id) => {
                self.fetch_history(id).await;
            }
            Command::Close => self.dismiss_history(),
            Command::Dismiss => self.notifier.dismiss(),
            Command::Seed => {
                self.restore_demo_data().await;
            }
            Command::Quit => return false,
            Command::Invalid(usage) => self.messages.push(usage),
            Command::Unknown(cmd) => self.messages.push(format!(
                "Unknown command: /{}. Type /help for help.",
                cmd
            )),
        }
        true
    }

    async fn handle_submission(&mut self) {
        match self.submit_employee().await {
            Submission::Incomplete => self
                .messages
                .push("Name and employee code are required.".to_string()),
            Submission::Busy => self.messages.push("A save is already in progress.".to_string()),
            Submission::Saved | Submission::Rejected => {}
        }
    }
}
