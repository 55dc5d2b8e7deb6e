//! Core App state and initialization for the HRMS Pro console

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::api::{ApiClient, AttendanceRecord, Employee, HrmsApi, Stats};
use crate::config::AppConfig;
use crate::models::{filter_employees, EmployeeForm, PendingDelete, View};
use crate::theme::MonokaiTheme;
use crate::toast::Notifier;

/// Main application state.
///
/// `employees` and `stats` mirror the server and are only ever replaced
/// together, by a successful `refresh`.
pub struct App<A: HrmsApi = ApiClient> {
    pub theme: MonokaiTheme,
    pub api: Arc<A>,
    pub api_url: String,
    pub view: View,

    // Server mirrors
    pub employees: Vec<Employee>,
    pub stats: Stats,

    // Form state
    pub form: EmployeeForm,
    pub edit_id: Option<i64>,
    pub is_loading: bool,

    pub search_term: String,
    pub selected_date: NaiveDate,

    // History panel
    pub history: Vec<AttendanceRecord>,
    pub selected_employee: Option<Employee>,

    pub pending_delete: Option<PendingDelete>,
    pub notifier: Notifier,

    /// Lines for the console that are not part of any view (help, usage)
    pub messages: Vec<String>,
}

impl<A: HrmsApi> App<A> {
    pub fn new(api: A, config: &AppConfig) -> Self {
        Self {
            theme: MonokaiTheme::new(config.color),
            api: Arc::new(api),
            api_url: config.api_url.clone(),
            view: View::Dashboard,
            employees: vec![],
            stats: Stats::default(),
            form: EmployeeForm::default(),
            edit_id: None,
            is_loading: false,
            search_term: String::new(),
            selected_date: Local::now().date_naive(),
            history: vec![],
            selected_employee: None,
            pending_delete: None,
            notifier: Notifier::new(config.toast_duration),
            messages: vec![],
        }
    }

    /// First load; points the user at the server when it is unreachable.
    pub async fn initialize(&mut self) {
        if !self.refresh().await {
            self.messages.push(format!(
                "Could not reach the HRMS API at {}.\n\
                 Make sure the server is running, then use /refresh.",
                self.api_url
            ));
        }
    }

    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    pub fn filtered_employees(&self) -> Vec<&Employee> {
        filter_employees(&self.employees, &self.search_term)
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Load a cached employee into the form. Returns false for unknown ids.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let Some(emp) = self.employee(id) else {
            return false;
        };
        self.form = EmployeeForm::from_employee(emp);
        self.edit_id = Some(id);
        self.view = View::Employees;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.form = EmployeeForm::default();
        self.edit_id = None;
    }

    /// First step of a delete; only cached employees can be requested.
    pub fn request_delete(&mut self, id: i64) -> bool {
        let Some(emp) = self.employee(id) else {
            return false;
        };
        self.pending_delete = Some(PendingDelete {
            id,
            name: emp.name.clone(),
        });
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn dismiss_history(&mut self) {
        self.history.clear();
        self.selected_employee = None;
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}
