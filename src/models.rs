//! Data models for the HRMS Pro console

use chrono::NaiveDate;
use regex::Regex;
use uuid::Uuid;

use crate::api::{AttendanceStatus, Employee, EmployeeFields};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Employees,
    Attendance,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Employees, View::Attendance];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Employees => "Employees",
            View::Attendance => "Attendance",
        }
    }
}

/// Add/edit employee form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub emp_code: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            emp_code: emp.emp_code.clone(),
            name: emp.name.clone(),
            email: emp.email.clone(),
            department: emp.department.clone(),
        }
    }

    /// Name and code are the only fields checked locally; the server owns uniqueness.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.emp_code.trim().is_empty()
    }

    pub fn to_fields(&self) -> EmployeeFields {
        EmployeeFields {
            emp_code: self.emp_code.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }

    /// Set one field by its command name
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Code => self.emp_code = value,
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Department => self.department = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Code,
    Name,
    Email,
    Department,
}

impl FormField {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "code" | "emp_code" | "id" => Some(FormField::Code),
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "department" | "dept" => Some(FormField::Department),
            _ => None,
        }
    }
}

/// Result of submitting the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Saved,
    Rejected,
    /// Name or code missing; nothing was sent
    Incomplete,
    /// A submission is already in flight
    Busy,
}

/// Employee awaiting delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: i64,
    pub name: String,
}

/// Toast colour. Attendance toasts use it for the status, not for success/failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl From<AttendanceStatus> for ToastKind {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => ToastKind::Success,
            AttendanceStatus::Absent => ToastKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}

/// Employees whose name or code contains `term`, ignoring case
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let term = term.to_lowercase();
    employees
        .iter()
        .filter(|emp| {
            emp.name.to_lowercase().contains(&term) || emp.emp_code.to_lowercase().contains(&term)
        })
        .collect()
}

/// Command types for /commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Show(View),
    Refresh,
    Search(String),
    Add(EmployeeForm),
    Edit(i64),
    Set { field: FormField, value: String },
    Save,
    Cancel,
    Delete(i64),
    Confirm,
    Date(NaiveDate),
    Mark { employee_id: i64, status: AttendanceStatus },
    History(i64),
    Close,
    Dismiss,
    Seed,
    Quit,
    /// Recognised command with bad arguments; carries the usage line
    Invalid(String),
    Unknown(String),
}

/// Split on whitespace, keeping "quoted phrases" together
fn tokenize(input: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r#""([^"]*)"|(\S+)"#) else {
        return input.split_whitespace().map(str::to_string).collect();
    };
    re.captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn parse_id(arg: Option<&String>, usage: &str) -> Result<i64, Command> {
    arg.and_then(|s| s.parse().ok())
        .ok_or_else(|| Command::Invalid(usage.to_string()))
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let body = input.strip_prefix('/')?;

        let parts = tokenize(body);
        let (name, args) = parts.split_first()?;

        let command = match name.to_lowercase().as_str() {
            "help" | "h" | "?" => Command::Help,
            "dashboard" | "home" => Command::Show(View::Dashboard),
            "employees" | "staff" => Command::Show(View::Employees),
            "attendance" => Command::Show(View::Attendance),
            "refresh" | "r" => Command::Refresh,
            "search" => Command::Search(args.join(" ")),
            "add" => match args {
                [code, name, email, department] => Command::Add(EmployeeForm {
                    emp_code: code.clone(),
                    name: name.clone(),
                    email: email.clone(),
                    department: department.clone(),
                }),
                _ => Command::Invalid(
                    "usage: /add <code> \"<name>\" <email> \"<department>\"".to_string(),
                ),
            },
            "edit" => match parse_id(args.first(), "usage: /edit <id>") {
                Ok(id) => Command::Edit(id),
                Err(invalid) => invalid,
            },
            "set" => match args.split_first() {
                Some((field, rest)) if !rest.is_empty() => match FormField::parse(field) {
                    Some(field) => Command::Set {
                        field,
                        value: rest.join(" "),
                    },
                    None => Command::Invalid(format!("unknown form field: {}", field)),
                },
                _ => Command::Invalid(
                    "usage: /set <code|name|email|department> <value>".to_string(),
                ),
            },
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "delete" | "rm" => match parse_id(args.first(), "usage: /delete <id>") {
                Ok(id) => Command::Delete(id),
                Err(invalid) => invalid,
            },
            "confirm" | "yes" => Command::Confirm,
            "date" => match args.first().map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d")) {
                Some(Ok(date)) => Command::Date(date),
                _ => Command::Invalid("usage: /date <YYYY-MM-DD>".to_string()),
            },
            verb @ ("present" | "absent") => {
                let status = if verb == "present" {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                };
                match parse_id(args.first(), &format!("usage: /{} <id>", verb)) {
                    Ok(employee_id) => Command::Mark {
                        employee_id,
                        status,
                    },
                    Err(invalid) => invalid,
                }
            }
            "history" => match parse_id(args.first(), "usage: /history <id>") {
                Ok(id) => Command::History(id),
                Err(invalid) => invalid,
            },
            "close" => Command::Close,
            "dismiss" | "ok" => Command::Dismiss,
            "seed" | "restore" => Command::Seed,
            "quit" | "exit" | "q" => Command::Quit,
            cmd => Command::Unknown(cmd.to_string()),
        };
        Some(command)
    }
}
