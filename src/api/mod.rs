//! API client for communicating with the HRMS Pro backend

mod client;
mod error;
#[cfg(test)]
pub mod fake;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};

/// Employee record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub emp_code: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    /// Server-computed percentage of days marked present
    #[serde(default)]
    pub attendance_rate: f64,
}

/// Request body for creating or updating an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub emp_code: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Attendance status, serialized as the literal `"Present"` / `"Absent"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => f.write_str("Present"),
            AttendanceStatus::Absent => f.write_str("Absent"),
        }
    }
}

/// Body of `POST /attendance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// One day of attendance for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Entry of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: u32,
}

/// Aggregate snapshot served by `GET /stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_employees: u32,
    pub present_today: u32,
    pub absent_today: u32,
    pub recent_activity: Vec<ActivityEntry>,
    pub department_stats: Vec<DepartmentCount>,
}

/// Operations exposed by the HRMS Pro backend.
///
/// Calls are blocking; the app drives them from smol's blocking pool.
pub trait HrmsApi: Send + Sync + 'static {
    fn list_employees(&self) -> ApiResult<Vec<Employee>>;
    fn stats(&self) -> ApiResult<Stats>;
    fn create_employee(&self, fields: &EmployeeFields) -> ApiResult<Employee>;
    fn update_employee(&self, id: i64, fields: &EmployeeFields) -> ApiResult<Employee>;
    fn delete_employee(&self, id: i64) -> ApiResult<()>;
    fn mark_attendance(&self, mark: &AttendanceMark) -> ApiResult<()>;
    /// Records for one employee, newest first
    fn attendance_history(&self, employee_id: i64) -> ApiResult<Vec<AttendanceRecord>>;
    fn seed(&self) -> ApiResult<()>;
}
