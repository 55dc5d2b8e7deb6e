use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::{
    ApiError, ApiResult, AttendanceMark, AttendanceRecord, Employee, EmployeeFields, HrmsApi, Stats,
};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// reqwest-backed client for the HRMS Pro backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns any non-2xx status into `ApiError::Rejected`
    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ApiError::rejected(status.as_u16(), &body))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.http.get(self.url(path)).send()?;
        Ok(Self::check(response)?.json()?)
    }
}

impl HrmsApi for ApiClient {
    fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.get_json("/employees")
    }

    fn stats(&self) -> ApiResult<Stats> {
        self.get_json("/stats")
    }

    fn create_employee(&self, fields: &EmployeeFields) -> ApiResult<Employee> {
        let response = self.http.post(self.url("/employees")).json(fields).send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn update_employee(&self, id: i64, fields: &EmployeeFields) -> ApiResult<Employee> {
        let response = self
            .http
            .put(self.url(&format!("/employees/{}", id)))
            .json(fields)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn delete_employee(&self, id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/employees/{}", id)))
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    fn mark_attendance(&self, mark: &AttendanceMark) -> ApiResult<()> {
        let response = self.http.post(self.url("/attendance")).json(mark).send()?;
        Self::check(response)?;
        Ok(())
    }

    fn attendance_history(&self, employee_id: i64) -> ApiResult<Vec<AttendanceRecord>> {
        self.get_json(&format!("/attendance/{}", employee_id))
    }

    fn seed(&self) -> ApiResult<()> {
        let response = self.http.post(self.url("/seed")).send()?;
        Self::check(response)?;
        Ok(())
    }
}
