//! In-memory stand-in for the HRMS Pro backend, used by controller tests

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use super::{
    ActivityEntry, ApiError, ApiResult, AttendanceMark, AttendanceRecord, AttendanceStatus,
    DepartmentCount, Employee, EmployeeFields, HrmsApi, Stats,
};

/// Endpoints a test can make fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListEmployees,
    Stats,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
    MarkAttendance,
    History,
    Seed,
}

#[derive(Default)]
struct Store {
    next_employee_id: i64,
    next_record_id: i64,
    employees: BTreeMap<i64, EmployeeFields>,
    records: Vec<AttendanceRecord>,
}

#[derive(Default)]
pub struct FakeApi {
    store: Mutex<Store>,
    failing: Mutex<HashSet<Endpoint>>,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: &[(&str, &str, &str, &str)]) -> Self {
        let api = Self::new();
        for (code, name, email, department) in employees {
            api.create_employee(&fields(code, name, email, department))
                .expect("seed employee");
        }
        api.calls.store(0, Ordering::SeqCst);
        api
    }

    pub fn fail(&self, endpoint: Endpoint) {
        lock(&self.failing).insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        lock(&self.failing).remove(&endpoint);
    }

    /// Number of requests served or rejected so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, endpoint: Endpoint) -> ApiResult<MutexGuard<'_, Store>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if lock(&self.failing).contains(&endpoint) {
            return Err(ApiError::Rejected {
                status: 503,
                detail: format!("{endpoint:?} unavailable"),
            });
        }
        Ok(lock(&self.store))
    }
}

pub fn fields(code: &str, name: &str, email: &str, department: &str) -> EmployeeFields {
    EmployeeFields {
        emp_code: code.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Store {
    fn employee(&self, id: i64) -> Option<Employee> {
        let f = self.employees.get(&id)?;
        let mine: Vec<_> = self.records.iter().filter(|r| r.employee_id == id).collect();
        let present = mine
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count();
        let attendance_rate = if mine.is_empty() {
            0.0
        } else {
            (present as f64 * 100.0 / mine.len() as f64).round()
        };
        Some(Employee {
            id,
            emp_code: f.emp_code.clone(),
            name: f.name.clone(),
            email: f.email.clone(),
            department: f.department.clone(),
            attendance_rate,
        })
    }

    fn check_unique(&self, fields: &EmployeeFields, except: Option<i64>) -> ApiResult<()> {
        let clash = self.employees.iter().any(|(id, other)| {
            Some(*id) != except
                && (other.emp_code == fields.emp_code || other.email == fields.email)
        });
        if clash {
            return Err(ApiError::Rejected {
                status: 400,
                detail: "Employee code or email exists".to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, fields: &EmployeeFields) -> ApiResult<Employee> {
        self.check_unique(fields, None)?;
        self.next_employee_id += 1;
        let id = self.next_employee_id;
        self.employees.insert(id, fields.clone());
        Ok(self.employee(id).expect("just inserted"))
    }

    fn upsert(&mut self, mark: &AttendanceMark, time: String) {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|r| r.employee_id == mark.employee_id && r.date == mark.date)
        {
            existing.status = mark.status;
            existing.timestamp = Some(time);
            return;
        }
        self.next_record_id += 1;
        self.records.push(AttendanceRecord {
            id: self.next_record_id,
            employee_id: mark.employee_id,
            date: mark.date,
            status: mark.status,
            timestamp: Some(time),
        });
    }

    fn snapshot(&self) -> Stats {
        // The dashboard's "today" is the day of the most recent marking.
        let day: Option<NaiveDate> = self.records.iter().max_by_key(|r| r.id).map(|r| r.date);
        let count = |status: AttendanceStatus| {
            self.records
                .iter()
                .filter(|r| Some(r.date) == day && r.status == status)
                .count() as u32
        };

        let mut recent: Vec<_> = self.records.iter().collect();
        recent.sort_by(|a, b| b.id.cmp(&a.id));
        let recent_activity = recent
            .into_iter()
            .filter_map(|r| {
                let emp = self.employees.get(&r.employee_id)?;
                Some(ActivityEntry {
                    name: emp.name.clone(),
                    department: Some(emp.department.clone()),
                    date: Some(r.date),
                    status: r.status,
                    time: r.timestamp.clone(),
                })
            })
            .take(5)
            .collect();

        let mut departments: BTreeMap<&str, u32> = BTreeMap::new();
        for emp in self.employees.values() {
            *departments.entry(emp.department.as_str()).or_default() += 1;
        }

        Stats {
            total_employees: self.employees.len() as u32,
            present_today: count(AttendanceStatus::Present),
            absent_today: count(AttendanceStatus::Absent),
            recent_activity,
            department_stats: departments
                .into_iter()
                .map(|(name, count)| DepartmentCount {
                    name: name.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

impl HrmsApi for FakeApi {
    fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let store = self.enter(Endpoint::ListEmployees)?;
        Ok(store
            .employees
            .keys()
            .rev()
            .filter_map(|id| store.employee(*id))
            .collect())
    }

    fn stats(&self) -> ApiResult<Stats> {
        Ok(self.enter(Endpoint::Stats)?.snapshot())
    }

    fn create_employee(&self, fields: &EmployeeFields) -> ApiResult<Employee> {
        self.enter(Endpoint::CreateEmployee)?.insert(fields)
    }

    fn update_employee(&self, id: i64, fields: &EmployeeFields) -> ApiResult<Employee> {
        let mut store = self.enter(Endpoint::UpdateEmployee)?;
        if !store.employees.contains_key(&id) {
            return Err(ApiError::Rejected {
                status: 404,
                detail: "Employee not found".to_string(),
            });
        }
        store.check_unique(fields, Some(id))?;
        store.employees.insert(id, fields.clone());
        Ok(store.employee(id).expect("exists"))
    }

    fn delete_employee(&self, id: i64) -> ApiResult<()> {
        let mut store = self.enter(Endpoint::DeleteEmployee)?;
        store.employees.remove(&id);
        store.records.retain(|r| r.employee_id != id);
        Ok(())
    }

    fn mark_attendance(&self, mark: &AttendanceMark) -> ApiResult<()> {
        let mut store = self.enter(Endpoint::MarkAttendance)?;
        if !store.employees.contains_key(&mark.employee_id) {
            return Err(ApiError::Rejected {
                status: 404,
                detail: "Employee not found".to_string(),
            });
        }
        let time = format!("{:02}:00", store.next_record_id % 24);
        store.upsert(mark, time);
        Ok(())
    }

    fn attendance_history(&self, employee_id: i64) -> ApiResult<Vec<AttendanceRecord>> {
        let store = self.enter(Endpoint::History)?;
        let mut history: Vec<_> = store
            .records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(history)
    }

    fn seed(&self) -> ApiResult<()> {
        let mut store = self.enter(Endpoint::Seed)?;
        *store = Store::default();
        for (code, name, email, department) in [
            ("EMP01", "Asha Rao", "asha@hrms.dev", "Engineering"),
            ("EMP02", "Daniel Kim", "daniel@hrms.dev", "Design"),
            ("EMP03", "Mira Patel", "mira@hrms.dev", "Engineering"),
        ] {
            store.insert(&fields(code, name, email, department))?;
        }
        Ok(())
    }
}
