pub mod departments;
pub mod employees;
pub mod health;

pub use departments::DepartmentsResponse;
pub use employees::EmployeesResponse;
pub use health::check;
