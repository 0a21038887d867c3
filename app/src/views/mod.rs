mod components;
pub use components::{Navbar, Sidebar};

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod employees;
pub use employees::Employees;

mod add_employee;
pub use add_employee::AddEmployee;

mod not_found;
pub use not_found::NotFound;
