mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod guard;
pub use guard::AdminGuard;

mod dashboard_layout;
pub use dashboard_layout::{DashboardLayout, Overview};

mod not_found;
pub use not_found::NotFound;
