//! Page-level components. There is only one page; the backend handles
//! everything behind `/api`.

pub mod home;
