//! Registration, login, logout, and token refresh.

mod handle;
mod service;

pub use handle::generate_handle;
pub use service::{AuthService, RegisterCredentials};
