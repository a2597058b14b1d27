//! HTTP routers, one per service

use axum::{routing::get, Router};

pub mod handlers;
pub mod state;

pub use handlers::ApiError;
pub use state::AppState;

/// `GET /users/:id` backed by the given user directory
pub fn create_user_router(state: AppState) -> Router {
    Router::new()
        .route("/users/:id", get(handlers::get_user))
        .with_state(state)
}

/// `GET /employee`
pub fn create_employee_router() -> Router {
    Router::new().route("/employee", get(handlers::get_employee))
}

/// `GET /payroll`
pub fn create_payroll_router() -> Router {
    Router::new().route("/payroll", get(handlers::get_payroll))
}

