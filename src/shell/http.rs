use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::employees::adapters::inbound::http as employees_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            post(employees_http::create_employee).get(employees_http::list_employees),
        )
        .route(
            "/api/employees/{id}",
            get(employees_http::get_employee)
                .put(employees_http::update_employee)
                .delete(employees_http::delete_employee),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
