use axum::Router;
use domain_users::{InMemoryUserRepository, SystemClock, UserService, handlers};
use std::sync::Arc;

pub fn router(config: &crate::config::Config) -> Router {
    let repository = if config.seed_demo_users {
        InMemoryUserRepository::new()
    } else {
        InMemoryUserRepository::empty(Arc::new(SystemClock))
    };

    handlers::router(UserService::new(repository))
}
