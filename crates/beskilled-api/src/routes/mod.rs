//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, auth, health, messages, ratings, skills, swaps, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(skill_routes())
        .merge(swap_routes())
        .merge(message_routes())
        .merge(rating_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(users::get_profile))
        .route("/users/profile", put(users::update_profile))
        .route("/users/search", get(users::search_users))
        .route("/users/:id", get(users::get_user))
}

/// Skill routes
fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(skills::list_skills))
        .route("/skills", post(skills::add_skill))
        .route("/skills/:id", delete(skills::delete_skill))
}

/// Swap routes
fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/swaps", get(swaps::list_swaps))
        .route("/swaps", post(swaps::create_swap))
        .route("/swaps/:id", put(swaps::update_swap_status))
        .route("/swaps/:id", delete(swaps::delete_swap))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/swap/:swap_id", get(messages::list_messages))
        .route("/messages", post(messages::send_message))
        .route("/messages/read/:swap_id", put(messages::mark_read))
}

/// Rating routes
fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/ratings/user/:user_id", get(ratings::ratings_for_user))
        .route("/ratings", post(ratings::add_rating))
        .route("/ratings/given/:user_id", get(ratings::ratings_given_by))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/:id/ban", put(admin::ban_user))
        .route("/admin/swaps", get(admin::list_swaps))
        .route("/admin/skills/:id", put(admin::moderate_skill))
        .route("/admin/messages", post(admin::send_platform_message))
        .route("/admin/reports", get(admin::reports_summary))
        .route("/admin/reports/user-activity", get(admin::user_activity_report))
        .route("/admin/reports/feedback-logs", get(admin::feedback_logs_report))
        .route("/admin/reports/swap-stats", get(admin::swap_stats_report))
}
