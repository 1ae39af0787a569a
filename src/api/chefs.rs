//! Chef Endpoints
//!
//! Search, public profiles, and the authenticated chef's own profile and
//! dashboard statistics.

use super::types::{ChefProfile, ChefSummary, DashboardStats, PhotoUpload, ProfileUpdate, SearchFilters};
use super::ApiError;

/// Search chefs with the given filter set
pub async fn search(filters: &SearchFilters) -> Result<Vec<ChefSummary>, ApiError> {
    let response = super::get(&format!("/chefs/search{}", filters.to_query()))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Fetch one chef's public profile
pub async fn fetch_profile(chef_id: &str) -> Result<ChefProfile, ApiError> {
    let response = super::get(&format!("/chefs/profile/{}", chef_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Replace the authenticated chef's profile
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    let response = super::put("/chefs/profile")
        .json(update)
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}

/// Add a portfolio photo
pub async fn add_photo(photo: &PhotoUpload) -> Result<(), ApiError> {
    let response = super::post("/chefs/photo")
        .json(photo)
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}

/// Fetch the authenticated chef's dashboard statistics
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    let response = super::get("/chefs/dashboard/stats")
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}
