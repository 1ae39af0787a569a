//! Review Endpoints
//!
//! Reviews, rating summaries and the points ledger that feeds search
//! ranking on the backend.

use super::types::{PointsEntry, RatingSummary, Review, ReviewRequest};
use super::ApiError;

/// Leave a review for a completed booking
pub async fn create(request: &ReviewRequest) -> Result<(), ApiError> {
    let response = super::post("/reviews")
        .json(request)
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}

/// Fetch all reviews for a chef
pub async fn fetch_for_chef(chef_id: &str) -> Result<Vec<Review>, ApiError> {
    let response = super::get(&format!("/reviews/chef/{}", chef_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Fetch the aggregate rating for a chef
pub async fn fetch_summary(chef_id: &str) -> Result<RatingSummary, ApiError> {
    let response = super::get(&format!("/reviews/summary/{}", chef_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Fetch a chef's points history
pub async fn fetch_points_history(chef_id: &str) -> Result<Vec<PointsEntry>, ApiError> {
    let response = super::get(&format!("/reviews/points-history/{}", chef_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}
