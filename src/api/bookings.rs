//! Booking Endpoints

use super::types::{Booking, BookingRequest, BookingStatus};
use super::ApiError;

/// Submit a new booking request
pub async fn create(request: &BookingRequest) -> Result<(), ApiError> {
    let response = super::post("/bookings")
        .json(request)
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}

/// Fetch the authenticated user's bookings (either side of the table)
pub async fn fetch_mine() -> Result<Vec<Booking>, ApiError> {
    let response = super::get("/bookings/my-bookings")
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Fetch one booking by id
pub async fn fetch_details(booking_id: &str) -> Result<Booking, ApiError> {
    let response = super::get(&format!("/bookings/{}", booking_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_json(response).await
}

/// Move a booking to a new status (chef side)
pub async fn update_status(booking_id: i64, status: BookingStatus) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct StatusUpdate {
        status: BookingStatus,
    }

    let response = super::put(&format!("/bookings/{}/status", booking_id))
        .json(&StatusUpdate { status })
        .map_err(super::build_error)?
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}

/// Cancel a booking (client side)
pub async fn cancel(booking_id: i64) -> Result<(), ApiError> {
    let response = super::put(&format!("/bookings/{}/cancel", booking_id))
        .send()
        .await
        .map_err(super::network_error)?;

    super::read_ok(response).await
}
