//! Wire Records
//!
//! Records exchanged with the CookSup REST API. The backend owns these
//! schemas; this layer only reads the fields the pages render, so almost
//! everything is optional with a default. Read records come back in the
//! backend's mixed snake/camel casing and are preserved field-for-field;
//! write DTOs are camelCase.

/// Account role attached to the authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Chef,
    Client,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Authenticated user record.
///
/// The backend returns `firstName`/`lastName` in camelCase but `user_type`
/// in snake_case; the renames below pin the observed shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub email: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_type: UserRole,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Token + user pair returned by register and login.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Registration fields sent to `POST /auth/register`.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub user_type: String,
    pub location: String,
}

/// Chef record as returned by the search endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ChefSummary {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_workplace: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub total_bookings: i64,
}

/// Full chef profile from `GET /chefs/profile/:id`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ChefProfile {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_workplace: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i64>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub total_bookings: i64,
    #[serde(default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub photos: Vec<PortfolioPhoto>,
    #[serde(rename = "recentReviews", default)]
    pub recent_reviews: Vec<Review>,
}

impl ChefProfile {
    /// Whether the "Book Now" action should be offered at all.
    pub fn is_bookable(&self) -> bool {
        self.availability_status.as_deref() == Some("available")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One portfolio gallery entry.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PortfolioPhoto {
    pub id: i64,
    pub photo_url: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Review left by a client, joined with the reviewer's display fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Aggregate rating for one chef, `GET /reviews/summary/:id`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct RatingSummary {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: i64,
}

/// One entry of a chef's points ledger, `GET /reviews/points-history/:id`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PointsEntry {
    pub id: i64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Lifecycle state of a booking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Declined => "declined",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }

    /// Badge color classes keyed by status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "bg-yellow-600",
            BookingStatus::Accepted => "bg-blue-600",
            BookingStatus::Completed => "bg-green-600",
            BookingStatus::Declined | BookingStatus::Cancelled => "bg-red-600",
            BookingStatus::Unknown => "bg-gray-600",
        }
    }

    /// Status transitions a chef may apply to their incoming booking.
    pub fn chef_transitions(&self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Accepted, BookingStatus::Declined],
            BookingStatus::Accepted => &[BookingStatus::Completed],
            _ => &[],
        }
    }

    /// Whether the client may still cancel.
    pub fn client_can_cancel(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Accepted)
    }
}

/// Booking record, joined with both parties' display names.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub chef_id: Option<i64>,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub event_location: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub num_guests: Option<i64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub menu_requirements: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub chef_first_name: Option<String>,
    #[serde(default)]
    pub chef_last_name: Option<String>,
    #[serde(default)]
    pub client_first_name: Option<String>,
    #[serde(default)]
    pub client_last_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn chef_name(&self) -> String {
        join_name(self.chef_first_name.as_deref(), self.chef_last_name.as_deref())
    }

    pub fn client_name(&self) -> String {
        join_name(self.client_first_name.as_deref(), self.client_last_name.as_deref())
    }
}

fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(f), Some(l)) => format!("{} {}", f, l),
        (Some(f), None) => f.to_string(),
        (None, Some(l)) => l.to_string(),
        (None, None) => String::new(),
    }
}

/// New booking request, `POST /bookings`.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub chef_id: i64,
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    pub event_type: String,
    pub num_guests: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub menu_requirements: String,
    pub special_requests: String,
}

/// New review, `POST /reviews`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub booking_id: i64,
    pub chef_id: i64,
    pub rating: i64,
    pub comment: String,
}

/// Full-replacement profile update, `PUT /chefs/profile`.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub specialty: String,
    pub location: String,
    pub current_workplace: String,
    pub bio: String,
    pub about: String,
    pub experience_years: i64,
    pub certifications: String,
    pub availability_status: String,
}

/// Portfolio photo upload, `POST /chefs/photo`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub photo_url: String,
    pub title: String,
}

/// Aggregate numbers for the chef dashboard.
///
/// The backend mixes snake_case columns with camelCase computed fields in
/// this response; both spellings are pinned here.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub total_bookings: i64,
    #[serde(rename = "pendingBookings", default)]
    pub pending_bookings: i64,
    #[serde(rename = "completedThisMonth", default)]
    pub completed_this_month: i64,
}

/// Search filter state; `to_query` marshals it for `GET /chefs/search`.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilters {
    pub location: String,
    pub specialty: String,
    pub min_rating: String,
    pub sort_by: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            location: String::new(),
            specialty: String::new(),
            min_rating: String::new(),
            sort_by: "rating".to_string(),
        }
    }
}

impl SearchFilters {
    /// Build the query string, skipping unset filters.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if !self.location.is_empty() {
            pairs.push(("location", &self.location));
        }
        if !self.specialty.is_empty() {
            pairs.push(("specialty", &self.specialty));
        }
        if !self.min_rating.is_empty() {
            pairs.push(("minRating", &self.min_rating));
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sortBy", &self.sort_by));
        }

        if pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_only_carry_sort() {
        let filters = SearchFilters::default();
        assert_eq!(filters.to_query(), "?sortBy=rating");
    }

    #[test]
    fn set_filters_are_encoded_and_joined() {
        let filters = SearchFilters {
            location: "New York, NY".to_string(),
            specialty: "Italian".to_string(),
            min_rating: "4.5".to_string(),
            sort_by: "points".to_string(),
        };
        assert_eq!(
            filters.to_query(),
            "?location=New%20York%2C%20NY&specialty=Italian&minRating=4.5&sortBy=points"
        );
    }

    #[test]
    fn user_record_accepts_mixed_casing() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"email":"a@b.c","firstName":"Ada","lastName":"Lovelace","user_type":"chef"}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.user_type, UserRole::Chef);
    }

    #[test]
    fn unknown_role_does_not_fail_deserialization() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"email":"x@y.z","user_type":"admin"}"#).unwrap();
        assert_eq!(user.user_type, UserRole::Unknown);
    }

    #[test]
    fn booking_status_transitions_match_roles() {
        assert_eq!(
            BookingStatus::Pending.chef_transitions(),
            &[BookingStatus::Accepted, BookingStatus::Declined]
        );
        assert_eq!(
            BookingStatus::Accepted.chef_transitions(),
            &[BookingStatus::Completed]
        );
        assert!(BookingStatus::Completed.chef_transitions().is_empty());

        assert!(BookingStatus::Pending.client_can_cancel());
        assert!(BookingStatus::Accepted.client_can_cancel());
        assert!(!BookingStatus::Completed.client_can_cancel());
        assert!(!BookingStatus::Cancelled.client_can_cancel());
    }

    #[test]
    fn dashboard_stats_reads_mixed_casing() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"rating":4.6,"total_points":120,"pendingBookings":3,"completedThisMonth":2,"total_bookings":40}"#,
        )
        .unwrap();
        assert_eq!(stats.pending_bookings, 3);
        assert_eq!(stats.completed_this_month, 2);
        assert_eq!(stats.total_bookings, 40);
    }

    #[test]
    fn booking_request_serializes_camel_case() {
        let request = BookingRequest {
            chef_id: 9,
            event_date: "2024-06-01".to_string(),
            num_guests: 12,
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"chefId\":9"));
        assert!(json.contains("\"eventDate\":\"2024-06-01\""));
        assert!(json.contains("\"numGuests\":12"));
        assert!(!json.contains("budget"));
    }
}
