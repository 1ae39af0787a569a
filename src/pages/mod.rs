//! Pages
//!
//! Top-level page components for each route.

pub mod booking;
pub mod dashboard;
pub mod edit_profile;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod search;

pub use booking::BookingDetail;
pub use dashboard::Dashboard;
pub use edit_profile::EditProfile;
pub use home::Home;
pub use login::Login;
pub use profile::ChefProfile;
pub use register::Register;
pub use search::ChefSearch;

/// Render a backend date string as a short human date. The API emits both
/// RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else is shown
/// as-is.
pub(crate) fn format_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_date("2024-06-01T18:30:00Z"), "Jun 01, 2024");
    }

    #[test]
    fn formats_bare_dates() {
        assert_eq!(format_date("2024-12-24"), "Dec 24, 2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_date("next Tuesday"), "next Tuesday");
    }
}
