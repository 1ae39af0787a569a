//! Rating Display
//!
//! Star rendering for chef ratings and reviews.

use leptos::*;

/// Star string for a rating, rounded to the nearest whole star.
pub fn stars(rating: f64) -> String {
    "⭐".repeat(rating.round().max(0.0) as usize)
}

/// Numeric rating with its star string
#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    view! {
        <span class="whitespace-nowrap">
            {format!("{:.1} ", rating)}
            {stars(rating)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_to_nearest() {
        assert_eq!(stars(4.4), "⭐⭐⭐⭐");
        assert_eq!(stars(4.5), "⭐⭐⭐⭐⭐");
        assert_eq!(stars(0.2), "");
    }

    #[test]
    fn negative_ratings_render_no_stars() {
        assert_eq!(stars(-1.0), "");
    }
}
