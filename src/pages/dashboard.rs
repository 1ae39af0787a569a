//! Dashboard Page
//!
//! Role-branched: chefs see aggregate stats, their incoming bookings and
//! their points ledger; clients see a card grid of their own bookings.
//! Everything is fetched once on mount.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{Booking, DashboardStats, PointsEntry, UserRole};
use crate::components::Loading;
use crate::pages::format_date;
use crate::state::SessionState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        {move || match session.role() {
            UserRole::Chef => view! { <ChefDashboard /> }.into_view(),
            UserRole::Client => view! { <ClientDashboard /> }.into_view(),
            // Role not known yet (session still refreshing)
            UserRole::Unknown => view! { <Loading /> }.into_view(),
        }}
    }
}

/// Chef-side dashboard
#[component]
fn ChefDashboard() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (stats, set_stats) = create_signal(None::<DashboardStats>);
    let (bookings, set_bookings) = create_signal(Vec::<Booking>::new());
    let (points, set_points) = create_signal(Vec::<PointsEntry>::new());
    let (loading, set_loading) = create_signal(true);

    let chef_id = session.user.get_untracked().map(|u| u.id);

    // Fetch on mount only
    create_effect(move |_| {
        spawn_local(async move {
            match api::chefs::fetch_dashboard_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dashboard stats: {}", e).into());
                }
            }

            match api::bookings::fetch_mine().await {
                Ok(list) => set_bookings.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch bookings: {}", e).into());
                }
            }

            if let Some(id) = chef_id {
                match api::reviews::fetch_points_history(&id.to_string()).await {
                    Ok(history) => set_points.set(history),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch points history: {}", e).into());
                    }
                }
            }

            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }

            let stats = stats.get().unwrap_or_default();

            view! {
                <div class="space-y-8">
                    <h1 class="text-3xl font-bold">"Chef Dashboard"</h1>

                    // Stats
                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        <StatCard icon="⭐" label="Rating" value=format!("{:.1}", stats.rating) />
                        <StatCard icon="🏆" label="Points" value=stats.total_points.to_string() />
                        <StatCard icon="📅" label="Pending Bookings" value=stats.pending_bookings.to_string() />
                        <StatCard icon="✅" label="Completed This Month" value=stats.completed_this_month.to_string() />
                        <StatCard icon="📊" label="Total Bookings" value=stats.total_bookings.to_string() />
                    </div>

                    // Incoming bookings
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Your Bookings"</h2>
                        {
                            let list = bookings.get();
                            if list.is_empty() {
                                view! {
                                    <p class="text-gray-400">"No bookings yet"</p>
                                }.into_view()
                            } else {
                                view! {
                                    <table class="w-full text-sm">
                                        <thead>
                                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                                <th class="py-2">"Client"</th>
                                                <th class="py-2">"Event Date"</th>
                                                <th class="py-2">"Location"</th>
                                                <th class="py-2">"Guests"</th>
                                                <th class="py-2">"Status"</th>
                                                <th class="py-2"></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list.into_iter().map(|booking| {
                                                let detail_href = format!("/booking/{}", booking.id);
                                                view! {
                                                    <tr class="border-b border-gray-700 last:border-0">
                                                        <td class="py-3">{booking.client_name()}</td>
                                                        <td class="py-3">
                                                            {booking.event_date.as_deref().map(format_date).unwrap_or_default()}
                                                        </td>
                                                        <td class="py-3">{booking.event_location.clone().unwrap_or_default()}</td>
                                                        <td class="py-3">{booking.num_guests.unwrap_or_default()}</td>
                                                        <td class="py-3">
                                                            <span class=format!(
                                                                "{} text-xs px-2 py-0.5 rounded-full capitalize",
                                                                booking.status.badge_class()
                                                            )>
                                                                {booking.status.as_str()}
                                                            </span>
                                                        </td>
                                                        <td class="py-3">
                                                            <A href=detail_href class="text-orange-400 hover:underline">
                                                                "View"
                                                            </A>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_view()
                            }
                        }
                    </section>

                    // Points ledger
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Points History"</h2>
                        {
                            let history = points.get();
                            if history.is_empty() {
                                view! {
                                    <p class="text-gray-400">"No points earned yet"</p>
                                }.into_view()
                            } else {
                                history.into_iter().map(|entry| {
                                    let date = entry.created_at.as_deref().map(format_date);
                                    view! {
                                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                            <div>
                                                <span>{entry.reason.unwrap_or_else(|| "Points awarded".to_string())}</span>
                                                {date.map(|d| view! {
                                                    <span class="text-gray-500 text-sm ml-2">{d}</span>
                                                })}
                                            </div>
                                            <span class="font-semibold text-orange-400">
                                                {format!("{:+}", entry.points)}
                                            </span>
                                        </div>
                                    }
                                }).collect_view()
                            }
                        }
                    </section>
                </div>
            }.into_view()
        }}
    }
}

/// Client-side dashboard
#[component]
fn ClientDashboard() -> impl IntoView {
    let (bookings, set_bookings) = create_signal(Vec::<Booking>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch on mount only
    create_effect(move |_| {
        spawn_local(async move {
            match api::bookings::fetch_mine().await {
                Ok(list) => set_bookings.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch bookings: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }

            let list = bookings.get();
            if list.is_empty() {
                view! {
                    <div class="text-center py-16 space-y-4">
                        <h1 class="text-3xl font-bold">"My Bookings"</h1>
                        <p class="text-gray-400">"You haven't booked any chefs yet"</p>
                        <A
                            href="/chefs"
                            class="inline-block px-6 py-3 bg-orange-600 hover:bg-orange-700 rounded-lg font-semibold transition-colors"
                        >
                            "Browse Chefs"
                        </A>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="space-y-8">
                        <h1 class="text-3xl font-bold">"My Bookings"</h1>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list.into_iter().map(|booking| {
                                view! { <BookingCard booking=booking /> }
                            }).collect_view()}
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

/// One booking in the client's card grid
#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    let detail_href = format!("/booking/{}", booking.id);
    let date = booking.event_date.as_deref().map(format_date).unwrap_or_default();
    let time = booking.event_time.clone().unwrap_or_default();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{booking.chef_name()}</h3>
                <span class=format!(
                    "{} text-xs px-2 py-0.5 rounded-full capitalize",
                    booking.status.badge_class()
                )>
                    {booking.status.as_str()}
                </span>
            </div>

            <div class="text-sm text-gray-400 space-y-1">
                <p>{format!("Date: {} at {}", date, time)}</p>
                {booking.event_location.clone().map(|l| view! { <p>{format!("Location: {}", l)}</p> })}
                {booking.num_guests.map(|g| view! { <p>{format!("Guests: {}", g)}</p> })}
                {booking.budget.map(|b| view! { <p>{format!("Budget: ${:.2}", b)}</p> })}
            </div>

            <A href=detail_href class="text-orange-400 text-sm hover:underline">
                "View Details"
            </A>
        </div>
    }
}

#[component]
fn StatCard(
    icon: &'static str,
    label: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-center space-x-3">
            <span class="text-2xl">{icon}</span>
            <div>
                <span class="block text-gray-400 text-sm">{label}</span>
                <span class="text-xl font-bold">{value}</span>
            </div>
        </div>
    }
}
