//! Booking Detail Page
//!
//! One booking with its full event details. Chefs move the booking through
//! its lifecycle (accept / decline / complete), clients can cancel while it
//! is still open and leave a review once it is completed.

use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::api::types::{Booking, BookingStatus, ReviewRequest, UserRole};
use crate::components::Loading;
use crate::pages::format_date;
use crate::state::SessionState;

/// Booking detail page component
#[component]
pub fn BookingDetail() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let params = use_params_map();

    let (booking, set_booking) = create_signal(None::<Booking>);
    let (loading, set_loading) = create_signal(true);
    let (busy, set_busy) = create_signal(false);

    // Load the booking whenever the route id changes
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        if id.is_empty() {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::bookings::fetch_details(&id).await {
                Ok(b) => set_booking.set(Some(b)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch booking: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let session_for_update = session.clone();
    let on_update = move |booking_id: i64, status: BookingStatus| {
        set_busy.set(true);
        let session = session_for_update.clone();
        spawn_local(async move {
            match api::bookings::update_status(booking_id, status).await {
                Ok(()) => {
                    set_booking.update(|b| {
                        if let Some(b) = b {
                            b.status = status;
                        }
                    });
                    session.show_success(&format!("Booking {}", status.as_str()));
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_busy.set(false);
        });
    };

    let session_for_cancel = session.clone();
    let on_cancel = move |booking_id: i64| {
        set_busy.set(true);
        let session = session_for_cancel.clone();
        spawn_local(async move {
            match api::bookings::cancel(booking_id).await {
                Ok(()) => {
                    set_booking.update(|b| {
                        if let Some(b) = b {
                            b.status = BookingStatus::Cancelled;
                        }
                    });
                    session.show_success("Booking cancelled");
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }

            let Some(booking) = booking.get() else {
                return view! {
                    <div class="text-center py-12 text-gray-400">"Booking not found"</div>
                }.into_view();
            };

            let role = session.role();
            let status = booking.status;
            let date = booking.event_date.as_deref().map(format_date).unwrap_or_default();
            let counterpart = match role {
                UserRole::Chef => format!("Client: {}", booking.client_name()),
                _ => format!("Chef: {}", booking.chef_name()),
            };

            let chef_actions = (role == UserRole::Chef)
                .then(|| status.chef_transitions())
                .unwrap_or(&[]);
            let client_can_cancel = role == UserRole::Client && status.client_can_cancel();
            let client_can_review = role == UserRole::Client && status == BookingStatus::Completed;

            let on_update = on_update.clone();
            let on_cancel = on_cancel.clone();
            let booking_id = booking.id;
            let chef_id = booking.chef_id.unwrap_or_default();

            view! {
                <div class="max-w-2xl mx-auto space-y-8">
                    <div class="flex items-center justify-between">
                        <h1 class="text-3xl font-bold">{format!("Booking #{}", booking.id)}</h1>
                        <span class=format!(
                            "{} text-sm px-3 py-1 rounded-full capitalize",
                            status.badge_class()
                        )>
                            {status.as_str()}
                        </span>
                    </div>

                    // Event details
                    <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                        <p class="font-medium">{counterpart}</p>
                        <div class="grid grid-cols-2 gap-3 text-sm text-gray-300">
                            <DetailField label="Date" value=date />
                            <DetailField label="Time" value=booking.event_time.clone().unwrap_or_default() />
                            <DetailField label="Location" value=booking.event_location.clone().unwrap_or_default() />
                            <DetailField label="Event Type" value=booking.event_type.clone().unwrap_or_default() />
                            <DetailField
                                label="Guests"
                                value=booking.num_guests.map(|g| g.to_string()).unwrap_or_default()
                            />
                            <DetailField
                                label="Budget"
                                value=booking.budget.map(|b| format!("${:.2}", b)).unwrap_or_default()
                            />
                        </div>
                        {booking.menu_requirements.clone().map(|m| view! {
                            <div class="text-sm">
                                <span class="block text-gray-500">"Menu Requirements"</span>
                                <p class="text-gray-300">{m}</p>
                            </div>
                        })}
                        {booking.special_requests.clone().map(|s| view! {
                            <div class="text-sm">
                                <span class="block text-gray-500">"Special Requests"</span>
                                <p class="text-gray-300">{s}</p>
                            </div>
                        })}
                    </section>

                    // Chef lifecycle actions
                    {(!chef_actions.is_empty()).then(|| view! {
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Respond to This Booking"</h2>
                            <div class="flex space-x-3">
                                {chef_actions.iter().map(|next| {
                                    let next = *next;
                                    let apply = on_update.clone();
                                    view! {
                                        <button
                                            on:click=move |_| apply(booking_id, next)
                                            disabled=move || busy.get()
                                            class=format!(
                                                "px-4 py-2 {} hover:opacity-90 disabled:bg-gray-600 rounded-lg font-medium transition-colors",
                                                next.badge_class()
                                            )
                                        >
                                            {action_label(next)}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </section>
                    })}

                    // Client cancel
                    {client_can_cancel.then(|| {
                        let cancel = on_cancel.clone();
                        view! {
                            <section class="bg-gray-800 rounded-xl p-6 flex items-center justify-between">
                                <p class="text-gray-400 text-sm">"Plans changed? You can cancel this booking."</p>
                                <button
                                    on:click=move |_| cancel(booking_id)
                                    disabled=move || busy.get()
                                    class="px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Cancel Booking"
                                </button>
                            </section>
                        }
                    })}

                    // Client review
                    {client_can_review.then(|| view! {
                        <ReviewForm booking_id=booking_id chef_id=chef_id />
                    })}
                </div>
            }.into_view()
        }}
    }
}

/// Button label for a chef-side status transition.
fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Accepted => "Accept",
        BookingStatus::Declined => "Decline",
        BookingStatus::Completed => "Mark Completed",
        _ => "",
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <span class="block text-gray-500">{label}</span>
            <span>{if value.is_empty() { "—".to_string() } else { value }}</span>
        </div>
    }
}

/// Review form shown to the client once a booking is completed
#[component]
fn ReviewForm(booking_id: i64, chef_id: i64) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (rating, set_rating) = create_signal(5_i64);
    let (comment, set_comment) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = ReviewRequest {
            booking_id,
            chef_id,
            rating: rating.get(),
            comment: comment.get(),
        };

        set_submitting.set(true);

        let session = session.clone();
        spawn_local(async move {
            match api::reviews::create(&request).await {
                Ok(()) => {
                    session.show_success("Thanks for your review!");
                    set_submitted.set(true);
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Leave a Review"</h2>

            {move || {
                if submitted.get() {
                    view! {
                        <p class="text-green-400">"Your review has been submitted."</p>
                    }.into_view()
                } else {
                    let on_submit = on_submit.clone();
                    view! {
                        <form on:submit=on_submit class="space-y-4">
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Rating"</label>
                                <select
                                    on:change=move |ev| {
                                        if let Ok(v) = event_target_value(&ev).parse() {
                                            set_rating.set(v);
                                        }
                                    }
                                    prop:value=move || rating.get().to_string()
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                                >
                                    <option value="5">"5 - Excellent"</option>
                                    <option value="4">"4 - Great"</option>
                                    <option value="3">"3 - Good"</option>
                                    <option value="2">"2 - Fair"</option>
                                    <option value="1">"1 - Poor"</option>
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Comment"</label>
                                <textarea
                                    placeholder="How was your event?"
                                    prop:value=move || comment.get()
                                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="px-6 py-3 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors"
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                            </button>
                        </form>
                    }.into_view()
                }
            }}
        </section>
    }
}
