//! Chef Profile Page
//!
//! Public profile for one chef: stats, about/details, portfolio gallery and
//! recent reviews, plus the booking request modal. Unauthenticated visitors
//! who hit "Book Now" are sent to the login screen instead.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api;
use crate::api::types;
use crate::components::rating::{stars, StarRating};
use crate::components::Loading;
use crate::pages::format_date;
use crate::state::SessionState;

/// Chef profile page component
#[component]
pub fn ChefProfile() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();
    let params = use_params_map();

    let (chef, set_chef) = create_signal(None::<types::ChefProfile>);
    let (summary, set_summary) = create_signal(None::<types::RatingSummary>);
    let (loading, set_loading) = create_signal(true);
    let (show_booking, set_show_booking) = create_signal(false);

    // Load the chef whenever the route id changes
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        if id.is_empty() {
            return;
        }

        set_loading.set(true);
        set_chef.set(None);

        spawn_local(async move {
            match api::chefs::fetch_profile(&id).await {
                Ok(profile) => set_chef.set(Some(profile)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch chef profile: {}", e).into());
                }
            }

            // Aggregate rating is decorative; a failure only hits the console
            match api::reviews::fetch_summary(&id).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch rating summary: {}", e).into());
                }
            }

            set_loading.set(false);
        });
    });

    let session_for_book = session.clone();
    let navigate_for_book = navigate.clone();
    let on_book = move |_| {
        if !session_for_book.is_authenticated() {
            navigate_for_book("/login", Default::default());
            return;
        }
        set_show_booking.set(true);
    };

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }

            match chef.get() {
                None => view! {
                    <div class="text-center py-12 text-gray-400">"Chef not found"</div>
                }.into_view(),
                Some(profile) => {
                    let on_book = on_book.clone();
                    let review_count = summary.get()
                        .map(|s| s.total_reviews)
                        .unwrap_or(profile.total_reviews);

                    view! {
                        <div class="space-y-8">
                            // Header
                            <div class="bg-gray-800 rounded-xl p-6 flex flex-col md:flex-row gap-6">
                                <div class="w-32 h-32 bg-gray-700 rounded-xl flex items-center justify-center shrink-0">
                                    {match profile.profile_image.clone() {
                                        Some(url) => view! {
                                            <img src=url alt=profile.full_name() class="w-full h-full object-cover rounded-xl" />
                                        }.into_view(),
                                        None => view! { <span class="text-6xl">"👨‍🍳"</span> }.into_view(),
                                    }}
                                </div>

                                <div class="flex-1 space-y-2">
                                    <h1 class="text-3xl font-bold">{profile.full_name()}</h1>
                                    {profile.specialty.clone().map(|s| view! {
                                        <p class="text-orange-400">{s}</p>
                                    })}
                                    {profile.location.clone().map(|l| view! {
                                        <p class="text-gray-400">"📍 " {l}</p>
                                    })}

                                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 pt-4">
                                        <ProfileStat label="Rating">
                                            <StarRating rating=profile.rating />
                                        </ProfileStat>
                                        <ProfileStat label="Points">
                                            {profile.total_points}
                                        </ProfileStat>
                                        <ProfileStat label="Completed Bookings">
                                            {profile.total_bookings}
                                        </ProfileStat>
                                        <ProfileStat label="Reviews">
                                            {review_count}
                                        </ProfileStat>
                                    </div>

                                    {profile.is_bookable().then(|| view! {
                                        <button
                                            on:click=on_book
                                            class="mt-4 px-6 py-3 bg-orange-600 hover:bg-orange-700 rounded-lg font-semibold transition-colors"
                                        >
                                            "Book Now"
                                        </button>
                                    })}
                                </div>
                            </div>

                            <div class="grid lg:grid-cols-3 gap-8">
                                <div class="lg:col-span-2 space-y-8">
                                    // About
                                    <section class="bg-gray-800 rounded-xl p-6">
                                        <h2 class="text-xl font-semibold mb-4">"About"</h2>
                                        <p class="text-gray-300">
                                            {profile.about.clone()
                                                .or_else(|| profile.bio.clone())
                                                .unwrap_or_else(|| "No information provided".to_string())}
                                        </p>
                                    </section>

                                    // Details
                                    <section class="bg-gray-800 rounded-xl p-6">
                                        <h2 class="text-xl font-semibold mb-4">"Details"</h2>
                                        <div class="space-y-3 text-sm">
                                            {profile.experience_years.map(|years| view! {
                                                <DetailRow label="Experience" value=format!("{} years", years) />
                                            })}
                                            <DetailRow
                                                label="Current Workplace"
                                                value=profile.current_workplace.clone()
                                                    .unwrap_or_else(|| "Independent".to_string())
                                            />
                                            {profile.specialty.clone().map(|s| view! {
                                                <DetailRow label="Specialty" value=s />
                                            })}
                                            {profile.certifications.clone().map(|c| view! {
                                                <DetailRow label="Certifications" value=c />
                                            })}
                                        </div>
                                    </section>

                                    // Portfolio
                                    {(!profile.photos.is_empty()).then(|| view! {
                                        <section class="bg-gray-800 rounded-xl p-6">
                                            <h2 class="text-xl font-semibold mb-4">"Portfolio"</h2>
                                            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                                                {profile.photos.clone().into_iter().map(|photo| view! {
                                                    <div>
                                                        <img
                                                            src=photo.photo_url
                                                            alt=photo.title.clone().unwrap_or_default()
                                                            class="w-full h-32 object-cover rounded-lg"
                                                        />
                                                        {photo.title.map(|t| view! {
                                                            <p class="text-sm text-gray-400 mt-1">{t}</p>
                                                        })}
                                                    </div>
                                                }).collect_view()}
                                            </div>
                                        </section>
                                    })}
                                </div>

                                // Reviews
                                <ReviewsSection
                                    chef_id=profile.id
                                    recent=profile.recent_reviews.clone()
                                />
                            </div>
                        </div>
                    }.into_view()
                }
            }
        }}

        // Booking modal
        {move || {
            if !show_booking.get() {
                return None;
            }
            chef.get().map(|profile| view! {
                <BookingModal
                    chef_id=profile.id
                    chef_name=profile.full_name()
                    on_close=move || set_show_booking.set(false)
                />
            })
        }}
    }
}

#[component]
fn ProfileStat(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <span class="block text-gray-500 text-sm">{label}</span>
            <span class="font-semibold">{children()}</span>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between border-b border-gray-700 last:border-0 py-2">
            <span class="text-gray-400">{label}</span>
            <span>{value}</span>
        </div>
    }
}

/// Review column: the profile's recent reviews, expandable to the full list
#[component]
fn ReviewsSection(chef_id: i64, recent: Vec<types::Review>) -> impl IntoView {
    let (all_reviews, set_all_reviews) = create_signal(None::<Vec<types::Review>>);
    let (expanding, set_expanding) = create_signal(false);

    let on_expand = move |_| {
        set_expanding.set(true);
        spawn_local(async move {
            match api::reviews::fetch_for_chef(&chef_id.to_string()).await {
                Ok(reviews) => set_all_reviews.set(Some(reviews)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch reviews: {}", e).into());
                }
            }
            set_expanding.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">
                {move || if all_reviews.get().is_some() { "All Reviews" } else { "Recent Reviews" }}
            </h2>

            {
                let recent = recent.clone();
                move || {
                    let reviews = all_reviews.get().unwrap_or_else(|| recent.clone());
                    if reviews.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No reviews yet"</p>
                        }.into_view()
                    } else {
                        reviews.into_iter().map(|review| {
                            view! { <ReviewItem review=review /> }
                        }).collect_view()
                    }
                }
            }

            {move || {
                if all_reviews.get().is_some() {
                    return None;
                }
                Some(view! {
                    <button
                        on:click=on_expand
                        disabled=move || expanding.get()
                        class="mt-4 text-sm text-orange-400 hover:underline disabled:text-gray-500"
                    >
                        {move || if expanding.get() { "Loading..." } else { "Show all reviews" }}
                    </button>
                })
            }}
        </section>
    }
}

#[component]
fn ReviewItem(review: types::Review) -> impl IntoView {
    let reviewer = [review.first_name.clone(), review.last_name.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let date = review.created_at.as_deref().map(format_date);

    view! {
        <div class="py-3 border-b border-gray-700 last:border-0">
            <div class="flex items-center justify-between">
                <strong class="text-sm">{reviewer}</strong>
                <span class="text-sm">{stars(review.rating as f64)}</span>
            </div>
            {date.map(|d| view! { <p class="text-xs text-gray-500">{d}</p> })}
            {review.comment.map(|comment| view! {
                <p class="text-sm text-gray-300 mt-1">{comment}</p>
            })}
        </div>
    }
}

/// Booking request modal
#[component]
fn BookingModal(
    chef_id: i64,
    chef_name: String,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (event_date, set_event_date) = create_signal(String::new());
    let (event_time, set_event_time) = create_signal(String::new());
    let (event_location, set_event_location) = create_signal(String::new());
    let (event_type, set_event_type) = create_signal(String::new());
    let (num_guests, set_num_guests) = create_signal(String::new());
    let (budget, set_budget) = create_signal(String::new());
    let (menu_requirements, set_menu_requirements) = create_signal(String::new());
    let (special_requests, set_special_requests) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let date = event_date.get();
        let time = event_time.get();
        let location = event_location.get();
        if date.is_empty() || time.is_empty() || location.is_empty() {
            session.show_error("Event date, time and location are required");
            return;
        }

        let guests = match num_guests.get().parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => {
                session.show_error("Enter the number of guests");
                return;
            }
        };

        let request = types::BookingRequest {
            chef_id,
            event_date: date,
            event_time: time,
            event_location: location,
            event_type: event_type.get(),
            num_guests: guests,
            budget: budget.get().parse::<f64>().ok(),
            menu_requirements: menu_requirements.get(),
            special_requests: special_requests.get(),
        };

        set_submitting.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::bookings::create(&request).await {
                Ok(()) => {
                    session.show_success("Booking requested successfully!");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4 max-h-[90vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{format!("Book {}", chef_name)}</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Event Date"</label>
                            <input
                                type="date"
                                prop:value=move || event_date.get()
                                on:input=move |ev| set_event_date.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Event Time"</label>
                            <input
                                type="time"
                                prop:value=move || event_time.get()
                                on:input=move |ev| set_event_time.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Event Location"</label>
                        <input
                            type="text"
                            placeholder="Address"
                            prop:value=move || event_location.get()
                            on:input=move |ev| set_event_location.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Event Type"</label>
                            <input
                                type="text"
                                placeholder="Birthday, Wedding, etc."
                                prop:value=move || event_type.get()
                                on:input=move |ev| set_event_type.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Number of Guests"</label>
                            <input
                                type="number"
                                prop:value=move || num_guests.get()
                                on:input=move |ev| set_num_guests.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Budget"</label>
                        <input
                            type="number"
                            step="0.01"
                            placeholder="$"
                            prop:value=move || budget.get()
                            on:input=move |ev| set_budget.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Menu Requirements"</label>
                        <textarea
                            placeholder="Describe your menu preferences..."
                            prop:value=move || menu_requirements.get()
                            on:input=move |ev| set_menu_requirements.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Special Requests"</label>
                        <textarea
                            placeholder="Any special requests or dietary restrictions?"
                            prop:value=move || special_requests.get()
                            on:input=move |ev| set_special_requests.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Submitting..." } else { "Request Booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
