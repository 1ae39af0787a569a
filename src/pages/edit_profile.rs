//! Edit Profile Page
//!
//! The authenticated chef's own profile: a full-replacement edit form plus
//! portfolio photo upload. Client accounts have no public profile and get
//! a short notice instead.

use leptos::*;

use crate::api;
use crate::api::types::{PhotoUpload, ProfileUpdate, UserRole};
use crate::components::Loading;
use crate::state::SessionState;

/// Edit profile page component
#[component]
pub fn EditProfile() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        {move || match session.role() {
            UserRole::Chef => view! { <ProfileEditor /> }.into_view(),
            UserRole::Unknown => view! { <Loading /> }.into_view(),
            UserRole::Client => view! {
                <div class="text-center py-12 text-gray-400">
                    "Only chef accounts have a public profile."
                </div>
            }.into_view(),
        }}
    }
}

#[component]
fn ProfileEditor() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (specialty, set_specialty) = create_signal(String::new());
    let (location, set_location) = create_signal(String::new());
    let (workplace, set_workplace) = create_signal(String::new());
    let (bio, set_bio) = create_signal(String::new());
    let (about, set_about) = create_signal(String::new());
    let (experience_years, set_experience_years) = create_signal(String::new());
    let (certifications, set_certifications) = create_signal(String::new());
    let (availability, set_availability) = create_signal("available".to_string());

    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);

    let chef_id = session.user.get_untracked().map(|u| u.id);

    // Pre-fill from the current profile
    create_effect(move |_| {
        let Some(id) = chef_id else {
            set_loading.set(false);
            return;
        };

        spawn_local(async move {
            match api::chefs::fetch_profile(&id.to_string()).await {
                Ok(profile) => {
                    set_specialty.set(profile.specialty.unwrap_or_default());
                    set_location.set(profile.location.unwrap_or_default());
                    set_workplace.set(profile.current_workplace.unwrap_or_default());
                    set_bio.set(profile.bio.unwrap_or_default());
                    set_about.set(profile.about.unwrap_or_default());
                    set_experience_years.set(
                        profile.experience_years.map(|y| y.to_string()).unwrap_or_default(),
                    );
                    set_certifications.set(profile.certifications.unwrap_or_default());
                    set_availability.set(
                        profile.availability_status.unwrap_or_else(|| "available".to_string()),
                    );
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load profile: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let session_for_save = session.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = ProfileUpdate {
            specialty: specialty.get(),
            location: location.get(),
            current_workplace: workplace.get(),
            bio: bio.get(),
            about: about.get(),
            experience_years: experience_years.get().parse().unwrap_or(0),
            certifications: certifications.get(),
            availability_status: availability.get(),
        };

        set_saving.set(true);

        let session = session_for_save.clone();
        spawn_local(async move {
            match api::chefs::update_profile(&update).await {
                Ok(()) => {
                    session.show_success("Profile updated");
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || {
            if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! {}.into_view()
            }
        }}

        <div class="max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"My Profile"</h1>
                <p class="text-gray-400 mt-1">"What clients see when they find you"</p>
            </div>

            <form on:submit=on_save class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Specialty"</label>
                        <input
                            type="text"
                            placeholder="e.g., Italian"
                            prop:value=move || specialty.get()
                            on:input=move |ev| set_specialty.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Location"</label>
                        <input
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Current Workplace"</label>
                        <input
                            type="text"
                            prop:value=move || workplace.get()
                            on:input=move |ev| set_workplace.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Years of Experience"</label>
                        <input
                            type="number"
                            prop:value=move || experience_years.get()
                            on:input=move |ev| set_experience_years.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Short Bio"</label>
                    <input
                        type="text"
                        placeholder="One line shown in search results"
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"About"</label>
                    <textarea
                        placeholder="Tell clients about your background and cooking style..."
                        prop:value=move || about.get()
                        on:input=move |ev| set_about.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 h-28
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Certifications"</label>
                        <input
                            type="text"
                            prop:value=move || certifications.get()
                            on:input=move |ev| set_certifications.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Availability"</label>
                        <select
                            on:change=move |ev| set_availability.set(event_target_value(&ev))
                            prop:value=move || availability.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        >
                            <option value="available">"Available for bookings"</option>
                            <option value="unavailable">"Not taking bookings"</option>
                        </select>
                    </div>
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="w-full bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>

            <PhotoForm />
        </div>
    }
}

/// Portfolio photo upload form
#[component]
fn PhotoForm() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (photo_url, set_photo_url) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (adding, set_adding) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let url = photo_url.get();
        if url.is_empty() {
            session.show_error("Photo URL is required");
            return;
        }

        let upload = PhotoUpload {
            photo_url: url,
            title: title.get(),
        };

        set_adding.set(true);

        let session = session.clone();
        spawn_local(async move {
            match api::chefs::add_photo(&upload).await {
                Ok(()) => {
                    session.show_success("Photo added to your portfolio");
                    set_photo_url.set(String::new());
                    set_title.set(String::new());
                }
                Err(e) => {
                    session.show_error(&e.detail());
                }
            }
            set_adding.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Add Portfolio Photo"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Photo URL"</label>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || photo_url.get()
                        on:input=move |ev| set_photo_url.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title (optional)"</label>
                    <input
                        type="text"
                        placeholder="e.g., Wedding tasting menu"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || adding.get()
                    class="px-6 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if adding.get() { "Adding..." } else { "Add Photo" }}
                </button>
            </form>
        </section>
    }
}
