//! Chef Search Page
//!
//! Filterable chef directory. Every filter change triggers one refetch with
//! the full filter set; responses that lose the race to a newer fetch are
//! discarded.

use leptos::*;

use crate::api;
use crate::api::types::{ChefSummary, SearchFilters};
use crate::components::{CardSkeleton, ChefCard};
use crate::state::FetchSeq;

/// Chef search page component
#[component]
pub fn ChefSearch() -> impl IntoView {
    let (location, set_location) = create_signal(String::new());
    let (specialty, set_specialty) = create_signal(String::new());
    let (min_rating, set_min_rating) = create_signal(String::new());
    let (sort_by, set_sort_by) = create_signal("rating".to_string());

    let (chefs, set_chefs) = create_signal(Vec::<ChefSummary>::new());
    let (loading, set_loading) = create_signal(true);

    let seq = FetchSeq::new();

    // Refetch whenever any filter changes
    create_effect(move |_| {
        let filters = SearchFilters {
            location: location.get(),
            specialty: specialty.get(),
            min_rating: min_rating.get(),
            sort_by: sort_by.get(),
        };

        let generation = seq.begin();
        let seq = seq.clone();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::chefs::search(&filters).await;

            // A newer search superseded this one
            if !seq.is_current(generation) {
                return;
            }

            match result {
                Ok(list) => set_chefs.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to search chefs: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="text-center">
                <h1 class="text-3xl font-bold">"Find Your Perfect Chef"</h1>
                <p class="text-gray-400 mt-1">"Browse and book talented chefs for your event"</p>
            </div>

            // Filters
            <div class="bg-gray-800 rounded-xl p-6 grid md:grid-cols-4 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Location"</label>
                    <input
                        type="text"
                        placeholder="e.g., New York, NY"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Specialty"</label>
                    <input
                        type="text"
                        placeholder="e.g., Italian, Asian"
                        prop:value=move || specialty.get()
                        on:input=move |ev| set_specialty.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Minimum Rating"</label>
                    <select
                        on:change=move |ev| set_min_rating.set(event_target_value(&ev))
                        prop:value=move || min_rating.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    >
                        <option value="">"Any Rating"</option>
                        <option value="3">"3+ Stars"</option>
                        <option value="4">"4+ Stars"</option>
                        <option value="4.5">"4.5+ Stars"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Sort By"</label>
                    <select
                        on:change=move |ev| set_sort_by.set(event_target_value(&ev))
                        prop:value=move || sort_by.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-orange-500 focus:outline-none"
                    >
                        <option value="rating">"Highest Rated"</option>
                        <option value="points">"Most Points"</option>
                    </select>
                </div>
            </div>

            // Results
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else {
                    let list = chefs.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-center py-12 text-gray-400">
                                "No chefs found. Try adjusting your filters."
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {list.into_iter().map(|chef| {
                                    view! { <ChefCard chef=chef /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
