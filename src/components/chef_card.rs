//! Chef Card Component
//!
//! Search-result card linking to the chef's public profile.

use leptos::*;
use leptos_router::*;

use crate::api::types::ChefSummary;
use crate::components::rating::StarRating;

/// One chef in the search results grid
#[component]
pub fn ChefCard(chef: ChefSummary) -> impl IntoView {
    let profile_href = format!("/chef/{}", chef.id);
    let name = format!("{} {}", chef.first_name, chef.last_name);
    let specialty = chef.specialty.clone().unwrap_or_else(|| "Chef".to_string());

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors overflow-hidden">
            // Photo or placeholder
            <div class="h-40 bg-gray-700 flex items-center justify-center">
                {match chef.profile_image.clone() {
                    Some(url) => view! {
                        <img src=url alt=name.clone() class="w-full h-full object-cover" />
                    }.into_view(),
                    None => view! {
                        <span class="text-5xl">"👨‍🍳"</span>
                    }.into_view(),
                }}
            </div>

            <div class="p-4 space-y-2">
                <h3 class="text-lg font-semibold">{name}</h3>
                <p class="text-orange-400 text-sm">{specialty}</p>
                {chef.location.clone().map(|location| view! {
                    <p class="text-gray-400 text-sm">"📍 " {location}</p>
                })}
                {chef.current_workplace.clone().map(|workplace| view! {
                    <p class="text-gray-500 text-sm">{workplace}</p>
                })}

                // Stats row
                <div class="grid grid-cols-3 gap-2 py-2 text-sm">
                    <div>
                        <span class="block text-gray-500">"Rating"</span>
                        <StarRating rating=chef.rating />
                    </div>
                    <div>
                        <span class="block text-gray-500">"Points"</span>
                        <span class="font-semibold">{chef.total_points}</span>
                    </div>
                    <div>
                        <span class="block text-gray-500">"Bookings"</span>
                        <span class="font-semibold">{chef.total_bookings}</span>
                    </div>
                </div>

                {chef.bio.clone().map(|bio| view! {
                    <p class="text-gray-400 text-sm line-clamp-2">{bio}</p>
                })}

                <A
                    href=profile_href
                    class="block text-center mt-2 px-4 py-2 bg-orange-600 hover:bg-orange-700 rounded-lg font-medium transition-colors"
                >
                    "View Profile"
                </A>
            </div>
        </div>
    }
}
