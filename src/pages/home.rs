//! Home Page
//!
//! Marketing landing page: hero, feature grid, how-it-works and CTA.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            // Hero
            <section class="text-center py-16">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"Connect with Professional Chefs"</h1>
                <p class="text-gray-400 text-lg mb-8">
                    "Find talented chefs for your events, parties, and special occasions"
                </p>
                <div class="flex justify-center space-x-4">
                    <A
                        href="/chefs"
                        class="px-6 py-3 bg-orange-600 hover:bg-orange-700 rounded-lg font-semibold transition-colors"
                    >
                        "Browse Chefs"
                    </A>
                    <A
                        href="/register"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-semibold transition-colors"
                    >
                        "Become a Chef"
                    </A>
                </div>
            </section>

            // Features
            <section>
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold">"Why Choose CookSup?"</h2>
                    <p class="text-gray-400 mt-2">"Everything you need to find and book the perfect chef"</p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <FeatureCard
                        icon="🔍"
                        title="Easy Search"
                        description="Find chefs by location, specialty, and ratings. Filter by your preferences and budget."
                    />
                    <FeatureCard
                        icon="⭐"
                        title="Verified Ratings"
                        description="Real reviews and ratings from verified clients help you make informed decisions."
                    />
                    <FeatureCard
                        icon="📸"
                        title="Portfolio"
                        description="View chef portfolios with photos of their previous dishes and events."
                    />
                    <FeatureCard
                        icon="🏆"
                        title="Points System"
                        description="Top-rated chefs earn points and appear higher in search results."
                    />
                    <FeatureCard
                        icon="📅"
                        title="Simple Booking"
                        description="Request a booking with your event details and track its status from your dashboard."
                    />
                    <FeatureCard
                        icon="🛡️"
                        title="Safe & Secure"
                        description="Verified chefs and secure booking system for your peace of mind."
                    />
                </div>
            </section>

            // How it works
            <section class="bg-gray-800 rounded-xl p-8">
                <h2 class="text-3xl font-bold text-center mb-8">"How It Works"</h2>
                <div class="grid md:grid-cols-4 gap-6">
                    <StepCard number=1 title="Browse & Search" description="Search for chefs by location, specialty, and ratings" />
                    <StepCard number=2 title="View Profiles" description="Check portfolios, reviews, and ratings" />
                    <StepCard number=3 title="Book Service" description="Schedule and confirm your booking" />
                    <StepCard number=4 title="Enjoy Event" description="Have your event and leave a review" />
                </div>
            </section>

            // Call to action
            <section class="text-center py-12">
                <h2 class="text-3xl font-bold mb-2">"Ready to Find Your Perfect Chef?"</h2>
                <p class="text-gray-400 mb-6">
                    "Join thousands of satisfied clients and professional chefs on CookSup"
                </p>
                <div class="flex justify-center space-x-4">
                    <A
                        href="/chefs"
                        class="px-8 py-4 bg-orange-600 hover:bg-orange-700 rounded-lg font-semibold transition-colors"
                    >
                        "Browse Chefs Now"
                    </A>
                    <A
                        href="/register"
                        class="px-8 py-4 bg-gray-700 hover:bg-gray-600 rounded-lg font-semibold transition-colors"
                    >
                        "Register as a Chef"
                    </A>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}

#[component]
fn StepCard(
    number: usize,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-10 h-10 mx-auto mb-3 bg-orange-600 rounded-full flex items-center justify-center font-bold">
                {number}
            </div>
            <h3 class="font-semibold mb-1">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}
