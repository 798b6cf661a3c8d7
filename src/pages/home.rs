//! Home Page
//!
//! Landing view with the popular skills list and a short pitch for joining.

use leptos::*;
use leptos_router::*;

use crate::components::PopularSkills;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Hero
            <div class="text-center py-8">
                <h1 class="text-4xl font-bold">"Welcome to Coinnect"</h1>
                <p class="text-gray-400 mt-2">"Trade skills, earn SkillCoins, build trust"</p>
            </div>

            // Popular skills list
            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto">
                <h2 class="text-xl font-semibold mb-4">"Popular Skills"</h2>
                <PopularSkills />
            </section>

            <HowItWorks />

            // Call to action
            <div class="text-center py-6">
                <A
                    href="/register"
                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Join the community"
                </A>
            </div>
        </div>
    }
}

/// Three step explainer shown below the skills list
#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="max-w-4xl mx-auto">
            <h2 class="text-xl font-semibold mb-4 text-center">"How it works"</h2>
            <div class="grid md:grid-cols-3 gap-4">
                <StepCard
                    icon="🎓"
                    title="Offer a Skill"
                    text="List what you can teach, from guitar to gardening."
                />
                <StepCard
                    icon="🪙"
                    title="Earn SkillCoins"
                    text="Every session you teach earns coins you can spend on learning."
                />
                <StepCard
                    icon="🤝"
                    title="Build Trust"
                    text="Completed exchanges grow your trust score in the community."
                />
            </div>
        </section>
    }
}

#[component]
fn StepCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center">
            <span class="text-3xl">{icon}</span>
            <h3 class="font-semibold mt-2">{title}</h3>
            <p class="text-gray-400 text-sm mt-1">{text}</p>
        </div>
    }
}
