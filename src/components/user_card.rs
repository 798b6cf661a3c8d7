//! Member Card Component
//!
//! Displays one community member: trust score, SkillCoins balance and the
//! skills they offer or want to learn.

use leptos::*;

use crate::state::global::{SkillInfo, UserProfile};

/// Community member card
#[component]
pub fn UserCard(profile: UserProfile) -> impl IntoView {
    let offered = profile.offered_skills();
    let requested = profile.requested_skills();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            // Identity row
            <div class="flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-primary-600 flex items-center justify-center font-semibold">
                    {profile.initials()}
                </div>
                <div>
                    <h3 class="font-semibold">{profile.name.clone()}</h3>
                    <p class="text-gray-400 text-sm">{profile.email.clone()}</p>
                </div>
            </div>

            // Reputation and balance
            <div class="flex items-center space-x-4 mt-4 text-sm text-gray-400">
                <span>"⭐ "{format!("{:.1}", profile.trust_score)}</span>
                <span>"🪙 "{format!("{:.1} SC", profile.skillcoins_balance)}</span>
            </div>

            <SkillChips label="Offers" skills=offered accent="bg-green-500" />
            <SkillChips label="Seeking" skills=requested accent="bg-blue-500" />
        </div>
    }
}

/// Chip row for one direction of a member's skills
#[component]
fn SkillChips(
    label: &'static str,
    skills: Vec<SkillInfo>,
    accent: &'static str,
) -> impl IntoView {
    if skills.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div class="mt-3">
            <span class="text-xs text-gray-500 uppercase">{label}</span>
            <div class="flex flex-wrap gap-2 mt-1">
                {skills.into_iter().map(|skill| view! {
                    <span class="bg-gray-700 px-2 py-1 rounded-full text-xs flex items-center space-x-1">
                        <span class=format!("w-2 h-2 rounded-full {}", accent) />
                        <span>{skill.skill_name}</span>
                        <span class="text-gray-500">{format!("({})", skill.availability)}</span>
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
    .into_view()
}
