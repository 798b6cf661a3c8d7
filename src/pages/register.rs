//! Register Page
//!
//! Sign up form for new members, including the skills they offer or seek.

use leptos::*;

use crate::api::{self, RegistrationSkill};
use crate::state::global::GlobalState;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (skills, set_skills) = create_signal(Vec::<RegistrationSkill>::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let m = email.get();

        if n.is_empty() || m.is_empty() {
            state.show_error("Name and email are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let skill_list = skills.get();
        spawn_local(async move {
            match api::register_user(&n, &m, skill_list).await {
                Ok(response) => {
                    state_clone.show_success(&format!(
                        "{} (member #{})",
                        response.message, response.user_id
                    ));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_skills.set(Vec::new());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Join Coinnect"</h1>
                <p class="text-gray-400 mt-1">"Tell the community who you are and what you can trade"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl">
                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Alice Chen"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Email
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Skills
                    <SkillEditor skills=skills set_skills=set_skills />

                    // Submit button
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Joining..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Join Coinnect"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </section>
        </div>
    }
}

/// Editable list of skills attached to the registration
#[component]
fn SkillEditor(
    skills: ReadSignal<Vec<RegistrationSkill>>,
    set_skills: WriteSignal<Vec<RegistrationSkill>>,
) -> impl IntoView {
    let (skill_name, set_skill_name) = create_signal(String::new());
    let (availability, set_availability) = create_signal("anytime".to_string());
    let (direction, set_direction) = create_signal("offer".to_string());

    let add_skill = move |_| {
        let entry = skill_name.get().trim().to_string();
        if entry.is_empty() {
            return;
        }
        let skill = RegistrationSkill {
            name: entry,
            availability: availability.get(),
            is_offered: direction.get() == "offer",
        };
        set_skills.update(|list| list.push(skill));
        set_skill_name.set(String::new());
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Skills (optional)"</label>

            // Skills added so far
            <div class="flex flex-wrap gap-2 mb-2">
                {move || {
                    skills.get().into_iter().enumerate().map(|(idx, skill)| {
                        let tag = if skill.is_offered { "offers" } else { "wants" };
                        view! {
                            <span class="bg-gray-700 px-2 py-1 rounded text-sm flex items-center space-x-1">
                                <span>{format!("{} {} ({})", tag, skill.name, skill.availability)}</span>
                                <button
                                    type="button"
                                    on:click=move |_| set_skills.update(|list| { list.remove(idx); })
                                    class="text-gray-400 hover:text-white"
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }).collect_view()
                }}
            </div>

            // Add skill inputs
            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="e.g., guitar"
                    prop:value=move || skill_name.get()
                    on:input=move |ev| set_skill_name.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <select
                    on:change=move |ev| set_direction.set(event_target_value(&ev))
                    prop:value=move || direction.get()
                    class="bg-gray-700 rounded px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="offer">"Offering"</option>
                    <option value="seek">"Seeking"</option>
                </select>
                <select
                    on:change=move |ev| set_availability.set(event_target_value(&ev))
                    prop:value=move || availability.get()
                    class="bg-gray-700 rounded px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="anytime">"Anytime"</option>
                    <option value="weekdays">"Weekdays"</option>
                    <option value="weekends">"Weekends"</option>
                    <option value="evenings">"Evenings"</option>
                </select>
                <button
                    type="button"
                    on:click=add_skill
                    class="px-3 py-2 bg-gray-600 hover:bg-gray-500 rounded text-sm transition-colors"
                >
                    "Add"
                </button>
            </div>
        </div>
    }
}
