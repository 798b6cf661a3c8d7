//! Community Page
//!
//! Directory of registered members with their skills and balances.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{CardSkeleton, UserCard};
use crate::state::global::GlobalState;

/// Community directory page
#[component]
pub fn Community() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (loaded, set_loaded) = create_signal(false);

    // Extract the signals we need
    let members_signal = state.members;

    // Fetch members on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_users().await {
                Ok(users) => {
                    state.members.set(users);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
            set_loaded.set(true);
        });
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Community"</h1>
                    <p class="text-gray-400 mt-1">"Everyone trading skills on Coinnect"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || format!("{} members", members_signal.get().len())}
                </div>
            </div>

            // Member grid
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    if !loaded.get() {
                        (0..3).map(|_| view! { <CardSkeleton /> }).collect_view()
                    } else {
                        let members = members_signal.get();
                        if members.is_empty() {
                            view! {
                                <div class="col-span-full text-center py-12">
                                    <p class="text-gray-400">"No members yet. Be the first to join!"</p>
                                    <A
                                        href="/register"
                                        class="inline-block mt-4 px-4 py-2 bg-primary-600 hover:bg-primary-700
                                               rounded-lg font-medium transition-colors"
                                    >
                                        "Join Coinnect"
                                    </A>
                                </div>
                            }.into_view()
                        } else {
                            members.into_iter().map(|profile| {
                                view! { <UserCard profile=profile /> }
                            }).collect_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}
