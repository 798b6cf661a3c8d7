//! Popular Skills Component
//!
//! The homepage list of the most-offered skills on the platform.

use leptos::*;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::state::global::{GlobalState, PopularSkill};

/// Placeholder entry when the backend reports no skills
pub const NO_SKILLS_MESSAGE: &str = "No skills available yet.";

/// Entry shown when the payload cannot be fetched or parsed
pub const LOAD_ERROR_MESSAGE: &str = "Error loading skills. Please try again later.";

/// Load lifecycle of the popular-skills list
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<PopularSkill>),
    Failed,
}

impl LoadState {
    /// Text of each list entry the container should show, in order.
    ///
    /// A loaded but empty payload collapses to the single placeholder
    /// entry; a failed load collapses to the single error entry. The
    /// container content is always derived wholesale from the current
    /// state, so reloading replaces entries rather than appending.
    pub fn entry_lines(&self) -> Vec<String> {
        match self {
            LoadState::Loading => Vec::new(),
            LoadState::Ready(skills) if skills.is_empty() => vec![NO_SKILLS_MESSAGE.to_string()],
            LoadState::Ready(skills) => skills.iter().map(|s| s.headline()).collect(),
            LoadState::Failed => vec![LOAD_ERROR_MESSAGE.to_string()],
        }
    }
}

/// Popular-skills list for the homepage.
///
/// Issues one request for the dashboard payload when mounted and fills
/// the list container from the response. The request only ever fires
/// where this component (and with it the container) is mounted.
#[component]
pub fn PopularSkills() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (load, set_load) = create_signal(LoadState::Loading);

    // Fetch on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_popular_skills().await {
                Ok(skills) => {
                    set_load.set(LoadState::Ready(skills));
                    state.last_refresh.set(Some(chrono::Utc::now().timestamp_millis()));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching popular skills: {}", e).into());
                    set_load.set(LoadState::Failed);
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div>
            {move || {
                match load.get() {
                    LoadState::Loading => view! { <ListSkeleton count=3 /> }.into_view(),
                    current => view! {
                        <ul id="popular-skills-list" class="space-y-2">
                            {current.entry_lines().into_iter().map(|line| view! {
                                <li class="bg-gray-700 rounded-lg px-4 py-3 text-gray-200">
                                    {line}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, count: u32) -> PopularSkill {
        PopularSkill {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_ready_list_renders_one_entry_per_skill_in_order() {
        let state = LoadState::Ready(vec![skill("Python", 12), skill("Guitar", 3)]);
        assert_eq!(
            state.entry_lines(),
            vec!["Python (offered by 12 users)", "Guitar (offered by 3 users)"]
        );
    }

    #[test]
    fn test_empty_payload_renders_single_placeholder() {
        let state = LoadState::Ready(Vec::new());
        assert_eq!(state.entry_lines(), vec![NO_SKILLS_MESSAGE]);
    }

    #[test]
    fn test_failed_load_renders_single_error_entry() {
        let state = LoadState::Failed;
        assert_eq!(state.entry_lines(), vec![LOAD_ERROR_MESSAGE]);
    }

    #[test]
    fn test_loading_renders_no_entries_yet() {
        assert!(LoadState::Loading.entry_lines().is_empty());
    }
}
