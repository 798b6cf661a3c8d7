//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the domain types
//! shared between the API client and the pages.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Community members fetched from the API
    pub members: RwSignal<Vec<UserProfile>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// When the homepage payload was last fetched (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One entry of the homepage popular-skills payload
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct PopularSkill {
    pub name: String,
    pub count: u32,
}

impl PopularSkill {
    /// List line for the homepage container
    pub fn headline(&self) -> String {
        format!("{} (offered by {} users)", self.name, self.count)
    }
}

/// A community member from the directory endpoint
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub trust_score: f64,
    pub skillcoins_balance: f64,
    #[serde(default)]
    pub skills: Vec<SkillInfo>,
}

/// A skill attached to a member
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct SkillInfo {
    pub skill_name: String,
    pub is_offered: bool,
    pub availability: String,
}

impl UserProfile {
    /// Up to two initials for the avatar circle
    pub fn initials(&self) -> String {
        let letters: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if letters.is_empty() {
            "?".to_string()
        } else {
            letters
        }
    }

    /// Skills this member offers to teach
    pub fn offered_skills(&self) -> Vec<SkillInfo> {
        self.skills.iter().filter(|s| s.is_offered).cloned().collect()
    }

    /// Skills this member wants to learn
    pub fn requested_skills(&self) -> Vec<SkillInfo> {
        self.skills.iter().filter(|s| !s.is_offered).cloned().collect()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        members: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        last_refresh: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, skills: Vec<SkillInfo>) -> UserProfile {
        UserProfile {
            id: 1,
            name: name.to_string(),
            email: "member@example.com".to_string(),
            trust_score: 5.0,
            skillcoins_balance: 10.0,
            skills,
        }
    }

    fn skill(name: &str, is_offered: bool) -> SkillInfo {
        SkillInfo {
            skill_name: name.to_string(),
            is_offered,
            availability: "anytime".to_string(),
        }
    }

    #[test]
    fn test_headline_format() {
        let entry = PopularSkill {
            name: "Python".to_string(),
            count: 12,
        };
        assert_eq!(entry.headline(), "Python (offered by 12 users)");
    }

    #[test]
    fn test_headline_wording_is_fixed_for_count_of_one() {
        let entry = PopularSkill {
            name: "Guitar".to_string(),
            count: 1,
        };
        assert_eq!(entry.headline(), "Guitar (offered by 1 users)");
    }

    #[test]
    fn test_initials_from_full_name() {
        assert_eq!(member("Ada Lovelace", Vec::new()).initials(), "AL");
        assert_eq!(member("plato", Vec::new()).initials(), "P");
    }

    #[test]
    fn test_initials_fallback_for_blank_name() {
        assert_eq!(member("  ", Vec::new()).initials(), "?");
    }

    #[test]
    fn test_skills_partition_by_direction() {
        let profile = member(
            "Ada Lovelace",
            vec![skill("Python", true), skill("Guitar", false), skill("Chess", true)],
        );

        let offered = profile.offered_skills();
        assert_eq!(offered.len(), 2);
        assert!(offered.iter().all(|s| s.is_offered));

        let requested = profile.requested_skills();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].skill_name, "Guitar");
    }

    #[test]
    fn test_profile_parses_without_skills_field() {
        let json = r#"{"id":7,"name":"Ada","email":"ada@example.com","trust_score":4.5,"skillcoins_balance":12.5}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.id, 7);
    }
}
