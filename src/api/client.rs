//! HTTP API Client
//!
//! Functions for communicating with the Coinnect REST backend.

use gloo_net::http::Request;

use crate::state::global::{PopularSkill, UserProfile};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("coinnect_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("coinnect_api_url", url);
        }
    }
}

// ============ Response Types ============

/// Homepage payload; the backend may omit the list entirely
#[derive(Debug, serde::Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub popular_skills: Vec<PopularSkill>,
}

#[derive(Debug, serde::Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: u32,
}

/// A skill entry in a sign-up request
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RegistrationSkill {
    pub name: String,
    pub availability: String,
    pub is_offered: bool,
}

/// Error envelope the backend sends with non-OK statuses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub message: String,
}

// ============ API Functions ============

/// Fetch the popular skills shown on the homepage
pub async fn fetch_popular_skills() -> Result<Vec<PopularSkill>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Unknown error".to_string() });
        return Err(error.message);
    }

    let result: DashboardResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.popular_skills)
}

/// Fetch the community member directory
pub async fn fetch_users() -> Result<Vec<UserProfile>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/users", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Unknown error".to_string() });
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new member together with the skills they trade
pub async fn register_user(
    name: &str,
    email: &str,
    skills: Vec<RegistrationSkill>,
) -> Result<RegisterResponse, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        skills: Vec<RegistrationSkill>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register", api_base))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            skills,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { message: "Unknown error".to_string() });
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Probe the backend root and return its welcome line
pub async fn check_connection() -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    response.text().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_payload_parses_in_order() {
        let json = r#"{"popular_skills":[{"name":"Python","count":12},{"name":"Guitar","count":3}]}"#;
        let parsed: DashboardResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.popular_skills.len(), 2);
        assert_eq!(parsed.popular_skills[0].name, "Python");
        assert_eq!(parsed.popular_skills[0].count, 12);
        assert_eq!(parsed.popular_skills[1].name, "Guitar");
        assert_eq!(parsed.popular_skills[1].count, 3);
    }

    #[test]
    fn test_dashboard_payload_missing_list_defaults_to_empty() {
        let parsed: DashboardResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.popular_skills.is_empty());

        let parsed: DashboardResponse = serde_json::from_str(r#"{"popular_skills":[]}"#).unwrap();
        assert!(parsed.popular_skills.is_empty());
    }

    #[test]
    fn test_registration_skill_serializes_with_backend_field_names() {
        let skill = RegistrationSkill {
            name: "Python".to_string(),
            availability: "anytime".to_string(),
            is_offered: true,
        };

        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Python",
                "availability": "anytime",
                "is_offered": true
            })
        );
    }

    #[test]
    fn test_error_envelope_decodes_backend_message() {
        let parsed: ApiError =
            serde_json::from_str(r#"{"message":"Email already registered!"}"#).unwrap();
        assert_eq!(parsed.message, "Email already registered!");
    }
}
