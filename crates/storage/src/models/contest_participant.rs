use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContestParticipant {
    pub participant_id: Uuid,
    pub contest_id: String,
    pub handle: String,
    pub wallet_address: Option<String>,
    pub zora_profile: Option<String>,
    pub zora_profile_data: Option<Json<ProfileData>>,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

/// Profile blob fetched from Zora, stored as JSON on the participant row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ProfileAvatar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileAvatar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

impl ContestParticipant {
    fn profile(&self) -> Option<&ProfileData> {
        self.zora_profile_data.as_ref().map(|json| &json.0)
    }

    /// Profile display name, falling back to the handle when it is missing or empty.
    pub fn display_name(&self) -> &str {
        self.profile()
            .and_then(|p| p.display_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.handle)
    }

    pub fn avatar(&self) -> Option<&str> {
        self.profile()
            .and_then(|p| p.avatar.as_ref())
            .and_then(|a| a.medium.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(handle: &str, profile: Option<ProfileData>) -> ContestParticipant {
        ContestParticipant {
            participant_id: Uuid::new_v4(),
            contest_id: "c1".to_string(),
            handle: handle.to_string(),
            wallet_address: None,
            zora_profile: None,
            zora_profile_data: profile.map(Json),
            position: 0,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_display_name_from_profile() {
        let p = participant(
            "zara",
            Some(ProfileData {
                display_name: Some("Zara Z".to_string()),
                avatar: None,
            }),
        );
        assert_eq!(p.display_name(), "Zara Z");
    }

    #[test]
    fn test_display_name_falls_back_to_handle() {
        assert_eq!(participant("max", None).display_name(), "max");

        let empty = participant(
            "max",
            Some(ProfileData {
                display_name: Some(String::new()),
                avatar: None,
            }),
        );
        assert_eq!(empty.display_name(), "max");
    }

    #[test]
    fn test_avatar_uses_medium_size() {
        let p = participant(
            "zara",
            Some(ProfileData {
                display_name: None,
                avatar: Some(ProfileAvatar {
                    medium: Some("https://cdn.example/zara.png".to_string()),
                }),
            }),
        );
        assert_eq!(p.avatar(), Some("https://cdn.example/zara.png"));
        assert_eq!(participant("max", None).avatar(), None);
    }

    #[test]
    fn test_profile_data_parses_camel_case() {
        let profile: ProfileData =
            serde_json::from_str(r#"{"displayName":"Zara Z","avatar":{"medium":"m.png","small":"s.png"}}"#)
                .unwrap();
        assert_eq!(profile.display_name.as_deref(), Some("Zara Z"));
        assert_eq!(profile.avatar.and_then(|a| a.medium).as_deref(), Some("m.png"));
    }
}
