use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message} ({http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Life cycle of a travelogue.
///
/// Serialized as a lowercase string. Integers (0 draft, 1 pending,
/// 2 published, 3 rejected, 4 deleted) are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelogueStatus {
    Draft,
    Pending,
    Published,
    Rejected,
    Deleted,
}

impl TravelogueStatus {
    pub const fn from_primitive(value: i64) -> Option<Self> {
        let status = match value {
            0 => Self::Draft,
            1 => Self::Pending,
            2 => Self::Published,
            3 => Self::Rejected,
            4 => Self::Deleted,
            _ => return None,
        };
        Some(status)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let status = match name.trim().to_ascii_lowercase().as_str() {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "published" => Self::Published,
            "rejected" => Self::Rejected,
            "deleted" => Self::Deleted,
            other => return other.parse().ok().and_then(Self::from_primitive),
        };
        Some(status)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
        }
    }
}

impl<'de> Deserialize<'de> for TravelogueStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Primitive(i64),
            Name(String),
        }
        let status = match Repr::deserialize(deserializer)? {
            Repr::Primitive(value) => Self::from_primitive(value),
            Repr::Name(name) => Self::from_name(&name),
        };
        status.ok_or_else(|| serde::de::Error::custom("invalid travelogue status"))
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id : Option<i64>,
    pub url      : String,
    pub order    : u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Author {
    pub user_id: i64,
    pub nickname: String,
    pub avatar: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Travelogue {
    pub travel_id        : i64,
    pub user_id          : i64,
    pub title            : String,
    pub content          : String,
    pub location         : String,
    /// YYYY-MM-DD
    pub start_date       : String,
    /// YYYY-MM-DD
    pub end_date         : String,
    pub participants     : u32,
    pub expenditure      : u64,
    pub video_url        : Option<String>,
    pub images           : Vec<Image>,
    pub likes            : u64,
    pub status           : TravelogueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason : Option<String>,
    pub created_at       : i64,
    pub updated_at       : i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author           : Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked         : Option<bool>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SaveTravelogue {
    #[serde(default)]
    pub travel_id    : Option<i64>,
    pub title        : String,
    #[serde(default)]
    pub content      : String,
    #[serde(default)]
    pub images       : Vec<String>,
    pub location     : String,
    pub start_date   : String,
    pub end_date     : String,
    #[serde(default)]
    pub participants : u32,
    #[serde(default)]
    pub expenditure  : u64,
    #[serde(default)]
    pub video_url    : Option<String>,
    #[serde(default)]
    pub submit       : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct SavedTravelogue {
    pub travel_id: i64,
    pub status: TravelogueStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct LikeToggled {
    pub liked: bool,
    pub likes: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub nickname: String,
    pub account: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// 0 male, 1 female, 2 undisclosed
pub type Gender = u8;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub user_id    : i64,
    pub account    : String,
    pub nickname   : String,
    pub avatar     : Option<String>,
    pub bio        : Option<String>,
    pub gender     : Gender,
    pub region     : Option<String>,
    /// YYYY-MM-DD
    pub birthday   : Option<String>,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserSession {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Admin {
    pub admin_id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AdminSession {
    pub token: String,
    pub admin: Admin,
}

/// Either an `action` (approve, reject, delete) or
/// a target `status` (published, rejected, deleted).
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TravelogueStatus>,
    #[serde(default, alias = "rejectionReason", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewRecord {
    pub review_id        : i64,
    pub travel_id        : i64,
    pub action           : String,
    pub rejection_reason : Option<String>,
    pub reviewer_id      : Option<i64>,
    pub review_time      : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub id         : i64,
    /// review or like
    pub kind       : String,
    pub title      : String,
    pub content    : String,
    /// approved or rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status     : Option<String>,
    pub travel_id  : Option<i64>,
    pub from_user  : Option<String>,
    pub created_at : i64,
    pub is_read    : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Statistics {
    pub draft: u64,
    pub pending: u64,
    pub published: u64,
    pub rejected: u64,
    pub deleted: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_as_string_or_integer() {
        let status: TravelogueStatus = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(status, TravelogueStatus::Published);
        let status: TravelogueStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, TravelogueStatus::Rejected);
        let status: TravelogueStatus = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(status, TravelogueStatus::Deleted);
        assert!(serde_json::from_str::<TravelogueStatus>("5").is_err());
        assert!(serde_json::from_str::<TravelogueStatus>("\"archived\"").is_err());
        assert_eq!(
            serde_json::to_string(&TravelogueStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn review_request_with_status() {
        let req: ReviewRequest =
            serde_json::from_str(r#"{"status":3,"reason":"广告内容"}"#).unwrap();
        assert_eq!(req.status, Some(TravelogueStatus::Rejected));
        assert_eq!(req.action, None);
        assert_eq!(req.reason.as_deref(), Some("广告内容"));
    }

    #[test]
    fn review_request_with_rejection_reason() {
        let req: ReviewRequest =
            serde_json::from_str(r#"{"action":"reject","rejectionReason":"图片模糊"}"#).unwrap();
        assert_eq!(req.action.as_deref(), Some("reject"));
        assert_eq!(req.reason.as_deref(), Some("图片模糊"));
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"action":"reject","reason":"图片模糊"}"#
        );
    }

    #[test]
    fn error_details_are_optional() {
        let err: Error = serde_json::from_str(r#"{"http_status":404,"message":"Not found"}"#).unwrap();
        assert_eq!(err.details, None);
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("details"));
    }
}
