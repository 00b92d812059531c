use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A signed-in user and the projects the backend has on record for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

/// One processed video project as listed on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Backend project id; the argument to the curation commands.
    ///
    /// The backend may send it as a JSON string or number.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Creation time exactly as the backend sent it.
    pub created_at: String,
    #[serde(default)]
    pub frames_download_url: Option<String>,
    #[serde(default)]
    pub video_download_url: Option<String>,
    #[serde(default)]
    pub original_video_download_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Uint(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Int(id) => id.to_string(),
        RawId::Uint(id) => id.to_string(),
    })
}

impl ProjectSummary {
    /// Parse `created_at` as RFC 3339, or as a naive ISO timestamp taken to be UTC.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn summary(created_at: &str) -> ProjectSummary {
        ProjectSummary {
            id: "7".into(),
            name: "beach".into(),
            created_at: created_at.into(),
            frames_download_url: None,
            video_download_url: None,
            original_video_download_url: None,
        }
    }

    #[test]
    fn parses_rfc3339() {
        let ts = summary("2024-05-01T10:30:00+02:00").created_at_utc().unwrap();
        assert_eq!(ts.hour(), 8);
    }

    #[test]
    fn parses_naive_iso_as_utc() {
        let ts = summary("2024-05-01T10:30:00.123456").created_at_utc().unwrap();
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        assert!(summary("yesterday").created_at_utc().is_none());
    }

    #[test]
    fn profile_defaults_missing_projects_and_urls() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"a@example.com","projects":[{"id":"1","name":"n","created_at":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(profile.projects.len(), 1);
        assert!(profile.projects[0].video_download_url.is_none());

        let empty: UserProfile = serde_json::from_str(r#"{"email":"b@example.com"}"#).unwrap();
        assert!(empty.projects.is_empty());
    }

    #[test]
    fn numeric_project_id_is_read_as_string() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"email":"a@example.com","projects":[{"id":5,"name":"beach","created_at":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(profile.projects[0].id, "5");
    }

    #[test]
    fn non_scalar_project_id_is_rejected() {
        let result = serde_json::from_str::<ProjectSummary>(
            r#"{"id":[1],"name":"beach","created_at":"x"}"#,
        );
        assert!(result.is_err());
    }
}
