//! Traveller complaints and their administrative handling.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "PENDING",
            ComplaintStatus::InProgress => "IN_PROGRESS",
            ComplaintStatus::Resolved => "RESOLVED",
            ComplaintStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid complaint status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// What a complaint is about.
pub enum ComplaintType {
    Restaurant,
    TravelPackage,
    TravelAgency,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 3] = [
        ComplaintType::TravelPackage,
        ComplaintType::Restaurant,
        ComplaintType::TravelAgency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintType::Restaurant => "RESTAURANT",
            ComplaintType::TravelPackage => "TRAVEL_PACKAGE",
            ComplaintType::TravelAgency => "TRAVEL_AGENCY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintType::Restaurant => "Restaurant",
            ComplaintType::TravelPackage => "Travel Package",
            ComplaintType::TravelAgency => "Travel Agency",
        }
    }
}

impl FromStr for ComplaintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid complaint type: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    /// Absent on complaints that were never reviewed.
    #[serde(default)]
    pub status: Option<ComplaintStatus>,
    #[serde(default)]
    pub response: Option<String>,
    /// Raw backend timestamp, see [`Complaint::submitted_at`].
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub complaint_type: Option<ComplaintType>,
    #[serde(default)]
    pub entity_name: Option<String>,
}

impl Complaint {
    pub fn status(&self) -> ComplaintStatus {
        self.status.unwrap_or_default()
    }

    pub fn submitted_at(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn resolved_on(&self) -> Option<NaiveDateTime> {
        self.resolved_at.as_deref().and_then(parse_timestamp)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub subject: String,
    pub description: String,
    pub complaint_type: ComplaintType,
    /// Name of the restaurant, package or agency the complaint is about.
    pub entity_name: String,
    pub username: String,
}

/// Administrative status change with an optional reply to the traveller.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplaintStatusUpdate {
    pub status: ComplaintStatus,
    pub response: Option<String>,
}

impl ComplaintStatusUpdate {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("status", self.status.as_str().to_string())];
        if let Some(response) = self.response.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            query.push(("response", response.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_defaults_to_pending() {
        let complaint: Complaint =
            serde_json::from_str(r#"{"id":1,"subject":"Cold food","description":"Very cold","status":null}"#).unwrap();
        assert_eq!(complaint.status(), ComplaintStatus::Pending);
        assert_eq!(complaint.complaint_type, None);
    }

    #[test]
    fn test_complaint_timestamps() {
        let complaint: Complaint = serde_json::from_str(
            r#"{"id":1,"subject":"Late bus","status":"IN_PROGRESS","createdAt":"2026-03-01T10:15:30.123456",
                "complaintType":"TRAVEL_PACKAGE","entityName":"Lisbon Long Weekend"}"#,
        )
        .unwrap();
        assert_eq!(complaint.status(), ComplaintStatus::InProgress);
        assert_eq!(complaint.complaint_type, Some(ComplaintType::TravelPackage));
        let submitted = complaint.submitted_at().unwrap();
        assert_eq!(submitted.format("%Y-%m-%d %H:%M").to_string(), "2026-03-01 10:15");
        assert_eq!(complaint.resolved_on(), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ComplaintStatus::from_str("resolved").unwrap(), ComplaintStatus::Resolved);
        assert_eq!(ComplaintStatus::from_str("IN_PROGRESS").unwrap(), ComplaintStatus::InProgress);
        assert!(ComplaintStatus::from_str("CLOSED").is_err());
    }

    #[test]
    fn test_status_update_query_skips_blank_response() {
        let update = ComplaintStatusUpdate {
            status: ComplaintStatus::Rejected,
            response: Some("   ".to_string()),
        };
        assert_eq!(update.query(), vec![("status", "REJECTED".to_string())]);

        let update = ComplaintStatusUpdate {
            status: ComplaintStatus::Resolved,
            response: Some("Refund issued".to_string()),
        };
        assert_eq!(
            update.query(),
            vec![("status", "RESOLVED".to_string()), ("response", "Refund issued".to_string())]
        );
    }
}
