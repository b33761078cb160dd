//! Row types for the practice-management tables.
//!
//! Primary keys are a mix of UUID text and bigint across tables, so every id
//! is carried as a `String` and deserialized leniently from either form. Write
//! payloads skip absent columns so a partial update never nulls a column it
//! did not mention.

use serde::{Deserialize, Deserializer, Serialize};

mod lenient {
    use super::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    impl From<RawId> for String {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(s) => s,
                RawId::Int(n) => n.to_string(),
            }
        }
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        RawId::deserialize(d).map(String::from)
    }

    pub fn opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<RawId>::deserialize(d)?.map(String::from))
    }
}

fn null_as_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

fn null_as_empty<'de, D: Deserializer<'de>, T: Deserialize<'de>>(d: D) -> Result<Vec<T>, D::Error> {
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

// =============================================================================
// Trials
// =============================================================================

/// Courthouse embedded in an organization trial row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourthouseRef {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub state_id: Option<String>,
    #[serde(default)]
    pub abbreviation: String,
}

/// A trial tracked by an organization (`org_trials`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrgTrial {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub organization_id: String,
    #[serde(deserialize_with = "lenient::id")]
    pub shared_trial_id: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub org_corporation_id: Option<String>,
    #[serde(default)]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub risk_factor: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub contingency_cost: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// `true` while the trial is active.
    #[serde(default)]
    pub trial_status: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub trial_type_stage: Option<i64>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub courthouse_id: Option<String>,
    #[serde(default)]
    pub courthouse: Option<CourthouseRef>,
}

/// Mutable trial columns. Used as the update payload and as the optional part of an insert.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrgTrialChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_corporation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contingency_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_type_stage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courthouse_id: Option<String>,
}

/// Insert payload for `org_trials`; the backend assigns `id` and `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewOrgTrial {
    pub organization_id: String,
    pub shared_trial_id: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub details: OrgTrialChanges,
}

/// Optional narrowing for the organization trial list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrialFilters {
    pub state_id: Option<String>,
    pub courthouse_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialStatus {
    Active,
    Completed,
    #[default]
    Upcoming,
}

impl TrialStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Upcoming];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Trial captured by the "add trial" form and kept on the My Trials page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialDraft {
    pub id: String,
    pub case_number: String,
    pub plaintiff: String,
    pub defendant: String,
    pub trial_type: String,
    pub customer: String,
    pub corporation: String,
    pub notes: String,
    pub risk_factor: String,
    pub status: TrialStatus,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    pub lead_team: String,
    pub subscribe_notifications: bool,
    pub notification_search: Option<String>,
    pub courthouse: String,
}

// =============================================================================
// Customers and corporations
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Insert payload for `org_customers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub portal_access: bool,
    pub contact_info: Vec<ContactInfo>,
    pub organization_id: String,
    pub created_by: String,
    pub updated_by: String,
}

/// Partial update for `org_customers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<Vec<ContactInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub portal_access: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_info: Vec<ContactInfo>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub organization_id: Option<String>,
}

impl Customer {
    #[must_use]
    pub fn option(&self) -> ComboOption {
        ComboOption { label: self.name.clone(), value: self.id.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corporation {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub organization_id: Option<String>,
}

// =============================================================================
// Reference data
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsState {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courthouse {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub abbreviation: String,
}

/// A trial in the cross-organization registry (`shared_trials`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTrial {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub case_number: String,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub courthouse_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_active: bool,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default)]
    pub agreement_date: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// One window of rows plus the total matching count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { data: Vec::new(), count: 0 }
    }
}

/// Label/value pair for selects and comboboxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOption {
    pub label: String,
    pub value: String,
}

impl ComboOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

// =============================================================================
// Accounts
// =============================================================================

/// Organization and team a user belongs to (`team_members`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub organization_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub team_id: Option<String>,
}

/// Title-case each space-separated word (`"NEW YORK"` -> `"New York"`).
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
