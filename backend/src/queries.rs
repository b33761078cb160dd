//! One [`Query`] constructor per data-access operation.
//!
//! Constructors are pure: they decide table, columns, filters and paging but
//! never touch the network. The client's service layer executes them and
//! decodes the rows.

use serde::Serialize;
use serde_json::Value;

use crate::error::BackendError;
use crate::models::{CustomerData, CustomerPatch, NewOrgTrial, OrgTrialChanges, TrialFilters};
use crate::query::{Count, Query};

pub const ORG_TRIALS: &str = "org_trials";
pub const ORG_CUSTOMERS: &str = "org_customers";
pub const ORG_CORPORATIONS: &str = "org_corporations";
pub const STATES: &str = "states";
pub const COURTHOUSES: &str = "courthouses";
pub const SHARED_TRIALS: &str = "shared_trials";
pub const PUBLICATIONS: &str = "publications";
pub const TEAM_MEMBERS: &str = "team_members";
pub const PROFILES: &str = "profiles";

/// Maximum suggestions returned by the customer search.
pub const CUSTOMER_SEARCH_LIMIT: u64 = 10;

const TRIAL_WITH_COURTHOUSE: &str = "
    *,
    courthouse:courthouse_id (
      id,
      state_id,
      abbreviation
    )";

fn body<T: Serialize>(value: &T) -> Result<Value, BackendError> {
    serde_json::to_value(value).map_err(|e| BackendError::Parse(e.to_string()))
}

/// Inclusive row window for a 1-based `page` of `page_size` rows.
///
/// Page numbers below 1 are treated as 1.
#[must_use]
pub fn page_bounds(page: u64, page_size: u64) -> (u64, u64) {
    let size = page_size.max(1);
    let from = (page.max(1) - 1) * size;
    (from, from + size - 1)
}

// =============================================================================
// Trials
// =============================================================================

#[must_use]
pub fn trials(organization_id: &str, filters: &TrialFilters) -> Query {
    let mut q = Query::from(ORG_TRIALS)
        .select(TRIAL_WITH_COURTHOUSE)
        .eq("organization_id", organization_id);
    if let Some(courthouse_id) = filters.courthouse_id.as_deref().filter(|s| !s.is_empty()) {
        q = q.eq("courthouse_id", courthouse_id);
    }
    if let Some(state_id) = filters.state_id.as_deref().filter(|s| !s.is_empty()) {
        q = q.eq("courthouse.state_id", state_id);
    }
    q
}

#[must_use]
pub fn trial_by_id(id: &str) -> Query {
    Query::from(ORG_TRIALS).select("*").eq("id", id).single()
}

/// # Errors
///
/// Fails only if the payload cannot be encoded as JSON.
pub fn create_trial(trial: &NewOrgTrial) -> Result<Query, BackendError> {
    Ok(Query::from(ORG_TRIALS).insert(body(trial)?).returning().single())
}

/// # Errors
///
/// Fails only if the payload cannot be encoded as JSON.
pub fn update_trial(id: &str, changes: &OrgTrialChanges) -> Result<Query, BackendError> {
    Ok(Query::from(ORG_TRIALS)
        .update(body(changes)?)
        .eq("id", id)
        .returning()
        .single())
}

#[must_use]
pub fn delete_trial(id: &str) -> Query {
    Query::from(ORG_TRIALS).delete().eq("id", id)
}

// =============================================================================
// Customers and corporations
// =============================================================================

/// # Errors
///
/// Fails only if the payload cannot be encoded as JSON.
pub fn add_customer(customer: &CustomerData) -> Result<Query, BackendError> {
    Ok(Query::from(ORG_CUSTOMERS).insert(body(customer)?).returning().single())
}

#[must_use]
pub fn customers_by_organization(organization_id: &str) -> Query {
    Query::from(ORG_CUSTOMERS).select("*").eq("organization_id", organization_id)
}

/// # Errors
///
/// Fails only if the payload cannot be encoded as JSON.
pub fn update_customer(organization_id: &str, customer_id: &str, patch: &CustomerPatch) -> Result<Query, BackendError> {
    Ok(Query::from(ORG_CUSTOMERS)
        .update(body(patch)?)
        .eq("id", customer_id)
        .eq("organization_id", organization_id)
        .returning()
        .single())
}

#[must_use]
pub fn delete_customer(organization_id: &str, customer_id: &str) -> Query {
    Query::from(ORG_CUSTOMERS)
        .delete()
        .eq("id", customer_id)
        .eq("organization_id", organization_id)
}

#[must_use]
pub fn customer_by_id(organization_id: &str, customer_id: &str) -> Query {
    Query::from(ORG_CUSTOMERS)
        .select("*")
        .eq("id", customer_id)
        .eq("organization_id", organization_id)
        .single()
}

/// Count-only lookup of customers with exactly `name` in the organization.
#[must_use]
pub fn customer_exists(organization_id: &str, name: &str) -> Query {
    Query::from(ORG_CUSTOMERS)
        .select("id")
        .count(Count::Exact)
        .head()
        .eq("organization_id", organization_id)
        .eq("name", name)
}

#[must_use]
pub fn search_customers(organization_id: &str, term: &str) -> Query {
    Query::from(ORG_CUSTOMERS)
        .select("name, id")
        .eq("organization_id", organization_id)
        .ilike("name", format!("%{term}%"))
        .limit(CUSTOMER_SEARCH_LIMIT)
}

#[must_use]
pub fn corporations_by_organization(organization_id: &str) -> Query {
    Query::from(ORG_CORPORATIONS).select("*").eq("organization_id", organization_id)
}

// =============================================================================
// Reference data and search
// =============================================================================

#[must_use]
pub fn states() -> Query {
    Query::from(STATES).select("id, name").order("name", true)
}

/// Courthouses ordered by abbreviation, optionally limited to one state through the city join.
#[must_use]
pub fn courthouses(state_id: Option<&str>) -> Query {
    let q = Query::from(COURTHOUSES)
        .select("id, abbreviation, cities!inner(state_id)")
        .order("abbreviation", true);
    match state_id.filter(|s| !s.is_empty()) {
        Some(state_id) => q.eq("cities.state_id", state_id),
        None => q,
    }
}

/// Case-number substring search over the shared registry, one page at a time.
#[must_use]
pub fn search_trials(query: &str, courthouse_id: Option<&str>, page: u64, page_size: u64) -> Query {
    let mut q = Query::from(SHARED_TRIALS)
        .select("id, case_number, courthouse_id, is_active")
        .count(Count::Exact)
        .order("case_number", true);
    if !query.is_empty() {
        q = q.or(&format!("case_number.ilike.%{query}%"));
    }
    if let Some(courthouse_id) = courthouse_id.filter(|s| !s.is_empty()) {
        q = q.eq("courthouse_id", courthouse_id);
    }
    let (from, to) = page_bounds(page, page_size);
    q.range(from, to)
}

#[must_use]
pub fn publication_count(trial_id: &str) -> Query {
    Query::from(PUBLICATIONS)
        .select("id")
        .count(Count::Exact)
        .head()
        .eq("shared_trial_id", trial_id)
}

#[must_use]
pub fn publications(trial_id: &str, page: u64, page_size: u64) -> Query {
    let (from, to) = page_bounds(page, page_size);
    Query::from(PUBLICATIONS)
        .select("id, agreement_date, publication_date, summary")
        .count(Count::Exact)
        .eq("shared_trial_id", trial_id)
        .range(from, to)
}

// =============================================================================
// Accounts
// =============================================================================

/// First team membership row for a user; zero rows means "no membership".
#[must_use]
pub fn membership(user_id: &str) -> Query {
    Query::from(TEAM_MEMBERS)
        .select("organization_id, team_id")
        .eq("user_id", user_id)
        .limit(1)
}

/// Set the profile avatar, returning the updated rows so the caller can tell whether one matched.
#[must_use]
pub fn update_avatar(user_id: &str, avatar_url: &str) -> Query {
    Query::from(PROFILES)
        .update(serde_json::json!({ "avatar_url": avatar_url }))
        .eq("id", user_id)
        .returning()
}

#[cfg(test)]
#[path = "queries_test.rs"]
mod tests;
