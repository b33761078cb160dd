use super::*;
use crate::models::ContactInfo;
use crate::query::Method;

// =============================================================================
// paging
// =============================================================================

#[test]
fn page_bounds_are_inclusive_and_one_based() {
    assert_eq!(page_bounds(1, 10), (0, 9));
    assert_eq!(page_bounds(3, 10), (20, 29));
    assert_eq!(page_bounds(2, 5), (5, 9));
}

#[test]
fn page_bounds_clamp_degenerate_input() {
    assert_eq!(page_bounds(0, 10), (0, 9));
    assert_eq!(page_bounds(2, 0), (1, 1));
}

// =============================================================================
// trials
// =============================================================================

#[test]
fn trials_embed_courthouse_and_scope_to_org() {
    let q = trials("org-1", &TrialFilters::default());
    assert_eq!(q.table(), ORG_TRIALS);
    assert_eq!(q.param("select"), Some("*,courthouse:courthouse_id(id,state_id,abbreviation)"));
    assert_eq!(q.param("organization_id"), Some("eq.org-1"));
    assert_eq!(q.param("courthouse_id"), None);
}

#[test]
fn trials_apply_filters() {
    let filters = TrialFilters { state_id: Some("3".into()), courthouse_id: Some("9".into()) };
    let q = trials("org-1", &filters);
    assert_eq!(q.param("courthouse_id"), Some("eq.9"));
    assert_eq!(q.param("courthouse.state_id"), Some("eq.3"));
}

#[test]
fn trials_ignore_empty_filter_values() {
    let filters = TrialFilters { state_id: Some(String::new()), courthouse_id: None };
    assert_eq!(trials("org-1", &filters).param("courthouse.state_id"), None);
}

#[test]
fn update_trial_patches_by_id_and_returns_row() {
    let changes = OrgTrialChanges { outcome: Some("won".into()), ..Default::default() };
    let q = update_trial("t-1", &changes).unwrap();
    assert_eq!(q.method(), Method::Patch);
    assert_eq!(q.body(), Some(&serde_json::json!({ "outcome": "won" })));
    assert_eq!(q.param("id"), Some("eq.t-1"));
    assert!(q.is_single());
}

#[test]
fn trial_by_id_expects_single_row() {
    let q = trial_by_id("t-1");
    assert!(q.is_single());
    assert_eq!(q.path(), "/rest/v1/org_trials?select=*&id=eq.t-1");
}

// =============================================================================
// customers
// =============================================================================

#[test]
fn customer_exists_is_a_head_count() {
    let q = customer_exists("org-1", "Acme Corp");
    assert_eq!(q.method(), Method::Head);
    assert!(q.wants_count());
    assert_eq!(q.param("name"), Some("eq.Acme Corp"));
}

#[test]
fn search_customers_is_substring_and_limited() {
    let q = search_customers("org-1", "ac");
    assert_eq!(q.param("select"), Some("name,id"));
    assert_eq!(q.param("name"), Some("ilike.%ac%"));
    assert_eq!(q.param("limit"), Some("10"));
}

#[test]
fn update_customer_is_scoped_to_org() {
    let patch = CustomerPatch {
        contact_info: Some(vec![ContactInfo { kind: "phone".into(), value: "555".into() }]),
        ..Default::default()
    };
    let q = update_customer("org-1", "c-1", &patch).unwrap();
    assert_eq!(q.param("id"), Some("eq.c-1"));
    assert_eq!(q.param("organization_id"), Some("eq.org-1"));
    assert_eq!(q.body(), Some(&serde_json::json!({ "contact_info": [{ "type": "phone", "value": "555" }] })));
}

#[test]
fn delete_customer_is_scoped_to_org() {
    let q = delete_customer("org-1", "c-1");
    assert_eq!(q.method(), Method::Delete);
    assert_eq!(q.path(), "/rest/v1/org_customers?id=eq.c-1&organization_id=eq.org-1");
}

// =============================================================================
// reference data and search
// =============================================================================

#[test]
fn states_are_ordered_by_name() {
    assert_eq!(states().path(), "/rest/v1/states?select=id%2Cname&order=name.asc");
}

#[test]
fn courthouses_join_cities_only_when_filtered() {
    let all = courthouses(None);
    assert_eq!(all.param("select"), Some("id,abbreviation,cities!inner(state_id)"));
    assert_eq!(all.param("order"), Some("abbreviation.asc"));
    assert_eq!(all.param("cities.state_id"), None);
    assert_eq!(courthouses(Some("7")).param("cities.state_id"), Some("eq.7"));
}

#[test]
fn search_trials_pages_and_counts() {
    let q = search_trials("12/20", Some("4"), 2, 10);
    assert!(q.wants_count());
    assert_eq!(q.param("or"), Some("(case_number.ilike.%12/20%)"));
    assert_eq!(q.param("courthouse_id"), Some("eq.4"));
    assert_eq!(q.param("offset"), Some("10"));
    assert_eq!(q.param("limit"), Some("10"));
}

#[test]
fn search_trials_without_text_skips_disjunction() {
    let q = search_trials("", None, 1, 10);
    assert_eq!(q.param("or"), None);
    assert_eq!(q.param("courthouse_id"), None);
}

#[test]
fn publications_page_by_five() {
    let q = publications("22", 3, 5);
    assert_eq!(q.param("shared_trial_id"), Some("eq.22"));
    assert_eq!(q.param("offset"), Some("10"));
    assert_eq!(q.param("limit"), Some("5"));
    assert_eq!(publication_count("22").method(), Method::Head);
}

// =============================================================================
// accounts
// =============================================================================

#[test]
fn membership_reads_first_row_for_user() {
    let q = membership("u-1");
    assert_eq!(q.table(), TEAM_MEMBERS);
    assert_eq!(q.param("user_id"), Some("eq.u-1"));
    assert_eq!(q.param("limit"), Some("1"));
}

#[test]
fn update_avatar_returns_rows() {
    let q = update_avatar("u-1", "https://img/a.png");
    assert_eq!(q.method(), Method::Patch);
    assert_eq!(q.headers()[0], ("Prefer", "return=representation".to_owned()));
    assert_eq!(q.body(), Some(&serde_json::json!({ "avatar_url": "https://img/a.png" })));
}
