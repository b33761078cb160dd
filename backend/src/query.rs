//! PostgREST request builder.
//!
//! A [`Query`] captures everything needed to issue one REST call against
//! `/rest/v1/{table}`: HTTP method, filter parameters (kept in insertion
//! order), `Prefer`/`Accept` negotiation, and an optional JSON body. Encoding
//! is pure so every data-access operation can be checked without a network.
//!
//! Filter syntax follows PostgREST: `column=op.value`, `or=(a.op.v,b.op.v)`,
//! `order=column.asc`, `limit`/`offset` for ranges.

use serde_json::Value;

/// Path prefix for table endpoints.
pub const REST_PREFIX: &str = "/rest/v1";

/// HTTP verb for a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    /// Count-only request; no rows in the body.
    Head,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Row-count strategy requested through `Prefer: count=...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count {
    Exact,
}

/// A single PostgREST call under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    table: String,
    method: Method,
    params: Vec<(String, String)>,
    count: Option<Count>,
    single: bool,
    returning: bool,
    body: Option<Value>,
}

impl Query {
    /// Start a `GET` against `table` with no filters.
    #[must_use]
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_owned(),
            method: Method::Get,
            params: Vec::new(),
            count: None,
            single: false,
            returning: false,
            body: None,
        }
    }

    /// Column list, with whitespace stripped so multi-line embeds encode cleanly.
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        let compact: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.params.push(("select".to_owned(), compact));
        self
    }

    /// Ask for the total row count alongside (or instead of) the rows.
    #[must_use]
    pub fn count(mut self, count: Count) -> Self {
        self.count = Some(count);
        self
    }

    /// Only return the count; switches the request to `HEAD`.
    #[must_use]
    pub fn head(mut self) -> Self {
        self.method = Method::Head;
        self
    }

    /// Insert `row` (a JSON object or array of objects).
    #[must_use]
    pub fn insert(mut self, row: Value) -> Self {
        self.method = Method::Post;
        self.body = Some(row);
        self
    }

    /// Patch matching rows with the given columns.
    #[must_use]
    pub fn update(mut self, changes: Value) -> Self {
        self.method = Method::Patch;
        self.body = Some(changes);
        self
    }

    /// Delete matching rows.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.method = Method::Delete;
        self
    }

    #[must_use]
    pub fn eq(self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filter(column, "eq", value)
    }

    /// Case-insensitive pattern match; `%` is the wildcard.
    #[must_use]
    pub fn ilike(self, column: &str, pattern: impl std::fmt::Display) -> Self {
        self.filter(column, "ilike", pattern)
    }

    /// Raw disjunction, e.g. `case_number.ilike.%12%,status.eq.open`.
    #[must_use]
    pub fn or(mut self, filters: &str) -> Self {
        self.params.push(("or".to_owned(), format!("({filters})")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params.push(("order".to_owned(), format!("{column}.{direction}")));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.params.push(("limit".to_owned(), limit.to_string()));
        self
    }

    /// Inclusive zero-based row window `from..=to`.
    #[must_use]
    pub fn range(mut self, from: u64, to: u64) -> Self {
        self.params.push(("offset".to_owned(), from.to_string()));
        self.params.push(("limit".to_owned(), (to.saturating_sub(from) + 1).to_string()));
        self
    }

    /// Expect exactly one row back as a bare object.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Return the written rows from `POST`/`PATCH`.
    #[must_use]
    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }

    fn filter(mut self, column: &str, op: &str, value: impl std::fmt::Display) -> Self {
        self.params.push((column.to_owned(), format!("{op}.{value}")));
        self
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    #[must_use]
    pub fn wants_count(&self) -> bool {
        self.count.is_some()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Value of the first parameter named `key`, if present.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Backend-relative path including the encoded query string.
    #[must_use]
    pub fn path(&self) -> String {
        let base = format!("{REST_PREFIX}/{}", self.table);
        if self.params.is_empty() {
            return base;
        }
        let mut encoder = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            encoder.append_pair(key, value);
        }
        format!("{base}?{}", encoder.finish())
    }

    /// Extra request headers implied by the builder state.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut prefer = Vec::new();
        if self.returning {
            prefer.push("return=representation");
        }
        if matches!(self.count, Some(Count::Exact)) {
            prefer.push("count=exact");
        }

        let mut headers = Vec::new();
        if !prefer.is_empty() {
            headers.push(("Prefer", prefer.join(",")));
        }
        if self.single {
            headers.push(("Accept", "application/vnd.pgrst.object+json".to_owned()));
        }
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        headers
    }
}

/// Extract the total from a `Content-Range` header (`0-9/42`, `*/0`).
///
/// Returns `None` when the total is unknown (`0-9/*`) or the header is malformed.
#[must_use]
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
