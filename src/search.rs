/*!
 * Search parameters for NPI registry queries
 *
 * One `SearchParameters` value represents one query intent. Construction
 * goes through [`SearchParametersBuilder`], which validates the result
 * limit; every other field is passed to the registry as-is.
 */

use serde::Serialize;

use crate::constants::{API_VERSION, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT, MIN_RESULT_LIMIT};
use crate::{NpiRegistryError, Result};

/// Validated search filters for one registry query
///
/// An all-empty query (only defaults) is valid; the registry decides what
/// it means. The result limit is constrained to
/// [`MIN_RESULT_LIMIT`]..=[`MAX_RESULT_LIMIT`] at construction time and
/// defaults to [`DEFAULT_RESULT_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParameters {
    npi: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    organization_name: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country_code: Option<String>,
    limit: u32,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            npi: None,
            first_name: None,
            last_name: None,
            organization_name: None,
            city: None,
            state: None,
            postal_code: None,
            country_code: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchParameters {
    /// Start building a new set of search parameters
    pub fn builder() -> SearchParametersBuilder {
        SearchParametersBuilder::new()
    }

    pub fn npi(&self) -> Option<&str> {
        self.npi.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Serialize into the registry's query-string keys
    ///
    /// The `version` key pinning the API revision is always present, as is
    /// `limit`. Unset and empty fields are omitted entirely; `npi` maps to
    /// the registry's `number` key.
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("version", API_VERSION.to_string())];

        push_if_set(&mut pairs, "number", &self.npi);
        push_if_set(&mut pairs, "first_name", &self.first_name);
        push_if_set(&mut pairs, "last_name", &self.last_name);
        push_if_set(&mut pairs, "organization_name", &self.organization_name);
        push_if_set(&mut pairs, "city", &self.city);
        push_if_set(&mut pairs, "state", &self.state);
        push_if_set(&mut pairs, "postal_code", &self.postal_code);
        push_if_set(&mut pairs, "country_code", &self.country_code);

        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

fn push_if_set(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            pairs.push((key, value.clone()));
        }
    }
}

/// Builder for [`SearchParameters`]
///
/// `build()` fails with a validation error if the limit falls outside the
/// registry's accepted range; it is never silently clamped.
#[derive(Debug, Clone, Default)]
pub struct SearchParametersBuilder {
    params: SearchParameters,
}

impl SearchParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by a single 10-digit registry identifier
    ///
    /// Format errors are left to the registry itself; no client-side
    /// validation is applied to search input.
    pub fn npi(mut self, npi: impl Into<String>) -> Self {
        self.params.npi = Some(npi.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.params.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.params.last_name = Some(last_name.into());
        self
    }

    pub fn organization_name(mut self, organization_name: impl Into<String>) -> Self {
        self.params.organization_name = Some(organization_name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.params.city = Some(city.into());
        self
    }

    /// Two-letter state code, e.g. "CA"
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.params.state = Some(state.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.params.postal_code = Some(postal_code.into());
        self
    }

    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.params.country_code = Some(country_code.into());
        self
    }

    /// Maximum number of results to request, in [1, 200]
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.limit = limit;
        self
    }

    /// Validate and build the parameter set
    pub fn build(self) -> Result<SearchParameters> {
        if !(MIN_RESULT_LIMIT..=MAX_RESULT_LIMIT).contains(&self.params.limit) {
            return Err(NpiRegistryError::limit_out_of_range(self.params.limit));
        }
        Ok(self.params)
    }
}
