/*!
 * Raw registry payload shapes and their mapping into normalized records
 *
 * The registry conflates individual and organization providers under one
 * JSON object with optional fields. Mapping resolves the entity type from
 * the raw enumeration code first and only then reads the type-specific
 * parts of the `basic` block.
 */

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::data_types::{EntityType, Npi, ProviderRecord};
use crate::Result;

/// Top-level registry response
///
/// An absent `results` key means zero matches, not an error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegistryEnvelope {
    #[serde(default)]
    pub results: Vec<RawProviderResult>,
}

/// One raw result entry as the registry returns it
#[derive(Debug, Deserialize)]
pub(crate) struct RawProviderResult {
    pub number: String,
    pub enumeration_type: String,
    #[serde(default)]
    pub basic: RawBasic,
    #[serde(default)]
    pub addresses: Vec<Value>,
    // Some API revisions spell this key in camelCase
    #[serde(default, alias = "practiceLocations")]
    pub practice_locations: Vec<Value>,
    #[serde(default)]
    pub taxonomies: Vec<Value>,
    #[serde(default)]
    pub identifiers: Vec<Value>,
}

/// The nested `basic` block carrying name/status/date fields
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBasic {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub credential: Option<String>,
    pub gender: Option<String>,
    pub organization_name: Option<String>,
    pub authorized_official_first_name: Option<String>,
    pub authorized_official_last_name: Option<String>,
    pub status: Option<String>,
    pub enumeration_date: Option<String>,
    pub last_updated: Option<String>,
}

impl RawProviderResult {
    /// Map one raw entry into a [`ProviderRecord`]
    ///
    /// Fails on an unrecognized enumeration code or malformed NPI; absent
    /// payload fields map to unset fields, never to an error.
    pub(crate) fn into_record(self) -> Result<ProviderRecord> {
        let entity_type = EntityType::from_code(&self.enumeration_type)?;
        let npi = Npi::new(self.number)?;
        let basic = self.basic;

        let mut record = ProviderRecord::new(npi, entity_type);
        match entity_type {
            EntityType::Individual => {
                record.first_name = basic.first_name;
                record.last_name = basic.last_name;
                record.credential = basic.credential;
                record.gender = basic.gender;
            }
            EntityType::Organization => {
                record.organization_name = basic.organization_name;
                record.authorized_official_first_name = basic.authorized_official_first_name;
                record.authorized_official_last_name = basic.authorized_official_last_name;
            }
        }
        record.status = basic.status;
        record.enumeration_date = parse_registry_date(basic.enumeration_date.as_deref());
        record.last_updated = parse_registry_date(basic.last_updated.as_deref());
        record.addresses = self.addresses;
        record.practice_locations = self.practice_locations;
        record.taxonomies = self.taxonomies;
        record.identifiers = self.identifiers;
        Ok(record)
    }
}

/// Registry dates use `YYYY-MM-DD`; anything else maps to unset
fn parse_registry_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: serde_json::Value) -> RegistryEnvelope {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn individual_entry_maps_individual_fields() {
        let envelope = envelope(json!({
            "results": [{
                "number": "1234567890",
                "enumeration_type": "NPI-1",
                "basic": {
                    "first_name": "John",
                    "last_name": "Smith",
                    "credential": "MD",
                    "status": "A",
                    "enumeration_date": "2010-05-05",
                    "last_updated": "2023-01-15",
                    "gender": "M"
                },
                "addresses": [],
                "practice_locations": [],
                "taxonomies": [],
                "identifiers": []
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();

        assert_eq!(record.npi.as_str(), "1234567890");
        assert_eq!(record.entity_type, EntityType::Individual);
        assert!(!record.is_organization);
        assert_eq!(record.first_name.as_deref(), Some("John"));
        assert_eq!(record.last_name.as_deref(), Some("Smith"));
        assert_eq!(record.credential.as_deref(), Some("MD"));
        assert_eq!(record.gender.as_deref(), Some("M"));
        assert_eq!(record.status.as_deref(), Some("A"));
        assert_eq!(
            record.enumeration_date,
            NaiveDate::from_ymd_opt(2010, 5, 5)
        );
        assert_eq!(record.last_updated, NaiveDate::from_ymd_opt(2023, 1, 15));
        assert!(record.organization_name.is_none());
    }

    #[test]
    fn organization_entry_maps_organization_fields() {
        let envelope = envelope(json!({
            "results": [{
                "number": "9876543210",
                "enumeration_type": "NPI-2",
                "basic": {
                    "organization_name": "Test Hospital",
                    "status": "A",
                    "authorized_official_first_name": "Jane",
                    "authorized_official_last_name": "Doe"
                }
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();

        assert_eq!(record.entity_type, EntityType::Organization);
        assert!(record.is_organization);
        assert_eq!(record.organization_name.as_deref(), Some("Test Hospital"));
        assert_eq!(
            record.authorized_official_first_name.as_deref(),
            Some("Jane")
        );
        assert_eq!(record.authorized_official_last_name.as_deref(), Some("Doe"));
        assert!(record.first_name.is_none());
        assert!(record.gender.is_none());
    }

    #[test]
    fn type_specific_fields_follow_the_tag_not_the_payload() {
        // An organization entry whose basic block also carries person names:
        // the resolved entity type decides which fields are read.
        let envelope = envelope(json!({
            "results": [{
                "number": "9876543210",
                "enumeration_type": "NPI-2",
                "basic": {
                    "organization_name": "Test Hospital",
                    "first_name": "Stray",
                    "last_name": "Fields"
                }
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();

        assert!(record.first_name.is_none());
        assert!(record.last_name.is_none());
        assert_eq!(record.organization_name.as_deref(), Some("Test Hospital"));
    }

    #[test]
    fn unrecognized_enumeration_code_is_an_error() {
        let envelope = envelope(json!({
            "results": [{
                "number": "1234567890",
                "enumeration_type": "NPI-3",
                "basic": {}
            }]
        }));

        let err = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap_err();

        assert!(matches!(
            err,
            crate::NpiRegistryError::InvalidEntityType { ref code, .. } if code == "NPI-3"
        ));
    }

    #[test]
    fn missing_arrays_normalize_to_empty_sequences() {
        let envelope = envelope(json!({
            "results": [{
                "number": "1234567890",
                "enumeration_type": "NPI-1",
                "basic": { "first_name": "John" }
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();

        assert!(record.addresses.is_empty());
        assert!(record.practice_locations.is_empty());
        assert!(record.taxonomies.is_empty());
        assert!(record.identifiers.is_empty());
    }

    #[test]
    fn camel_case_practice_locations_are_accepted() {
        let envelope = envelope(json!({
            "results": [{
                "number": "1234567890",
                "enumeration_type": "NPI-1",
                "basic": {},
                "practiceLocations": [{"city": "Portland"}]
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();

        assert_eq!(record.practice_locations.len(), 1);
    }

    #[test]
    fn missing_results_key_means_zero_matches() {
        let envelope = envelope(json!({ "result_count": 0 }));
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn unparseable_dates_map_to_unset() {
        let envelope = envelope(json!({
            "results": [{
                "number": "1234567890",
                "enumeration_type": "NPI-1",
                "basic": { "enumeration_date": "05/05/2010" }
            }]
        }));

        let record = envelope
            .results
            .into_iter()
            .next()
            .unwrap()
            .into_record()
            .unwrap();
        assert!(record.enumeration_date.is_none());
    }
}
