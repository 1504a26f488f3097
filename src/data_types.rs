/*!
 * Data type definitions for normalized NPI registry records
 *
 * This module contains type-safe representations of the records returned by
 * the NPI Registry API, based on the official NPPES API documentation.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// NPI (National Provider Identifier) - 10 digit unique identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Npi(pub String);

impl Npi {
    /// Create a new NPI, validating format
    pub fn new(npi: String) -> crate::Result<Self> {
        if npi.len() != 10 || !npi.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::NpiRegistryError::invalid_npi(&npi));
        }
        Ok(Npi(npi))
    }

    /// Get the NPI as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Npi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity type derived from the registry enumeration code
/// (`NPI-1` = Individual, `NPI-2` = Organization)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Individual,
    Organization,
}

impl EntityType {
    pub fn from_code(code: &str) -> crate::Result<Self> {
        match code {
            crate::constants::ENTITY_TYPE_INDIVIDUAL => Ok(EntityType::Individual),
            crate::constants::ENTITY_TYPE_ORGANIZATION => Ok(EntityType::Organization),
            _ => Err(crate::NpiRegistryError::invalid_entity_type(code)),
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            EntityType::Individual => crate::constants::ENTITY_TYPE_INDIVIDUAL,
            EntityType::Organization => crate::constants::ENTITY_TYPE_ORGANIZATION,
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, EntityType::Organization)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Individual => write!(f, "Individual"),
            EntityType::Organization => write!(f, "Organization"),
        }
    }
}

/// Normalized provider record
///
/// One registry match, individual or organization, behind a single uniform
/// shape. `entity_type` is the tag to consult before reading type-specific
/// fields; the individual-only fields are unset on organization records and
/// vice versa. `is_organization` always agrees with `entity_type` - every
/// construction path derives it from the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    // Core identifiers
    pub npi: Npi,
    pub entity_type: EntityType,
    pub is_organization: bool,

    // Individual providers (NPI-1)
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub credential: Option<String>,
    pub gender: Option<String>,

    // Organizations (NPI-2)
    pub organization_name: Option<String>,
    pub authorized_official_first_name: Option<String>,
    pub authorized_official_last_name: Option<String>,

    // Status information
    pub status: Option<String>,
    pub enumeration_date: Option<NaiveDate>,
    pub last_updated: Option<NaiveDate>,

    // Loosely-typed sub-records, order preserved from the response
    #[serde(default)]
    pub addresses: Vec<Value>,
    #[serde(default)]
    pub practice_locations: Vec<Value>,
    #[serde(default)]
    pub taxonomies: Vec<Value>,
    #[serde(default)]
    pub identifiers: Vec<Value>,
}

impl ProviderRecord {
    /// Create an empty record for the given NPI and entity type
    ///
    /// All optional fields start unset and all sub-record sequences empty.
    pub fn new(npi: Npi, entity_type: EntityType) -> Self {
        Self {
            npi,
            is_organization: entity_type.is_organization(),
            entity_type,
            first_name: None,
            last_name: None,
            credential: None,
            gender: None,
            organization_name: None,
            authorized_official_first_name: None,
            authorized_official_last_name: None,
            status: None,
            enumeration_date: None,
            last_updated: None,
            addresses: Vec::new(),
            practice_locations: Vec::new(),
            taxonomies: Vec::new(),
            identifiers: Vec::new(),
        }
    }

    /// Check if the provider is active in the registry
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("A")
    }

    /// Get the provider's primary name based on entity type
    pub fn display_name(&self) -> String {
        match self.entity_type {
            EntityType::Individual => format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or(""),
                self.last_name.as_deref().unwrap_or("")
            )
            .trim()
            .to_string(),
            EntityType::Organization => self
                .organization_name
                .as_deref()
                .unwrap_or("Unknown Organization")
                .to_string(),
        }
    }
}
