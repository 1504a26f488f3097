/*!
 * # NPI Registry Client Library
 *
 * A Rust client for searching healthcare providers in the NPPES NPI
 * Registry API.
 *
 * ## Features
 *
 * - 🔍 **Provider Search**: Query the public registry by NPI, name,
 *   organization, or location
 * - 🛡️ **Type Safe**: Validated search parameters and strongly typed,
 *   normalized provider records
 * - 🧩 **Uniform Records**: Individual and organization matches share one
 *   record shape, tagged by entity type
 * - 🔧 **Easy to Use**: Builder pattern for search parameters, one reusable
 *   connection handle per client
 *
 * ## Quick Start
 *
 * ```no_run
 * use npi_registry::prelude::*;
 *
 * # async fn run() -> Result<()> {
 * let client = RegistryClient::new()?;
 *
 * // Find providers named Smith in California
 * let params = SearchParameters::builder()
 *     .last_name("Smith")
 *     .state("CA")
 *     .limit(3)
 *     .build()?;
 *
 * for provider in client.search(&params).await? {
 *     println!("{}: {} ({})", provider.npi, provider.display_name(), provider.entity_type);
 * }
 *
 * client.close();
 * # Ok(())
 * # }
 * ```
 *
 * ## Looking Up a Single NPI
 *
 * ```no_run
 * # use npi_registry::prelude::*;
 * # async fn run() -> Result<()> {
 * # let client = RegistryClient::new()?;
 * let params = SearchParameters::builder()
 *     .npi("1234567890")
 *     .build()?;
 *
 * let results = client.search(&params).await?;
 * match results.first() {
 *     Some(provider) => println!("Found: {}", provider.display_name()),
 *     None => println!("No registry entry for that NPI"),
 * }
 * # Ok(())
 * # }
 * ```
 *
 * ## Searching for Organizations
 *
 * ```no_run
 * # use npi_registry::prelude::*;
 * # async fn run() -> Result<()> {
 * # let client = RegistryClient::new()?;
 * let params = SearchParameters::builder()
 *     .organization_name("Test Hospital")
 *     .build()?;
 *
 * for org in client.search(&params).await? {
 *     if org.is_organization {
 *         println!(
 *             "{} (authorized official: {} {})",
 *             org.display_name(),
 *             org.authorized_official_first_name.as_deref().unwrap_or(""),
 *             org.authorized_official_last_name.as_deref().unwrap_or("")
 *         );
 *     }
 * }
 * # Ok(())
 * # }
 * ```
 *
 * ## Configuration
 *
 * ```no_run
 * # use npi_registry::prelude::*;
 * # fn main() -> Result<()> {
 * let config = ConfigBuilder::new()
 *     .base_url("https://npiregistry.cms.hhs.gov/api/")
 *     .timeout_seconds(10)
 *     .build();
 *
 * let client = RegistryClient::with_config(config)?;
 * # Ok(())
 * # }
 * ```
 *
 * Configuration can also come from `NPI_REGISTRY_*` environment variables
 * or a TOML file at the platform config directory; see [`config`].
 *
 * The registry is a read-only data source: the client performs one request
 * per search, parses one response, and returns a normalized in-memory list
 * of records. There is no retry policy, no caching, and no pagination
 * beyond the bounded result limit.
 */

// Re-export error types from root
pub use error::{NpiRegistryError, Result};

// Public modules
pub mod client;
pub mod config;
pub mod data_types;
pub mod error;
pub mod search;

// Raw wire shapes stay internal; callers only see normalized records
mod response;

// Re-export the main types at the crate root
pub use client::RegistryClient;
pub use config::RegistryConfig;
pub use data_types::{EntityType, Npi, ProviderRecord};
pub use search::{SearchParameters, SearchParametersBuilder};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```
/// use npi_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::RegistryClient;
    pub use crate::config::{ConfigBuilder, RegistryConfig};
    pub use crate::data_types::{EntityType, Npi, ProviderRecord};
    pub use crate::error::{NpiRegistryError, Result};
    pub use crate::search::{SearchParameters, SearchParametersBuilder};
}

/// NPI registry constants
pub mod constants {
    /// Base URL of the public NPI Registry API
    pub const REGISTRY_BASE_URL: &str = "https://npiregistry.cms.hhs.gov/api/";

    /// API version pinned on every request
    pub const API_VERSION: &str = "2.1";

    /// Smallest result limit the registry accepts
    pub const MIN_RESULT_LIMIT: u32 = 1;

    /// Largest result limit the registry accepts
    pub const MAX_RESULT_LIMIT: u32 = 200;

    /// Result limit used when none is requested
    pub const DEFAULT_RESULT_LIMIT: u32 = 10;

    /// Enumeration type code for individual providers
    pub const ENTITY_TYPE_INDIVIDUAL: &str = "NPI-1";

    /// Enumeration type code for organization providers
    pub const ENTITY_TYPE_ORGANIZATION: &str = "NPI-2";
}

/// Common recipes and utility functions
pub mod cookbook {
    use crate::prelude::*;

    /// Look up a single provider by NPI
    ///
    /// Returns the first match, or `None` if the registry has no entry.
    ///
    /// # Example
    /// ```no_run
    /// # use npi_registry::prelude::*;
    /// # use npi_registry::cookbook::find_by_npi;
    /// # async fn run() -> Result<()> {
    /// # let client = RegistryClient::new()?;
    /// if let Some(provider) = find_by_npi(&client, "1234567890").await? {
    ///     println!("Found: {}", provider.display_name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_by_npi(
        client: &RegistryClient,
        npi: &str,
    ) -> Result<Option<ProviderRecord>> {
        let params = SearchParameters::builder().npi(npi).limit(1).build()?;
        let mut results = client.search(&params).await?;
        Ok(if results.is_empty() {
            None
        } else {
            Some(results.remove(0))
        })
    }

    /// Find individual providers by name in a state
    pub async fn find_individuals_in_state(
        client: &RegistryClient,
        last_name: &str,
        state: &str,
    ) -> Result<Vec<ProviderRecord>> {
        let params = SearchParameters::builder()
            .last_name(last_name)
            .state(state)
            .build()?;
        let results = client.search(&params).await?;
        Ok(results.into_iter().filter(|p| !p.is_organization).collect())
    }

    /// Find organizations by name
    pub async fn find_organizations(
        client: &RegistryClient,
        organization_name: &str,
    ) -> Result<Vec<ProviderRecord>> {
        let params = SearchParameters::builder()
            .organization_name(organization_name)
            .build()?;
        let results = client.search(&params).await?;
        Ok(results.into_iter().filter(|p| p.is_organization).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::data_types::{EntityType, Npi};

    #[test]
    fn test_npi_validation() {
        assert!(Npi::new("1234567890".to_string()).is_ok());
        assert!(Npi::new("123".to_string()).is_err());
        assert!(Npi::new("12345678AB".to_string()).is_err());
    }

    #[test]
    fn test_entity_type() {
        assert_eq!(
            EntityType::from_code("NPI-1").unwrap(),
            EntityType::Individual
        );
        assert_eq!(
            EntityType::from_code("NPI-2").unwrap(),
            EntityType::Organization
        );
        assert!(EntityType::from_code("NPI-3").is_err());
        assert!(EntityType::from_code("1").is_err());
    }
}
