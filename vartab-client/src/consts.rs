//! Constants for service endpoints and client configuration.

/// Environment variable overriding the variation API base URL.
pub const VARIATION_API_ENV: &str = "VARTAB_VARIATION_API";

/// Environment variable overriding the VEP API URL.
pub const VEP_API_ENV: &str = "VARTAB_VEP_API";

/// Default base URL of the UniProt Proteins variation API. The accession
/// is appended as a path segment.
pub const DEFAULT_VARIATION_API: &str = "https://www.ebi.ac.uk/proteins/api/variation";

/// Default URL of the Ensembl VEP HGVS endpoint.
pub const DEFAULT_VEP_API: &str = "https://rest.ensembl.org/vep/human/hgvs";

/// Per-call timeout in seconds; a timeout is reported as a transport
/// failure and handled like a non-success status.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
