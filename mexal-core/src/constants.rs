//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "Mexal";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the Passepartout web API.
pub const DEFAULT_BASE_URL: &str = "https://services.passepartout.cloud/webapi/risorse";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// First fiscal year with warehouse movement data on the server.
pub const FIRST_MOVEMENT_YEAR: i32 = 2019;

/// Server-side flag field marking a customer account as pre-deleted.
pub const FIELD_PREDELETED: &str = "conto_precanc";

/// Flag value marking an active (not pre-deleted) customer account.
pub const PREDELETED_ACTIVE: &str = "N";

/// Document type codes classifying warehouse movement documents.
pub mod doc_types {
    /// Invoice.
    pub const INVOICE: &str = "FT";
    /// Delivery note.
    pub const DELIVERY_NOTE: &str = "BC";
    /// Discharge note issued after invoicing.
    pub const DISCHARGE_NOTE: &str = "BS";
}
