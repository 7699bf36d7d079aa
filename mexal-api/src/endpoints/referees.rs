//! Customer referee endpoints.

use crate::client::{append_param, join_fields, ok_or_log, MexalClient};
use crate::response::Record;

impl MexalClient {
    /// Get all customer referees, optionally narrowed to `properties`
    /// (empty slice fetches every field). Returns `None` on any failure.
    pub async fn get_all_referees(&self, properties: &[String]) -> Option<Vec<Record>> {
        let mut endpoint = String::from("/referenti/clienti/");
        if !properties.is_empty() {
            append_param(&mut endpoint, "fields", &join_fields(properties));
        }

        let envelope = ok_or_log(
            "failed to fetch referees",
            self.get_envelope(&endpoint, None).await,
        )?;
        Some(envelope.records())
    }
}
