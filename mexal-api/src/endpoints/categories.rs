//! Statistical category endpoints.

use std::collections::BTreeMap;

use crate::client::{ok_or_log, MexalClient};
use crate::response::coerce;

impl MexalClient {
    /// Get all customer/supplier statistical categories as an
    /// id-to-description map. Returns `None` on any failure.
    pub async fn get_all_categories(&self) -> Option<BTreeMap<String, String>> {
        let envelope = ok_or_log(
            "failed to fetch categories",
            self.get_envelope("/dati-generali/categorie-statistiche-cli-for", None)
                .await,
        )?;

        let mut categories = BTreeMap::new();
        for cat in &envelope.dati {
            let (Some(id), Some(description)) = (cat.get("id"), cat.get("descrizione")) else {
                continue;
            };
            categories.insert(coerce(id), coerce(description));
        }
        Some(categories)
    }
}
