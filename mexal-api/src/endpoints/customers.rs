//! Customer endpoints.

use mexal_core::constants::{FIELD_PREDELETED, PREDELETED_ACTIVE};

use crate::client::{append_param, join_fields, ok_or_log, MexalClient};
use crate::response::{record_from_value, Record};

impl MexalClient {
    /// Get the field descriptors exposed by the customer resource.
    pub async fn get_all_customer_fields(&self) -> Option<Vec<Record>> {
        let envelope = ok_or_log(
            "failed to fetch customer fields",
            self.get_envelope("/clienti?info=true", None).await,
        )?;
        Some(envelope.records())
    }

    /// Get all customers, optionally narrowed to `properties` (empty slice
    /// fetches every field).
    ///
    /// Unless `include_predeleted` is set, pre-deleted accounts are
    /// filtered out: the `conto_precanc` flag is requested transparently
    /// when the caller did not ask for it, rows other than `"N"` are
    /// dropped, and the transparently-added flag is stripped so the caller
    /// never sees a field it didn't request. A caller-requested
    /// `conto_precanc` is kept.
    pub async fn get_all_customers(
        &self,
        properties: &[String],
        include_predeleted: bool,
    ) -> Option<Vec<Record>> {
        let mut props: Vec<String> = properties.to_vec();

        // Request the pre-deleted flag ourselves when we have to filter on it.
        let mut added_predeleted = false;
        if !include_predeleted && !props.iter().any(|p| p == FIELD_PREDELETED) {
            props.push(FIELD_PREDELETED.to_string());
            added_predeleted = true;
        }

        let mut endpoint = String::from("/clienti");
        if !props.is_empty() {
            append_param(&mut endpoint, "fields", &join_fields(&props));
        }

        let envelope = ok_or_log(
            "failed to fetch customers",
            self.get_envelope(&endpoint, None).await,
        )?;

        let mut customers = envelope.records();
        if !include_predeleted {
            customers = filter_predeleted(customers, added_predeleted);
        }
        Some(customers)
    }

    /// Get a single customer by its Mexal account code, optionally
    /// narrowed to `properties`. The response body is a bare object, not a
    /// `dati` envelope.
    pub async fn get_customer_by_code(&self, code: &str, properties: &[String]) -> Option<Record> {
        let mut endpoint = format!("/clienti/{code}");
        if !properties.is_empty() {
            append_param(&mut endpoint, "fields", &join_fields(properties));
        }

        let value = ok_or_log(
            &format!("failed to fetch customer {code}"),
            self.get_object(&endpoint).await,
        )?;
        Some(record_from_value(&value))
    }
}

/// Keep only active accounts, stripping the pre-deleted flag when it was
/// requested on the caller's behalf.
fn filter_predeleted(customers: Vec<Record>, strip_flag: bool) -> Vec<Record> {
    customers
        .into_iter()
        .filter(|c| c.get(FIELD_PREDELETED).map(String::as_str) == Some(PREDELETED_ACTIVE))
        .map(|mut c| {
            if strip_flag {
                c.remove(FIELD_PREDELETED);
            }
            c
        })
        .collect()
}
