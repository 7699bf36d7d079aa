//! Last delivery date derivation.
//!
//! Reduces the full warehouse movement history to the most recent delivery
//! date per customer, classifying each movement by its document type codes.

use std::collections::BTreeMap;

use mexal_core::constants::doc_types;

use crate::client::MexalClient;
use crate::response::Record;

/// Movement fields needed for the derivation.
const DELIVERY_FIELDS: [&str; 5] = [
    "sigla",
    "sigla_doc_orig",
    "data_doc_orig",
    "cod_conto",
    "data_documento",
];

impl MexalClient {
    /// Derive the latest delivery date per customer from the full movement
    /// history.
    ///
    /// Returns `None` when the movement fetch yields nothing or when no
    /// movement resolves to a delivery date.
    pub async fn get_last_delivery_dates(&self) -> Option<BTreeMap<String, String>> {
        let properties: Vec<String> = DELIVERY_FIELDS.iter().map(|f| f.to_string()).collect();
        // A failed fetch is absence, not an empty history.
        let movements = self.get_all_warehouse_movements(&properties).await?;

        let dates = last_delivery_dates(&movements);
        if dates.is_empty() {
            None
        } else {
            Some(dates)
        }
    }
}

/// Resolve the candidate delivery date for a movement, if its document
/// type carries one:
///
/// - accompanying invoice (`FT` from `FT`): the document date
/// - invoice derived from a delivery note (`FT` from `BC`): the
///   originating document date
/// - delivery note not yet invoiced (`BC`): the document date
/// - discharge note issued after invoicing (`BS`): the document date
pub fn delivery_date(movement: &Record) -> Option<&str> {
    let field = |name: &str| {
        movement
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    };

    match field("sigla")? {
        doc_types::INVOICE => match field("sigla_doc_orig")? {
            doc_types::INVOICE => field("data_documento"),
            doc_types::DELIVERY_NOTE => field("data_doc_orig"),
            _ => None,
        },
        doc_types::DELIVERY_NOTE | doc_types::DISCHARGE_NOTE => field("data_documento"),
        _ => None,
    }
}

/// Fold movements into the per-customer maximum delivery date.
///
/// Dates are zero-padded ISO strings, so the lexicographic maximum is the
/// latest date. Movements with no customer code or no candidate date are
/// skipped.
pub fn last_delivery_dates(movements: &[Record]) -> BTreeMap<String, String> {
    let mut dates: BTreeMap<String, String> = BTreeMap::new();
    for movement in movements {
        let Some(code) = movement.get("cod_conto").filter(|c| !c.is_empty()) else {
            continue;
        };
        let Some(date) = delivery_date(movement) else {
            continue;
        };

        dates
            .entry(code.clone())
            .and_modify(|current| {
                if date > current.as_str() {
                    *current = date.to_string();
                }
            })
            .or_insert_with(|| date.to_string());
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_accompanying_invoice_uses_document_date() {
        let m = movement(&[
            ("sigla", "FT"),
            ("sigla_doc_orig", "FT"),
            ("data_documento", "2023-01-10"),
            ("data_doc_orig", "2023-01-05"),
        ]);
        assert_eq!(delivery_date(&m), Some("2023-01-10"));
    }

    #[test]
    fn test_invoice_from_delivery_note_uses_originating_date() {
        let m = movement(&[
            ("sigla", "FT"),
            ("sigla_doc_orig", "BC"),
            ("data_documento", "2023-01-10"),
            ("data_doc_orig", "2023-01-05"),
        ]);
        assert_eq!(delivery_date(&m), Some("2023-01-05"));
    }

    #[test]
    fn test_delivery_and_discharge_notes_use_document_date() {
        let bc = movement(&[("sigla", "BC"), ("data_documento", "2023-02-01")]);
        assert_eq!(delivery_date(&bc), Some("2023-02-01"));

        let bs = movement(&[("sigla", "BS"), ("data_documento", "2023-03-01")]);
        assert_eq!(delivery_date(&bs), Some("2023-03-01"));
    }

    #[test]
    fn test_other_document_types_have_no_date() {
        let m = movement(&[("sigla", "OR"), ("data_documento", "2023-02-01")]);
        assert_eq!(delivery_date(&m), None);

        let unknown_origin = movement(&[
            ("sigla", "FT"),
            ("sigla_doc_orig", "OR"),
            ("data_documento", "2023-02-01"),
        ]);
        assert_eq!(delivery_date(&unknown_origin), None);
    }

    #[test]
    fn test_last_dates_keep_per_customer_max() {
        let movements = vec![
            movement(&[
                ("sigla", "FT"),
                ("sigla_doc_orig", "BC"),
                ("data_doc_orig", "2023-01-05"),
                ("data_documento", "2023-01-10"),
                ("cod_conto", "C1"),
            ]),
            movement(&[
                ("sigla", "BC"),
                ("data_documento", "2023-02-01"),
                ("cod_conto", "C1"),
            ]),
        ];

        let dates = last_delivery_dates(&movements);
        assert_eq!(dates.get("C1").map(String::as_str), Some("2023-02-01"));
    }

    #[test]
    fn test_earlier_date_does_not_overwrite_max() {
        let movements = vec![
            movement(&[
                ("sigla", "BC"),
                ("data_documento", "2023-02-01"),
                ("cod_conto", "C1"),
            ]),
            movement(&[
                ("sigla", "BC"),
                ("data_documento", "2022-12-31"),
                ("cod_conto", "C1"),
            ]),
        ];

        let dates = last_delivery_dates(&movements);
        assert_eq!(dates.get("C1").map(String::as_str), Some("2023-02-01"));
    }

    #[test]
    fn test_movements_without_customer_code_are_skipped() {
        let movements = vec![
            movement(&[("sigla", "BC"), ("data_documento", "2023-02-01")]),
            movement(&[
                ("sigla", "BC"),
                ("data_documento", "2023-02-01"),
                ("cod_conto", ""),
            ]),
        ];
        assert!(last_delivery_dates(&movements).is_empty());
    }
}
