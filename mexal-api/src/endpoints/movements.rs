//! Warehouse movement endpoints.
//!
//! Movements are partitioned by fiscal year on the server; each year is
//! fetched under coordinates whose year component is overridden for that
//! request chain. Result sets are cursor-paginated via the envelope's
//! `next` token.

use chrono::Datelike;
use tracing::debug;

use mexal_core::constants::FIRST_MOVEMENT_YEAR;
use mexal_core::error::MexalResult;

use crate::client::{append_param, join_fields, ok_or_log, MexalClient};
use crate::response::Record;

const MOVEMENTS_PATH: &str = "/documenti/movimenti-magazzino";

impl MexalClient {
    /// Fetch one page of movements for a fiscal year.
    async fn fetch_movement_page(
        &self,
        year: &str,
        properties: &[String],
        cursor: Option<&str>,
    ) -> MexalResult<(Vec<Record>, Option<String>)> {
        let mut endpoint = String::from(MOVEMENTS_PATH);
        if !properties.is_empty() {
            append_param(&mut endpoint, "fields", &join_fields(properties));
        }
        if let Some(cursor) = cursor {
            append_param(&mut endpoint, "next", cursor);
        }

        let envelope = self.get_envelope(&endpoint, Some(year)).await?;
        Ok((envelope.records(), envelope.next))
    }

    /// Get every warehouse movement recorded for one fiscal year.
    ///
    /// Pages are fetched sequentially and concatenated in page order. The
    /// year is all-or-nothing: a failure on any page yields `None`,
    /// records already fetched from earlier pages included.
    pub async fn get_warehouse_movements(
        &self,
        year: &str,
        properties: &[String],
    ) -> Option<Vec<Record>> {
        let mut movements = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let (records, next) = ok_or_log(
                &format!("failed to fetch warehouse movements for year {year}"),
                self.fetch_movement_page(year, properties, cursor.as_deref())
                    .await,
            )?;
            movements.extend(records);
            match next {
                Some(token) => cursor = Some(token),
                None => break,
            }
        }

        Some(movements)
    }

    /// Aggregate movements across an explicit sequence of fiscal years.
    ///
    /// Years are fetched sequentially in the order given; a year that
    /// fails contributes nothing and surfaces no error. Returns `None`
    /// only when every year yielded nothing.
    pub async fn get_warehouse_movements_for_years<I>(
        &self,
        years: I,
        properties: &[String],
    ) -> Option<Vec<Record>>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut movements = Vec::new();
        for year in years {
            match self
                .get_warehouse_movements(&year.to_string(), properties)
                .await
            {
                Some(year_movements) => {
                    debug!("year {year}: {} movements", year_movements.len());
                    movements.extend(year_movements);
                }
                None => debug!("year {year}: no movements"),
            }
        }

        if movements.is_empty() {
            None
        } else {
            Some(movements)
        }
    }

    /// Aggregate movements from the first recorded fiscal year through the
    /// current calendar year, in ascending year order.
    pub async fn get_all_warehouse_movements(&self, properties: &[String]) -> Option<Vec<Record>> {
        let current_year = chrono::Local::now().year();
        self.get_warehouse_movements_for_years(FIRST_MOVEMENT_YEAR..=current_year, properties)
            .await
    }
}
