use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the trending-equities table. Every value is the raw page
/// text for that cell, no numeric parsing or normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRecord {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Last Price")]
    pub last_price: Option<String>,
    #[serde(rename = "Highest Price")]
    pub highest_price: Option<String>,
    #[serde(rename = "Lowest Price")]
    pub lowest_price: Option<String>,
    #[serde(rename = "Change in price")]
    pub change_in_price: Option<String>,
    #[serde(rename = "% change")]
    pub change_percentage: Option<String>,
    #[serde(rename = "Volume")]
    pub volume: Option<String>,
}

/// One element of the response array: data records in document order,
/// then exactly one capture-time marker as the last element.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TrendEntry {
    Record(TrendRecord),
    ScrapedOn {
        #[serde(rename = "_scraped_on")]
        scraped_on: NaiveDateTime,
    },
}

/// Output of one extraction pass over the fetched page.
///
/// `table_found` separates "the page had the table but no usable rows"
/// from "the expected markup is gone entirely"; both serialize to the
/// same marker-only array, but callers and tests can tell them apart.
pub struct TrendSnapshot {
    pub records: Vec<TrendRecord>,
    pub table_found: bool,
    pub scraped_on: NaiveDateTime,
}

impl TrendSnapshot {
    pub fn into_entries(self) -> Vec<TrendEntry> {
        let mut entries: Vec<TrendEntry> =
            self.records.into_iter().map(TrendEntry::Record).collect();
        entries.push(TrendEntry::ScrapedOn {
            scraped_on: self.scraped_on,
        });
        entries
    }
}
