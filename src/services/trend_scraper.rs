use chrono::Local;
use scraper::{ElementRef, Html, Selector};

use crate::domain::{TrendRecord, TrendSnapshot};

/// Selectors for the upstream table, one per extracted column. The page
/// shape is fixed upstream; when their markup drifts, this block is the
/// only thing that needs editing.
mod selectors {
    pub const TABLE_BODY: &str = r#"div[data-test="dynamic-table"] table tbody"#;
    pub const ROW: &str = "tr";
    pub const NAME: &str = "td:nth-child(2) a > h4 > span > span:last-child";
    pub const LAST: &str = "td:nth-child(3) span";
    pub const HIGH: &str = "td:nth-child(4)";
    pub const LOW: &str = "td:nth-child(5)";
    pub const CHANGE: &str = "td:nth-child(6)";
    pub const CHANGE_PCT: &str = "td:nth-child(7)";
    pub const VOLUME: &str = "td:nth-child(8)";
}

/// Column selectors parsed once per extraction pass.
struct ColumnSelectors {
    name: Selector,
    last: Selector,
    high: Selector,
    low: Selector,
    change: Selector,
    change_pct: Selector,
    volume: Selector,
}

impl ColumnSelectors {
    fn new() -> Self {
        ColumnSelectors {
            name: Selector::parse(selectors::NAME).unwrap(),
            last: Selector::parse(selectors::LAST).unwrap(),
            high: Selector::parse(selectors::HIGH).unwrap(),
            low: Selector::parse(selectors::LOW).unwrap(),
            change: Selector::parse(selectors::CHANGE).unwrap(),
            change_pct: Selector::parse(selectors::CHANGE_PCT).unwrap(),
            volume: Selector::parse(selectors::VOLUME).unwrap(),
        }
    }
}

/// Parses the trending-equities table out of one fetched page.
///
/// Rows without a company name are skipped with a warning. A page with
/// no matching table yields an empty snapshot flagged `table_found:
/// false` rather than an error.
pub fn extract(html: &str) -> TrendSnapshot {
    let document = Html::parse_document(html);
    let table_body = Selector::parse(selectors::TABLE_BODY).unwrap();
    let row = Selector::parse(selectors::ROW).unwrap();
    let columns = ColumnSelectors::new();

    let bodies: Vec<ElementRef> = document.select(&table_body).collect();
    if bodies.is_empty() {
        log::warn!("Trendings: expected table markup not found on page");
        return TrendSnapshot {
            records: vec![],
            table_found: false,
            scraped_on: Local::now().naive_local(),
        };
    }

    let rows: Vec<ElementRef> = bodies.iter().flat_map(|body| body.select(&row)).collect();
    log::debug!("Found {} rows", rows.len());

    let mut records: Vec<TrendRecord> = vec![];
    for (i, row) in rows.into_iter().enumerate() {
        match parse_row(row, &columns) {
            Some(record) => {
                log::debug!("Row {}: {:?}", i, record);
                records.push(record);
            }
            None => log::warn!("Row {} has no symbol", i),
        }
    }

    TrendSnapshot {
        records,
        table_found: true,
        scraped_on: Local::now().naive_local(),
    }
}

fn parse_row(row: ElementRef, columns: &ColumnSelectors) -> Option<TrendRecord> {
    let name = first_text(row, &columns.name).filter(|name| !name.is_empty())?;

    Some(TrendRecord {
        company_name: name,
        last_price: first_text(row, &columns.last),
        highest_price: first_text(row, &columns.high),
        lowest_price: first_text(row, &columns.low),
        change_in_price: first_text(row, &columns.change),
        change_percentage: first_text(row, &columns.change_pct),
        volume: first_text(row, &columns.volume),
    })
}

/// First direct text node across the elements matching `selector`.
/// Child elements never contribute; a match with no text node of its
/// own is passed over in favor of the next match.
fn first_text(row: ElementRef, selector: &Selector) -> Option<String> {
    row.select(selector).find_map(|el| {
        el.children()
            .find_map(|node| node.value().as_text().map(|text| text.to_string()))
    })
}
