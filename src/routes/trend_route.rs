use actix_web::{get, web, HttpResponse};

use crate::services::{trend_scraper, ScrapeError, StockClient};

#[get("/")]
pub async fn trends(stock_client: web::Data<StockClient>) -> Result<HttpResponse, ScrapeError> {
    log::info!("Trendings: scraping data");

    let html = stock_client.fetch_page().await?;
    let snapshot = trend_scraper::extract(&html);

    // 200 even with zero rows; the caller gets at least the capture marker
    Ok(HttpResponse::Ok().json(snapshot.into_entries()))
}
