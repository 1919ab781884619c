pub mod stock_client;
pub mod trend_scraper;

pub use stock_client::*;
pub use trend_scraper::*;
