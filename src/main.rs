use std::net::TcpListener;

use env_logger::Env;
use marketpulse::{configuration::get_configuration, services::StockClient, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let stock_client =
        StockClient::new(&configuration.scraper).expect("Failed to build the upstream client.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    run(listener, stock_client)?.await
}
