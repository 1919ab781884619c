use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{routes::trend_route, services::StockClient};

pub fn run(listener: TcpListener, stock_client: StockClient) -> Result<Server, std::io::Error> {
    let stock_client = web::Data::new(stock_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(trend_route::trends)
            .app_data(stock_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
