pub mod trend_route;
