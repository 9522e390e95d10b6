use log::info;
use perf_tester_http::HTTP_PORT;

mod filters;
mod filters_common;

#[tokio::main]
async fn main() {
    //init logging
    tracing_subscriber::fmt::init();

    let routes = filters::get_routes();
    info!("starting server on port {}...", HTTP_PORT);
    warp::serve(routes).run(([0, 0, 0, 0], HTTP_PORT)).await;
}
