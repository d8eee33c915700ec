use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripweaver_api::routes;
use tripweaver_api::services::geoapify_service::GeoapifyClient;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let geoapify_client = GeoapifyClient::from_env().expect("GEOAPIFY_API_KEY must be set");
    println!("Geoapify client configured");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(geoapify_client.clone()))
            .route("/", web::get().to(|| async { "TripWeaver API is running" }))
            .route("/health", web::get().to(routes::health::health_check))
            .route(
                "/plan_itinerary",
                web::post().to(routes::itinerary::plan_itinerary),
            )
            .route(
                "/search_flights",
                web::post().to(routes::flight::search_flights),
            )
            .route(
                "/search_hotels",
                web::post().to(routes::hotel::search_hotels),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
