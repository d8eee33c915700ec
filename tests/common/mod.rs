use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use tripweaver_api::routes;
use tripweaver_api::services::geoapify_service::GeoapifyClient;

pub struct TestApp {
    pub geoapify_client: GeoapifyClient,
}

impl TestApp {
    pub fn new() -> Self {
        // A placeholder key: requests that do reach the provider fail fast,
        // and the paths under test either validate input first or only
        // assert on the error envelope.
        Self {
            geoapify_client: GeoapifyClient::new("test-key".to_string()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.geoapify_client.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
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
    }
}
