use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::hotel::HotelRequest;
use crate::services::geoapify_service::GeoapifyClient;
use crate::services::hotel_service::{HotelSearchError, HotelService};

/*
    /search_hotels
*/
pub async fn search_hotels(
    provider: web::Data<GeoapifyClient>,
    input: web::Json<HotelRequest>,
) -> impl Responder {
    println!("Hotel request: {:?}", input);

    let request = input.into_inner();
    match HotelService::search_hotels(provider.get_ref(), &request).await {
        Ok(hotels) => HttpResponse::Ok().json(json!({
            "status": "success",
            "results": hotels,
        })),
        Err(err) => {
            eprintln!("Hotel search failed: {}", err);
            let body = json!({
                "status": "error",
                "message": err.to_string(),
            });
            match err {
                HotelSearchError::LocationNotFound(_) => HttpResponse::NotFound().json(body),
                HotelSearchError::LookupFailed(_) => HttpResponse::BadGateway().json(body),
            }
        }
    }
}
