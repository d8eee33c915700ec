use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde_json::json;

use crate::models::flight::FlightRequest;
use crate::services::flight_service::FlightService;

/*
    /search_flights
*/
pub async fn search_flights(input: web::Json<FlightRequest>) -> impl Responder {
    println!("Flight request: {:?}", input);

    let request = input.into_inner();
    let travel_date = match NaiveDate::parse_from_str(&request.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({
                "status": "error",
                "message": format!("Invalid travel date '{}', expected YYYY-MM-DD.", request.date),
            }));
        }
    };

    let flights = FlightService::search_flights(&request.source, &request.destination, travel_date);

    HttpResponse::Ok().json(json!({
        "status": "success",
        "results": flights,
    }))
}
