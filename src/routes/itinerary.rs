use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::itinerary::ItineraryRequest;
use crate::services::geoapify_service::GeoapifyClient;
use crate::services::itinerary_generation_service::{ItineraryPlanner, PlanningError};

/*
    /plan_itinerary
*/
pub async fn plan_itinerary(
    provider: web::Data<GeoapifyClient>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    println!("Itinerary request: {:?}", input);

    let request = input.into_inner();
    if request.destination_city.trim().is_empty()
        || request.check_in_date.trim().is_empty()
        || request.check_out_date.trim().is_empty()
    {
        return HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": "Missing city or dates for itinerary planning.",
        }));
    }

    let mut rng = rand::thread_rng();
    match ItineraryPlanner::new()
        .plan(provider.get_ref(), &request, &mut rng)
        .await
    {
        Ok(itinerary) => {
            let mut body = json!({
                "status": "success",
                "results": itinerary.schedule,
            });
            if let Some(note) = itinerary.note {
                body["note"] = json!(note);
            }
            HttpResponse::Ok().json(body)
        }
        Err(err) => {
            eprintln!("Itinerary planning failed: {}", err);
            error_response(&err)
        }
    }
}

fn error_response(err: &PlanningError) -> HttpResponse {
    let body = json!({
        "status": "error",
        "message": err.to_string(),
    });

    match err {
        PlanningError::LocationNotFound(_) | PlanningError::NoVenuesFound { .. } => {
            HttpResponse::NotFound().json(body)
        }
        PlanningError::NoMappableInterests(_) => HttpResponse::BadRequest().json(body),
        PlanningError::AllCategoriesFailed(_) => HttpResponse::BadGateway().json(body),
    }
}
