use rocket::{Request, catch, serde::json::Json};

use shared::ErrorResponse;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request parameters."))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("The requested resource was not found."))
}

#[catch(405)]
pub fn method_not_allowed(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Method not allowed"))
}

// A body that is valid JSON but not the expected request shape.
#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request parameters."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("An internal server error occurred."))
}
