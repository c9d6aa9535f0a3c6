//! HTTP handlers for booking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::{
    CreateBookingCommand, CreateBookingError, CreateBookingHandler, ListBookingsError,
    ListBookingsHandler, ListBookingsQuery,
};

use super::dto::{BookingListResponse, BookingResponse, CreateBookingRequest, ListBookingsParams};

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Clone)]
pub struct BookingHandlers {
    create_handler: Arc<CreateBookingHandler>,
    list_handler: Arc<ListBookingsHandler>,
}

impl BookingHandlers {
    pub fn new(
        create_handler: Arc<CreateBookingHandler>,
        list_handler: Arc<ListBookingsHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }
}

/// POST /api/v2/bookings - Record a confirmed booking
pub async fn create_booking(
    State(handlers): State<BookingHandlers>,
    Json(req): Json<CreateBookingRequest>,
) -> Response {
    let cmd = CreateBookingCommand {
        user_id: req.user_id,
        booking_type: req.booking_type,
        details: req.details,
        amount: req.amount,
        currency: req.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response: BookingResponse = result.booking.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_create_error(e),
    }
}

/// GET /api/v2/bookings?user_id=... - List a user's bookings, newest first
pub async fn list_bookings(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<ListBookingsParams>,
) -> Response {
    let query = ListBookingsQuery {
        user_id: params.user_id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(result) => (
            StatusCode::OK,
            Json(BookingListResponse::from_bookings(result.bookings)),
        )
            .into_response(),
        Err(e) => handle_list_error(e),
    }
}

fn handle_create_error(error: CreateBookingError) -> Response {
    match error {
        CreateBookingError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        CreateBookingError::Repository(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

fn handle_list_error(error: ListBookingsError) -> Response {
    match error {
        ListBookingsError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        ListBookingsError::Repository(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
