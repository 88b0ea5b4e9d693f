//! Route table and API documentation.
//!
//! Every handler carries a `#[utoipa::path]` annotation, so registering it through
//! `OpenApiRouter` adds both the axum route and its OpenAPI operation. Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, bill_service, billing, guest, payment, reservation, room, room_type, service, staff,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Hotel Management API",
    description = "Guests, staff, rooms, reservations, billing and services"
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(guest::create_guest, guest::get_guests))
        .routes(routes!(
            guest::get_guest,
            guest::update_guest,
            guest::delete_guest
        ))
        .routes(routes!(staff::create_staff_member, staff::get_staff))
        .routes(routes!(
            staff::get_staff_member,
            staff::update_staff_member,
            staff::delete_staff_member
        ))
        .routes(routes!(room_type::create_room_type, room_type::get_room_types))
        .routes(routes!(
            room_type::get_room_type,
            room_type::update_room_type,
            room_type::delete_room_type
        ))
        .routes(routes!(room::create_room, room::get_rooms))
        .routes(routes!(room::get_rooms_details))
        .routes(routes!(room::get_available_rooms))
        .routes(routes!(room::get_room, room::update_room, room::delete_room))
        .routes(routes!(
            reservation::create_reservation,
            reservation::get_reservations
        ))
        .routes(routes!(
            reservation::get_reservation,
            reservation::update_reservation,
            reservation::delete_reservation
        ))
        .routes(routes!(reservation::update_reservation_status))
        .routes(routes!(billing::create_bill, billing::get_bills))
        .routes(routes!(
            billing::get_bill,
            billing::update_bill,
            billing::delete_bill
        ))
        .routes(routes!(payment::create_payment, payment::get_payments))
        .routes(routes!(
            payment::get_payment,
            payment::update_payment,
            payment::delete_payment
        ))
        .routes(routes!(service::create_service, service::get_services))
        .routes(routes!(
            service::get_service,
            service::update_service,
            service::delete_service
        ))
        .routes(routes!(
            bill_service::create_bill_service,
            bill_service::get_bill_services
        ))
        .routes(routes!(
            bill_service::get_bill_service,
            bill_service::update_bill_service,
            bill_service::delete_bill_service
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
