use entity::prelude::{BillService, Payment};
use sea_orm::EntityTrait;

use super::*;

/// Creates a bill through the HTTP surface along with everything it depends on.
async fn create_bill(app: &TestApp) -> i64 {
    let (_, guest) = app.post("/api/guests", guest_body()).await;
    let (_, room_type) = app
        .post(
            "/api/room-types",
            json!({
                "typeName": "Single",
                "description": "One bed",
                "basePrice": 90.0,
                "capacity": 1
            }),
        )
        .await;
    app.post(
        "/api/rooms",
        json!({
            "roomNumber": "12",
            "roomTypeID": room_type["roomTypeID"],
            "floorNumber": 0,
            "currentStatus": "Occupied"
        }),
    )
    .await;
    let (_, reservation) = app
        .post(
            "/api/reservations",
            json!({
                "guestID": guest["guestID"],
                "roomNumber": "12",
                "checkInDate": "2026-02-10",
                "checkOutDate": "2026-02-12"
            }),
        )
        .await;

    let (status, bill) = app
        .post(
            "/api/billing",
            json!({
                "reservationID": reservation["reservationID"],
                "billDate": "2026-02-12",
                "subTotal": 180.0,
                "taxAmount": 18.0,
                "totalAmount": 198.0,
                "paymentStatus": "Pending"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(bill["message"], "Bill added successfully!");

    bill["billID"].as_i64().unwrap()
}

/// Tests recording a payment and a billed service against a bill.
///
/// Expected: both read back with the bill's ID
#[tokio::test]
async fn records_payment_and_service_against_bill() {
    let app = TestApp::new().await;
    let bill_id = create_bill(&app).await;

    let (status, payment) = app
        .post(
            "/api/payments",
            json!({
                "billID": bill_id,
                "paymentMethod": "Card",
                "paymentDate": "2026-02-12",
                "amountPaid": 198.0,
                "transactionID": "TX-1009"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payment["message"], "Payment added successfully!");

    let (_, service) = app
        .post(
            "/api/services",
            json!({ "serviceName": "Breakfast", "unitPrice": 15.0 }),
        )
        .await;
    assert_eq!(service["data"]["description"], Value::Null);

    let (status, record) = app
        .post(
            "/api/bill-services",
            json!({
                "billID": bill_id,
                "serviceID": service["serviceID"],
                "quantity": 2,
                "totalServicePrice": 30.0
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, stored) = app
        .get(&format!("/api/payments/{}", payment["paymentID"]))
        .await;
    assert_eq!(stored["billID"], bill_id);
    assert_eq!(stored["transactionID"], "TX-1009");

    let (_, stored) = app
        .get(&format!("/api/bill-services/{}", record["billServiceID"]))
        .await;
    assert_eq!(stored["billID"], bill_id);
    assert_eq!(stored["quantity"], 2);
    assert_eq!(stored["totalServicePrice"], 30.0);
}

/// Tests marking a bill as paid.
///
/// Expected: payment status changes and totals stay
#[tokio::test]
async fn updates_payment_status() {
    let app = TestApp::new().await;
    let bill_id = create_bill(&app).await;
    let uri = format!("/api/billing/{}", bill_id);

    let (status, body) = app.put(&uri, json!({ "paymentStatus": "Paid" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bill updated successfully!");

    let (_, bill) = app.get(&uri).await;
    assert_eq!(bill["paymentStatus"], "Paid");
    assert_eq!(bill["totalAmount"], 198.0);
}

/// Tests deleting a bill that has a payment and a billed service.
///
/// Expected: the dependent rows are removed with it
#[tokio::test]
async fn deleting_bill_removes_dependents() {
    let app = TestApp::new().await;
    let bill_id = create_bill(&app).await;
    app.post(
        "/api/payments",
        json!({
            "billID": bill_id,
            "paymentMethod": "Cash",
            "paymentDate": "2026-02-12",
            "amountPaid": 50.0
        }),
    )
    .await;
    let (_, service) = app
        .post(
            "/api/services",
            json!({ "serviceName": "Laundry", "unitPrice": 8.5 }),
        )
        .await;
    app.post(
        "/api/bill-services",
        json!({ "billID": bill_id, "serviceID": service["serviceID"], "quantity": 1 }),
    )
    .await;

    let (status, body) = app.delete(&format!("/api/billing/{}", bill_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bill deleted successfully!");
    assert!(Payment::find().all(app.db()).await.unwrap().is_empty());
    assert!(BillService::find().all(app.db()).await.unwrap().is_empty());
}

/// Tests creating a payment without its required fields.
///
/// Expected: 400 listing them in order
#[tokio::test]
async fn payment_requires_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/payments", json!({ "paymentMethod": "Card" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: billID, paymentDate, amountPaid"
    );
}
