use super::*;

/// Rows every entity may reference, created through the API.
struct Parents {
    guest_id: Value,
    room_type_id: Value,
    reservation_id: Value,
    bill_id: Value,
    service_id: Value,
}

async fn create_parents(app: &TestApp) -> Parents {
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
            "roomNumber": "101",
            "roomTypeID": room_type["roomTypeID"],
            "floorNumber": 1,
            "currentStatus": "Occupied"
        }),
    )
    .await;
    let (_, reservation) = app
        .post(
            "/api/reservations",
            json!({
                "guestID": guest["guestID"],
                "roomNumber": "101",
                "checkInDate": "2026-03-01",
                "checkOutDate": "2026-03-02"
            }),
        )
        .await;
    let (_, bill) = app
        .post(
            "/api/billing",
            json!({
                "reservationID": reservation["reservationID"],
                "billDate": "2026-03-02",
                "totalAmount": 90.0
            }),
        )
        .await;
    let (_, service) = app
        .post(
            "/api/services",
            json!({ "serviceName": "Parking", "unitPrice": 12.0 }),
        )
        .await;

    Parents {
        guest_id: guest["guestID"].clone(),
        room_type_id: room_type["roomTypeID"].clone(),
        reservation_id: reservation["reservationID"].clone(),
        bill_id: bill["billID"].clone(),
        service_id: service["serviceID"].clone(),
    }
}

/// Collection path, ID key, entity label and a complete create body.
fn entities(parents: &Parents) -> Vec<(&'static str, &'static str, &'static str, Value)> {
    vec![
        ("/api/guests", "guestID", "Guest", guest_body()),
        (
            "/api/staff",
            "staffID",
            "Staff member",
            json!({
                "firstName": "Hank",
                "lastName": "Keeping",
                "email": "hank@hotel.com",
                "username": "housekeeping",
                "password": "linen",
                "role": "Housekeeping"
            }),
        ),
        (
            "/api/room-types",
            "roomTypeID",
            "Room type",
            json!({
                "typeName": "Family",
                "description": "Two rooms",
                "basePrice": 210.5,
                "capacity": 5
            }),
        ),
        (
            "/api/rooms",
            "roomNumber",
            "Room",
            json!({
                "roomNumber": "202B",
                "roomTypeID": parents.room_type_id,
                "floorNumber": 2,
                "currentStatus": "Available"
            }),
        ),
        (
            "/api/reservations",
            "reservationID",
            "Reservation",
            json!({
                "guestID": parents.guest_id,
                "roomNumber": "101",
                "checkInDate": "2026-04-01",
                "checkOutDate": "2026-04-05",
                "pricePerNight": 95.0
            }),
        ),
        (
            "/api/billing",
            "billID",
            "Bill",
            json!({
                "reservationID": parents.reservation_id,
                "billDate": "2026-03-03",
                "totalAmount": 12.0
            }),
        ),
        (
            "/api/payments",
            "paymentID",
            "Payment",
            json!({
                "billID": parents.bill_id,
                "paymentMethod": "Cash",
                "paymentDate": "2026-03-02",
                "amountPaid": 90.0
            }),
        ),
        (
            "/api/services",
            "serviceID",
            "Service",
            json!({
                "serviceName": "Spa",
                "description": "Sixty minutes",
                "unitPrice": 80.0
            }),
        ),
        (
            "/api/bill-services",
            "billServiceID",
            "Bill service record",
            json!({
                "billID": parents.bill_id,
                "serviceID": parents.service_id,
                "quantity": 3
            }),
        ),
    ]
}

fn id_segment(id: &Value) -> String {
    match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Tests creating one row of every entity and reading it back by its ID.
///
/// Expected: 201 with the ID, then 200 with the same record
#[tokio::test]
async fn created_rows_read_back_unchanged() {
    for index in 0..9 {
        let app = TestApp::new().await;
        let parents = create_parents(&app).await;
        let (collection, id_key, label, body) = entities(&parents).swap_remove(index);

        let (status, created) = app.post(collection, body).await;

        assert_eq!(status, StatusCode::CREATED, "POST {}", collection);
        assert_eq!(created["message"], format!("{} added successfully!", label));
        let id = created[id_key].clone();
        assert!(!id.is_null(), "POST {} returned no {}", collection, id_key);
        assert_eq!(created["data"][id_key], id);

        let uri = format!("{}/{}", collection, id_segment(&id));
        let (status, read) = app.get(&uri).await;

        assert_eq!(status, StatusCode::OK, "GET {}", uri);
        assert_eq!(read, created["data"], "GET {}", uri);
    }
}

/// Tests deleting a fresh row of every entity twice.
///
/// Expected: 200 then 404, and the row is gone
#[tokio::test]
async fn deleting_twice_is_not_found_for_every_entity() {
    for index in 0..9 {
        let app = TestApp::new().await;
        let parents = create_parents(&app).await;
        let (collection, id_key, label, body) = entities(&parents).swap_remove(index);

        let (_, created) = app.post(collection, body).await;
        let uri = format!("{}/{}", collection, id_segment(&created[id_key]));

        let (first, body) = app.delete(&uri).await;
        assert_eq!(first, StatusCode::OK, "DELETE {}", uri);
        assert_eq!(body["message"], format!("{} deleted successfully!", label));

        let (second, body) = app.delete(&uri).await;
        assert_eq!(second, StatusCode::NOT_FOUND, "DELETE {}", uri);
        assert_eq!(body["error"], format!("{} not found", label));

        let (read, _) = app.get(&uri).await;
        assert_eq!(read, StatusCode::NOT_FOUND, "GET {}", uri);
    }
}
