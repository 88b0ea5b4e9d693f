use super::*;

const MISSING: [(&str, &str); 9] = [
    ("/api/guests/9001", "Guest not found"),
    ("/api/staff/9001", "Staff member not found"),
    ("/api/reservations/9001", "Reservation not found"),
    ("/api/room-types/9001", "Room type not found"),
    ("/api/rooms/9001", "Room not found"),
    ("/api/billing/9001", "Bill not found"),
    ("/api/payments/9001", "Payment not found"),
    ("/api/services/9001", "Service not found"),
    ("/api/bill-services/9001", "Bill service record not found"),
];

/// Tests reading an unknown key of every entity.
///
/// Expected: 404 with the entity's label
#[tokio::test]
async fn read_of_unknown_key_is_not_found() {
    let app = TestApp::new().await;

    for (uri, message) in MISSING {
        let (status, body) = app.get(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);
        assert_eq!(body["error"], message, "GET {}", uri);
    }
}

/// Tests deleting an unknown key of every entity.
///
/// Expected: 404 with the entity's label
#[tokio::test]
async fn delete_of_unknown_key_is_not_found() {
    let app = TestApp::new().await;

    for (uri, message) in MISSING {
        let (status, body) = app.delete(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {}", uri);
        assert_eq!(body["error"], message, "DELETE {}", uri);
    }
}

/// Tests updating an unknown key of every entity with an empty body.
///
/// Expected: 404 takes precedence over "No fields to update."
#[tokio::test]
async fn update_of_unknown_key_is_not_found() {
    let app = TestApp::new().await;

    for (uri, message) in MISSING {
        let (status, body) = app.put(uri, json!({})).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {}", uri);
        assert_eq!(body["error"], message, "PUT {}", uri);
    }
}

/// Tests that every list endpoint starts empty.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn lists_start_empty() {
    let app = TestApp::new().await;

    for uri in [
        "/api/guests",
        "/api/staff",
        "/api/reservations",
        "/api/room-types",
        "/api/rooms",
        "/api/rooms-details",
        "/api/billing",
        "/api/payments",
        "/api/services",
        "/api/bill-services",
    ] {
        let (status, body) = app.get(uri).await;

        assert_eq!(status, StatusCode::OK, "GET {}", uri);
        assert_eq!(body, json!([]), "GET {}", uri);
    }
}
