use crate::server::{error::AppError, service::reservation::ReservationService};
use test_utils::{builder::TestBuilder, factory};

/// Tests the status transition without an explicit status.
///
/// Expected: Some(Reservation) with status "Checked-out"
#[tokio::test]
async fn defaults_to_checked_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let updated = ReservationService::new(db)
        .update_status(reservation.reservation_id, None)
        .await?
        .unwrap();

    assert_eq!(updated.reservation_status.as_deref(), Some("Checked-out"));

    Ok(())
}

/// Tests the status transition with an explicit status.
///
/// Expected: Some(Reservation) with the given status
#[tokio::test]
async fn applies_requested_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let updated = ReservationService::new(db)
        .update_status(reservation.reservation_id, Some("Checked-in".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.reservation_status.as_deref(), Some("Checked-in"));

    Ok(())
}

/// Tests the status transition for an unknown reservation.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationService::new(db).update_status(99999, None).await?;

    assert!(result.is_none());

    Ok(())
}
