use super::*;

/// Tests creating a reservation for an existing guest and room.
///
/// Expected: Ok with the dates stored as given
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::create_room(db, room_type.room_type_id).await?;
    let guest = factory::create_guest(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            guest_id: guest.guest_id,
            room_number: room.room_number.clone(),
            check_in_date: date(2026, 3, 10),
            check_out_date: date(2026, 3, 14),
            booking_date: Some(date(2026, 1, 2)),
            number_of_adults: Some(2),
            number_of_children: None,
            reservation_status: Some("Booked".to_string()),
            price_per_night: Some(350.0),
        })
        .await?;

    assert_eq!(reservation.guest_id, guest.guest_id);
    assert_eq!(reservation.room_number, room.room_number);
    assert_eq!(reservation.check_in_date, date(2026, 3, 10));
    assert_eq!(reservation.check_out_date, date(2026, 3, 14));
    assert_eq!(reservation.number_of_children, None);

    Ok(())
}

/// Tests creating a reservation that references a missing guest.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_missing_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::create_room(db, room_type.room_type_id).await?;

    let result = ReservationRepository::new(db)
        .create(CreateReservationParams {
            guest_id: 99999,
            room_number: room.room_number,
            check_in_date: date(2026, 3, 10),
            check_out_date: date(2026, 3, 14),
            booking_date: None,
            number_of_adults: None,
            number_of_children: None,
            reservation_status: None,
            price_per_night: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
