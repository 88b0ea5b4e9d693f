use super::*;

/// Tests creating a guest with only the required columns.
///
/// Verifies that the repository assigns an ID and stores NULL for the optional
/// contact columns.
///
/// Expected: Ok with guest created
#[tokio::test]
async fn creates_guest_with_required_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let guest = repo
        .create(CreateGuestParams {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: None,
            address: None,
            id_proof: "P1234567".to_string(),
        })
        .await?;

    assert!(guest.guest_id > 0);
    assert_eq!(guest.first_name, "Ada");
    assert_eq!(guest.phone_number, None);
    assert_eq!(guest.address, None);

    let stored = repo.get_by_id(guest.guest_id).await?;
    assert_eq!(stored, Some(guest));

    Ok(())
}
