use super::*;

/// Tests deleting a bill that has payments and service charges.
///
/// Verifies that the payments and bill service records are removed with it.
///
/// Expected: Ok with dependent rows gone
#[tokio::test]
async fn cascades_to_payments_and_bill_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let service = factory::create_service(db).await?;
    let payment = factory::create_payment(db, bill.bill_id).await?;
    let charge = factory::create_bill_service(db, bill.bill_id, service.service_id).await?;

    BillRepository::new(db).delete(bill.bill_id).await?;

    assert!(!BillRepository::new(db).exists(bill.bill_id).await?);
    assert!(!PaymentRepository::new(db).exists(payment.payment_id).await?);
    assert!(
        !BillServiceRepository::new(db)
            .exists(charge.bill_service_id)
            .await?
    );

    Ok(())
}

/// Tests deleting a reservation that has a bill.
///
/// Expected: Ok with the bill removed as well
#[tokio::test]
async fn reservation_delete_cascades_to_bills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (reservation, bill) = factory::helpers::create_bill_with_dependencies(db).await?;

    ReservationRepository::new(db)
        .delete(reservation.reservation_id)
        .await?;

    assert!(!BillRepository::new(db).exists(bill.bill_id).await?);

    Ok(())
}
