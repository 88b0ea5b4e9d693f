use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory::staff::StaffFactory};

/// Tests logging in with the correct password.
///
/// Expected: Ok(Staff) carrying the stored role
#[tokio::test]
async fn returns_staff_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StaffFactory::new(db)
        .username("manager")
        .password_hash(hash_password("correct horse")?)
        .role("Manager")
        .build()
        .await?;

    let staff = AuthService::new(db).login("manager", "correct horse").await?;

    assert_eq!(staff.username, "manager");
    assert_eq!(staff.role, "Manager");

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StaffFactory::new(db)
        .username("manager")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let result = AuthService::new(db).login("manager", "battery staple").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown username.
///
/// Expected: Err(AuthError::InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login("nobody", "whatever").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in against a row whose stored hash is not a PHC string.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unparseable_stored_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StaffFactory::new(db).username("legacy").build().await?;

    let result = AuthService::new(db).login("legacy", "unusable-hash").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
