use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    data::staff::StaffRepository,
    error::AppError,
    model::staff::CreateStaffParams,
    util::password::hash_password,
};

/// Log filter used when `RUST_LOG` is unset: `info` for this crate and `tower_http`
/// request logs, so SeaORM and sqlx stay quiet.
pub const DEFAULT_LOG_FILTER: &str = "hotel=info,tower_http=info";

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// schema is up-to-date. This function must complete successfully before the application
/// can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

struct DefaultStaff {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone_number: &'static str,
    username: &'static str,
    role: &'static str,
    address: &'static str,
    date_of_hire: (i32, u32, u32),
    salary: f64,
}

const DEFAULT_STAFF: [DefaultStaff; 4] = [
    DefaultStaff {
        first_name: "System",
        last_name: "Admin",
        email: "sysadmin@hotel.com",
        phone_number: "1000000001",
        username: "sysadmin",
        role: "Admin",
        address: "99 HQ St",
        date_of_hire: (2024, 1, 1),
        salary: 95000.0,
    },
    DefaultStaff {
        first_name: "Fiona",
        last_name: "Reception",
        email: "fiona@hotel.com",
        phone_number: "1000000002",
        username: "reception",
        role: "Receptionist",
        address: "20 Front Desk Rd",
        date_of_hire: (2024, 3, 15),
        salary: 40000.0,
    },
    DefaultStaff {
        first_name: "Robert",
        last_name: "Manager",
        email: "robert@hotel.com",
        phone_number: "1000000003",
        username: "manager",
        role: "Manager",
        address: "50 Oversight Ave",
        date_of_hire: (2023, 8, 20),
        salary: 65000.0,
    },
    DefaultStaff {
        first_name: "Holly",
        last_name: "Housekeeper",
        email: "holly@hotel.com",
        phone_number: "1000000004",
        username: "housekeeping",
        role: "Housekeeping",
        address: "30 Clean Ln",
        date_of_hire: (2024, 5, 10),
        salary: 35000.0,
    },
];

/// Inserts the default staff accounts when the staff table is empty.
///
/// Every account gets `password`. A table that already holds any staff row is left
/// untouched.
///
/// # Returns
/// - `Ok(usize)` - Number of accounts inserted, zero when staff already existed
/// - `Err(AppError)` - Hashing or database failure
pub async fn seed_staff(db: &DatabaseConnection, password: &str) -> Result<usize, AppError> {
    let repo = StaffRepository::new(db);

    if repo.count().await? > 0 {
        tracing::debug!("Staff table already populated, skipping default accounts");
        return Ok(0);
    }

    for staff in &DEFAULT_STAFF {
        let (year, month, day) = staff.date_of_hire;

        repo.create(CreateStaffParams {
            first_name: staff.first_name.to_string(),
            last_name: staff.last_name.to_string(),
            email: staff.email.to_string(),
            phone_number: Some(staff.phone_number.to_string()),
            username: staff.username.to_string(),
            password_hash: hash_password(password)?,
            role: staff.role.to_string(),
            address: Some(staff.address.to_string()),
            date_of_hire: NaiveDate::from_ymd_opt(year, month, day),
            salary: Some(staff.salary),
        })
        .await?;

        tracing::info!("Seeded {} account '{}'", staff.role, staff.username);
    }

    Ok(DEFAULT_STAFF.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::auth::AuthService;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[tokio::test]
    async fn seeds_default_accounts_into_empty_table() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_hotel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let inserted = seed_staff(db, "seed-pass").await?;

        assert_eq!(inserted, 4);
        assert_eq!(StaffRepository::new(db).count().await?, 4);

        let admin = AuthService::new(db).login("sysadmin", "seed-pass").await?;
        assert_eq!(admin.role, "Admin");

        Ok(())
    }

    #[tokio::test]
    async fn skips_seeding_when_staff_exist() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_hotel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_staff(db).await?;

        let inserted = seed_staff(db, "seed-pass").await?;

        assert_eq!(inserted, 0);
        assert_eq!(StaffRepository::new(db).count().await?, 1);

        Ok(())
    }
}
