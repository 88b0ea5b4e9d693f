//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! `helpers` chains them together when a test needs a full dependency tree.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let guest = factory::create_guest(&db).await?;
//!     let room_type = factory::create_room_type(&db).await?;
//!
//!     // Create a bill with its reservation, guest and room
//!     let (reservation, bill) = factory::helpers::create_bill_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let staff = factory::staff::StaffFactory::new(&db)
//!     .username("reception")
//!     .role("Receptionist")
//!     .build()
//!     .await?;
//!
//! let room = factory::room::RoomFactory::new(&db, room_type.room_type_id)
//!     .room_number("305")
//!     .status("Occupied")
//!     .build()
//!     .await?;
//! ```

pub mod bill_service;
pub mod billing;
pub mod guest;
pub mod helpers;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;

// Re-export commonly used factory functions for concise usage
pub use bill_service::create_bill_service;
pub use billing::create_bill;
pub use guest::create_guest;
pub use payment::create_payment;
pub use reservation::create_reservation;
pub use room::create_room;
pub use room_type::create_room_type;
pub use service::create_service;
pub use staff::create_staff;
