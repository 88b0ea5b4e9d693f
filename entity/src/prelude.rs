pub use super::bill_service::Entity as BillService;
pub use super::billing::Entity as Billing;
pub use super::guest::Entity as Guest;
pub use super::payment::Entity as Payment;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::service::Entity as Service;
pub use super::staff::Entity as Staff;
