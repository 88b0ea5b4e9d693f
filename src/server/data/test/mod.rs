mod billing;
mod guest;
mod reservation;
mod room;
mod staff;
