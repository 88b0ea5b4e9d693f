mod auth;
mod reservation;
mod update_outcome;
