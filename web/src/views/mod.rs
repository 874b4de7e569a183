pub mod bookings;
pub mod branches;
pub mod customers;
pub mod dashboard;
pub mod not_found;
pub mod schedule_board;
pub mod staff;
pub mod treatments;
