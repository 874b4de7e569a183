pub mod error;

#[cfg(feature = "ssr")]
pub mod client;

#[cfg(feature = "ssr")]
pub mod bookings;

#[cfg(feature = "ssr")]
pub mod catalog;

pub use error::StoreError;
