pub mod error;
pub mod loading;
pub mod sidebar;
pub mod status_badge;

// Re-export commonly used types
pub use error::ErrorView;
pub use loading::LoadingView;
pub use status_badge::StatusBadge;
