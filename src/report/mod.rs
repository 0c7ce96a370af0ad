pub mod severity;
pub mod summary;

pub use summary::TokenSummary;
