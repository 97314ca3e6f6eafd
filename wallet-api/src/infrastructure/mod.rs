//! Collaborators the fee engine depends on but does not own.
pub mod accounts;
pub mod signing;

pub use accounts::AccountsRepo;
pub use signing::SigningFactorsResolver;
