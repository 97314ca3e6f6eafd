pub mod consts;
pub mod fee;
pub mod protocol;
mod provider;
pub use provider::BalanceProvider;
pub mod signers;
