pub mod radix;
mod errors;
pub use errors::*;
