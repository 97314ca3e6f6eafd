pub mod execution;
pub mod manifest;
