pub mod address;
pub mod entity;
pub mod network;
