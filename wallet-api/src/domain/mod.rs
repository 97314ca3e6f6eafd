pub mod fee;
