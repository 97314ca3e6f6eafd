mod enums;
pub use enums::*;
