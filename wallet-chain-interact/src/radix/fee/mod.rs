mod customization;
mod summary;
mod total;
mod transaction_fee;

pub use customization::{AdvancedFeeCustomization, NormalFeeCustomization};
pub use summary::{FeeLocks, FeeSummary, FeeSummaryField};
pub use total::TotalFee;
pub use transaction_fee::{Mode, TransactionFee};
