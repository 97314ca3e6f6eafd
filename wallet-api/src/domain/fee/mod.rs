mod candidate;
mod payer;
mod review;

pub use candidate::{FeePayerCandidate, FeePayerSelectionAmongstCandidates};
pub use review::{FeeValidationOutcome, ReviewedTransaction, ValidationNote};

pub struct FeeDomain;
