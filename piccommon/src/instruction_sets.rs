//! Instruction mnemonics for each supported core.

mod baseline;
mod enhanced;
mod midrange;
mod pic18;

pub use baseline::BASELINE_INSTRUCTIONS;
pub use enhanced::ENHANCED_MIDRANGE_INSTRUCTIONS;
pub use midrange::MIDRANGE_INSTRUCTIONS;
pub use pic18::PIC18_INSTRUCTIONS;
