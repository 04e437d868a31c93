#![deny(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

pub mod classifying;
pub mod conversion;
pub mod labels;
pub mod literals;
pub mod parsing;
pub mod rendering;
pub mod tokenizing;

pub use parsing::Parser;
pub use tokenizing::TokenSet;
