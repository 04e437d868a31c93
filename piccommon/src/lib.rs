#![deny(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod capabilities;
pub use capabilities::{Capabilities, CapabilityTable};

mod device;
pub use device::{DeviceFamily, UnsupportedDeviceFamily};

pub mod directives;
pub mod instruction_sets;

/// Marker appended to a label in field 1 (`LOOP` becomes `LOOP:`).
pub const LABEL_MARKER: char = ':';

/// Starts a comment; everything after it on the line is carried verbatim.
pub const COMMENT_MARKER: char = ';';
