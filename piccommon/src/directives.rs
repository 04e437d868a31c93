//! MPASM directive keywords.
//!
//! All entries are lowercase. Lookups go through [`CapabilityTable`](crate::CapabilityTable),
//! which lowercases the token before checking membership.

pub const MPASM_DIRECTIVES: &[&str] = &[
    // Control
    "#define",
    "#include",
    "#undefine",
    "constant",
    "end",
    "equ",
    "error",
    "errorlevel",
    "include",
    "list",
    "messg",
    "nolist",
    "org",
    "processor",
    "radix",
    "set",
    "space",
    "subtitle",
    "title",
    "variable",
    "__badram",
    "__badrom",
    "__config",
    "config",
    "__idlocs",
    "__maxram",
    "__maxrom",
    // Conditional assembly
    "else",
    "endif",
    "endw",
    "if",
    "ifdef",
    "ifndef",
    "while",
    // Data
    "cblock",
    "endc",
    "da",
    "data",
    "db",
    "de",
    "dt",
    "dw",
    "fill",
    "res",
    // Macros
    "endm",
    "exitm",
    "expand",
    "local",
    "macro",
    "noexpand",
    // Object file
    "access_ovr",
    "bankisel",
    "banksel",
    "code",
    "code_pack",
    "extern",
    "global",
    "idata",
    "idata_acs",
    "pagesel",
    "pageselw",
    "udata",
    "udata_acs",
    "udata_ovr",
    "udata_shr",
];

/// Directives that may follow a genuine label in field 1.
///
/// A name in front of anything else (`FOO equ 5`, `BAR macro`) is a symbol
/// definition and must not grow a colon.
pub const MPASM_DIRECTIVES_WITH_LABELS: &[&str] = &[
    "bankisel",
    "banksel",
    "da",
    "data",
    "db",
    "de",
    "dt",
    "dw",
    "fill",
    "pagesel",
    "pageselw",
    "res",
];
