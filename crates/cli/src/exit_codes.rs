//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! | 0    | Success                                      |
//! | 2    | Usage error (bad arguments; emitted by clap) |
//! | 3    | Config file missing or invalid               |
//! | 4    | Input spreadsheet not found from a pattern   |
//! | 5    | Runtime failure (read, normalize, write)     |

pub const EXIT_SUCCESS: u8 = 0;

/// Bad arguments. clap exits with this itself; listed here so the
/// contract is documented in one place.
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Config file not found, unparseable, or invalid.
pub const EXIT_CONFIG: u8 = 3;

/// No input file matched a configured filename pattern.
pub const EXIT_INPUT: u8 = 4;

/// Processing failure: spreadsheet read, normalization, or report
/// write.
pub const EXIT_RUNTIME: u8 = 5;
