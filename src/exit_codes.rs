//! Exit code constants for the graft CLI.
//!
//! The converter is a batch process: skipped rows, unparseable tables, and
//! missing input files are reported on the console but never fail the run.
//! Only a failure that prevents the batch from starting at all exits nonzero.

/// Successful execution, including runs where rows or whole files were skipped.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable input/output environment.
pub const USER_ERROR: i32 = 1;
