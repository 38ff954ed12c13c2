//! Exit code constants for the frr-render CLI.
//!
//! Each failure class gets its own code so init containers and build
//! scripts can tell a bad template apart from a bad parameter file:
//! - 0: Success
//! - 1: Usage error (bad args, invalid configuration)
//! - 2: Template resolution failure (missing file, syntax error)
//! - 3: Variable binding failure (undefined variable, filter error)
//! - 4: Parameter source failure (unreadable or malformed data file)
//! - 5: Filesystem failure (read, write, directory creation)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: bad arguments or an invalid configuration combination.
pub const USAGE_ERROR: i32 = 1;

/// Template could not be found or failed to parse.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Template referenced a variable that is not bound, or rendering failed.
pub const BINDING_FAILURE: i32 = 3;

/// Parameter data file could not be read or parsed.
pub const PARAMETER_FAILURE: i32 = 4;

/// Filesystem operation on the output failed.
pub const IO_FAILURE: i32 = 5;
