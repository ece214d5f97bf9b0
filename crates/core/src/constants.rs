/// Constants used throughout the optio workspace
// Environment variable names
pub const OPTIO_LOG_VAR: &str = "OPTIO_LOG";
pub const OPTIO_LOG_FORMAT_VAR: &str = "OPTIO_LOG_FORMAT";

// Logging defaults
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_LOG_FORMAT: &str = "compact";

// Context attached to causes produced by `map` and `flat_map`
pub const ABSENT_SOURCE_CONTEXT: &str = "invalid optional is passed";
pub const FUNCTION_ERROR_CONTEXT: &str = "function returns error";
