// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "PlantDesk";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "plantdesk";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "plantdesk.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "PLANTDESK_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "PLANTDESK_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "PLANTDESK_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "PLANTDESK_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5170;

/// Default request body limit in bytes (2 MB)
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;
