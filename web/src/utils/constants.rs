//! Application constants

/// Origin of the backend server. Media paths and the live-update websocket
/// hang off this origin directly; REST endpoints live under [`API_BASE`].
pub const API_ORIGIN: &str = "http://127.0.0.1:5000";

/// Base URL for the REST API
pub const API_BASE: &str = "http://127.0.0.1:5000/api";

/// localStorage key holding the raw session token; absence means
/// unauthenticated
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Path of the live-update websocket on the backend origin
pub const LIVE_UPDATES_PATH: &str = "/ws/updates";

/// Placeholder image service for books without a cover
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/300x400.png";

// Live-update reconnect backoff (doubles per failed attempt)
pub const RECONNECT_INITIAL_MS: u32 = 1_000;
pub const RECONNECT_MAX_MS: u32 = 60_000;
