pub mod request;
pub mod response;

/// Body returned by the signup and login endpoints. The backend owns its
/// shape; it is handed to callers uninterpreted.
pub type AuthResponse = serde_json::Value;
