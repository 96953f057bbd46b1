pub mod login;
pub mod signup;

/// Shown when a required field is empty at submission.
pub const MISSING_FIELDS: &str = "email and password are required";
