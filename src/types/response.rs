use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FoundEmail {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct FoundEmails {
    pub emails: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerificationCode {
    pub message: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub email: String,
}
