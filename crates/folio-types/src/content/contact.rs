use serde::{Deserialize, Serialize};

/// Body of a contact-form submission, sent to the form endpoint as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
