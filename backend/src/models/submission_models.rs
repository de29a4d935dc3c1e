use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::submission_dtos::{NewContactMessage, NewRegistration, NewStatusCheck};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<NewStatusCheck> for StatusCheck {
    fn from(input: NewStatusCheck) -> Self {
        Self {
            id: new_id(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<NewContactMessage> for ContactMessage {
    fn from(input: NewContactMessage) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            message: input.message,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_type: String,
    pub preferred_date: String, // kept as sent by the date input, YYYY-MM-DD
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<NewRegistration> for Registration {
    fn from(input: NewRegistration) -> Self {
        Self {
            id: new_id(),
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            class_type: input.class_type,
            preferred_date: input.preferred_date,
            message: input.message,
            timestamp: Utc::now(),
        }
    }
}
