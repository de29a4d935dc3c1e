use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct NewStatusCheck {
    pub client_name: String,
}

#[derive(Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_type: String,
    pub preferred_date: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
