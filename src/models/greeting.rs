use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    /// Construit la salutation pour un instant donné (tronqué à la seconde)
    pub fn at(time: DateTime<Utc>) -> Self {
        let utc_str = time.format("%Y-%m-%d %H:%M:%S");
        GreetingResponse {
            message: format!("Hello World! The time is {} UTC.", utc_str),
        }
    }

    /// Construit la salutation pour l'heure courante
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}
