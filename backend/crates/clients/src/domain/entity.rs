//! Client entity

use chrono::{DateTime, Utc};
use kernel::id::{ClientId, UserId};

use crate::domain::value_object::{ClientName, optional_text};

/// A represented party, owned by the user who created it
#[derive(Debug, Clone)]
pub struct Client {
    pub client_id: ClientId,
    pub owner_id: UserId,
    pub full_name: ClientName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(
        owner_id: UserId,
        full_name: ClientName,
        email: Option<&str>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Self {
        Self {
            client_id: ClientId::new(),
            owner_id,
            full_name,
            email: optional_text(email),
            phone: optional_text(phone),
            notes: optional_text(notes),
            created_at: Utc::now(),
        }
    }
}
