//! In-memory client repository

use std::sync::Arc;

use kernel::id::UserId;
use parking_lot::RwLock;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::error::ClientResult;

#[derive(Clone, Default)]
pub struct MemoryClientRepository {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl MemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientRepository for MemoryClientRepository {
    async fn create(&self, client: &Client) -> ClientResult<()> {
        self.clients.write().push(client.clone());
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> ClientResult<Vec<Client>> {
        let mut owned: Vec<Client> = self
            .clients
            .read()
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
