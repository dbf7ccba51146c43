//! List Clients Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::error::ClientResult;

pub struct ListClientsUseCase<C>
where
    C: ClientRepository,
{
    client_repo: Arc<C>,
}

impl<C> ListClientsUseCase<C>
where
    C: ClientRepository,
{
    pub fn new(client_repo: Arc<C>) -> Self {
        Self { client_repo }
    }

    /// Clients owned by the signed-in user, newest first.
    pub async fn execute(&self, owner_id: UserId) -> ClientResult<Vec<Client>> {
        self.client_repo.list_by_owner(owner_id).await
    }
}
