//! Repository Traits

use kernel::id::UserId;

use crate::domain::entity::Client;
use crate::error::ClientResult;

/// Client record store
#[trait_variant::make(ClientRepository: Send)]
pub trait LocalClientRepository {
    async fn create(&self, client: &Client) -> ClientResult<()>;

    /// Clients owned by `owner_id`, newest first
    async fn list_by_owner(&self, owner_id: UserId) -> ClientResult<Vec<Client>>;
}
