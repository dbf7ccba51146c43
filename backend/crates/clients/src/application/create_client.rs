//! Create Client Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::domain::value_object::ClientName;
use crate::error::ClientResult;

/// Raw form values
pub struct CreateClientInput {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

pub struct CreateClientUseCase<C>
where
    C: ClientRepository,
{
    client_repo: Arc<C>,
}

impl<C> CreateClientUseCase<C>
where
    C: ClientRepository,
{
    pub fn new(client_repo: Arc<C>) -> Self {
        Self { client_repo }
    }

    /// The owner always comes from the session, never from the form.
    pub async fn execute(&self, owner_id: UserId, input: CreateClientInput) -> ClientResult<Client> {
        let full_name = ClientName::new(&input.full_name)?;

        let client = Client::new(
            owner_id,
            full_name,
            input.email.as_deref(),
            input.phone.as_deref(),
            input.notes.as_deref(),
        );

        self.client_repo.create(&client).await?;

        tracing::info!(
            client_id = %client.client_id,
            owner_id = %owner_id,
            "Client created"
        );

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::infra::memory::MemoryClientRepository;

    fn input(name: &str) -> CreateClientInput {
        CreateClientInput {
            full_name: name.to_string(),
            email: Some(" client@example.com ".to_string()),
            phone: Some("".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_client() {
        let repo = Arc::new(MemoryClientRepository::new());
        let owner = UserId::new();

        let client = CreateClientUseCase::new(repo.clone())
            .execute(owner, input(" Acme Trading "))
            .await
            .unwrap();

        assert_eq!(client.owner_id, owner);
        assert_eq!(client.full_name.as_str(), "Acme Trading");
        assert_eq!(client.email.as_deref(), Some("client@example.com"));
        assert_eq!(client.phone, None);
        assert_eq!(repo.list_by_owner(owner).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_stores_nothing() {
        let repo = Arc::new(MemoryClientRepository::new());
        let owner = UserId::new();

        let result = CreateClientUseCase::new(repo.clone())
            .execute(owner, input("   "))
            .await;

        assert!(matches!(result, Err(ClientError::NameRequired)));
        assert!(repo.list_by_owner(owner).await.unwrap().is_empty());
    }
}
