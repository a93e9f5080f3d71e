//! Account operations: account info, credits, and API keys.

use crate::{
    client::Client,
    error::{Error, Result},
    metadata::RequestMetadata,
    types::{
        Account, ApiKey, ApiKeyUsage, CreateApiKeyRequest, CreateApiKeyResponse,
        CreditTransaction, Credits,
    },
};
use http::Method;

/// Options for listing credit transactions.
#[derive(Debug, Clone, Default)]
pub struct ListCreditTransactionsOptions {
    /// Maximum number of transactions to return.
    pub limit: Option<u32>,
    /// Number of transactions to skip.
    pub offset: Option<u32>,
}

/// Account-related API operations.
///
/// Obtained from [`Client::account`].
#[derive(Clone)]
pub struct AccountService {
    client: Client,
}

impl AccountService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves account information.
    pub async fn get(&self) -> Result<Account> {
        let meta = RequestMetadata::new(Method::GET, "/account");
        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves the credit balance.
    pub async fn credits(&self) -> Result<Credits> {
        let meta = RequestMetadata::new(Method::GET, "/credits");
        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves credit transaction history.
    pub async fn credit_transactions(
        &self,
        options: &ListCreditTransactionsOptions,
    ) -> Result<Vec<CreditTransaction>> {
        let mut meta = RequestMetadata::new(Method::GET, "/credits/transactions");
        if let Some(limit) = options.limit {
            meta = meta.query("limit", limit.to_string());
        }
        if let Some(offset) = options.offset {
            meta = meta.query("offset", offset.to_string());
        }

        self.client.request(meta, None::<&()>).await
    }

    /// Lists all API keys for the account.
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>> {
        let meta = RequestMetadata::new(Method::GET, "/keys");
        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves a specific API key by ID.
    pub async fn get_api_key(&self, key_id: impl AsRef<str>) -> Result<ApiKey> {
        let key_id = key_id.as_ref();
        if key_id.is_empty() {
            return Err(Error::validation("API key ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/keys").segment(key_id);
        self.client.request(meta, None::<&()>).await
    }

    /// Retrieves usage statistics for an API key.
    pub async fn api_key_usage(&self, key_id: impl AsRef<str>) -> Result<ApiKeyUsage> {
        let key_id = key_id.as_ref();
        if key_id.is_empty() {
            return Err(Error::validation("API key ID is required"));
        }

        let meta = RequestMetadata::new(Method::GET, "/keys")
            .segment(key_id)
            .segment("usage");
        self.client.request(meta, None::<&()>).await
    }

    /// Creates a new API key. The full key value is only returned once.
    pub async fn create_api_key(
        &self,
        request: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse> {
        if request.name.is_empty() {
            return Err(Error::validation("API key name is required"));
        }

        let meta = RequestMetadata::new(Method::POST, "/keys");
        self.client.request(meta, Some(request)).await
    }

    /// Revokes an API key.
    pub async fn revoke_api_key(&self, key_id: impl AsRef<str>) -> Result<()> {
        let key_id = key_id.as_ref();
        if key_id.is_empty() {
            return Err(Error::validation("API key ID is required"));
        }

        let meta = RequestMetadata::new(Method::DELETE, "/keys").segment(key_id);
        self.client.request_empty(meta, None::<&()>).await
    }
}
