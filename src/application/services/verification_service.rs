/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::funding::VerificationService;
use crate::application::services::common::{create_one, fetch_one, nested_path, resource_path, update_one};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::ConfirmationAmounts;
use crate::model::responses::VerificationResponse;
use crate::presentation::verification::Verification;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the bank account verification service
pub struct VerificationServiceImpl {
    http_client: Arc<HttpClient>,
}

impl VerificationServiceImpl {
    /// Creates a new instance of the verification service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl VerificationService for VerificationServiceImpl {
    async fn create(&self, bank_account_id: &str) -> Result<Verification, AppError> {
        info!("Verifying bank account: {}", bank_account_id);
        let path = nested_path("bank_accounts", bank_account_id, "verifications")?;
        create_one::<VerificationResponse, ()>(&self.http_client, &path, None).await
    }

    async fn fetch(&self, verification_id: &str) -> Result<Verification, AppError> {
        debug!("Fetching verification: {}", verification_id);
        let path = resource_path("verifications", verification_id)?;
        fetch_one::<VerificationResponse>(&self.http_client, &path).await
    }

    async fn confirm(
        &self,
        verification_id: &str,
        amount_1: i64,
        amount_2: i64,
    ) -> Result<Verification, AppError> {
        info!("Confirming verification: {}", verification_id);
        let path = resource_path("verifications", verification_id)?;
        let body = ConfirmationAmounts { amount_1, amount_2 };
        let verification =
            update_one::<VerificationResponse, _>(&self.http_client, &path, &body).await?;
        debug!(
            "Verification {} is {:?} after {} attempts, {} remaining",
            verification_id,
            verification.verification_status,
            verification.attempts,
            verification.attempts_remaining
        );
        Ok(verification)
    }
}
