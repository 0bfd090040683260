// Integration tests for bank accounts and verifications

use crate::common;
use balanced_client::prelude::*;
use tracing::info;

#[test]
#[ignore]
fn test_verification_lifecycle() {
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let bank_account = client
            .bank_accounts()
            .create(&common::test_bank_account())
            .await
            .expect("Failed to create bank account");
        let bank_account_id = bank_account.id.expect("bank account has an id");

        let verification = client
            .verifications()
            .create(&bank_account_id)
            .await
            .expect("Failed to create verification");
        assert_eq!(verification.attempts, 0);
        assert_eq!(verification.attempts_remaining, VERIFICATION_ATTEMPTS);
        let verification_id = verification.id.expect("verification has an id");

        // the sandbox deposits 1 and 1 cents
        let confirmed = client
            .verifications()
            .confirm(&verification_id, 1, 1)
            .await
            .expect("Failed to confirm verification");
        info!("Verification is {:?}", confirmed.verification_status);
        assert!(confirmed.is_verified());

        let debit = client
            .bank_accounts()
            .debit(&bank_account_id, &Debit::new(1000, "integration debit"))
            .await
            .expect("Failed to debit bank account");
        assert_eq!(debit.amount, Some(1000));
    });
}

#[test]
#[ignore]
fn test_credit_bank_account_and_reverse() {
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let bank_account = client
            .bank_accounts()
            .create(&common::test_bank_account())
            .await
            .expect("Failed to create bank account");
        let bank_account_id = bank_account.id.expect("bank account has an id");

        let credit = client
            .credits()
            .create_to_bank_account(&bank_account_id, &Credit::new(1500, "integration payout"))
            .await
            .expect("Failed to credit bank account");
        assert_eq!(credit.amount, 1500);
        let credit_id = credit.id.expect("credit has an id");

        let reversal = client
            .reversals()
            .create(&credit_id, &Reversal::default())
            .await
            .expect("Failed to reverse credit");
        info!("Reversal {:?} is {:?}", reversal.id, reversal.status);

        let credits = client
            .credits()
            .list_for_bank_account(&bank_account_id, &ListParams::new())
            .await
            .expect("Failed to list credits");
        assert!(!credits.is_empty());
    });
}
