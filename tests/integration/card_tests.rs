// Integration tests for card endpoints

use crate::common;
use balanced_client::prelude::*;
use tracing::info;

#[test]
#[ignore]
fn test_create_card() {
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let card = client
            .cards()
            .create(&common::test_card())
            .await
            .expect("Failed to create card");

        assert!(!card.id.as_deref().unwrap_or_default().is_empty());
        assert!(!card.href.as_deref().unwrap_or_default().is_empty());
        info!("Created card {:?} ({:?})", card.id, card.brand);
    });
}

#[test]
#[ignore]
fn test_delete_card_then_list() {
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let before = client
            .cards()
            .list(&ListParams::new())
            .await
            .expect("Failed to list cards");

        let card = client
            .cards()
            .create(&common::test_card())
            .await
            .expect("Failed to create card");
        let id = card.id.expect("created card has an id");

        let deleted = client.cards().delete(&id).await.expect("Failed to delete card");
        assert!(deleted);

        let after = client
            .cards()
            .list(&ListParams::new())
            .await
            .expect("Failed to list cards");
        info!(
            "Cards before create: {}, after delete: {}",
            before.pagination.total, after.pagination.total
        );
        assert_eq!(after.pagination.total, before.pagination.total);

        // deleted cards stay addressable by id
        let fetched = client.cards().fetch(&id).await.expect("Failed to fetch card");
        assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
    });
}

#[test]
#[ignore]
fn test_charge_card_and_refund() {
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let card = client
            .cards()
            .create(&common::test_card())
            .await
            .expect("Failed to create card");
        let card_id = card.id.expect("created card has an id");

        let debit = client
            .cards()
            .charge(&card_id, &Debit::new(5000, "integration charge"))
            .await
            .expect("Failed to charge card");
        assert_eq!(debit.amount, Some(5000));
        assert_eq!(debit.status, Some(Status::Succeeded));

        let debit_id = debit.id.expect("debit has an id");
        let refund = client
            .debits()
            .refund(&debit_id, &Refund::default())
            .await
            .expect("Failed to refund debit");
        info!("Refund {:?} is {:?}", refund.id, refund.status);
        assert_eq!(refund.amount, Some(5000));
    });
}
