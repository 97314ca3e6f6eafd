use super::{signers_and_factors, PURPOSE};
use crate::{account, get_service, royalty_fee};
use wallet_api::{
    domain::fee::{FeePayerCandidate, ReviewedTransaction},
    BusinessError, FeePayerError, ServiceError,
};
use wallet_chain_interact::radix::{
    consts::PREDEFINED_FEE_CONSTANTS,
    fee::{FeeLocks, FeeSummary, TransactionFee},
    protocol::{execution::ExecutionSummary, manifest::ManifestSummary},
};
use wallet_types::chain::{
    address::AccountAddress,
    entity::{Account, Entity},
    network::NetworkId,
};

fn candidate(name: &str, balance: &str) -> FeePayerCandidate {
    FeePayerCandidate::new(account(name), crate::dec(balance))
}

/// `alice` pays and is the only signer.
fn reviewed_paid_by_alice() -> ReviewedTransaction {
    let (transaction_signers, signing_factors) = signers_and_factors(vec![account("alice").into()]);
    let mut transaction_fee = royalty_fee("10", "0");
    transaction_fee.add_lock_fee_cost();
    transaction_fee.update_signatures_cost(signing_factors.expected_signature_count());

    ReviewedTransaction {
        network_id: NetworkId::Stokenet,
        execution_summary: ExecutionSummary::default(),
        fee_payer: Some(candidate("alice", "100")),
        transaction_fee,
        transaction_signers,
        signing_factors,
        signing_purpose: PURPOSE,
    }
}

#[tokio::test]
async fn test_replace_drops_previous_payer() {
    let env = get_service(vec![]);
    let reviewed = reviewed_paid_by_alice();

    let res = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &reviewed, &ManifestSummary::default())
        .await
        .unwrap();

    assert_eq!(res.fee_payer, Some(candidate("bob", "50")));
    assert_eq!(
        res.transaction_signers.intent_signer_entities_or_empty(),
        vec![Entity::from(account("bob"))]
    );
    assert_eq!(res.signing_factors.expected_signature_count(), 1);
    assert_eq!(
        res.transaction_fee.fee_summary().signatures_cost(),
        PREDEFINED_FEE_CONSTANTS.signatures_cost(1)
    );
    // the lock fee instruction was already there
    assert_eq!(
        res.transaction_fee.fee_summary().lock_fee_cost(),
        PREDEFINED_FEE_CONSTANTS.lock_fee_instruction_cost
    );
}

#[tokio::test]
async fn test_replace_keeps_previous_payer_needing_auth() {
    let env = get_service(vec![]);
    let reviewed = reviewed_paid_by_alice();
    let manifest = ManifestSummary {
        accounts_requiring_auth: vec![account("alice").address],
        ..Default::default()
    };

    let res = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &reviewed, &manifest)
        .await
        .unwrap();

    assert_eq!(
        res.transaction_signers.intent_signer_entities_or_empty(),
        vec![Entity::from(account("alice")), Entity::from(account("bob"))]
    );
    assert_eq!(
        res.transaction_fee.fee_summary().signatures_cost(),
        PREDEFINED_FEE_CONSTANTS.signatures_cost(2)
    );
}

#[tokio::test]
async fn test_replace_with_same_payer_is_noop() {
    let env = get_service(vec![]);
    let reviewed = reviewed_paid_by_alice();

    // balance snapshot differs, the account is the same
    let res = env
        .service
        .replace_fee_payer(candidate("alice", "1"), &reviewed, &ManifestSummary::default())
        .await
        .unwrap();

    assert_eq!(res.transaction_fee, reviewed.transaction_fee);
    assert_eq!(res.transaction_signers, reviewed.transaction_signers);
    assert_eq!(env.resolver.calls(), 0);
}

#[tokio::test]
async fn test_replace_is_idempotent() {
    let env = get_service(vec![]);
    let reviewed = reviewed_paid_by_alice();
    let manifest = ManifestSummary::default();

    let once = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &reviewed, &manifest)
        .await
        .unwrap();
    let twice = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &once, &manifest)
        .await
        .unwrap();

    assert_eq!(twice.transaction_fee, once.transaction_fee);
    assert_eq!(twice.transaction_signers, once.transaction_signers);
    assert_eq!(twice.signing_factors, once.signing_factors);
}

#[tokio::test]
async fn test_first_payer_of_free_transaction() {
    let env = get_service(vec![]);
    let (transaction_signers, signing_factors) = signers_and_factors(vec![]);
    let reviewed = ReviewedTransaction {
        network_id: NetworkId::Stokenet,
        execution_summary: ExecutionSummary::default(),
        fee_payer: None,
        transaction_fee: TransactionFee::new(FeeSummary::default(), FeeLocks::default()),
        transaction_signers,
        signing_factors,
        signing_purpose: PURPOSE,
    };

    let res = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &reviewed, &ManifestSummary::default())
        .await
        .unwrap();

    let summary = res.transaction_fee.fee_summary();
    assert_eq!(summary.lock_fee_cost(), PREDEFINED_FEE_CONSTANTS.lock_fee_instruction_cost);
    assert_eq!(summary.notarizing_cost(), PREDEFINED_FEE_CONSTANTS.notarizing_cost);
    assert_eq!(summary.signatures_cost(), PREDEFINED_FEE_CONSTANTS.signature_cost);
    assert!(!res.transaction_signers.notary_is_signatory());
}

#[tokio::test]
async fn test_resolver_failure_keeps_state() {
    let env = get_service(vec![]);
    env.resolver.set_fail(true);
    let reviewed = reviewed_paid_by_alice();
    let before = reviewed.clone();

    let res = env
        .service
        .replace_fee_payer(candidate("bob", "50"), &reviewed, &ManifestSummary::default())
        .await;

    assert!(matches!(res, Err(ServiceError::System(_))));
    assert_eq!(reviewed.fee_payer, before.fee_payer);
    assert_eq!(reviewed.transaction_fee, before.transaction_fee);
    assert_eq!(reviewed.transaction_signers, before.transaction_signers);
}

#[tokio::test]
async fn test_payer_from_other_network() {
    let env = get_service(vec![]);
    let reviewed = reviewed_paid_by_alice();
    let mainnet = FeePayerCandidate::new(
        Account::new(AccountAddress::try_from("account_rdx1elsewhere").unwrap(), "Mainnet"),
        crate::dec("100"),
    );

    let res = env
        .service
        .replace_fee_payer(mainnet, &reviewed, &ManifestSummary::default())
        .await;

    let Err(err) = res else {
        panic!("expected network mismatch");
    };
    assert!(matches!(
        err,
        ServiceError::Business(BusinessError::FeePayer(FeePayerError::NetworkMismatch { .. }))
    ));
    assert_eq!(err.get_status_code(), Some(4202));
    assert_eq!(env.resolver.calls(), 0);
}
