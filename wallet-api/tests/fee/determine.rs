use super::request;
use crate::{account, dec, get_service, royalty_fee};
use std::sync::atomic::Ordering;
use wallet_api::{
    domain::fee::{FeeValidationOutcome, ValidationNote},
    BusinessError, FeePayerError, ServiceError,
};
use wallet_chain_interact::radix::{
    consts::PREDEFINED_FEE_CONSTANTS, protocol::manifest::ManifestSummary,
};
use wallet_types::chain::{address::AccountAddress, entity::Account};

#[tokio::test]
async fn test_single_empty_candidate_is_still_selected() {
    let env = get_service(vec![(account("empty"), Some("0"))]);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(res.validation, FeeValidationOutcome::InsufficientBalance);
    let result = res.result.unwrap();
    assert_eq!(result.payer.account, account("empty"));
    assert_eq!(res.selection.selected(), Some(&result.payer));
    assert_eq!(res.selection.candidates().len(), 1);
    assert!(env.balances.refreshed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_fee_locked_by_manifest() {
    let env = get_service(vec![(account("alice"), Some("100"))]);
    let req = request(royalty_fee("10", "10"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(
        res.validation,
        FeeValidationOutcome::Valid(Some(ValidationNote::FeePayerSuperfluous))
    );
    assert!(res.result.is_none());
    assert!(res.selection.selected().is_none());
    assert_eq!(env.resolver.calls(), 0);
}

#[tokio::test]
async fn test_fee_partly_locked_by_manifest() {
    let env = get_service(vec![(account("alice"), Some("100"))]);
    let fee = royalty_fee("10", "6");
    assert_eq!(fee.total_fee().max, dec("4"));
    let req = request(fee, vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(
        res.validation,
        FeeValidationOutcome::Valid(Some(ValidationNote::IntroducesNewAccount))
    );
    let result = res.result.unwrap();
    assert_eq!(result.payer.account, account("alice"));
    // 4 left to pay plus alice's signature with the 15% margin
    assert_eq!(result.updated_fee.total_fee().max, dec("4.012764709717"));
    assert_eq!(env.resolver.calls(), 1);
}

#[tokio::test]
async fn test_signer_with_enough_balance_is_preferred() {
    let env = get_service(vec![
        (account("rich"), Some("1000")),
        (account("signer"), Some("20")),
    ]);
    let fee = royalty_fee("10", "0");
    let req = request(fee, vec![account("signer").into()], ManifestSummary::default());
    let signers = req.transaction_signers.clone();

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(res.validation, FeeValidationOutcome::Valid(None));
    let result = res.result.unwrap();
    assert_eq!(result.payer.account, account("signer"));
    assert_eq!(result.updated_fee, fee);
    assert_eq!(result.transaction_signers, signers);
    assert_eq!(env.resolver.calls(), 0);
}

#[tokio::test]
async fn test_involved_account_becomes_signer() {
    let env = get_service(vec![
        (account("rich"), Some("1000")),
        (account("poor"), Some("5")),
        (account("receiver"), Some("20")),
    ]);
    let manifest = ManifestSummary {
        accounts_withdrawn_from: vec![account("poor").address],
        accounts_deposited_into: vec![account("receiver").address],
        ..Default::default()
    };
    let req = request(royalty_fee("10", "0"), vec![], manifest);

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(
        res.validation,
        FeeValidationOutcome::Valid(Some(ValidationNote::IntroducesNewAccount))
    );
    let result = res.result.unwrap();
    assert_eq!(result.payer.account, account("receiver"));
    assert!(result
        .transaction_signers
        .contains_account(&account("receiver").address));
    assert_eq!(result.signing_factors.expected_signature_count(), 1);
    assert_eq!(
        result.updated_fee.fee_summary().signatures_cost(),
        PREDEFINED_FEE_CONSTANTS.signature_cost
    );
    // 10 royalty + one signature with the 15% margin
    assert_eq!(result.updated_fee.total_fee().max, dec("10.012764709717"));
    // the withdrawn-from account was tried first
    assert_eq!(env.resolver.calls(), 2);
}

#[tokio::test]
async fn test_falls_back_to_highest_balance() {
    let env = get_service(vec![
        (account("first"), Some("3")),
        (account("second"), Some("8")),
        (account("third"), Some("8")),
    ]);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(res.validation, FeeValidationOutcome::InsufficientBalance);
    let result = res.result.unwrap();
    assert_eq!(result.payer.account, account("second"));
    assert!(result
        .transaction_signers
        .contains_account(&account("second").address));
}

#[tokio::test]
async fn test_uninvolved_account_that_can_pay() {
    let env = get_service(vec![(account("saver"), Some("11"))]);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(
        res.validation,
        FeeValidationOutcome::Valid(Some(ValidationNote::IntroducesNewAccount))
    );
    assert_eq!(res.result.unwrap().payer.account, account("saver"));
}

#[tokio::test]
async fn test_signature_cost_can_make_payer_insufficient() {
    // covers the base fee but not its own signature
    let env = get_service(vec![(account("exact"), Some("10"))]);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await.unwrap();

    assert_eq!(res.validation, FeeValidationOutcome::InsufficientBalance);
    assert_eq!(res.result.unwrap().payer.account, account("exact"));
}

#[tokio::test]
async fn test_no_candidates() {
    let mainnet = Account::new(
        AccountAddress::try_from("account_rdx1elsewhere").unwrap(),
        "Mainnet",
    );
    let env = get_service(vec![(account("unknown"), None), (mainnet, Some("100"))]);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await;

    let Err(err) = res else {
        panic!("expected no candidates error");
    };
    assert!(matches!(
        err,
        ServiceError::Business(BusinessError::FeePayer(FeePayerError::NoFeePayerCandidates))
    ));
    assert_eq!(err.get_status_code(), Some(4200));
}

#[tokio::test]
async fn test_resolver_failure_is_surfaced() {
    let env = get_service(vec![(account("saver"), Some("100"))]);
    env.resolver.set_fail(true);
    let req = request(royalty_fee("10", "0"), vec![], ManifestSummary::default());

    let res = env.service.determine_fee_payer(req).await;

    assert!(matches!(res, Err(ServiceError::System(_))));
}
