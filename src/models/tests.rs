use anyhow::Result;

use super::{
    AccountId, Asset, BumpSequenceOp, ChangeTrustOp, CreateAccountOp, LedgerTransaction,
    Operation, OperationBody, PathPaymentResult, Signer, SignerKey, SimplePaymentResult,
};
use crate::models::ClaimedOffer;

fn issuer() -> AccountId {
    AccountId::new([4; 32])
}

#[test]
fn test_kind_codes_match_the_wire_protocol() {
    let cases: Vec<(OperationBody, i32)> = vec![
        (
            OperationBody::CreateAccount(CreateAccountOp {
                destination: issuer(),
                starting_balance: 1,
            }),
            0,
        ),
        (
            OperationBody::AccountMerge {
                destination: issuer(),
            },
            8,
        ),
        (OperationBody::Inflation, 9),
        (OperationBody::BumpSequence(BumpSequenceOp { bump_to: 1 }), 11),
        (OperationBody::Unsupported { kind_code: 20 }, 20),
        (OperationBody::Unsupported { kind_code: -1 }, -1),
    ];

    for (body, expected) in cases {
        assert_eq!(body.kind_code(), expected);
    }
}

#[test]
fn test_asset_renders_as_type_code_issuer_triple() {
    let native = Asset::Native;
    let short = Asset::issued("USDT", issuer());
    let long = Asset::issued("MOBILEMONEY", issuer());

    assert_eq!(native.type_string(), "native");
    assert_eq!(native.code(), None);
    assert_eq!(native.issuer(), None);

    assert_eq!(short.type_string(), "credit_alphanum4");
    assert_eq!(short.code(), Some("USDT"));
    assert_eq!(short.issuer(), Some(&issuer()));

    assert_eq!(long.type_string(), "credit_alphanum12");
    assert_eq!(long.code(), Some("MOBILEMONEY"));
}

#[test]
fn test_account_id_serde_uses_the_string_address() -> Result<()> {
    let account = AccountId::new([0; 32]);
    let encoded = serde_json::to_string(&account)?;

    assert_eq!(
        encoded,
        "\"GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF\""
    );

    let decoded: AccountId = serde_json::from_str(&encoded)?;

    assert_eq!(decoded, account);
    assert!(serde_json::from_str::<AccountId>("\"not an address\"").is_err());

    Ok(())
}

#[test]
fn test_signer_key_serde_distinguishes_key_flavors() -> Result<()> {
    let keys = [
        SignerKey::Ed25519([1; 32]),
        SignerKey::PreAuthTx([2; 32]),
        SignerKey::HashX([3; 32]),
    ];

    for key in keys {
        let encoded = serde_json::to_string(&Signer { key, weight: 2 })?;
        let decoded: Signer = serde_json::from_str(&encoded)?;

        assert_eq!(decoded.key, key);
        assert_eq!(decoded.weight, 2);
    }

    assert!(SignerKey::Ed25519([1; 32]).address().starts_with('G'));
    assert!(SignerKey::PreAuthTx([2; 32]).address().starts_with('T'));
    assert!(SignerKey::HashX([3; 32]).address().starts_with('X'));

    Ok(())
}

#[test]
fn test_operation_body_serializes_with_a_kind_tag() -> Result<()> {
    let operation = Operation {
        source_account: None,
        body: OperationBody::ChangeTrust(ChangeTrustOp {
            line: Asset::issued("USDT", issuer()),
            limit: 500,
        }),
    };

    let encoded = serde_json::to_value(&operation)?;

    assert_eq!(encoded["body"]["kind"], "change_trust");
    assert_eq!(encoded["body"]["line"]["asset_type"], "credit_alphanum4");
    assert_eq!(encoded["body"]["limit"], 500);

    let decoded: Operation = serde_json::from_value(encoded)?;

    assert_eq!(decoded, operation);

    Ok(())
}

#[test]
fn test_path_payment_result_amount_accessors() {
    let direct = PathPaymentResult {
        offers: Vec::new(),
        last: SimplePaymentResult {
            destination: issuer(),
            asset: Asset::Native,
            amount: 8946764349,
        },
    };

    assert_eq!(direct.send_amount(), 8946764349);
    assert_eq!(direct.delivered_amount(), 8946764349);

    let hopped = PathPaymentResult {
        offers: vec![
            ClaimedOffer {
                seller: issuer(),
                offer_id: 1,
                asset_sold: Asset::issued("USDT", issuer()),
                amount_sold: 70,
                asset_bought: Asset::Native,
                amount_bought: 100,
            },
            ClaimedOffer {
                seller: issuer(),
                offer_id: 2,
                asset_sold: Asset::Native,
                amount_sold: 60,
                asset_bought: Asset::issued("USDT", issuer()),
                amount_bought: 70,
            },
        ],
        last: SimplePaymentResult {
            destination: issuer(),
            asset: Asset::Native,
            amount: 60,
        },
    };

    assert_eq!(hopped.send_amount(), 100);
    assert_eq!(hopped.delivered_amount(), 60);
}

#[test]
fn test_transaction_round_trips_through_json() -> Result<()> {
    let transaction = LedgerTransaction {
        source_account: AccountId::new([3; 32]),
        operations: vec![Operation {
            source_account: Some(issuer()),
            body: OperationBody::Inflation,
        }],
        results: None,
    };

    let encoded = serde_json::to_string(&transaction)?;
    let decoded: LedgerTransaction = serde_json::from_str(&encoded)?;

    assert_eq!(decoded, transaction);

    Ok(())
}
