use base64::prelude::{BASE64_STANDARD, Engine};

use crate::models::{
    AccountId, Asset, LedgerTransaction, Operation, OperationBody, OperationResult,
    OperationResultBody, OperationResultCode,
};
use crate::transform::errors::TransformError;
use crate::transform::flags::decode_account_flags;
use crate::transform::record::{AssetRecord, OperationDetails, OperationRecord, PriceRecord};
use crate::types::{ApplicationOrder, price_to_decimal, stroops_to_decimal, stroops_to_string};

/// Narrows a transaction's result set down to the inner, kind-specific
/// result recorded at `index`.
///
/// Returns `None` when the results were never populated, the position has
/// no recorded outcome, or the outer code says the operation never
/// executed. Purely a read; no side effects.
pub fn resolve_inner_result(
    results: Option<&[OperationResult]>,
    index: usize,
) -> Option<&OperationResultBody> {
    let outcome = results?.get(index)?;

    if outcome.code != OperationResultCode::Inner {
        return None;
    }

    outcome.result.as_ref()
}

/// Transforms one decoded operation into its normalized output record.
///
/// `order` is the operation's 1-based position within the transaction and
/// must line up with the transaction's result sequence, since path
/// payments read their executed amounts from the result at that position.
///
/// # Errors
/// - `MalformedOperation` when the operation kind code is negative.
/// - `UnsupportedOperationKind` when the code is non-negative but outside
///   the supported set.
///
/// # Panics
/// Panics when a path payment's execution result is missing or of the
/// wrong kind. That means the caller paired the operation with a result
/// sequence that does not belong to its transaction; continuing would
/// emit a silently wrong amount.
pub fn transform_operation(
    operation: &Operation,
    order: ApplicationOrder,
    transaction: &LedgerTransaction,
) -> Result<OperationRecord, TransformError> {
    let kind_code = operation.body.kind_code();

    if kind_code < 0 {
        return Err(TransformError::malformed_operation(order, kind_code));
    }

    let source_account = operation
        .source_account
        .unwrap_or(transaction.source_account);
    let details = extract_details(operation, order, transaction, &source_account)?;

    Ok(OperationRecord {
        source_account: source_account.address(),
        type_code: kind_code,
        application_order: order,
        details,
    })
}

fn extract_details(
    operation: &Operation,
    order: ApplicationOrder,
    transaction: &LedgerTransaction,
    source_account: &AccountId,
) -> Result<OperationDetails, TransformError> {
    let mut details = OperationDetails::default();

    match &operation.body {
        OperationBody::CreateAccount(body) => {
            details.funder = Some(source_account.address());
            details.account = Some(body.destination.address());
            details.starting_balance = Some(stroops_to_decimal(body.starting_balance));
        }
        OperationBody::Payment(body) => {
            details.from = Some(source_account.address());
            details.to = Some(body.destination.address());
            details.set_asset(&body.asset);
            details.amount = Some(stroops_to_decimal(body.amount));
        }
        OperationBody::PathPaymentStrictReceive(body) => {
            let result = resolve_strict_receive_result(transaction, order);

            details.from = Some(source_account.address());
            details.to = Some(body.destination.address());
            details.set_source_asset(&body.send_asset);
            details.set_asset(&body.destination_asset);
            details.amount = Some(stroops_to_decimal(body.destination_amount));
            details.source_max = Some(stroops_to_decimal(body.send_max));
            details.source_amount = Some(stroops_to_decimal(result.send_amount()));
            details.path = asset_path(&body.path);
        }
        OperationBody::ManageSellOffer(body) => {
            details.set_selling_asset(&body.selling);
            details.set_buying_asset(&body.buying);
            details.amount = Some(stroops_to_decimal(body.amount));
            details.price = Some(price_to_decimal(body.price.numerator, body.price.denominator));
            details.price_r = Some(PriceRecord {
                numerator: body.price.numerator,
                denominator: body.price.denominator,
            });
            details.offer_id = Some(body.offer_id);
        }
        OperationBody::CreatePassiveSellOffer(body) => {
            details.set_selling_asset(&body.selling);
            details.set_buying_asset(&body.buying);
            details.amount = Some(stroops_to_decimal(body.amount));
            details.price = Some(price_to_decimal(body.price.numerator, body.price.denominator));
            details.price_r = Some(PriceRecord {
                numerator: body.price.numerator,
                denominator: body.price.denominator,
            });
        }
        OperationBody::SetOptions(body) => {
            details.inflation_dest = body
                .inflation_destination
                .as_ref()
                .map(AccountId::address);

            if let Some(mask) = body.clear_flags {
                let (values, names) = decode_account_flags(mask);
                details.clear_flags = Some(values);
                details.clear_flags_string = Some(names);
            }

            if let Some(mask) = body.set_flags {
                let (values, names) = decode_account_flags(mask);
                details.set_flags = Some(values);
                details.set_flags_string = Some(names);
            }

            details.master_key_weight = body.master_weight;
            details.low_threshold = body.low_threshold;
            details.med_threshold = body.medium_threshold;
            details.high_threshold = body.high_threshold;
            details.home_domain = body.home_domain.clone();

            if let Some(signer) = &body.signer {
                details.signer_key = Some(signer.key.address());
                details.signer_weight = Some(signer.weight);
            }
        }
        OperationBody::ChangeTrust(body) => {
            details.trustor = Some(source_account.address());
            details.trustee = body.line.issuer().map(AccountId::address);
            details.set_asset(&body.line);
            details.limit = Some(stroops_to_decimal(body.limit));
        }
        OperationBody::AllowTrust(body) => {
            let asset = Asset::issued(&body.asset_code, *source_account);

            details.trustee = Some(source_account.address());
            details.trustor = Some(body.trustor.address());
            details.set_asset(&asset);
            details.authorize = Some(body.authorize != 0);
        }
        OperationBody::AccountMerge { destination } => {
            details.account = Some(source_account.address());
            details.into = Some(destination.address());
        }
        OperationBody::Inflation => {}
        OperationBody::ManageData(body) => {
            details.name = Some(body.name.clone());
            details.value = body.value.as_deref().map(|value| BASE64_STANDARD.encode(value));
        }
        OperationBody::BumpSequence(body) => {
            details.bump_to = Some(body.bump_to.to_string());
        }
        OperationBody::ManageBuyOffer(body) => {
            details.set_selling_asset(&body.selling);
            details.set_buying_asset(&body.buying);
            details.amount = Some(stroops_to_decimal(body.buy_amount));
            details.price = Some(price_to_decimal(body.price.numerator, body.price.denominator));
            details.price_r = Some(PriceRecord {
                numerator: body.price.numerator,
                denominator: body.price.denominator,
            });
            details.offer_id = Some(body.offer_id);
        }
        OperationBody::PathPaymentStrictSend(body) => {
            let result = resolve_strict_send_result(transaction, order);

            details.from = Some(source_account.address());
            details.to = Some(body.destination.address());
            details.set_source_asset(&body.send_asset);
            details.set_asset(&body.destination_asset);
            details.source_amount = Some(stroops_to_decimal(body.send_amount));
            details.destination_min = Some(stroops_to_string(body.destination_min));
            details.amount = Some(stroops_to_decimal(result.delivered_amount()));
            details.path = asset_path(&body.path);
        }
        OperationBody::Unsupported { kind_code } => {
            return Err(TransformError::unsupported_operation_kind(*kind_code));
        }
    }

    Ok(details)
}

fn resolve_strict_receive_result(
    transaction: &LedgerTransaction,
    order: ApplicationOrder,
) -> &crate::models::PathPaymentResult {
    let inner = resolve_inner_result(transaction.results.as_deref(), result_index(order));

    match inner {
        Some(OperationResultBody::PathPaymentStrictReceive(result)) => result,
        _ => panic!(
            "strict-receive path payment at order {order} has no matching execution result"
        ),
    }
}

fn resolve_strict_send_result(
    transaction: &LedgerTransaction,
    order: ApplicationOrder,
) -> &crate::models::PathPaymentResult {
    let inner = resolve_inner_result(transaction.results.as_deref(), result_index(order));

    match inner {
        Some(OperationResultBody::PathPaymentStrictSend(result)) => result,
        _ => panic!("strict-send path payment at order {order} has no matching execution result"),
    }
}

fn result_index(order: ApplicationOrder) -> usize {
    order
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .unwrap_or(usize::MAX)
}

fn asset_path(path: &[Asset]) -> Option<Vec<AssetRecord>> {
    if path.is_empty() {
        return None;
    }

    Some(path.iter().map(AssetRecord::from).collect())
}
