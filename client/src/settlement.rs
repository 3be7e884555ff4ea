//! Transfer verification called by the claim flow before it zeroes an inbox.
//!
//! Amounts cross the boundary as decimal strings (JS `bigint.toString()`).

use std::string::String;
use std::vec::Vec;

use vmw_core::settlement::{self, SettlementConfig, TokenTransferTx, TransferLog};
use vmw_core::U256;
use wasm_bindgen::prelude::*;

use crate::{console_error, from_js, to_js};

fn parse_amount(amount: &str) -> Result<U256, String> {
    U256::from_dec_str(amount).map_err(|e| console_error(format!("Invalid amount {amount:?}: {e:?}")))
}

#[wasm_bindgen]
pub fn is_valid_tx_hash(tx_hash: &str) -> bool {
    settlement::is_valid_tx_hash(tx_hash)
}

#[wasm_bindgen]
pub fn is_free_operation_hash(tx_hash: &str) -> bool {
    settlement::is_free_operation_hash(tx_hash)
}

/// Matching VBMS transfer from the receipt logs, or `null`.
#[wasm_bindgen]
pub fn find_matching_transfer(
    logs_js: JsValue,
    expected_from: &str,
    expected_to: &str,
    expected_amount: &str,
) -> Result<JsValue, String> {
    let logs: Vec<TransferLog> = from_js(logs_js, "receipt logs")?;
    let expected_amount = parse_amount(expected_amount)?;

    match settlement::find_matching_transfer(&logs, expected_from, expected_to, expected_amount) {
        Some(transfer) => to_js(&transfer),
        None => Ok(JsValue::NULL),
    }
}

/// Like [`find_matching_transfer`], but a missing transfer is an `Err` for
/// claim flows that must not continue without one.
#[wasm_bindgen]
pub fn require_matching_transfer(
    logs_js: JsValue,
    expected_from: &str,
    expected_to: &str,
    expected_amount: &str,
) -> Result<JsValue, String> {
    let logs: Vec<TransferLog> = from_js(logs_js, "receipt logs")?;
    let transfer = settlement::require_matching_transfer(
        &SettlementConfig::default(),
        &logs,
        expected_from,
        expected_to,
        parse_amount(expected_amount)?,
    )
    .map_err(|e| e.to_string())?;
    to_js(&transfer)
}

/// `Err` carries the mismatch reason for the caller's logs.
#[wasm_bindgen]
pub fn validate_native_transfer(
    actual_from: &str,
    actual_to: &str,
    actual_value: &str,
    expected_from: &str,
    expected_to: &str,
    expected_amount: &str,
) -> Result<(), String> {
    settlement::validate_native_transfer(
        actual_from,
        actual_to,
        parse_amount(actual_value)?,
        expected_from,
        expected_to,
        parse_amount(expected_amount)?,
    )
    .map_err(|e| e.to_string())
}

/// Check a direct `transfer` call to the VBMS token, e.g. a shop payment to the pool.
#[wasm_bindgen]
pub fn verify_token_transfer_tx(
    tx_js: JsValue,
    expected_from: &str,
    expected_to: &str,
    expected_amount: &str,
) -> Result<JsValue, String> {
    let tx: TokenTransferTx = from_js(tx_js, "transaction")?;
    let call = settlement::verify_token_transfer_tx(
        &tx,
        expected_from,
        expected_to,
        parse_amount(expected_amount)?,
        settlement::VBMS_TOKEN_CONTRACT,
    )
    .map_err(|e| e.to_string())?;
    to_js(&call)
}
