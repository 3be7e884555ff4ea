//! VBMS settlement verifier
//!
//! Checks that a fetched transaction actually moved at least the claimed
//! amount between the claimed parties before the host zeroes a balance.
//! Every check is fail-closed: any structural doubt means no match.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use hex_literal::hex;
use primitive_types::U256;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::error::TransferMismatch;

/// VBMS ERC20 token on Base
pub const VBMS_TOKEN_CONTRACT: &str = "0xb03439567cd22f278b21e1ffcdfb8e1696763827";
/// Pool that receives VBMS shop and entry payments
pub const VBMS_POOL_TROLL: &str = "0x062b914668f3fd35c3ae02e699cb82e1cf4be18b";

/// keccak256("Transfer(address,address,uint256)")
pub const TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
pub const TRANSFER_TOPIC_BYTES: [u8; 32] =
    hex!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// `transfer(address,uint256)` function selector
pub const TRANSFER_SELECTOR: [u8; 4] = hex!("a9059cbb");

/// Sentinel hash recorded for operations that needed no transaction
pub const FREE_OPERATION_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// VBMS has 18 decimals
pub const TOKEN_DECIMALS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct SettlementConfig {
    /// Only logs emitted by this contract are considered
    pub token_contract: String,
}

impl SettlementConfig {
    pub fn new(token_contract: &str) -> Self {
        Self {
            token_contract: token_contract.to_ascii_lowercase(),
        }
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self::new(VBMS_TOKEN_CONTRACT)
    }
}

/// A raw EVM log in JSON-RPC receipt shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct TransferLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
}

/// A decoded ERC20 Transfer event. Addresses are lower-case `0x` hex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct ParsedTransfer {
    pub from: String,
    pub to: String,
    pub amount: U256,
    pub token_address: String,
}

/// `0x` followed by exactly 64 hex digits.
pub fn is_valid_tx_hash(tx_hash: &str) -> bool {
    match tx_hash.strip_prefix("0x") {
        Some(digits) => digits.len() == 64 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn is_free_operation_hash(tx_hash: &str) -> bool {
    tx_hash == FREE_OPERATION_HASH
}

/// Whole tokens to base units.
pub fn to_wei(tokens: u64) -> U256 {
    U256::from(tokens) * U256::exp10(TOKEN_DECIMALS)
}

fn decode_hex(value: &str) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        return hex::decode(padded).ok();
    }
    hex::decode(digits).ok()
}

/// Big-endian unsigned integer of at most 32 bytes. Empty input is rejected.
fn decode_amount(data: &str) -> Option<U256> {
    let bytes = decode_hex(data)?;
    if bytes.is_empty() || bytes.len() > 32 {
        return None;
    }
    Some(U256::from_big_endian(&bytes))
}

fn format_address(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Low 20 bytes of a 32-byte indexed topic
fn topic_address(topic: &str) -> Option<String> {
    let bytes = decode_hex(topic)?;
    if bytes.len() != 32 {
        return None;
    }
    Some(format_address(&bytes[12..]))
}

/// Decode an ERC20 Transfer event. `None` for anything else, including
/// ERC721 transfers, which carry a fourth indexed topic.
pub fn parse_transfer_log(log: &TransferLog) -> Option<ParsedTransfer> {
    if log.topics.len() != 3 {
        return None;
    }
    if decode_hex(&log.topics[0])?.as_slice() != TRANSFER_TOPIC_BYTES {
        return None;
    }

    Some(ParsedTransfer {
        from: topic_address(&log.topics[1])?,
        to: topic_address(&log.topics[2])?,
        amount: decode_amount(&log.data)?,
        token_address: log.address.to_ascii_lowercase(),
    })
}

/// First VBMS transfer in `logs` from `expected_from` to `expected_to` of at
/// least `expected_amount`.
pub fn find_matching_transfer(
    logs: &[TransferLog],
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
) -> Option<ParsedTransfer> {
    find_matching_transfer_with(
        &SettlementConfig::default(),
        logs,
        expected_from,
        expected_to,
        expected_amount,
    )
}

/// [`find_matching_transfer`] against the configured token contract.
pub fn find_matching_transfer_with(
    config: &SettlementConfig,
    logs: &[TransferLog],
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
) -> Option<ParsedTransfer> {
    let found = logs
        .iter()
        .filter(|log| log.address.eq_ignore_ascii_case(&config.token_contract))
        .filter_map(parse_transfer_log)
        .find(|t| {
            t.from.eq_ignore_ascii_case(expected_from)
                && t.to.eq_ignore_ascii_case(expected_to)
                && t.amount >= expected_amount
        });

    match &found {
        Some(t) => log::debug!(
            "find_matching_transfer: {} -> {} amount {}",
            t.from,
            t.to,
            t.amount
        ),
        None => log::warn!(
            "find_matching_transfer: no transfer of >= {} from {} to {} in {} logs",
            expected_amount,
            expected_from,
            expected_to,
            logs.len()
        ),
    }
    found
}

/// [`find_matching_transfer_with`] for claim flows that must fail closed:
/// no qualifying log is [`TransferMismatch::NoMatchingLog`].
pub fn require_matching_transfer(
    config: &SettlementConfig,
    logs: &[TransferLog],
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
) -> Result<ParsedTransfer, TransferMismatch> {
    find_matching_transfer_with(config, logs, expected_from, expected_to, expected_amount)
        .ok_or(TransferMismatch::NoMatchingLog)
}

fn check_parties(
    actual_from: &str,
    actual_to: &str,
    expected_from: &str,
    expected_to: &str,
) -> Result<(), TransferMismatch> {
    if !actual_from.eq_ignore_ascii_case(expected_from) {
        return Err(TransferMismatch::From {
            expected: expected_from.to_string(),
            actual: actual_from.to_string(),
        });
    }
    if !actual_to.eq_ignore_ascii_case(expected_to) {
        return Err(TransferMismatch::To {
            expected: expected_to.to_string(),
            actual: actual_to.to_string(),
        });
    }
    Ok(())
}

fn check_amount(actual: U256, expected: U256) -> Result<(), TransferMismatch> {
    if actual < expected {
        return Err(TransferMismatch::Amount { expected, actual });
    }
    Ok(())
}

/// Check a native-asset transfer taken straight from the transaction fields.
pub fn validate_native_transfer(
    actual_from: &str,
    actual_to: &str,
    actual_value: U256,
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
) -> Result<(), TransferMismatch> {
    check_parties(actual_from, actual_to, expected_from, expected_to)
        .and_then(|()| check_amount(actual_value, expected_amount))
        .inspect_err(|e| log::warn!("validate_native_transfer: {e}"))
}

/// Recipient and amount of an ERC20 `transfer(address,uint256)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct TransferCall {
    pub to: String,
    pub amount: U256,
}

/// Decode `transfer(address,uint256)` calldata: selector, then two 32-byte words.
pub fn decode_transfer_calldata(input: &str) -> Result<TransferCall, TransferMismatch> {
    let bytes = decode_hex(input).ok_or(TransferMismatch::MalformedCalldata)?;
    if bytes.len() != 4 + 64 || bytes[..4] != TRANSFER_SELECTOR {
        return Err(TransferMismatch::MalformedCalldata);
    }
    // Address words are left-padded with zeros
    if bytes[4..16].iter().any(|b| *b != 0) {
        return Err(TransferMismatch::MalformedCalldata);
    }

    Ok(TransferCall {
        to: format_address(&bytes[16..36]),
        amount: U256::from_big_endian(&bytes[36..68]),
    })
}

/// The fields of a fetched transaction and its receipt needed to verify a
/// token payment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TokenTransferTx {
    /// Receipt status was `success`
    pub success: bool,
    pub from: String,
    /// `None` for contract creation
    pub to: Option<String>,
    pub input: String,
}

/// Verify that `tx` is a successful direct `transfer` on `token` paying at
/// least `expected_amount` from `expected_from` to `expected_to`.
pub fn verify_token_transfer_tx(
    tx: &TokenTransferTx,
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
    token: &str,
) -> Result<TransferCall, TransferMismatch> {
    verify_token_transfer_inner(tx, expected_from, expected_to, expected_amount, token)
        .inspect_err(|e| log::warn!("verify_token_transfer_tx: {e}"))
}

fn verify_token_transfer_inner(
    tx: &TokenTransferTx,
    expected_from: &str,
    expected_to: &str,
    expected_amount: U256,
    token: &str,
) -> Result<TransferCall, TransferMismatch> {
    if !tx.success {
        return Err(TransferMismatch::TransactionFailed);
    }
    match &tx.to {
        Some(to) if to.eq_ignore_ascii_case(token) => {}
        _ => {
            return Err(TransferMismatch::NotTokenTransfer {
                token: token.to_string(),
            })
        }
    }

    let call = decode_transfer_calldata(&tx.input)?;
    check_parties(&tx.from, &call.to, expected_from, expected_to)?;
    check_amount(call.amount, expected_amount)?;
    Ok(call)
}
