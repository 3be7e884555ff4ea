//! Error types for engine operations
//!
//! Plain enums rather than String-based errors so they can be SCALE-encoded
//! alongside the records they describe. Each has a human-readable `Display`
//! for logs and UI messages.

use alloc::string::String;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use primitive_types::U256;
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Problems found while validating a hand. All are collected, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum HandError {
    /// The hand does not hold the required number of cards
    WrongCardCount { expected: u32, actual: u32 },
    /// Card at `index` has no identifier
    MissingId { index: u32 },
    /// Card at `index` has no usable numeric power
    InvalidPower { index: u32 },
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::WrongCardCount { expected, actual } => {
                write!(f, "Must select exactly {expected} cards (got {actual})")
            }
            HandError::MissingId { index } => write!(f, "Card {index} has no id"),
            HandError::InvalidPower { index } => write!(f, "Card {index} has invalid power"),
        }
    }
}

/// Rule a TCG deck breaks. All are collected, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum DeckError {
    WrongSize { expected: u32, actual: u32 },
    /// Fewer VBMS and VibeFID cards than the minimum
    TooFewVbms { min: u32, actual: u32 },
    /// More half-power Nothing and Other cards than allowed
    TooManyNothing { max: u32, actual: u32 },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::WrongSize { expected, .. } => {
                write!(f, "Deck must have exactly {expected} cards")
            }
            DeckError::TooFewVbms { min, .. } => {
                write!(f, "Deck must have at least {min} VBMS/VibeFID cards")
            }
            DeckError::TooManyNothing { max, .. } => {
                write!(f, "Deck can have at most {max} Nothing/Other cards")
            }
        }
    }
}

/// Why a settled match paid nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum NoRewardReason {
    /// PvE losses never pay
    Lost,
    /// Daily PvE win limit reached
    PveWinLimit,
    /// Daily PvP match limit reached
    PvpMatchLimit,
    /// Daily earning cap already reached
    DailyCapReached,
}

impl fmt::Display for NoRewardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoRewardReason::Lost => "Lost the battle",
            NoRewardReason::PveWinLimit => "Daily PvE win limit reached",
            NoRewardReason::PvpMatchLimit => "Daily PvP match limit reached",
            NoRewardReason::DailyCapReached => "Daily cap reached",
        })
    }
}

/// Why an on-chain transfer does not satisfy a claim.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum TransferMismatch {
    /// Transaction reverted
    TransactionFailed,
    /// Sender differs from the claimant
    From { expected: String, actual: String },
    /// Recipient differs from the expected receiver
    To { expected: String, actual: String },
    /// Less than the claimed amount was moved
    Amount { expected: U256, actual: U256 },
    /// The call did not target the token contract
    NotTokenTransfer { token: String },
    /// Calldata is not an ERC20 `transfer(address,uint256)` call
    MalformedCalldata,
    /// No Transfer log in the receipt satisfies the claim
    NoMatchingLog,
}

impl fmt::Display for TransferMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMismatch::TransactionFailed => f.write_str("Transaction failed"),
            TransferMismatch::From { expected, actual } => {
                write!(f, "From address mismatch: expected {expected}, got {actual}")
            }
            TransferMismatch::To { expected, actual } => {
                write!(f, "To address mismatch: expected {expected}, got {actual}")
            }
            TransferMismatch::Amount { expected, actual } => {
                write!(f, "Amount mismatch: expected {expected}, got {actual}")
            }
            TransferMismatch::NotTokenTransfer { token } => {
                write!(f, "Not a transfer on token {token}")
            }
            TransferMismatch::MalformedCalldata => f.write_str("Calldata is not an ERC20 transfer"),
            TransferMismatch::NoMatchingLog => f.write_str("No matching Transfer log"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HandError {}

#[cfg(feature = "std")]
impl std::error::Error for DeckError {}

#[cfg(feature = "std")]
impl std::error::Error for TransferMismatch {}
