//! Bounded argument types and audit log records.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Maximum byte length of the token name and symbol.
pub const MAX_NAME_LEN: u32 = 32;

/// Maximum byte length of the token URI.
pub const MAX_URI_LEN: u32 = 256;

/// Maximum byte length of a transfer memo.
pub const MAX_MEMO_LEN: u32 = 34;

/// Maximum number of recipients accepted by a single `batch_mint`.
pub const MAX_BATCH_MINT: u32 = 200;

/// Default token name and symbol.
pub const DEFAULT_TICKER: &[u8] = b"USDCx";

/// Default decimal precision (USDC-style).
pub const DEFAULT_DECIMALS: u8 = 6;

pub type BoundedName = BoundedVec<u8, ConstU32<MAX_NAME_LEN>>;
pub type BoundedSymbol = BoundedVec<u8, ConstU32<MAX_NAME_LEN>>;
pub type BoundedUri = BoundedVec<u8, ConstU32<MAX_URI_LEN>>;
pub type Memo = BoundedVec<u8, ConstU32<MAX_MEMO_LEN>>;

/// Sequence number of an audit log entry. The first entry of every log is `1`.
pub type EventId = u64;

/// One entry of the mint log.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct MintRecord<AccountId, Moment> {
    pub recipient: AccountId,
    pub amount: u128,
    pub timestamp: Moment,
    /// Minter that issued the tokens.
    pub minted_by: AccountId,
}

/// One entry of the burn log.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct BurnRecord<AccountId, Moment> {
    pub burner: AccountId,
    pub amount: u128,
    pub timestamp: Moment,
}

/// One entry of the transfer log. `transfer_from` entries carry no memo.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct TransferRecord<AccountId, Moment> {
    pub sender: AccountId,
    pub recipient: AccountId,
    pub amount: u128,
    pub memo: Option<Memo>,
    pub timestamp: Moment,
}
