#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters and the explicit `RuntimeEvent` item are deprecated upstream; kept until the
// runtime moves to view functions.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # USDCx token pallet
//!
//! Single-asset fungible token ledger. One account holds the minter role and
//! administers the ledger: minting, pausing, blacklisting, handing the role on
//! and replacing the token metadata. Holders burn and transfer their own
//! balance and delegate spending through allowances.
//!
//! Every balance-moving call evaluates its guards in a fixed order
//! (authorization, pause, blacklist, amount, sufficiency) before the first
//! write, then commits and appends one record to the matching audit log
//! (mint, burn or transfer). Log ids start at 1 and are contiguous per log.
//!
//! Failures surface as one of four errors with stable numeric codes, see
//! [`Error::code`] and [`Pallet::error_code`].

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{PalletInfoAccess, Time},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{ArithmeticError, DispatchError};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

pub mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-usdcx";

pub type MomentOf<T> = <<T as Config>::Time as Time>::Moment;
pub type MintRecordOf<T> = MintRecord<<T as frame_system::Config>::AccountId, MomentOf<T>>;
pub type BurnRecordOf<T> = BurnRecord<<T as frame_system::Config>::AccountId, MomentOf<T>>;
pub type TransferRecordOf<T> = TransferRecord<<T as frame_system::Config>::AccountId, MomentOf<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Clock read when an audit log record is appended.
        type Time: Time;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultTicker() -> BoundedName {
        BoundedVec::truncate_from(DEFAULT_TICKER.to_vec())
    }

    #[pallet::type_value]
    pub fn DefaultDecimals() -> u8 {
        DEFAULT_DECIMALS
    }

    /// Token name, "USDCx" until replaced by `set_metadata`
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedName, ValueQuery, DefaultTicker>;

    /// Token symbol, "USDCx" until replaced by `set_metadata`
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedSymbol, ValueQuery, DefaultTicker>;

    /// Token decimals, 6 until replaced by `set_metadata`
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery, DefaultDecimals>;

    /// Optional metadata URI
    #[pallet::storage]
    #[pallet::getter(fn token_uri)]
    pub type TokenUri<T> = StorageValue<_, BoundedUri, OptionQuery>;

    /// Total token supply, always the sum of `Balances`
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Zero balances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender). Zero allowances are not stored.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Holder of the minter role
    #[pallet::storage]
    #[pallet::getter(fn minter)]
    pub type Minter<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// When set, every balance-moving call is rejected
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Blacklisted accounts (cannot send, burn or mint)
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklisted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn mint_event_count)]
    pub type MintEventCount<T> = StorageValue<_, EventId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn mint_event)]
    pub type MintEvents<T: Config> = StorageMap<_, Twox64Concat, EventId, MintRecordOf<T>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn burn_event_count)]
    pub type BurnEventCount<T> = StorageValue<_, EventId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn burn_event)]
    pub type BurnEvents<T: Config> = StorageMap<_, Twox64Concat, EventId, BurnRecordOf<T>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn transfer_event_count)]
    pub type TransferEventCount<T> = StorageValue<_, EventId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn transfer_event)]
    pub type TransferEvents<T: Config> =
        StorageMap<_, Twox64Concat, EventId, TransferRecordOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New tokens minted, recorded under `event_id` in the mint log
        Minted { minter: T::AccountId, to: T::AccountId, amount: u128, event_id: EventId },
        /// Tokens burned, recorded under `event_id` in the burn log
        Burned { from: T::AccountId, amount: u128, event_id: EventId },
        /// Tokens moved, recorded under `event_id` in the transfer log
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128, event_id: EventId },
        /// Allowance of `spender` over `owner`'s balance is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        PausedSet { paused: bool },
        Blacklisted { account: T::AccountId },
        Unblacklisted { account: T::AccountId },
        MinterChanged { old_minter: T::AccountId, new_minter: T::AccountId },
        MetadataUpdated { name: BoundedName, symbol: BoundedSymbol, decimals: u8 },
    }

    /// Variant order is part of the interface: [`Error::code`] and
    /// [`Pallet::error_code`] rely on it.
    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the sender named in the transfer.
        NotTokenOwner,
        /// Balance or allowance is smaller than the requested amount.
        InsufficientBalance,
        /// Zero amount, mismatched batch lists, or an amount that would overflow.
        InvalidAmount,
        /// Caller is not the minter, is blacklisted, or the ledger is paused.
        Unauthorized,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: u128, recipient: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;
            Self::ensure_can_move(&who)?;
            ensure!(amount != 0, Error::<T>::InvalidAmount);

            Self::do_mint(&who, recipient, amount)
        }

        /// Mint `amounts[i]` to `recipients[i]` for every `i`, all or nothing.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::batch_mint(recipients.len() as u32))]
        pub fn batch_mint(
            origin: OriginFor<T>,
            recipients: BoundedVec<T::AccountId, ConstU32<MAX_BATCH_MINT>>,
            amounts: BoundedVec<u128, ConstU32<MAX_BATCH_MINT>>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;
            Self::ensure_can_move(&who)?;
            ensure!(recipients.len() == amounts.len(), Error::<T>::InvalidAmount);
            ensure!(amounts.iter().all(|amount| *amount != 0), Error::<T>::InvalidAmount);

            // Every recipient balance is bounded by supply, so checking the batch total
            // against supply rules out overflow on any single mint below.
            let batch_total = amounts
                .iter()
                .try_fold(0u128, |acc, amount| acc.checked_add(*amount))
                .ok_or(Error::<T>::InvalidAmount)?;
            TotalSupply::<T>::get().checked_add(batch_total).ok_or(Error::<T>::InvalidAmount)?;

            for (recipient, amount) in recipients.into_iter().zip(amounts) {
                Self::do_mint(&who, recipient, amount)?;
            }
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_can_move(&who)?;
            ensure!(amount != 0, Error::<T>::InvalidAmount);

            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            let new_supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

            let event_id = Self::record_burn(&who, amount)?;
            Self::set_balance(&who, balance - amount);
            TotalSupply::<T>::put(new_supply);

            log::debug!(target: LOG_TARGET, "burned {amount} from {who:?} (burn #{event_id})");
            Self::deposit_event(Event::Burned { from: who, amount, event_id });
            Ok(())
        }

        /// Move `amount` from `sender` to `recipient`. The caller must be `sender`; the memo
        /// is stored in the transfer log and otherwise ignored.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            amount: u128,
            sender: T::AccountId,
            recipient: T::AccountId,
            memo: Option<Memo>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(who == sender, Error::<T>::NotTokenOwner);
            Self::ensure_can_move(&sender)?;
            ensure!(amount != 0, Error::<T>::InvalidAmount);

            Self::do_transfer(&sender, &recipient, amount, memo)
        }

        /// Set the caller's allowance for `spender` to exactly `amount`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let current = Allowances::<T>::get(&owner, &spender);
            Self::set_allowance(owner, spender, current.saturating_add(delta));
            Ok(())
        }

        /// Lower the caller's allowance for `spender`, stopping at zero.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let current = Allowances::<T>::get(&owner, &spender);
            Self::set_allowance(owner, spender, current.saturating_sub(delta));
            Ok(())
        }

        /// Spend `amount` of `owner`'s balance against the caller's allowance.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            recipient: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_can_move(&owner)?;
            ensure!(!Blacklisted::<T>::get(&spender), Error::<T>::Unauthorized);
            ensure!(amount != 0, Error::<T>::InvalidAmount);

            let allowance = Allowances::<T>::get(&owner, &spender);
            ensure!(allowance >= amount, Error::<T>::InsufficientBalance);

            Self::do_transfer(&owner, &recipient, amount, None)?;
            Self::store_allowance(&owner, &spender, allowance - amount);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_paused())]
        pub fn set_paused(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;

            Paused::<T>::put(paused);
            log::info!(target: LOG_TARGET, "ledger paused flag set to {paused} by {who:?}");
            Self::deposit_event(Event::PausedSet { paused });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::blacklist_address())]
        pub fn blacklist_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;

            Blacklisted::<T>::insert(&account, true);
            log::info!(target: LOG_TARGET, "{account:?} blacklisted");
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unblacklist_address())]
        pub fn unblacklist_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;

            Blacklisted::<T>::remove(&account);
            log::info!(target: LOG_TARGET, "{account:?} removed from blacklist");
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        /// Hand the minter role to `new_minter`. The caller loses it in the same step.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer_minter_role())]
        pub fn transfer_minter_role(
            origin: OriginFor<T>,
            new_minter: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;

            Minter::<T>::put(&new_minter);
            log::info!(target: LOG_TARGET, "minter role moved from {who:?} to {new_minter:?}");
            Self::deposit_event(Event::MinterChanged { old_minter: who, new_minter });
            Ok(())
        }

        /// Replace the whole metadata record. `uri: None` clears the stored URI.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::set_metadata())]
        pub fn set_metadata(
            origin: OriginFor<T>,
            name: BoundedName,
            symbol: BoundedSymbol,
            decimals: u8,
            uri: Option<BoundedUri>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_minter(&who)?;

            TokenName::<T>::put(&name);
            TokenSymbol::<T>::put(&symbol);
            Decimals::<T>::put(decimals);
            TokenUri::<T>::set(uri);
            log::info!(target: LOG_TARGET, "metadata replaced by {who:?}");
            Self::deposit_event(Event::MetadataUpdated { name, symbol, decimals });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account, holds the minter role from genesis
        pub minter: Option<T::AccountId>,
        /// Accounts blacklisted at genesis
        pub blacklisted_accounts: Vec<T::AccountId>,
        /// Initial balances (account, amount); counted into total supply, not logged
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref minter) = self.minter {
                Minter::<T>::put(minter);
            }

            for account in &self.blacklisted_accounts {
                Blacklisted::<T>::insert(account, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                let balance = Balances::<T>::get(account)
                    .checked_add(*amount)
                    .expect("Initial balance overflows u128");
                Pallet::<T>::set_balance(account, balance);
                total = total.checked_add(*amount).expect("Initial balances overflow total supply");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T> Error<T> {
    /// Stable numeric code reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            Error::NotTokenOwner => 101,
            Error::InsufficientBalance => 102,
            Error::InvalidAmount => 103,
            Error::Unauthorized => 104,
            #[allow(unreachable_patterns)]
            _ => 0,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Numeric code of a dispatch failure raised by this pallet, `None` for any other error.
    pub fn error_code(error: &DispatchError) -> Option<u32> {
        let DispatchError::Module(module_error) = error else {
            return None;
        };
        if module_error.index as usize != <Self as PalletInfoAccess>::index() {
            return None;
        }
        Error::<T>::decode(&mut &module_error.error[..]).ok().map(|error| error.code())
    }

    fn ensure_minter(who: &T::AccountId) -> DispatchResult {
        if Minter::<T>::get().as_ref() != Some(who) {
            log::debug!(target: LOG_TARGET, "{who:?} is not the minter");
            return Err(Error::<T>::Unauthorized.into());
        }
        Ok(())
    }

    /// Pause and blacklist gate shared by every balance-moving call.
    fn ensure_can_move(who: &T::AccountId) -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::Unauthorized);
        ensure!(!Blacklisted::<T>::get(who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn do_mint(minter: &T::AccountId, recipient: T::AccountId, amount: u128) -> DispatchResult {
        let new_supply =
            TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;
        let new_balance =
            Balances::<T>::get(&recipient).checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;

        let event_id = Self::record_mint(minter, &recipient, amount)?;
        TotalSupply::<T>::put(new_supply);
        Self::set_balance(&recipient, new_balance);

        log::debug!(target: LOG_TARGET, "minted {amount} to {recipient:?} (mint #{event_id})");
        Self::deposit_event(Event::Minted { minter: minter.clone(), to: recipient, amount, event_id });
        Ok(())
    }

    fn do_transfer(
        sender: &T::AccountId,
        recipient: &T::AccountId,
        amount: u128,
        memo: Option<Memo>,
    ) -> DispatchResult {
        let sender_balance = Balances::<T>::get(sender);
        ensure!(sender_balance >= amount, Error::<T>::InsufficientBalance);

        // A self-transfer passes the balance check and leaves the balance as is.
        if sender != recipient {
            let recipient_balance = Balances::<T>::get(recipient)
                .checked_add(amount)
                .ok_or(Error::<T>::InvalidAmount)?;
            Self::set_balance(sender, sender_balance - amount);
            Self::set_balance(recipient, recipient_balance);
        }

        let event_id = Self::record_transfer(sender, recipient, amount, memo)?;
        log::debug!(
            target: LOG_TARGET,
            "moved {amount} from {sender:?} to {recipient:?} (transfer #{event_id})"
        );
        Self::deposit_event(Event::Transferred {
            from: sender.clone(),
            to: recipient.clone(),
            amount,
            event_id,
        });
        Ok(())
    }

    fn set_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    fn store_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    fn set_allowance(owner: T::AccountId, spender: T::AccountId, amount: u128) {
        Self::store_allowance(&owner, &spender, amount);
        Self::deposit_event(Event::Approval { owner, spender, amount });
    }

    fn record_mint(
        minter: &T::AccountId,
        recipient: &T::AccountId,
        amount: u128,
    ) -> Result<EventId, DispatchError> {
        let event_id = MintEventCount::<T>::get().checked_add(1).ok_or(ArithmeticError::Overflow)?;
        MintEvents::<T>::insert(
            event_id,
            MintRecord {
                recipient: recipient.clone(),
                amount,
                timestamp: T::Time::now(),
                minted_by: minter.clone(),
            },
        );
        MintEventCount::<T>::put(event_id);
        Ok(event_id)
    }

    fn record_burn(burner: &T::AccountId, amount: u128) -> Result<EventId, DispatchError> {
        let event_id = BurnEventCount::<T>::get().checked_add(1).ok_or(ArithmeticError::Overflow)?;
        BurnEvents::<T>::insert(
            event_id,
            BurnRecord { burner: burner.clone(), amount, timestamp: T::Time::now() },
        );
        BurnEventCount::<T>::put(event_id);
        Ok(event_id)
    }

    fn record_transfer(
        sender: &T::AccountId,
        recipient: &T::AccountId,
        amount: u128,
        memo: Option<Memo>,
    ) -> Result<EventId, DispatchError> {
        let event_id =
            TransferEventCount::<T>::get().checked_add(1).ok_or(ArithmeticError::Overflow)?;
        TransferEvents::<T>::insert(
            event_id,
            TransferRecord {
                sender: sender.clone(),
                recipient: recipient.clone(),
                amount,
                memo,
                timestamp: T::Time::now(),
            },
        );
        TransferEventCount::<T>::put(event_id);
        Ok(event_id)
    }
}

#[cfg(any(test, feature = "try-runtime"))]
impl<T: Config> Pallet<T> {
    /// Check the ledger invariants: supply equals the sum of balances, no zero
    /// entries are stored, and each audit log holds exactly the ids `1..=count`.
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let mut sum: u128 = 0;
        for balance in Balances::<T>::iter_values() {
            ensure!(balance != 0, "zero balance stored");
            sum = sum.checked_add(balance).ok_or("sum of balances overflows u128")?;
        }
        ensure!(sum == TotalSupply::<T>::get(), "total supply differs from sum of balances");
        ensure!(Allowances::<T>::iter_values().all(|amount| amount != 0), "zero allowance stored");

        Self::check_log(MintEventCount::<T>::get(), MintEvents::<T>::iter_keys())?;
        Self::check_log(BurnEventCount::<T>::get(), BurnEvents::<T>::iter_keys())?;
        Self::check_log(TransferEventCount::<T>::get(), TransferEvents::<T>::iter_keys())?;
        Ok(())
    }

    fn check_log(
        count: EventId,
        ids: impl Iterator<Item = EventId>,
    ) -> Result<(), sp_runtime::TryRuntimeError> {
        let mut entries: EventId = 0;
        for id in ids {
            ensure!(id >= 1 && id <= count, "log entry outside 1..=count");
            entries += 1;
        }
        ensure!(entries == count, "log entry missing");
        Ok(())
    }
}
