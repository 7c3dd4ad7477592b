//! Benchmarking setup for pallet-usdcx

use super::*;

#[allow(unused)]
use crate::Pallet as Usdcx;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

const SEED: u32 = 0;
const FUNDS: u128 = 10_000_000;

fn set_minter<T: Config>() -> T::AccountId {
    let minter: T::AccountId = whitelisted_caller();
    Minter::<T>::put(&minter);
    minter
}

fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let minter = set_minter::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), amount, recipient.clone());

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn batch_mint(n: Linear<1, MAX_BATCH_MINT>) {
        let minter = set_minter::<T>();
        let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts: Vec<u128> = (0..n).map(|_| 1_000).collect();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(minter),
            BoundedVec::truncate_from(recipients),
            BoundedVec::truncate_from(amounts),
        );

        assert_eq!(MintEventCount::<T>::get(), n as EventId);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller, FUNDS);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), FUNDS - 1_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, FUNDS);
        let memo: Memo = BoundedVec::truncate_from(vec![b'm'; MAX_MEMO_LEN as usize]);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount, caller.clone(), recipient.clone(), Some(memo));

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 500_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 500_000);
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 100_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 50_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 150_000);
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 100_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 30_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 70_000);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, SEED);
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&owner, FUNDS);
        Allowances::<T>::insert(&owner, &spender, 300_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 200_000);

        assert_eq!(Balances::<T>::get(&recipient), 200_000);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 100_000);
    }

    #[benchmark]
    fn set_paused() {
        let minter = set_minter::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), true);

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn blacklist_address() {
        let minter = set_minter::<T>();
        let target: T::AccountId = account("target", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), target.clone());

        assert_eq!(Blacklisted::<T>::get(&target), true);
    }

    #[benchmark]
    fn unblacklist_address() {
        let minter = set_minter::<T>();
        let target: T::AccountId = account("target", 0, SEED);
        Blacklisted::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), target.clone());

        assert_eq!(Blacklisted::<T>::get(&target), false);
    }

    #[benchmark]
    fn transfer_minter_role() {
        let minter = set_minter::<T>();
        let successor: T::AccountId = account("successor", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), successor.clone());

        assert_eq!(Minter::<T>::get(), Some(successor));
    }

    #[benchmark]
    fn set_metadata() {
        let minter = set_minter::<T>();
        let name: BoundedName = BoundedVec::truncate_from(vec![b'n'; MAX_NAME_LEN as usize]);
        let symbol: BoundedSymbol = BoundedVec::truncate_from(vec![b's'; MAX_NAME_LEN as usize]);
        let uri: BoundedUri = BoundedVec::truncate_from(vec![b'u'; MAX_URI_LEN as usize]);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), name, symbol, 18, Some(uri.clone()));

        assert_eq!(TokenUri::<T>::get(), Some(uri));
        assert_eq!(Decimals::<T>::get(), 18);
    }

    impl_benchmark_test_suite!(Usdcx, crate::mock::new_test_ext(), crate::mock::Test);
}
