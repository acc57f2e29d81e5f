use cosmwasm_std::{testing::MockStorage, Addr, Uint128};

use super::REGISTRY;
use crate::{MemberShare, SharesError, MAX_LIMIT};

#[test]
fn test_add_share_holder() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");
    let addr2 = Addr::unchecked("addr2");

    let previous = REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(50000))
        .unwrap();
    assert_eq!(previous, None);
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 1);

    REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::new(50000))
        .unwrap();
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 2);

    // Adding an already registered holder does not grow the registry
    let previous = REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(50000))
        .unwrap();
    assert_eq!(previous, Some(Uint128::new(50000)));
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 2);
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(100000));
}

#[test]
fn test_remove_share_holder() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");
    let addr2 = Addr::unchecked("addr2");
    let addr3 = Addr::unchecked("addr3");

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(50000))
        .unwrap();
    REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::new(50000))
        .unwrap();

    let removed = REGISTRY.remove_share_holder(&mut storage, &addr1).unwrap();
    assert_eq!(removed, Some(Uint128::new(50000)));
    assert_eq!(
        REGISTRY.share_holder_shares(&storage, &addr1).unwrap(),
        Uint128::zero()
    );
    assert!(!REGISTRY.is_share_holder(&storage, &addr1));
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 1);

    // Removing an unknown holder leaves everything untouched
    let removed = REGISTRY.remove_share_holder(&mut storage, &addr3).unwrap();
    assert_eq!(removed, None);
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 1);
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(50000));
}

#[test]
fn test_share_total_follows_upserts() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");
    let addr2 = Addr::unchecked("addr2");

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(50000))
        .unwrap();
    REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::new(50000))
        .unwrap();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(100000));

    REGISTRY.remove_share_holder(&mut storage, &addr1).unwrap();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(50000));

    // Re-adding replaces the weight instead of accumulating it
    REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::new(30000))
        .unwrap();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(30000));
    assert_eq!(
        REGISTRY.share_holder_shares(&storage, &addr2).unwrap(),
        Uint128::new(30000)
    );

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(50000))
        .unwrap();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(80000));
}

#[test]
fn test_zero_weight_holder_is_counted() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::zero())
        .unwrap();

    assert!(REGISTRY.is_share_holder(&storage, &addr1));
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 1);
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::zero());
}

#[test]
fn test_empty_registry() {
    let storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");

    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 0);
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::zero());
    assert_eq!(
        REGISTRY.share_holder_shares(&storage, &addr1).unwrap(),
        Uint128::zero()
    );
    assert!(REGISTRY.snapshot(&storage).unwrap().is_empty());
}

#[test]
fn test_total_overflow_leaves_registry_unchanged() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");
    let addr2 = Addr::unchecked("addr2");

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::MAX)
        .unwrap();

    let err = REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::one())
        .unwrap_err();
    assert!(matches!(err, SharesError::OverflowError(_)));
    assert_eq!(REGISTRY.share_holder_count(&storage).unwrap(), 1);
    assert!(!REGISTRY.is_share_holder(&storage, &addr2));

    // Lowering the existing weight makes room again
    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(10))
        .unwrap();
    REGISTRY
        .add_share_holder(&mut storage, &addr2, Uint128::one())
        .unwrap();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), Uint128::new(11));
}

#[test]
fn test_total_matches_sum_after_mixed_operations() {
    let mut storage = MockStorage::new();
    let addrs: Vec<Addr> = (0..8).map(|i| Addr::unchecked(format!("addr{i}"))).collect();

    for (i, addr) in addrs.iter().enumerate() {
        REGISTRY
            .add_share_holder(&mut storage, addr, Uint128::new(i as u128 * 7))
            .unwrap();
    }
    for addr in addrs.iter().step_by(3) {
        REGISTRY.remove_share_holder(&mut storage, addr).unwrap();
    }
    for addr in addrs.iter().skip(1).step_by(2) {
        REGISTRY
            .add_share_holder(&mut storage, addr, Uint128::new(100))
            .unwrap();
    }
    REGISTRY
        .remove_share_holder(&mut storage, &Addr::unchecked("unknown"))
        .unwrap();

    let sum: Uint128 = addrs
        .iter()
        .map(|addr| REGISTRY.share_holder_shares(&storage, addr).unwrap())
        .sum();
    assert_eq!(REGISTRY.share_total(&storage).unwrap(), sum);

    let snapshot = REGISTRY.snapshot(&storage).unwrap();
    assert_eq!(
        snapshot.len() as u64,
        REGISTRY.share_holder_count(&storage).unwrap()
    );
}

#[test]
fn test_snapshot_is_sorted_by_address() {
    let mut storage = MockStorage::new();

    for name in ["carol", "alice", "bob"] {
        REGISTRY
            .add_share_holder(&mut storage, &Addr::unchecked(name), Uint128::new(1))
            .unwrap();
    }

    let snapshot = REGISTRY.snapshot(&storage).unwrap();
    let names: Vec<&str> = snapshot.iter().map(|holder| holder.addr.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_snapshot_detects_inconsistent_total() {
    let mut storage = MockStorage::new();
    let addr1 = Addr::unchecked("addr1");

    REGISTRY
        .add_share_holder(&mut storage, &addr1, Uint128::new(5))
        .unwrap();

    // Corrupt the accumulator behind the registry's back
    cw_storage_plus::Item::<Uint128>::new("total")
        .save(&mut storage, &Uint128::new(6))
        .unwrap();

    assert_eq!(
        REGISTRY.snapshot(&storage).unwrap_err(),
        SharesError::InconsistentTotal {
            stored: Uint128::new(6),
            computed: Uint128::new(5),
        }
    );
}

#[test]
fn test_share_holders_pagination() {
    let mut storage = MockStorage::new();

    for i in 0..40u128 {
        REGISTRY
            .add_share_holder(
                &mut storage,
                &Addr::unchecked(format!("addr{i:02}")),
                Uint128::new(i),
            )
            .unwrap();
    }

    let first_page = REGISTRY.share_holders(&storage, None, None).unwrap();
    assert_eq!(first_page.len(), 10);
    assert_eq!(
        first_page[0],
        MemberShare {
            addr: Addr::unchecked("addr00"),
            shares: Uint128::zero(),
        }
    );

    let last = first_page.last().unwrap().addr.clone();
    let second_page = REGISTRY
        .share_holders(&storage, Some(&last), Some(5))
        .unwrap();
    assert_eq!(second_page.len(), 5);
    assert_eq!(second_page[0].addr, Addr::unchecked("addr10"));

    let capped = REGISTRY.share_holders(&storage, None, Some(100)).unwrap();
    assert_eq!(capped.len(), MAX_LIMIT as usize);
}
