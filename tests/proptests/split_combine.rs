//! Property tests for the split/recover workflow (§4.7, §4.8).

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use thresh39::domain::{ShareCount, SplitConfig, Threshold};
use thresh39::{recoverer, splitter, Mnemonic};

/// A random 32-byte mnemonic seed.
#[derive(Clone, Debug)]
struct RandomMnemonic(Vec<u8>);

impl Arbitrary for RandomMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        RandomMnemonic((0..32).map(|_| u8::arbitrary(g)).collect())
    }
}

/// A valid `(threshold, share_count)` pair, with `share_count` kept small
/// so tests stay fast.
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u8,
    share_count: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let share_count = (u8::arbitrary(g) % 10) + 2; // [2, 11]
        let threshold = (u8::arbitrary(g) % (share_count - 1)) + 2; // [2, share_count]
        ValidParams {
            threshold,
            share_count,
        }
    }
}

fn config(params: ValidParams) -> SplitConfig {
    SplitConfig::new(
        Threshold::new(params.threshold).unwrap(),
        ShareCount::new(params.share_count).unwrap(),
    )
    .unwrap()
}

/// Splitting then recovering with exactly `threshold` shares always returns
/// the original mnemonic.
#[quickcheck]
fn prop_split_combine_round_trip(seed: RandomMnemonic, params: ValidParams) -> bool {
    let mnemonic = Mnemonic::from_bytes(&seed.0).unwrap();
    let cfg = config(params);
    let shares = match splitter::create_shares(cfg, &mnemonic) {
        Ok(shares) => shares,
        Err(_) => return false,
    };
    if shares.len() != params.share_count as usize {
        return false;
    }

    let subset = &shares[..params.threshold as usize];
    match recoverer::recover_mnemonic(subset) {
        Ok(recovered) => recovered == mnemonic,
        Err(_) => false,
    }
}

/// Every share carries the same threshold and seed checksum, and distinct,
/// in-range X coordinates.
#[quickcheck]
fn prop_every_share_is_well_formed(seed: RandomMnemonic, params: ValidParams) -> bool {
    let mnemonic = Mnemonic::from_bytes(&seed.0).unwrap();
    let cfg = config(params);
    let shares = match splitter::create_shares(cfg, &mnemonic) {
        Ok(shares) => shares,
        Err(_) => return false,
    };

    let mut xs: Vec<u8> = shares.iter().map(|s| s.point().x()).collect();
    xs.sort_unstable();
    let all_distinct = {
        let mut dedup = xs.clone();
        dedup.dedup();
        dedup.len() == xs.len()
    };
    let all_in_range = xs.iter().all(|&x| (2..=129).contains(&x));
    let all_same_metadata = shares.iter().all(|s| {
        *s.threshold() == params.threshold && s.seed_checksum() == mnemonic.checksum()
    });

    all_distinct && all_in_range && all_same_metadata
}

/// Supplying one fewer than `threshold` shares always fails with a
/// threshold error rather than silently returning a wrong mnemonic.
#[quickcheck]
fn prop_below_threshold_never_recovers(seed: RandomMnemonic, params: ValidParams) -> bool {
    let mnemonic = Mnemonic::from_bytes(&seed.0).unwrap();
    let cfg = config(params);
    let shares = match splitter::create_shares(cfg, &mnemonic) {
        Ok(shares) => shares,
        Err(_) => return false,
    };

    let short = &shares[..(params.threshold as usize - 1)];
    matches!(
        recoverer::recover_mnemonic(short),
        Err(thresh39::ShamirError::ThresholdError { .. })
    )
}
