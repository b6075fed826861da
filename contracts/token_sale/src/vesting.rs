//! Epoch schedule math. Each epoch releases its `bps` once its start time has
//! passed; the vested fraction is cumulative.

use crate::types::{Epoch, Error, MAX_EPOCHS};
use fp_math::{apply_bps, BPS_DENOMINATOR};
use soroban_sdk::Vec;

const FULL_BPS: u32 = BPS_DENOMINATOR as u32;

pub fn validate(epochs: &Vec<Epoch>) -> Result<(), Error> {
    if epochs.is_empty() {
        return Err(Error::NoEpochs);
    }
    if epochs.len() > MAX_EPOCHS {
        return Err(Error::InvalidInput);
    }
    let mut total: u32 = 0;
    for epoch in epochs.iter() {
        if epoch.bps > FULL_BPS {
            return Err(Error::EpochBpsInvalid);
        }
        total += epoch.bps;
    }
    if total != FULL_BPS {
        return Err(Error::EpochBpsInvalid);
    }
    Ok(())
}

/// Sum of the bps of every epoch started at or before `now`, capped at 10000.
/// Epoch order does not matter.
pub fn vested_bps(epochs: &Vec<Epoch>, now: u64) -> u32 {
    let vested = epochs
        .iter()
        .filter(|epoch| epoch.start_time <= now)
        .fold(0u32, |acc, epoch| acc.saturating_add(epoch.bps));
    vested.min(FULL_BPS)
}

/// What a holder may still take: `floor(locked * bps / 10000) - claimed`.
pub fn claimable(locked: i128, claimed: i128, bps: u32) -> Result<i128, Error> {
    let vested = apply_bps(locked, bps).ok_or(Error::MathOverflow)?;
    Ok(vested - claimed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    fn epoch(start_time: u64, bps: u32) -> Epoch {
        Epoch { start_time, bps }
    }

    #[test]
    fn validate_requires_full_schedule() {
        let env = Env::default();

        assert_eq!(validate(&Vec::new(&env)), Err(Error::NoEpochs));
        assert_eq!(
            validate(&vec![&env, epoch(10, 5_000), epoch(20, 4_999)]),
            Err(Error::EpochBpsInvalid)
        );
        assert_eq!(
            validate(&vec![&env, epoch(10, 10_001)]),
            Err(Error::EpochBpsInvalid)
        );
        assert_eq!(
            validate(&vec![&env, epoch(10, 3_000), epoch(20, 3_000), epoch(30, 4_000)]),
            Ok(())
        );
    }

    #[test]
    fn validate_limits_epoch_count() {
        let env = Env::default();
        let mut epochs = Vec::new(&env);
        for i in 0..MAX_EPOCHS {
            epochs.push_back(epoch(u64::from(i), 0));
        }
        epochs.push_back(epoch(1_000, 10_000));
        assert_eq!(validate(&epochs), Err(Error::InvalidInput));
    }

    #[test]
    fn vested_bps_is_cumulative_and_order_free() {
        let env = Env::default();
        let ordered = vec![&env, epoch(100, 3_000), epoch(200, 3_000), epoch(300, 4_000)];
        let shuffled = vec![&env, epoch(300, 4_000), epoch(100, 3_000), epoch(200, 3_000)];

        let mut last = 0;
        for now in [0u64, 99, 100, 150, 200, 299, 300, 10_000] {
            let bps = vested_bps(&ordered, now);
            assert_eq!(bps, vested_bps(&shuffled, now));
            assert!(bps >= last);
            last = bps;
        }
        assert_eq!(vested_bps(&ordered, 99), 0);
        assert_eq!(vested_bps(&ordered, 100), 3_000);
        assert_eq!(vested_bps(&ordered, 200), 6_000);
        assert_eq!(vested_bps(&ordered, 300), 10_000);
    }

    #[test]
    fn claimable_subtracts_released() {
        let locked = 500_000_000_000_000_000;
        assert_eq!(claimable(locked, 0, 3_000), Ok(150_000_000_000_000_000));
        assert_eq!(
            claimable(locked, 150_000_000_000_000_000, 6_000),
            Ok(150_000_000_000_000_000)
        );
        assert_eq!(claimable(locked, locked, 10_000), Ok(0));
    }
}
