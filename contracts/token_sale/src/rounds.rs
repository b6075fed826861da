//! Round capacity bookkeeping for a single purchase.
//!
//! A payment is converted at the price of the first round that still has
//! capacity. When it buys more than that round holds, the round is taken whole
//! at `ceil(capacity * price / unit)` and the rest of the payment rolls into
//! the next round with capacity.

use crate::types::{Error, Round};
use fp_math::{mul_div_ceil, mul_div_floor};
use soroban_sdk::Vec;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fill {
    /// Sale-token smallest units bought.
    pub tokens: i128,
    /// First round with capacity at or after the last round touched, or the
    /// round count once everything is sold.
    pub cursor: u32,
}

/// Index of the first round at or after `from` with capacity left.
pub fn next_with_capacity(rounds: &Vec<Round>, from: u32) -> Option<u32> {
    (from..rounds.len()).find(|&i| rounds.get(i).map_or(false, |r| r.remaining() > 0))
}

pub fn validate(
    prices: &Vec<i128>,
    amounts: &Vec<i128>,
    expected_total: i128,
    max_rounds: u32,
) -> Result<(), Error> {
    if prices.is_empty() || prices.len() != amounts.len() || prices.len() > max_rounds {
        return Err(Error::InvalidInput);
    }
    let mut total: i128 = 0;
    for (price, amount) in prices.iter().zip(amounts.iter()) {
        if price <= 0 || amount <= 0 {
            return Err(Error::InvalidInput);
        }
        total = total.checked_add(amount).ok_or(Error::MathOverflow)?;
    }
    if total != expected_total {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Consumes capacity for `payment` starting at `cursor`. `rounds` is only
/// meaningful to persist when this returns `Ok`.
pub fn fill(
    rounds: &mut Vec<Round>,
    cursor: u32,
    payment: i128,
    unit: i128,
) -> Result<Fill, Error> {
    let mut index = next_with_capacity(rounds, cursor).ok_or(Error::AllRoundsSoldOut)?;
    let mut remaining_payment = payment;
    let mut tokens: i128 = 0;

    loop {
        let mut round = rounds.get(index).ok_or(Error::AllRoundsSoldOut)?;
        let capacity = round.remaining();
        let affordable =
            mul_div_floor(remaining_payment, unit, round.price).ok_or(Error::MathOverflow)?;

        if affordable <= capacity {
            round.sold += affordable;
            tokens = tokens.checked_add(affordable).ok_or(Error::MathOverflow)?;
            rounds.set(index, round);
            break;
        }

        let cost = mul_div_ceil(capacity, round.price, unit).ok_or(Error::MathOverflow)?;
        round.sold = round.total_amount;
        tokens = tokens.checked_add(capacity).ok_or(Error::MathOverflow)?;
        remaining_payment -= cost;
        rounds.set(index, round);

        if remaining_payment == 0 {
            break;
        }
        index = next_with_capacity(rounds, index + 1).ok_or(Error::AllRoundsSoldOut)?;
    }

    if tokens == 0 {
        return Err(Error::PaymentTooSmall);
    }

    Ok(Fill {
        tokens,
        cursor: next_with_capacity(rounds, index).unwrap_or(rounds.len()),
    })
}
