//! Default split of the total supply across the sale and treasury buckets.

use crate::Category;
use fp_math::{apply_bps, BPS_DENOMINATOR};
use soroban_sdk::contracttype;

pub const PUBLIC_SALE_BPS: u32 = 1_000;
pub const ECOSYSTEM_BPS: u32 = 3_000;
pub const COMMUNITY_BPS: u32 = 2_000;
pub const TEAM_BPS: u32 = 1_500;
pub const RESERVE_BPS: u32 = 2_000;
pub const PARTNERSHIP_BPS: u32 = 500;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplySplit {
    pub public_sale: i128,
    pub ecosystem: i128,
    pub community: i128,
    pub team: i128,
    pub reserve: i128,
    pub partnership: i128,
}

impl SupplySplit {
    pub fn for_category(&self, category: Category) -> i128 {
        match category {
            Category::Ecosystem => self.ecosystem,
            Category::Community => self.community,
            Category::Team => self.team,
            Category::Reserve => self.reserve,
            Category::Partnership => self.partnership,
        }
    }

    pub fn total(&self) -> i128 {
        self.public_sale
            + self.ecosystem
            + self.community
            + self.team
            + self.reserve
            + self.partnership
    }
}

/// Splits `total` by the bucket weights. Each bucket is rounded down and the
/// rounding remainder lands in the reserve, so the buckets always sum to
/// `total`. `None` for a negative or overflowing total.
pub fn split_supply(total: i128) -> Option<SupplySplit> {
    let public_sale = apply_bps(total, PUBLIC_SALE_BPS)?;
    let ecosystem = apply_bps(total, ECOSYSTEM_BPS)?;
    let community = apply_bps(total, COMMUNITY_BPS)?;
    let team = apply_bps(total, TEAM_BPS)?;
    let partnership = apply_bps(total, PARTNERSHIP_BPS)?;
    let reserve = total - public_sale - ecosystem - community - team - partnership;

    Some(SupplySplit {
        public_sale,
        ecosystem,
        community,
        team,
        reserve,
        partnership,
    })
}

const _: () = assert!(
    (PUBLIC_SALE_BPS + ECOSYSTEM_BPS + COMMUNITY_BPS + TEAM_BPS + RESERVE_BPS + PARTNERSHIP_BPS)
        as i128
        == BPS_DENOMINATOR
);
