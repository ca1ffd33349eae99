//! Interest plans and their rule table
//!
//! Every plan has one [`PlanRule`]: an annual rate (as a fraction) and an
//! eligibility window over the deposit's elapsed days. The rules live in the
//! static [`PLAN_RULES`] table and are shared read-only by every accrual pass.
//!
//! | Plan    | Annual rate | Eligible when            |
//! |---------|-------------|--------------------------|
//! | basic   | 1%          | `days > 30`              |
//! | premium | 5%          | `days > 45`              |
//! | student | 3%          | `days > 30 && days < 366`|

use crate::types::error::DepositError;
use crate::types::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum elapsed days (exclusive) before basic and student plans accrue
pub const MIN_DAYS_FOR_INTEREST: u32 = 30;

/// Minimum elapsed days (exclusive) before premium plans accrue
pub const PREMIUM_MIN_DAYS: u32 = 45;

/// Student plans stop accruing once this many days have elapsed
pub const STUDENT_MAX_DAYS: u32 = 366;

/// Months per year; monthly interest is annual interest over this
pub const MONTHS_PER_YEAR: u32 = 12;

/// Interest plans with a rule in [`PLAN_RULES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// 1% a year after the first month
    Basic,

    /// 5% a year after 45 days
    Premium,

    /// 3% a year between the first month and the end of the first year
    Student,
}

impl PlanType {
    /// Canonical lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "basic",
            PlanType::Premium => "premium",
            PlanType::Student => "student",
        }
    }

    /// The rule table entry for this plan
    pub fn rule(&self) -> &'static PlanRule {
        match self {
            PlanType::Basic => &PLAN_RULES[0],
            PlanType::Premium => &PLAN_RULES[1],
            PlanType::Student => &PLAN_RULES[2],
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = DepositError;

    /// Case-insensitive; legacy storage codes (`A`, `B`, `C`) are unknown
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(PlanType::Basic),
            "premium" => Ok(PlanType::Premium),
            "student" => Ok(PlanType::Student),
            _ => Err(DepositError::unknown_plan_type(s)),
        }
    }
}

/// Open interval of elapsed days during which a plan accrues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityWindow {
    /// Deposits must have strictly more elapsed days than this
    pub after_days: u32,

    /// If set, deposits must have strictly fewer elapsed days than this
    pub before_days: Option<u32>,
}

impl EligibilityWindow {
    pub const fn contains(&self, days: u32) -> bool {
        let above = days > self.after_days;
        match self.before_days {
            Some(limit) => above && days < limit,
            None => above,
        }
    }
}

/// Rate and eligibility for one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRule {
    pub plan: PlanType,

    /// Nominal annual rate as a fraction (0.05 means 5%)
    pub annual_rate: Decimal,

    pub window: EligibilityWindow,
}

impl PlanRule {
    /// Unrounded simple interest for one month: `balance * annual_rate / 12`
    ///
    /// The multiplication happens first so that no repeating monthly rate
    /// (0.01 / 12) is ever truncated; half-cent results stay exact ties.
    /// `None` on overflow.
    pub fn monthly_interest(&self, balance: Money) -> Option<Money> {
        balance
            .checked_mul_rate(self.annual_rate)?
            .checked_div(Decimal::from(MONTHS_PER_YEAR))
    }
}

/// The rule table, one row per [`PlanType`] in declaration order
pub static PLAN_RULES: [PlanRule; 3] = [
    PlanRule {
        plan: PlanType::Basic,
        annual_rate: Decimal::from_parts(1, 0, 0, false, 2),
        window: EligibilityWindow {
            after_days: MIN_DAYS_FOR_INTEREST,
            before_days: None,
        },
    },
    PlanRule {
        plan: PlanType::Premium,
        annual_rate: Decimal::from_parts(5, 0, 0, false, 2),
        window: EligibilityWindow {
            after_days: PREMIUM_MIN_DAYS,
            before_days: None,
        },
    },
    PlanRule {
        plan: PlanType::Student,
        annual_rate: Decimal::from_parts(3, 0, 0, false, 2),
        window: EligibilityWindow {
            after_days: MIN_DAYS_FOR_INTEREST,
            before_days: Some(STUDENT_MAX_DAYS),
        },
    },
];
