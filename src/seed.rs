//! Demo deposits
//!
//! Three deposits, one per plan, for trying the engine without an input file.
//! `seed_repository` only fills an empty repository, so it is safe to call on
//! every start.

use crate::core::DepositRepository;
use crate::types::{DepositError, Money, TimeDeposit, Withdrawal};
use chrono::{DateTime, Utc};
use tracing::info;

/// The demo deposits, with withdrawals stamped at `now`
pub fn seed_deposits(now: DateTime<Utc>) -> Vec<TimeDeposit> {
    vec![
        TimeDeposit {
            id: 1,
            plan_type: "basic".to_string(),
            balance: Money::from(5000),
            days: 30,
            withdrawals: vec![Withdrawal {
                id: 1,
                deposit_id: 1,
                amount: Money::from(1000),
                date: now,
            }],
        },
        TimeDeposit {
            id: 2,
            plan_type: "premium".to_string(),
            balance: Money::from(10000),
            days: 60,
            withdrawals: vec![Withdrawal {
                id: 2,
                deposit_id: 2,
                amount: Money::from(2000),
                date: now,
            }],
        },
        TimeDeposit {
            id: 3,
            plan_type: "student".to_string(),
            balance: Money::from(15000),
            days: 90,
            withdrawals: Vec::new(),
        },
    ]
}

/// Load the demo deposits into `repository` if it holds nothing yet
///
/// Returns the number of deposits added (zero when the repository was
/// already populated).
pub fn seed_repository<R: DepositRepository>(
    repository: &mut R,
    now: DateTime<Utc>,
) -> Result<usize, DepositError> {
    if repository.count() > 0 {
        info!(existing = repository.count(), "repository already populated, skipping seed");
        return Ok(0);
    }

    let deposits = seed_deposits(now);
    let added = deposits.len();
    for deposit in deposits {
        repository.insert(deposit)?;
    }

    info!(added, "seeded repository");
    Ok(added)
}
