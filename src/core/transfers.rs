use super::types::{Bucket, MoneyTransfer, TransferTarget};

/// Bucket balances plus the outstanding loan, carried by value through
/// the month-zero transfer pass and the monthly step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balances {
    pub cash: f64,
    pub equity: f64,
    pub debt: f64,
    pub loan: f64,
}

impl Balances {
    pub fn bucket(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Cash => self.cash,
            Bucket::Equity => self.equity,
            Bucket::Debt => self.debt,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut f64 {
        match bucket {
            Bucket::Cash => &mut self.cash,
            Bucket::Equity => &mut self.equity,
            Bucket::Debt => &mut self.debt,
        }
    }

    pub fn total_assets(&self) -> f64 {
        self.equity + self.debt + self.cash
    }
}

/// Applies one-time transfers in list order. Sources are not checked for
/// sufficiency, so a bucket can go negative here; a transfer into the
/// loan is a principal prepayment.
pub fn apply_transfers(balances: Balances, transfers: &[MoneyTransfer]) -> Balances {
    let mut result = balances;
    for transfer in transfers {
        if transfer.amount <= 0.0 {
            continue;
        }

        *result.bucket_mut(transfer.from) -= transfer.amount;
        match transfer.to.bucket() {
            Some(bucket) => *result.bucket_mut(bucket) += transfer.amount,
            None => result.loan -= transfer.amount,
        }
    }
    result
}

pub(crate) fn is_prepayment(transfer: &MoneyTransfer) -> bool {
    transfer.to == TransferTarget::Loan && transfer.amount > 0.0
}
