use std::num::NonZeroUsize;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::generator::WordSource;
use crate::models::{SalesDataset, Transaction};
use crate::types::{Quantity, MONEY_SCALE};

pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Dates are drawn from `[today - LOOKBACK_DAYS, today]`.
pub const LOOKBACK_DAYS: u64 = 365;

const MIN_PRICE_CENTS: i64 = 500;
const MAX_PRICE_CENTS: i64 = 10_000;
const MIN_QUANTITY: Quantity = 1;
const MAX_QUANTITY: Quantity = 100;

/// Produces synthetic retail transactions.
///
/// Numeric fields (date, price, quantity) are drawn from `numeric`, while
/// product names always come from the fixed-seed `WordSource`. Seeding the
/// numeric source makes a whole dataset reproducible.
pub struct RecordGenerator<R: Rng> {
    numeric: R,
    words: WordSource,
    today: NaiveDate
}

impl RecordGenerator<StdRng> {
    /// Seeds the numeric draws once when `numeric_seed` is given, otherwise uses OS entropy.
    pub fn from_seed(numeric_seed: Option<u64>, today: NaiveDate) -> Self {
        let numeric = match numeric_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng()
        };

        Self::new(numeric, today)
    }
}

impl<R: Rng> RecordGenerator<R> {
    pub fn new(numeric: R, today: NaiveDate) -> Self {
        Self {
            numeric,
            words: WordSource::new(),
            today
        }
    }

    /// Generates exactly `count` records.
    pub fn generate(&mut self, count: NonZeroUsize) -> SalesDataset {
        let records: Vec<Transaction> = (0..count.get()).map(|_| self.next_record()).collect();

        debug!("Generated {} records ending {}", records.len(), self.today);

        SalesDataset::new(records)
    }

    fn next_record(&mut self) -> Transaction {
        let date = self.next_date();
        let product = self.words.next_word();
        let price = Decimal::new(self.numeric.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), MONEY_SCALE);
        let quantity = self.numeric.random_range(MIN_QUANTITY..=MAX_QUANTITY);

        Transaction::new(date, product, price, quantity)
    }

    fn next_date(&mut self) -> NaiveDate {
        let offset = self.numeric.random_range(0..=LOOKBACK_DAYS);

        self.today.checked_sub_days(Days::new(offset)).unwrap_or(self.today)
    }
}
