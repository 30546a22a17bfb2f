use chrono::{Datelike, NaiveDate};

use crate::models::{Column, DatasetError, Transaction};

/// The raw, generation-ordered collection of transactions for one run.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    records: Vec<Transaction>
}

impl SalesDataset {
    pub fn new(records: Vec<Transaction>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Collects a numeric column for plotting.
    ///
    /// # Errors
    /// Returns `DatasetError` if the column is not numeric or the dataset is empty.
    pub fn numeric_column(&self, column: Column) -> Result<Vec<f64>, DatasetError> {
        numeric_column(self.records.iter(), column)
    }

    /// Re-keys the dataset by date.
    ///
    /// Consumes the raw dataset so there is only ever one live view of the records.
    /// The sort is stable: sales on the same day keep their generation order.
    pub fn index_by_date(mut self) -> DateIndexedDataset {
        self.records.sort_by_key(|record| record.date);
        DateIndexedDataset { records: self.records }
    }
}

/// Transactions ordered chronologically by date.
#[derive(Debug, Clone)]
pub struct DateIndexedDataset {
    records: Vec<Transaction>
}

impl DateIndexedDataset {
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|record| record.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|record| record.date)
    }

    /// Adds the month and year of each record's date as derived fields.
    pub fn derive_calendar_fields(self) -> CalendarDataset {
        let records = self.records.into_iter()
            .map(|transaction| CalendarRecord {
                month: transaction.date.month(),
                year: transaction.date.year(),
                transaction
            })
            .collect();

        CalendarDataset { records }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarRecord {
    pub transaction: Transaction,
    /// 1-based month number.
    pub month: u32,
    pub year: i32
}

/// A date-indexed dataset augmented with derived calendar fields.
#[derive(Debug, Clone)]
pub struct CalendarDataset {
    records: Vec<CalendarRecord>
}

impl CalendarDataset {
    pub fn records(&self) -> &[CalendarRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.records.iter().map(|record| &record.transaction)
    }

    /// # Errors
    /// Returns `DatasetError` if the column is not numeric or the dataset is empty.
    pub fn numeric_column(&self, column: Column) -> Result<Vec<f64>, DatasetError> {
        numeric_column(self.transactions(), column)
    }
}

fn numeric_column<'a>(records: impl Iterator<Item = &'a Transaction>, column: Column) -> Result<Vec<f64>, DatasetError> {
    if !column.is_numeric() {
        return Err(DatasetError::NonNumericColumn { column: column.name() });
    }

    let values: Vec<f64> = records.filter_map(|record| column.numeric_value(record)).collect();

    if values.is_empty() {
        return Err(DatasetError::EmptyColumn { column: column.name() });
    }

    Ok(values)
}
