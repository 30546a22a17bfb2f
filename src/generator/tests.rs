use super::record_generator::LOOKBACK_DAYS;
use super::{RecordGenerator, WordSource};

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

fn today() -> Result<NaiveDate> {
    Ok(NaiveDate::from_str("2026-10-16")?)
}

fn record_count(count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(count).ok_or_else(|| anyhow!("Record count must be positive"))
}

#[test]
fn test_generator_produces_exact_record_count() -> Result<()> {
    for count in [1, 7, 1000] {
        let mut generator = RecordGenerator::new(StdRng::seed_from_u64(7), today()?);
        assert_eq!(generator.generate(record_count(count)?).len(), count);
    }

    Ok(())
}

#[test]
fn test_generated_records_respect_field_ranges() -> Result<()> {
    let today = today()?;
    let earliest = today.checked_sub_days(Days::new(LOOKBACK_DAYS)).ok_or_else(|| anyhow!("Date underflow"))?;
    let mut generator = RecordGenerator::new(StdRng::seed_from_u64(11), today);
    let dataset = generator.generate(record_count(5000)?);

    for record in dataset.records() {
        assert!(record.price >= Decimal::from_str("5.00")? && record.price <= Decimal::from_str("100.00")?);
        assert!(record.price.scale() <= 2);
        assert!((1..=100).contains(&record.quantity));
        assert!(record.date >= earliest && record.date <= today);
        assert_eq!(record.total(), (record.price * Decimal::from(record.quantity)).round_dp(2));
        assert!(!record.product.is_empty());
    }

    Ok(())
}

#[test]
fn test_seeded_generators_produce_identical_datasets() -> Result<()> {
    let mut generator_1 = RecordGenerator::from_seed(Some(99), today()?);
    let mut generator_2 = RecordGenerator::from_seed(Some(99), today()?);

    assert_eq!(generator_1.generate(record_count(250)?).records(), generator_2.generate(record_count(250)?).records());

    Ok(())
}

#[test]
fn test_product_names_repeat_across_unseeded_runs() -> Result<()> {
    let mut generator_1 = RecordGenerator::from_seed(None, today()?);
    let mut generator_2 = RecordGenerator::from_seed(None, today()?);

    let products_1: Vec<String> = generator_1.generate(record_count(100)?).records().iter().map(|record| record.product.clone()).collect();
    let products_2: Vec<String> = generator_2.generate(record_count(100)?).records().iter().map(|record| record.product.clone()).collect();

    assert_eq!(products_1, products_2);

    Ok(())
}

#[test]
fn test_word_source_yields_varied_single_tokens() {
    let mut words = WordSource::new();
    let drawn: HashSet<&str> = (0..200).map(|_| words.next_word()).collect();

    assert!(drawn.len() > 20);
    assert!(drawn.iter().all(|word| !word.contains(char::is_whitespace)));
}
