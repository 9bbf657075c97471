//! Analytical queries over a taxi park.
//!
//! Every query takes the park by shared reference and never mutates it, so the
//! same park can be queried from several threads at once.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use serde::Deserialize;
use tracing::debug;

use crate::model::{Driver, Passenger, TaxiPark, Trip};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Width of a trip duration period, in minutes.
    pub period_width: u32,
    /// Fraction of drivers counted as the top earners.
    pub top_driver_share: f64,
    /// Share of total income the top earners must reach.
    pub income_share: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            period_width: 10,
            top_driver_share: 0.2,
            income_share: 0.8,
        }
    }
}

/// Drivers who performed no trips.
pub fn find_fake_drivers(park: &TaxiPark) -> HashSet<Driver> {
    let active: HashSet<&Driver> = park.trips.iter().map(|trip| &trip.driver).collect();

    let fake: HashSet<Driver> = park
        .all_drivers
        .iter()
        .filter(|driver| !active.contains(driver))
        .cloned()
        .collect();

    debug!(fake = fake.len(), drivers = park.all_drivers.len(), "found fake drivers");
    fake
}

/// Passengers who completed at least `min_trips` trips.
///
/// With `min_trips == 0` every park passenger qualifies, including those who
/// never rode at all.
pub fn find_faithful_passengers(park: &TaxiPark, min_trips: usize) -> HashSet<Passenger> {
    if min_trips == 0 {
        return park.all_passengers.clone();
    }

    let faithful: HashSet<Passenger> = count_passengers(&park.trips)
        .into_iter()
        .filter(|(_, count)| *count >= min_trips)
        .map(|(passenger, _)| passenger.clone())
        .collect();

    debug!(min_trips, faithful = faithful.len(), "found faithful passengers");
    faithful
}

/// Passengers taken by `driver` more than once.
///
/// A driver with no trips, or one unknown to the park, yields an empty set.
pub fn find_frequent_passengers(park: &TaxiPark, driver: &Driver) -> HashSet<Passenger> {
    let frequent: HashSet<Passenger> =
        count_passengers(park.trips.iter().filter(|trip| &trip.driver == driver))
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(passenger, _)| passenger.clone())
            .collect();

    debug!(%driver, frequent = frequent.len(), "found frequent passengers");
    frequent
}

/// Passengers who had a discount on the majority of their trips.
pub fn find_smart_passengers(park: &TaxiPark) -> HashSet<Passenger> {
    let (discounted, full_price): (Vec<&Trip>, Vec<&Trip>) =
        park.trips.iter().partition(|trip| trip.has_discount());

    let discounted = count_passengers(discounted);
    let full_price = count_passengers(full_price);

    let smart: HashSet<Passenger> = discounted
        .into_iter()
        .filter(|(passenger, count)| match full_price.get(passenger) {
            Some(paid) => count > paid,
            None => true,
        })
        .map(|(passenger, _)| passenger.clone())
        .collect();

    debug!(smart = smart.len(), "found smart passengers");
    smart
}

/// The duration period (0..=9, 10..=19, ...) holding the most trips, or `None`
/// if there are no trips.
///
/// Periods are `u64` so the one holding `u32::MAX` still spans a full width.
pub fn find_the_most_frequent_trip_duration_period(park: &TaxiPark) -> Option<RangeInclusive<u64>> {
    find_the_most_frequent_trip_duration_period_with(park, &QueryOptions::default())
}

/// Same as [`find_the_most_frequent_trip_duration_period`] with a configurable
/// period width. Among equally frequent periods the earliest one wins.
pub fn find_the_most_frequent_trip_duration_period_with(
    park: &TaxiPark,
    options: &QueryOptions,
) -> Option<RangeInclusive<u64>> {
    let width = options.period_width.max(1);

    let mut periods: HashMap<u32, usize> = HashMap::new();
    for trip in &park.trips {
        *periods.entry(trip.duration / width * width).or_insert(0) += 1;
    }

    let (start, count) = periods
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))?;

    let start = u64::from(start);
    let period = start..=start + u64::from(width) - 1;
    debug!(?period, trips = count, "found most frequent trip duration period");
    Some(period)
}

/// Whether the top 20% of drivers by income earn at least 80% of all income.
pub fn check_pareto_principle(park: &TaxiPark) -> bool {
    check_pareto_principle_with(park, &QueryOptions::default())
}

/// Same as [`check_pareto_principle`] with configurable shares.
///
/// A park with no income at all (including one with no drivers) fails the check.
pub fn check_pareto_principle_with(park: &TaxiPark, options: &QueryOptions) -> bool {
    let mut incomes: Vec<f64> = income_by_driver(park).into_values().collect();
    incomes.sort_by(f64::total_cmp);

    let total_income: f64 = incomes.iter().sum();
    if total_income <= 0.0 {
        debug!(drivers = park.all_drivers.len(), "no income, pareto check fails");
        return false;
    }

    // Truncates: fewer than five drivers means nobody is in the top share.
    let top_count = (park.all_drivers.len() as f64 * options.top_driver_share) as usize;
    let top_income: f64 = incomes.iter().rev().take(top_count).sum();

    let ratio = top_income / total_income;
    debug!(top_count, top_income, total_income, ratio, "checked pareto principle");
    ratio >= options.income_share
}

/// Total income per driver. Drivers without trips are present with zero.
pub fn driver_incomes(park: &TaxiPark) -> HashMap<Driver, f64> {
    income_by_driver(park)
        .into_iter()
        .map(|(driver, income)| (driver.clone(), income))
        .collect()
}

/// Number of trips each passenger took. Passengers who never rode are absent.
pub fn trip_counts(park: &TaxiPark) -> HashMap<Passenger, usize> {
    count_passengers(&park.trips)
        .into_iter()
        .map(|(passenger, count)| (passenger.clone(), count))
        .collect()
}

fn income_by_driver(park: &TaxiPark) -> HashMap<&Driver, f64> {
    let mut incomes: HashMap<&Driver, f64> =
        park.all_drivers.iter().map(|driver| (driver, 0.0)).collect();
    for trip in &park.trips {
        *incomes.entry(&trip.driver).or_insert(0.0) += trip.cost;
    }
    incomes
}

/// Counts each passenger once per trip they appear in.
fn count_passengers<'a>(trips: impl IntoIterator<Item = &'a Trip>) -> HashMap<&'a Passenger, usize> {
    let mut counts: HashMap<&Passenger, usize> = HashMap::new();
    for trip in trips {
        for passenger in &trip.passengers {
            *counts.entry(passenger).or_insert(0) += 1;
        }
    }
    counts
}
