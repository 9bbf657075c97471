//! Whole-park report.
//!
//! Runs every query against one park in parallel. The queries share nothing
//! but the read-only park, so the result matches calling them one by one.

use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::model::{Driver, Passenger, TaxiPark};
use crate::queries::{
    check_pareto_principle_with, find_fake_drivers, find_faithful_passengers,
    find_frequent_passengers, find_smart_passengers,
    find_the_most_frequent_trip_duration_period_with, QueryOptions,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkReport {
    pub fake_drivers: HashSet<Driver>,
    pub min_trips: usize,
    pub faithful_passengers: HashSet<Passenger>,
    /// Only drivers who took someone more than once appear here.
    pub frequent_passengers: BTreeMap<Driver, HashSet<Passenger>>,
    pub smart_passengers: HashSet<Passenger>,
    pub most_frequent_period: Option<RangeInclusive<u64>>,
    pub pareto_principle: bool,
}

pub fn analyze(park: &TaxiPark, min_trips: usize, options: &QueryOptions) -> ParkReport {
    let ((fake_drivers, faithful_passengers), ((smart_passengers, most_frequent_period), pareto_principle)) =
        rayon::join(
            || {
                rayon::join(
                    || find_fake_drivers(park),
                    || find_faithful_passengers(park, min_trips),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || find_smart_passengers(park),
                            || find_the_most_frequent_trip_duration_period_with(park, options),
                        )
                    },
                    || check_pareto_principle_with(park, options),
                )
            },
        );

    let frequent_passengers: BTreeMap<Driver, HashSet<Passenger>> = park
        .all_drivers
        .par_iter()
        .map(|driver| (driver.clone(), find_frequent_passengers(park, driver)))
        .filter(|(_, passengers)| !passengers.is_empty())
        .collect();

    info!(
        drivers = park.all_drivers.len(),
        passengers = park.all_passengers.len(),
        trips = park.trips.len(),
        fake_drivers = fake_drivers.len(),
        smart_passengers = smart_passengers.len(),
        pareto_principle,
        "analyzed taxi park"
    );

    ParkReport {
        fake_drivers,
        min_trips,
        faithful_passengers,
        frequent_passengers,
        smart_passengers,
        most_frequent_period,
        pareto_principle,
    }
}
