//! Test fixtures for taxi-park.
//!
//! Provides:
//! - Short constructors for drivers, passengers, trips and parks
//! - A handful of sample parks for property-style checks
//! - Tracing setup so `RUST_LOG=taxi_park=debug` shows query logs

#![allow(dead_code)]

use std::ops::Range;

use taxi_park::model::{Driver, Passenger, TaxiPark, Trip};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taxi_park=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn driver(i: usize) -> Driver {
    Driver::new(format!("D-{}", i))
}

pub fn passenger(i: usize) -> Passenger {
    Passenger::new(format!("P-{}", i))
}

pub fn passengers(indices: &[usize]) -> Vec<Passenger> {
    indices.iter().map(|i| passenger(*i)).collect()
}

/// Trip by driver `d` carrying passengers `ps`.
pub fn trip(d: usize, ps: &[usize], duration: u32, cost: f64) -> Trip {
    Trip::new(driver(d), passengers(ps), duration, cost)
}

pub fn discounted_trip(d: usize, ps: &[usize], discount: f64) -> Trip {
    trip(d, ps, 10, 10.0).with_discount(discount)
}

/// Park with drivers `D-i` for `i` in `drivers` and passengers `P-j` for `j`
/// in `passengers`. Panics if the trips break an invariant.
pub fn taxi_park(drivers: Range<usize>, passengers: Range<usize>, trips: Vec<Trip>) -> TaxiPark {
    TaxiPark::try_new(
        drivers.map(driver).collect(),
        passengers.map(passenger).collect(),
        trips,
    )
    .expect("fixture park should be valid")
}

/// Parks of different shapes, including degenerate ones.
pub fn sample_parks() -> Vec<TaxiPark> {
    let mut parks = vec![
        TaxiPark::default(),
        taxi_park(0..3, 0..3, vec![]),
        taxi_park(
            0..3,
            0..5,
            vec![
                trip(0, &[0, 1], 12, 20.0),
                trip(0, &[0], 3, 5.0).with_discount(0.1),
                trip(1, &[2, 3], 45, 60.0).with_discount(0.4),
                trip(1, &[2], 41, 33.5),
            ],
        ),
    ];

    // Deterministic but irregular: every driver and passenger index is spread
    // by a different stride.
    let trips = (0..120)
        .map(|i| {
            let d = (i * 7) % 9;
            let mut ps: Vec<usize> = (0..(i % 3 + 1)).map(|k| (i * 5 + k * 11) % 20).collect();
            ps.sort_unstable();
            ps.dedup();
            let t = trip(d, &ps, ((i * 13) % 57) as u32, ((i * 17) % 40) as f64 + 2.5);
            if i % 4 == 0 { t.with_discount(0.25) } else { t }
        })
        .collect();
    parks.push(taxi_park(0..10, 0..22, trips));

    parks
}
