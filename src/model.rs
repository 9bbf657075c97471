//! Entity model for the taxi park.
//!
//! Drivers and passengers are plain identities; a trip refers to them by value.
//! A park is built once and then only read by the queries.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ParkError, Result};

/// A driver, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Driver(String);

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A passenger, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Passenger(String);

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single completed ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub driver: Driver,
    pub passengers: Vec<Passenger>,
    /// Duration in minutes.
    pub duration: u32,
    /// Fare actually paid.
    pub cost: f64,
    /// Fractional discount in (0, 1). `None` means full price, which is not
    /// the same thing as a zero discount.
    pub discount: Option<f64>,
}

impl Trip {
    pub fn new(driver: Driver, passengers: Vec<Passenger>, duration: u32, cost: f64) -> Self {
        Self {
            driver,
            passengers,
            duration,
            cost,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }
}

/// The aggregate root: every driver, every passenger and the trips between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    pub all_drivers: HashSet<Driver>,
    pub all_passengers: HashSet<Passenger>,
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Builds a park without checking invariants.
    pub fn new(
        all_drivers: HashSet<Driver>,
        all_passengers: HashSet<Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers,
            all_passengers,
            trips,
        }
    }

    /// Builds a park and fails fast if any trip breaks an invariant.
    pub fn try_new(
        all_drivers: HashSet<Driver>,
        all_passengers: HashSet<Passenger>,
        trips: Vec<Trip>,
    ) -> Result<Self> {
        let park = Self::new(all_drivers, all_passengers, trips);
        park.validate()?;
        Ok(park)
    }

    /// Checks that every trip references known drivers and passengers and
    /// carries a sane cost and discount.
    pub fn validate(&self) -> Result<()> {
        for (index, trip) in self.trips.iter().enumerate() {
            if let Err(err) = self.validate_trip(trip) {
                warn!(trip = index, error = %err, "rejecting taxi park");
                return Err(err);
            }
        }
        Ok(())
    }

    fn validate_trip(&self, trip: &Trip) -> Result<()> {
        if !self.all_drivers.contains(&trip.driver) {
            return Err(ParkError::invalid_input(format!(
                "trip driver {} is not a park driver",
                trip.driver
            )));
        }

        if let Some(passenger) = trip
            .passengers
            .iter()
            .find(|passenger| !self.all_passengers.contains(*passenger))
        {
            return Err(ParkError::invalid_input(format!(
                "trip passenger {} is not a park passenger",
                passenger
            )));
        }

        if !trip.cost.is_finite() || trip.cost < 0.0 {
            return Err(ParkError::invalid_input(format!(
                "trip cost must be a non-negative number, got {}",
                trip.cost
            )));
        }

        if let Some(discount) = trip.discount {
            if !(discount > 0.0 && discount < 1.0) {
                return Err(ParkError::invalid_input(format!(
                    "trip discount must lie strictly between 0 and 1, got {}",
                    discount
                )));
            }
        }

        Ok(())
    }
}
