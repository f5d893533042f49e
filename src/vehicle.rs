//! Cars: a validated speed, drive behaviour picked by transmission, and a
//! registry-backed count of every car built.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::LibraryError, registry::Registry};

/// Kilometres per hour to miles per hour
const KPH_TO_MPH: f64 = 0.621_371;

/// Anything that can be driven and refuelled
pub trait Vehicle: fmt::Debug {
    /// Describe the vehicle driving
    fn drive(&self) -> String;
    /// Describe the vehicle refuelling
    fn refuel(&self) -> String;
}

/// A non-negative speed in km/h
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Speed(u32);

impl Speed {
    /// Build a speed, turning negative input into a standstill
    #[must_use]
    pub fn clamped(kph: i32) -> Self {
        Self::try_from_kph(kph).unwrap_or_else(|_| {
            warn!(kph, "Speed can't be negative. Setting to 0.");
            Self::default()
        })
    }

    /// Build a speed, refusing negative input
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NegativeSpeed` if `kph` is below zero.
    pub fn try_from_kph(kph: i32) -> Result<Self, LibraryError> {
        u32::try_from(kph).map(Self).map_err(|_| LibraryError::NegativeSpeed { kph })
    }

    /// Speed in km/h
    #[must_use]
    pub fn kph(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

/// How a car changes gears, which decides how it drives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Transmission {
    /// Plain car: reports its speed, or that it is parked
    #[default]
    Standard,
    /// Driver shifts by hand
    Manual,
    /// Gearbox shifts on its own
    Automatic,
}

/// A car with a brand, model, speed and transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    /// Manufacturer
    brand: String,
    /// Model name
    model: String,
    /// Current speed
    speed: Speed,
    /// Drive behaviour
    transmission: Transmission,
}

impl Car {
    /// Build a car, clamping a negative speed to zero, and count it in `registry`
    #[must_use]
    pub fn new(
        brand: &str,
        model: &str,
        speed: i32,
        transmission: Transmission,
        registry: &mut Registry,
    ) -> Self {
        let car = Self {
            brand: brand.to_string(),
            model: model.to_string(),
            speed: Speed::clamped(speed),
            transmission,
        };
        registry.register(&car.name());
        debug!(car = %car.name(), total = registry.total(), "Car registered");
        car
    }

    /// `"{brand} {model}"`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Current speed
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change speed; negative values become zero
    pub fn set_speed(&mut self, kph: i32) {
        self.speed = Speed::clamped(kph);
    }

    /// How the car changes gears
    #[must_use]
    pub fn transmission(&self) -> Transmission {
        self.transmission
    }

    /// Cars built against `registry` so far
    #[must_use]
    pub fn total_cars(registry: &Registry) -> usize {
        registry.total()
    }
}

impl Vehicle for Car {
    fn drive(&self) -> String {
        let name = self.name();
        match self.transmission {
            Transmission::Standard if self.speed.kph() > 0 => {
                format!("{name} is driving at {}.", self.speed)
            }
            Transmission::Standard => format!("{name} is parked."),
            Transmission::Manual => format!("{name} requires manual gear shifting."),
            Transmission::Automatic => format!("{name} changes gears automatically."),
        }
    }

    fn refuel(&self) -> String {
        format!("{} is refueling.", self.name())
    }
}

/// Convert km/h to mph, rounded to two decimals
#[must_use]
pub fn convert_speed_to_mph(kph: f64) -> f64 {
    (kph * KPH_TO_MPH * 100.0).round() / 100.0
}
