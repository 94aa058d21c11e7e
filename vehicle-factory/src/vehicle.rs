//! Vehicle trait and its two variants

use patterns_log::Logger;
use std::fmt;

/// Which family a vehicle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car => f.write_str("car"),
            VehicleKind::Motorcycle => f.write_str("motorcycle"),
        }
    }
}

/// Core trait shared by everything a factory can build.
///
/// All fields are fixed at construction, so none of these methods can fail.
///
/// # Example
///
/// ```
/// use patterns_log::MemoryLogger;
/// use vehicle_factory::{Car, Vehicle};
///
/// let log = MemoryLogger::new();
/// let car = Car::new("Ford", "Mustang", "US Spec");
/// car.start_engine(&log);
///
/// assert_eq!(log.messages(), vec!["Ford Mustang (US Spec): Двигун запущено"]);
/// ```
pub trait Vehicle {
    fn make(&self) -> &str;

    fn model(&self) -> &str;

    /// Regional specification stamped by the factory
    fn spec(&self) -> &str;

    fn kind(&self) -> VehicleKind;

    /// Emit exactly one informational line naming make, model and spec
    fn start_engine(&self, log: &dyn Logger);
}

/// A car built to a regional specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    make: String,
    model: String,
    spec: String,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            spec: spec.into(),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> &str {
        &self.spec
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn start_engine(&self, log: &dyn Logger) {
        log.info(&format!(
            "{} {} ({}): Двигун запущено",
            self.make, self.model, self.spec
        ));
    }
}

/// A motorcycle built to a regional specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    make: String,
    model: String,
    spec: String,
}

impl Motorcycle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            spec: spec.into(),
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> &str {
        &self.spec
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn start_engine(&self, log: &dyn Logger) {
        log.info(&format!(
            "{} {} ({}): Мотор заведено",
            self.make, self.model, self.spec
        ));
    }
}
