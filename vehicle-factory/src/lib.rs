//! Vehicle Factory Library
//!
//! A small demonstration of the abstract-factory pattern. A factory is
//! chosen once per region; from then on the caller only picks a vehicle
//! family (car or motorcycle) and the regional specification follows.
//!
//! # Quick Example
//!
//! ```
//! use patterns_log::MemoryLogger;
//! use vehicle_factory::{EUVehicleFactory, USVehicleFactory, Vehicle, VehicleFactory};
//!
//! let log = MemoryLogger::new();
//!
//! let factories: [&dyn VehicleFactory; 2] = [&USVehicleFactory, &EUVehicleFactory];
//! for factory in factories {
//!     factory.create_car("Ford", "Mustang").start_engine(&log);
//! }
//!
//! assert_eq!(
//!     log.messages(),
//!     vec![
//!         "Ford Mustang (US Spec): Двигун запущено",
//!         "Ford Mustang (EU Spec): Двигун запущено",
//!     ]
//! );
//! ```
//!
//! # Key Concepts
//!
//! ## Vehicle Trait
//!
//! [`Vehicle`] is implemented by [`Car`] and [`Motorcycle`]. Starting a
//! vehicle writes exactly one line to the [`Logger`](patterns_log::Logger)
//! handed in by the caller.
//!
//! ## VehicleFactory Trait
//!
//! [`VehicleFactory`] binds a region code and a specification string.
//! [`USVehicleFactory`] and [`EUVehicleFactory`] are the built-in regions.
//!
//! ## Plugin System and Derive Macro
//!
//! `#[derive(RegionalFactory)]` implements [`VehicleFactory`] for a unit
//! struct and submits it to the plugin collection, so
//! [`FactoryRegistryBuilder::register_all_plugins`] picks it up:
//!
//! ```ignore
//! #[derive(RegionalFactory)]
//! #[factory(region = "uk", spec = "UK Spec")]
//! struct UkFactory;
//! ```

// Lets the derive macro's `::vehicle_factory::` paths resolve inside this crate
extern crate self as vehicle_factory;

mod demo;
mod error;
mod factory;
mod registry;
mod vehicle;

// Re-export public API
pub use demo::{DEMO_ORDERS, DemoOrder, run_demo};
pub use error::{FactoryError, RegistrationError};
pub use factory::{EUVehicleFactory, USVehicleFactory, VehicleFactory};
pub use registry::{FactoryPlugin, FactoryRegistry, FactoryRegistryBuilder};
pub use vehicle::{Car, Motorcycle, Vehicle, VehicleKind};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use vehicle_factory_macros::RegionalFactory;
