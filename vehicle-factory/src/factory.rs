//! Abstract factory trait and the two regional factories

use crate::vehicle::{Car, Motorcycle, Vehicle, VehicleKind};
use vehicle_factory_macros::RegionalFactory;

/// Trait for factories that build a whole family of vehicles for one region.
///
/// The region and its specification string are bound once, when the caller
/// picks a factory. Every vehicle it creates carries that specification.
///
/// Implementors normally only provide `region()` and `spec()`; the creation
/// methods stamp `spec()` onto each vehicle. The `RegionalFactory` derive
/// writes both for a unit struct:
///
/// ```
/// use vehicle_factory::{RegionalFactory, Vehicle, VehicleFactory};
///
/// #[derive(RegionalFactory)]
/// #[factory(region = "jp", spec = "JP Spec")]
/// struct JapanFactory;
///
/// let car = JapanFactory.create_car("Toyota", "Corolla");
/// assert_eq!(car.spec(), "JP Spec");
/// ```
pub trait VehicleFactory: Sync {
    /// Short region code the factory is registered under (e.g. `us`)
    fn region(&self) -> &'static str;

    /// Specification string stamped onto every vehicle
    fn spec(&self) -> &'static str;

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, self.spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, self.spec())
    }

    /// Create a vehicle of the given kind behind a trait object
    fn create(&self, kind: VehicleKind, make: &str, model: &str) -> Box<dyn Vehicle> {
        match kind {
            VehicleKind::Car => Box::new(self.create_car(make, model)),
            VehicleKind::Motorcycle => Box::new(self.create_motorcycle(make, model)),
        }
    }
}

impl<T: VehicleFactory + ?Sized> VehicleFactory for &T {
    fn region(&self) -> &'static str {
        (**self).region()
    }

    fn spec(&self) -> &'static str {
        (**self).spec()
    }

    fn create_car(&self, make: &str, model: &str) -> Car {
        (**self).create_car(make, model)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        (**self).create_motorcycle(make, model)
    }
}

/// Factory for vehicles built to US specification
#[derive(Debug, Clone, Copy, Default, RegionalFactory)]
#[factory(region = "us", spec = "US Spec")]
pub struct USVehicleFactory;

/// Factory for vehicles built to EU specification
#[derive(Debug, Clone, Copy, Default, RegionalFactory)]
#[factory(region = "eu", spec = "EU Spec")]
pub struct EUVehicleFactory;
