//! Fixed driver sequence for the vehicle factory demo

use crate::error::FactoryError;
use crate::registry::FactoryRegistry;
use crate::vehicle::{Vehicle, VehicleKind};
use patterns_log::Logger;

/// One step of the demo: which factory builds what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOrder {
    pub region: &'static str,
    pub kind: VehicleKind,
    pub make: &'static str,
    pub model: &'static str,
}

/// The four vehicles the demo builds, in the order they are started
pub const DEMO_ORDERS: [DemoOrder; 4] = [
    DemoOrder {
        region: "us",
        kind: VehicleKind::Car,
        make: "Ford",
        model: "Mustang",
    },
    DemoOrder {
        region: "us",
        kind: VehicleKind::Motorcycle,
        make: "Harley-Davidson",
        model: "Sportster",
    },
    DemoOrder {
        region: "eu",
        kind: VehicleKind::Car,
        make: "BMW",
        model: "3 Series",
    },
    DemoOrder {
        region: "eu",
        kind: VehicleKind::Motorcycle,
        make: "Ducati",
        model: "Monster",
    },
];

/// Build and start every vehicle in [`DEMO_ORDERS`]
///
/// All factories are resolved before anything is built, so a missing region
/// fails the run without emitting a partial sequence.
///
/// # Returns
/// * `Ok(Vec<Box<dyn Vehicle>>)` - The vehicles, in start order
/// * `Err(FactoryError::UnknownRegion)` - The registry lacks a demo region
pub fn run_demo(
    registry: &FactoryRegistry,
    log: &dyn Logger,
) -> Result<Vec<Box<dyn Vehicle>>, FactoryError> {
    let factories = DEMO_ORDERS
        .iter()
        .map(|order| registry.get(order.region))
        .collect::<Result<Vec<_>, _>>()?;

    let mut vehicles = Vec::with_capacity(DEMO_ORDERS.len());
    for (order, factory) in DEMO_ORDERS.iter().zip(factories) {
        log.debug(&format!(
            "Building {} {} {} with the {} factory",
            order.kind,
            order.make,
            order.model,
            factory.region()
        ));
        let vehicle = factory.create(order.kind, order.make, order.model);
        vehicle.start_engine(log);
        vehicles.push(vehicle);
    }
    Ok(vehicles)
}
