use patterns_log::MemoryLogger;
use vehicle_factory::{
    FactoryRegistryBuilder, RegionalFactory, RegistrationError, Vehicle, VehicleFactory,
};

#[derive(RegionalFactory)]
#[factory(region = "jp", spec = "JP Spec")]
struct JapanFactory;

#[derive(RegionalFactory)]
#[factory(spec = "UK Spec", region = " UK ")]
struct UkFactory;

#[test]
fn test_derive_binds_region_and_spec() {
    assert_eq!(JapanFactory.region(), "jp");
    assert_eq!(JapanFactory.spec(), "JP Spec");

    // Attribute order does not matter; the code is stored normalized
    assert_eq!(UkFactory.region(), "uk");
    assert_eq!(UkFactory.spec(), "UK Spec");
}

#[test]
fn test_derived_factory_builds_both_families() {
    let log = MemoryLogger::new();

    let car = JapanFactory.create_car("Toyota", "Corolla");
    let bike = JapanFactory.create_motorcycle("Honda", "CB500");
    car.start_engine(&log);
    bike.start_engine(&log);

    assert_eq!(
        log.messages(),
        vec![
            "Toyota Corolla (JP Spec): Двигун запущено",
            "Honda CB500 (JP Spec): Мотор заведено",
        ]
    );
}

#[test]
fn test_derived_factories_auto_register() {
    let registry = FactoryRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    // Built-in regions plus the two derived above
    assert_eq!(
        registry.regions().collect::<Vec<_>>(),
        vec!["eu", "jp", "uk", "us"]
    );
    assert_eq!(registry.get("uk").unwrap().spec(), "UK Spec");
}

#[test]
fn test_manual_registration_conflicts_with_plugin() {
    let result = FactoryRegistryBuilder::new()
        .register(JapanFactory)
        .unwrap()
        .register_plugins(|plugin| plugin.region == "jp");

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateRegion(ref r)) if r == "jp"
    ));
}

#[test]
fn test_plugin_filter_sees_normalized_region() {
    let registry = FactoryRegistryBuilder::new()
        .register_plugins(|plugin| plugin.region == "uk")
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("UK").unwrap().spec(), "UK Spec");
    assert!(registry.get("jp").is_err());
}
