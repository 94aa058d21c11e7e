//! Factory registry keyed by region code

use crate::error::{FactoryError, RegistrationError};
use crate::factory::VehicleFactory;
use std::collections::BTreeMap;

/// Plugin information for automatic factory registration
///
/// Records are usually produced by `#[derive(RegionalFactory)]`, but can be
/// submitted by hand:
///
/// ```no_run
/// use vehicle_factory::{FactoryPlugin, VehicleFactory};
///
/// struct CanadaFactory;
///
/// impl VehicleFactory for CanadaFactory {
///     fn region(&self) -> &'static str { "ca" }
///     fn spec(&self) -> &'static str { "CA Spec" }
/// }
///
/// vehicle_factory::inventory::submit! {
///     FactoryPlugin { region: "ca", factory: &CanadaFactory }
/// }
/// ```
pub struct FactoryPlugin {
    /// Region code the factory answers to, lowercase when submitted by the derive
    pub region: &'static str,
    /// The factory instance (type-erased)
    pub factory: &'static dyn VehicleFactory,
}

inventory::collect!(FactoryPlugin);

/// Normalized lookup key for a region code
fn region_key(region: &str) -> String {
    region.trim().to_ascii_lowercase()
}

/// Builder for constructing a [`FactoryRegistry`] with a fluent API
///
/// Detects duplicate regions at registration time so the finished registry
/// can never hold two factories for the same code.
///
/// # Example
///
/// ```
/// use vehicle_factory::{EUVehicleFactory, FactoryRegistryBuilder, USVehicleFactory};
///
/// let registry = FactoryRegistryBuilder::new()
///     .register(USVehicleFactory)
///     .unwrap()
///     .register(EUVehicleFactory)
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.regions().collect::<Vec<_>>(), vec!["eu", "us"]);
/// ```
pub struct FactoryRegistryBuilder {
    factories: BTreeMap<String, Box<dyn VehicleFactory>>,
}

impl FactoryRegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory under its own region code
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the factory registered, ready for chaining
    /// * `Err(RegistrationError)` - A factory for this region already exists
    pub fn register<F>(mut self, factory: F) -> Result<Self, RegistrationError>
    where
        F: VehicleFactory + 'static,
    {
        let key = region_key(factory.region());
        if self.factories.contains_key(&key) {
            return Err(RegistrationError::DuplicateRegion(key));
        }
        self.factories.insert(key, Box::new(factory));
        Ok(self)
    }

    /// Register every factory submitted through `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```
    /// use vehicle_factory::FactoryRegistryBuilder;
    ///
    /// let registry = FactoryRegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.region == "eu")
    ///     .unwrap()
    ///     .build();
    ///
    /// assert!(registry.get("eu").is_ok());
    /// assert!(registry.get("us").is_err());
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&FactoryPlugin) -> bool,
    {
        for plugin in inventory::iter::<FactoryPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.factory)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> FactoryRegistry {
        FactoryRegistry {
            factories: self.factories,
        }
    }
}

impl Default for FactoryRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up factories by region
pub struct FactoryRegistry {
    factories: BTreeMap<String, Box<dyn VehicleFactory>>,
}

impl FactoryRegistry {
    /// Look up the factory for a region code (case-insensitive)
    ///
    /// # Returns
    /// * `Ok(&dyn VehicleFactory)` - The registered factory
    /// * `Err(FactoryError::UnknownRegion)` - Nothing registered for the code
    pub fn get(&self, region: &str) -> Result<&dyn VehicleFactory, FactoryError> {
        let key = region_key(region);
        self.factories
            .get(&key)
            .map(|f| f.as_ref())
            .ok_or(FactoryError::UnknownRegion(key))
    }

    /// Registered region codes in sorted order
    pub fn regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
