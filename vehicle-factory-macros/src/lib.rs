//! Procedural macros for the vehicle-factory library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro implementing `VehicleFactory` for a regional unit struct
///
/// The generated impl binds the region code and the specification string,
/// and the struct is submitted to the plugin collection so
/// `FactoryRegistryBuilder::register_all_plugins` can find it.
///
/// # Attributes
///
/// - `region`: Required. Short region code used for lookup (e.g. "us").
///   Trimmed and lowercased at expansion, so `region()` and the plugin
///   record carry the same code the registry stores
/// - `spec`: Required. Specification string stamped on every vehicle (e.g. "US Spec")
///
/// # Requirements
///
/// The type must be a unit struct, because the plugin record holds a
/// `&'static` reference to its only value.
///
/// # Example
///
/// ```ignore
/// use vehicle_factory::RegionalFactory;
///
/// #[derive(RegionalFactory)]
/// #[factory(region = "uk", spec = "UK Spec")]
/// pub struct UkVehicleFactory;
/// ```
#[proc_macro_derive(RegionalFactory, attributes(factory))]
pub fn derive_regional_factory(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let is_unit = matches!(&input.data, Data::Struct(s) if matches!(s.fields, Fields::Unit));
    if !is_unit {
        return Err(syn::Error::new_spanned(
            name,
            "RegionalFactory can only be derived for unit structs",
        ));
    }

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("factory"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "RegionalFactory derive macro requires #[factory(region = \"..\", spec = \"..\")]",
            )
        })?;

    let mut region: Option<LitStr> = None;
    let mut spec: Option<LitStr> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("region") {
            region = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("spec") {
            spec = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported factory attribute, expected `region` or `spec`"))
        }
    })?;

    let region = region.ok_or_else(|| syn::Error::new_spanned(attr, "missing `region`"))?;
    let spec = spec.ok_or_else(|| syn::Error::new_spanned(attr, "missing `spec`"))?;

    let code = region.value().trim().to_ascii_lowercase();
    if code.is_empty() {
        return Err(syn::Error::new_spanned(&region, "`region` must not be empty"));
    }
    let region = LitStr::new(&code, region.span());

    Ok(quote! {
        impl ::vehicle_factory::VehicleFactory for #name {
            fn region(&self) -> &'static str {
                #region
            }

            fn spec(&self) -> &'static str {
                #spec
            }
        }

        ::vehicle_factory::inventory::submit! {
            ::vehicle_factory::FactoryPlugin {
                region: #region,
                factory: &#name,
            }
        }
    })
}
