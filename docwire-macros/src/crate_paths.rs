//! Resolution of the crate that exposes `field::{Entity, Selector}` to generated code.

use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::quote;

/// Packages re-exporting the `field` module, in lookup order.
const CANDIDATES: [&str; 2] = ["docwire", "docwire-core"];

/// Returns the path to the `docwire` facade or, failing that, to `docwire-core`.
///
/// Renamed dependencies resolve to their local name.
pub(crate) fn get_docwire_crate() -> syn::Result<TokenStream> {
    for package in CANDIDATES {
        let name = match crate_name(package) {
            Ok(FoundCrate::Itself) => package.replace('-', "_"),
            Ok(FoundCrate::Name(name)) => name,
            Err(_) => continue,
        };

        let ident = syn::Ident::new(&name, Span::call_site());
        return Ok(quote!(::#ident));
    }

    Err(syn::Error::new(
        Span::call_site(),
        "failed to resolve the `docwire` or `docwire-core` crate. Ensure one is listed in Cargo.toml dependencies.",
    ))
}
