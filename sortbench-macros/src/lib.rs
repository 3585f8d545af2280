//! Sortbench Macros
//!
//! Procedural macro for strategy registration.
//!
//! - `#[algorithm]` - Register a sorting strategy with the link-time registry

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, ItemFn, ReturnType, parse_macro_input};

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Parse a path attribute: `attr = some::function`
    pub fn path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
        meta.value()?.parse()
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Register a sorting strategy
///
/// The function must have the shape `fn(Vec<String>) -> Vec<String>`.
///
/// # Example
///
/// ```ignore
/// #[algorithm]
/// pub fn insertion(mut data: Vec<String>) -> Vec<String> { ... }
///
/// // With configuration
/// #[algorithm(
///     name = "quick",
///     description = "Quicksort with a random pivot",
///     setup = seed_pivot_rng
/// )]
/// pub fn sort(data: Vec<String>) -> Vec<String> { ... }
/// ```
#[proc_macro_attribute]
pub fn algorithm(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    algorithm_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn algorithm_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    validate_signature(&func)?;

    let config = parse_algorithm_config(args)?;

    let fn_name = &func.sig.ident;
    let name = config.name.unwrap_or_else(|| fn_name.to_string());
    let description = config.description.unwrap_or_default();
    let setup = config
        .setup
        .map(|path| quote! { ::core::option::Option::Some(#path as fn()) })
        .unwrap_or(quote! { ::core::option::Option::None });

    Ok(quote! {
        #func

        ::sortbench_core::internal::inventory::submit! {
            ::sortbench_core::AlgorithmDef {
                name: #name,
                description: #description,
                entry: ::core::option::Option::Some(#fn_name as ::sortbench_core::SortFn),
                setup: #setup,
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}

#[derive(Default)]
struct AlgorithmConfig {
    name: Option<String>,
    description: Option<String>,
    setup: Option<syn::Path>,
}

fn parse_algorithm_config(args: TokenStream2) -> Result<AlgorithmConfig, syn::Error> {
    let mut config = AlgorithmConfig::default();

    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "name" => config.name = Some(attr::string(&meta)?),
            "description" => config.description = Some(attr::string(&meta)?),
            "setup" => config.setup = Some(attr::path(&meta)?),
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    if config.name.as_deref() == Some("") {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "Sortbench: `name` must not be empty",
        ));
    }

    Ok(config)
}

fn validate_signature(func: &ItemFn) -> syn::Result<()> {
    let sig = &func.sig;

    if sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            sig.asyncness,
            "Sortbench: strategies must be synchronous",
        ));
    }

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "Sortbench: strategies cannot be generic",
        ));
    }

    let takes_one_value = sig.inputs.len() == 1
        && matches!(sig.inputs.first(), Some(FnArg::Typed(_)));
    if !takes_one_value {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "Sortbench: function must take exactly one argument: `Vec<String>`",
        ));
    }

    if matches!(sig.output, ReturnType::Default) {
        return Err(syn::Error::new_spanned(
            sig,
            "Sortbench: function must return the sorted `Vec<String>`",
        ));
    }

    Ok(())
}
