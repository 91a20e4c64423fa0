//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit};

/// Derive macro generating a `Solver` implementation from `PartSolver<N>` impls
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: Required. Number of parts (1-25). The type
///   must implement `PartSolver<1>` through `PartSolver<N>`.
///
/// The generated `solve_part` dispatches part `n` to
/// `<Self as PartSolver<n>>::solve` and returns
/// `SolveError::PartNotImplemented` for anything else.
///
/// # Example
///
/// ```ignore
/// use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
    else {
        return syn::Error::new_spanned(
            name,
            "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
        )
        .to_compile_error()
        .into();
    };

    let mut max_parts: Option<u8> = None;
    let parsed = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => {
                    max_parts = Some(lit_int.base10_parse()?);
                    Ok(())
                }
                other => Err(syn::Error::new_spanned(other, "max_parts must be an integer")),
            }
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let max_parts = match max_parts {
        Some(n) if (1..=25).contains(&n) => n,
        Some(_) => {
            return syn::Error::new_spanned(attr, "max_parts must be between 1 and 25")
                .to_compile_error()
                .into();
        }
        None => {
            return syn::Error::new_spanned(attr, "missing required `max_parts`")
                .to_compile_error()
                .into();
        }
    };

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::puzzle_solver::PartSolver<#part>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl #impl_generics ::puzzle_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::puzzle_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::puzzle_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
