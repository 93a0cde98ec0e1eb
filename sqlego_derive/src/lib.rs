use proc_macro::TokenStream;

mod comparators;

/// Generates one free constructor function per comparator variant.
///
/// `Gte` becomes `pub fn gte(left, right) -> crate::Predicate`, placed next to
/// the enum so the crate root can re-export it.
#[proc_macro_derive(Comparators)]
pub fn comparator_functions(input: TokenStream) -> TokenStream {
    comparators::comparator_functions_impl(input.into()).into()
}
