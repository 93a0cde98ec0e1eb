use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct ComparatorDeriveInput {
    ident: syn::Ident,
    data: ast::Data<ComparatorVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct ComparatorVariant {
    ident: syn::Ident,
}

pub fn comparator_functions_impl(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error(),
    };
    let enum_info = match ComparatorDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors(),
    };

    let enum_name = &enum_info.ident;
    // supports(enum_unit) already rejected structs
    let variants = match enum_info.data.take_enum() {
        Some(variants) => variants,
        None => return TokenStream::new(),
    };

    let functions = variants.iter().map(|var| {
        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let fn_name = format_ident!("{}", snake);
        let doc = format!(
            "Builds a `{}` comparison between `left` and `right`.",
            snake
        );

        quote! {
            #[doc = #doc]
            pub fn #fn_name<L, R>(left: L, right: R) -> crate::Predicate
            where
                L: crate::IntoIdent,
                R: crate::IntoIdent,
            {
                crate::Predicate::compare(left, #enum_name::#var_name, right)
            }
        }
    });

    quote! {
        #(#functions)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_snake_case_functions() {
        let input = quote! {
            enum Comparator {
                Eq,
                Gte,
            }
        };
        let output = comparator_functions_impl(input).to_string();
        assert!(output.contains("pub fn eq"));
        assert!(output.contains("pub fn gte"));
        assert!(output.contains("Comparator :: Gte"));
    }

    #[test]
    fn test_rejects_struct() {
        let input = quote! {
            struct Comparator;
        };
        let output = comparator_functions_impl(input).to_string();
        assert!(output.contains("compile_error"));
    }
}
