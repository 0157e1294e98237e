extern crate proc_macro;

mod definition_macro;

use proc_macro::TokenStream;

#[proc_macro_attribute]
pub fn definition(attr: TokenStream, item: TokenStream) -> TokenStream {
    definition_macro::generate_definition_macro(attr, item)
}
