extern crate proc_macro;

mod serializable;

use proc_macro::TokenStream;

#[proc_macro_derive(Serializable, attributes(serializable))]
pub fn derive_serializable(input: TokenStream) -> TokenStream {
    crate::serializable::derive_serializable(input)
}
