use proc_macro::TokenStream;
use quote::quote;

/// Generate a color model from a struct with exactly 3 channel fields.
///
/// The fields are made public and the model gets value derives, a `new`
/// constructor, `to_components` and conversions from and to plain channel
/// triplets.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Models are plain values.
    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    });
    input.attrs.push(syn::parse_quote! {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    });

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its 3 channels.
            pub const fn new(
                #field1: crate::color::Channel,
                #field2: crate::color::Channel,
                #field3: crate::color::Channel,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic floating point components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(
                    crate::color::Component::from(self.#field1),
                    crate::color::Component::from(self.#field2),
                    crate::color::Component::from(self.#field3),
                )
            }
        }

        impl From<(crate::color::Channel, crate::color::Channel, crate::color::Channel)>
            for #struct_name
        {
            fn from(
                (#field1, #field2, #field3): (
                    crate::color::Channel,
                    crate::color::Channel,
                    crate::color::Channel,
                ),
            ) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<[crate::color::Channel; 3]> for #struct_name {
            fn from([#field1, #field2, #field3]: [crate::color::Channel; 3]) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name>
            for (crate::color::Channel, crate::color::Channel, crate::color::Channel)
        {
            fn from(value: #struct_name) -> Self {
                (value.#field1, value.#field2, value.#field3)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
