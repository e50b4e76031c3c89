//! Wire shapes for the AniLiberty v1 API
//!
//! Field names, optionality, and nesting follow the API exactly. Composite
//! shapes (a release with its genres, a torrent with its release, ...) embed
//! the base shape with `#[serde(flatten)]`.

/// Declare a closed string enum with its exact wire spellings
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// The API identifier string for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod accounts;
pub mod ads;
pub mod anime;
pub mod app;
pub mod common;
pub mod media;
pub mod teams;
pub mod torrents;
