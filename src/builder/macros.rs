//! Macros for declaring state enums.

/// Declare a unit enum and implement `State` for it.
///
/// The generated enum gets `Clone`, `PartialEq`, `Debug` and serde derives
/// plus an `ALL` slice listing its variants in declaration order. Variants
/// named in the optional `error:` list report `is_error() == true`.
///
/// # Example
///
/// ```
/// use scicalc::state_enum;
/// use scicalc::core::State;
///
/// state_enum! {
///     pub enum DisplayPhase {
///         Idle,
///         Flashing,
///     }
///     error: [Flashing]
/// }
///
/// assert_eq!(DisplayPhase::Idle.name(), "Idle");
/// assert!(DisplayPhase::Flashing.is_error());
/// assert_eq!(DisplayPhase::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(clippy::match_single_binding)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
