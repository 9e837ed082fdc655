//! Enumeration-driven batch lookups.
//!
//! Types list their variants explicitly; keys are built as `prefix.Variant`
//! where the prefix defaults to [`TranslatableEnum::TYPE_NAME`].

use std::hash::Hash;

/// An enumeration whose variants map to translation keys.
///
/// Usually implemented through [`translatable_enum!`](crate::translatable_enum).
pub trait TranslatableEnum: Copy + Eq + Hash + 'static {
    /// Default key prefix.
    const TYPE_NAME: &'static str;

    /// Variants with their names, in declaration order.
    const VARIANTS: &'static [(Self, &'static str)];

    /// Name of `self`, as listed in [`Self::VARIANTS`].
    fn variant_name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map_or("", |(_, name)| name)
    }
}

/// Declare a fieldless enum that implements [`TranslatableEnum`].
///
/// ```
/// locale_kit::translatable_enum! {
///     /// Pets.
///     pub enum Animals { Dog, Cat, Rat, Snake }
/// }
///
/// use locale_kit::TranslatableEnum;
/// assert_eq!(Animals::TYPE_NAME, "Animals");
/// assert_eq!(Animals::Rat.variant_name(), "Rat");
/// ```
#[macro_export]
macro_rules! translatable_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::TranslatableEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [(Self, &'static str)] =
                &[$(($name::$variant, stringify!($variant))),+];
        }
    };
}

/// Build the lookup key for `name` under `section`, or the type name.
pub(crate) fn variant_key<E: TranslatableEnum>(section: Option<&str>, name: &str) -> String {
    let prefix = section.filter(|s| !s.is_empty()).unwrap_or(E::TYPE_NAME);
    format!("{prefix}.{name}")
}
