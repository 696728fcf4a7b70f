//! Types referenced by generated code.
//!
//! Generated providers implement [`LocalizedTextProvider`]; the default
//! provider also implements [`DefaultTextProvider`]. The generated table reads
//! through both with a [`StringResourceId`].

use std::fmt;

/// Opaque 1-based id of a translation key, shared by every provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringResourceId(u32);

impl StringResourceId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<StringResourceId> for u32 {
    fn from(id: StringResourceId) -> Self {
        id.0
    }
}

impl fmt::Display for StringResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Texts of one locale.
pub trait LocalizedTextProvider {
    /// Text for `id`, or `None` when this locale has no text for it.
    fn get(&self, id: StringResourceId) -> Option<&'static str>;
}

/// The locale every other locale falls back to.
pub trait DefaultTextProvider: LocalizedTextProvider {
    /// Text for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this build's keys.
    fn text(&self, id: StringResourceId) -> &'static str;
}

impl<T: LocalizedTextProvider + ?Sized> LocalizedTextProvider for &T {
    fn get(&self, id: StringResourceId) -> Option<&'static str> {
        (**self).get(id)
    }
}

impl<T: DefaultTextProvider + ?Sized> DefaultTextProvider for &T {
    fn text(&self, id: StringResourceId) -> &'static str {
        (**self).text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct English;

    impl LocalizedTextProvider for English {
        fn get(&self, id: StringResourceId) -> Option<&'static str> {
            match id.get() {
                1 => Some("Hi"),
                _ => None,
            }
        }
    }

    impl DefaultTextProvider for English {
        fn text(&self, id: StringResourceId) -> &'static str {
            match self.get(id) {
                Some(text) => text,
                None => panic!("unknown string resource id {} for English", id),
            }
        }
    }

    #[test]
    fn test_string_resource_id() {
        const ID: StringResourceId = StringResourceId::new(7);
        assert_eq!(ID.get(), 7);
        assert_eq!(u32::from(ID), 7);
        assert_eq!(ID.to_string(), "7");
    }

    #[test]
    fn test_providers_through_references_and_dyn() {
        let english = English;
        let dynamic: &dyn DefaultTextProvider = &english;
        assert_eq!(dynamic.get(StringResourceId::new(1)), Some("Hi"));
        assert_eq!((&english).text(StringResourceId::new(1)), "Hi");
        assert_eq!(
            LocalizedTextProvider::get(&&english, StringResourceId::new(2)),
            None
        );
    }

    #[test]
    #[should_panic(expected = "unknown string resource id 2 for English")]
    fn test_default_provider_panics_on_unknown_id() {
        English.text(StringResourceId::new(2));
    }
}
