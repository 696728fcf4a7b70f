// @generated by textloc. Do not edit.
// Source: english.yml

/// Texts of `english.yml` (default locale).
pub struct EnglishTextProvider;

impl ::textloc::runtime::LocalizedTextProvider for EnglishTextProvider {
    fn get(&self, id: ::textloc::runtime::StringResourceId) -> Option<&'static str> {
        match id.get() {
            1 => Some("Hello"), // greetings
            2 => Some("Goodbye"), // farewell
            3 => Some("Acme"), // brand (untranslatable)
            _ => None,
        }
    }
}

impl ::textloc::runtime::DefaultTextProvider for EnglishTextProvider {
    fn text(&self, id: ::textloc::runtime::StringResourceId) -> &'static str {
        match ::textloc::runtime::LocalizedTextProvider::get(self, id) {
            Some(text) => text,
            None => panic!("unknown string resource id {} for EnglishTextProvider", id),
        }
    }
}
