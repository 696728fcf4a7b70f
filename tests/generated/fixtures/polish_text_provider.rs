// @generated by textloc. Do not edit.
// Source: polish.yml

/// Texts of `polish.yml`.
pub struct PolishTextProvider;

impl ::textloc::runtime::LocalizedTextProvider for PolishTextProvider {
    fn get(&self, id: ::textloc::runtime::StringResourceId) -> Option<&'static str> {
        match id.get() {
            1 => Some("Hej"), // greetings
            _ => None,
        }
    }
}
