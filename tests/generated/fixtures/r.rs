// @generated by textloc. Do not edit.

/// Resource ids of the [`Localization`] texts.
pub struct R;

#[allow(non_upper_case_globals)]
impl R {
    /// | File | Translation |
    /// | --- | --- |
    /// | english.yml | Hello |
    /// | polish.yml | Hej |
    pub const greetings: ::textloc::runtime::StringResourceId = ::textloc::runtime::StringResourceId::new(1);

    /// | File | Translation |
    /// | --- | --- |
    /// | english.yml | Goodbye |
    pub const farewell: ::textloc::runtime::StringResourceId = ::textloc::runtime::StringResourceId::new(2);

    /// *Marked as untranslatable*
    ///
    /// Acme
    pub const brand: ::textloc::runtime::StringResourceId = ::textloc::runtime::StringResourceId::new(3);
}
