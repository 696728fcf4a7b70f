// @generated by textloc. Do not edit.

impl Localization {
    /// Texts of the current locale, falling back to the default locale.
    #[allow(non_snake_case)]
    pub fn Table(&self) -> LocalizationTable<'_> {
        LocalizationTable { outer: self }
    }
}

/// Fallback table over the providers of [`Localization`].
pub struct LocalizationTable<'a> {
    outer: &'a Localization,
}

#[allow(non_snake_case)]
impl LocalizationTable<'_> {
    fn __current_or_default(&self, index: u32) -> &'static str {
        let id = ::textloc::runtime::StringResourceId::new(index);
        ::textloc::runtime::LocalizedTextProvider::get(&*self.outer.provider(), id)
            .unwrap_or_else(|| ::textloc::runtime::DefaultTextProvider::text(&*self.outer.default_provider(), id))
    }

    fn __default_only(&self, index: u32) -> &'static str {
        ::textloc::runtime::DefaultTextProvider::text(&*self.outer.default_provider(), ::textloc::runtime::StringResourceId::new(index))
    }

    /// | File | Translation |
    /// | --- | --- |
    /// | english.yml | Hello |
    /// | polish.yml | Hej |
    pub fn greetings(&self) -> &'static str {
        self.__current_or_default(1)
    }

    /// | File | Translation |
    /// | --- | --- |
    /// | english.yml | Goodbye |
    pub fn farewell(&self) -> &'static str {
        self.__current_or_default(2)
    }

    /// *Marked as untranslatable*
    ///
    /// Acme
    pub fn brand(&self) -> &'static str {
        self.__default_only(3)
    }
}

impl ::core::ops::Index<::textloc::runtime::StringResourceId> for LocalizationTable<'_> {
    type Output = str;

    fn index(&self, id: ::textloc::runtime::StringResourceId) -> &str {
        match id.get() {
            index @ 3 => self.__default_only(index),
            index => self.__current_or_default(index),
        }
    }
}
