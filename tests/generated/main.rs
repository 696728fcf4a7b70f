//! Runs the code the compiler generates for `fixtures/*.yml`.
//!
//! The checked-in `fixtures/*.rs` are compiled into this test crate, and
//! `test_fixtures_match_compiler_output` keeps them identical to what
//! `textloc::core::compile` emits today.

use pretty_assertions::assert_eq;
use textloc::core::{BuildInput, ProviderSpec, TableSpec, TranslationFile, compile};
use textloc::issues::Rule;
use textloc::runtime::{DefaultTextProvider, LocalizedTextProvider, StringResourceId};

include!("fixtures/english_text_provider.rs");
include!("fixtures/polish_text_provider.rs");
include!("fixtures/localization_table.rs");
include!("fixtures/r.rs");

struct Localization {
    current: Box<dyn LocalizedTextProvider>,
}

impl Localization {
    fn new(current: impl LocalizedTextProvider + 'static) -> Self {
        Self {
            current: Box::new(current),
        }
    }

    fn provider(&self) -> &dyn LocalizedTextProvider {
        &*self.current
    }

    fn default_provider(&self) -> &EnglishTextProvider {
        &EnglishTextProvider
    }
}

fn fixture_input() -> BuildInput {
    BuildInput {
        files: vec![
            TranslationFile::new(
                "fixtures/english.yml",
                "english.yml",
                include_str!("fixtures/english.yml"),
            ),
            TranslationFile::new(
                "fixtures/polish.yml",
                "polish.yml",
                include_str!("fixtures/polish.yml"),
            ),
        ],
        providers: vec![
            ProviderSpec::new("", "EnglishTextProvider", "english.yml", true),
            ProviderSpec::new("", "PolishTextProvider", "polish.yml", false),
        ],
        tables: vec![
            TableSpec::new("", "Localization", "provider", "default_provider").with_id_class("R"),
        ],
    }
}

#[test]
fn test_fixtures_match_compiler_output() {
    let output = compile(&fixture_input());

    let rules: Vec<Rule> = output.diagnostics.iter().map(|d| d.rule()).collect();
    assert_eq!(rules, vec![Rule::MissingKey, Rule::UntranslatableTranslated]);

    let expected = [
        ("english_text_provider.rs", include_str!("fixtures/english_text_provider.rs")),
        ("polish_text_provider.rs", include_str!("fixtures/polish_text_provider.rs")),
        ("localization_table.rs", include_str!("fixtures/localization_table.rs")),
        ("r.rs", include_str!("fixtures/r.rs")),
    ];
    assert_eq!(output.artifacts.len(), expected.len());
    for (name, contents) in expected {
        let artifact = output
            .artifact(name)
            .unwrap_or_else(|| panic!("{} was not generated", name));
        assert_eq!(artifact.contents, contents, "{} is out of date", name);
    }
}

#[test]
fn test_current_locale_text_when_present() {
    let l10n = Localization::new(PolishTextProvider);
    assert_eq!(l10n.Table().greetings(), "Hej");

    let l10n = Localization::new(EnglishTextProvider);
    assert_eq!(l10n.Table().greetings(), "Hello");
}

#[test]
fn test_missing_text_falls_back_to_default_locale() {
    let l10n = Localization::new(PolishTextProvider);
    assert_eq!(l10n.Table().farewell(), "Goodbye");
}

#[test]
fn test_untranslatable_key_reads_default_locale_only() {
    let l10n = Localization::new(PolishTextProvider);
    assert_eq!(l10n.Table().brand(), "Acme");
    assert_eq!(PolishTextProvider.get(R::brand), None);
}

#[test]
fn test_index_by_resource_id() {
    let l10n = Localization::new(PolishTextProvider);
    let table = l10n.Table();

    assert_eq!(&table[R::greetings], "Hej");
    assert_eq!(&table[R::farewell], "Goodbye");
    assert_eq!(&table[R::brand], "Acme");
    assert_eq!(&table[StringResourceId::new(1)], "Hej");
}

#[test]
fn test_secondary_provider_unknown_id_is_none() {
    assert_eq!(PolishTextProvider.get(StringResourceId::new(99)), None);
    assert_eq!(PolishTextProvider.get(R::farewell), None);
    assert_eq!(EnglishTextProvider.get(StringResourceId::new(99)), None);
}

#[test]
#[should_panic(expected = "unknown string resource id 99 for EnglishTextProvider")]
fn test_default_provider_unknown_id_panics() {
    EnglishTextProvider.text(StringResourceId::new(99));
}
