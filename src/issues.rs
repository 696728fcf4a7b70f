//! Diagnostic types produced by a build.
//!
//! Every problem the compiler can find is an issue: key mismatches between
//! locales, declarations that cannot be generated, and translation files that
//! could not be read. Each issue is self-contained with all information needed
//! by the reporters (CLI output, `cargo:warning` lines).
//!
//! Nothing here is fatal to the build. Errors only mean some artifact was
//! skipped.

use enum_dispatch::enum_dispatch;

use crate::core::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ExtraKey,
    UntranslatableTranslated,
    UnmatchedProvider,
    NoDefaultProvider,
    MultipleDefaultProviders,
    MultipleTables,
    InvalidIdentifier,
    DuplicateArtifact,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ExtraKey => write!(f, "extra-key"),
            Rule::UntranslatableTranslated => write!(f, "untranslatable-translated"),
            Rule::UnmatchedProvider => write!(f, "unmatched-provider"),
            Rule::NoDefaultProvider => write!(f, "no-default-provider"),
            Rule::MultipleDefaultProviders => write!(f, "multiple-default-providers"),
            Rule::MultipleTables => write!(f, "multiple-tables"),
            Rule::InvalidIdentifier => write!(f, "invalid-identifier"),
            Rule::DuplicateArtifact => write!(f, "duplicate-artifact"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types - Translation Files (MessageContext)
// ============================================================

/// Key exists in the default locale but has no translation in another locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    /// Points at the secondary file, without a line.
    pub context: MessageContext,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key exists in a secondary locale but not in the default locale.
///
/// Such a key never receives an index, so it cannot be reached from
/// generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraKeyIssue {
    pub context: MessageContext,
    /// File name of the default locale.
    pub default_file: String,
}

impl ExtraKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ExtraKey
    }
}

/// Key is marked untranslatable in the default locale but a secondary locale
/// translates it anyway. The translation is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatableTranslatedIssue {
    pub context: MessageContext,
    /// File name of the default locale.
    pub default_file: String,
}

impl UntranslatableTranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UntranslatableTranslated
    }
}

// ============================================================
// Issue Types - Declarations
// ============================================================

/// Provider declaration whose file was not found among the translation files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedProviderIssue {
    pub class_name: String,
    pub filename: String,
}

impl UnmatchedProviderIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnmatchedProvider
    }
}

/// No provider is marked as the default locale; nothing is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoDefaultProviderIssue {
    /// Number of providers that were matched to a file.
    pub provider_count: usize,
}

impl NoDefaultProviderIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NoDefaultProvider
    }
}

/// More than one provider claims to be the default locale; nothing is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleDefaultProvidersIssue {
    pub class_names: Vec<String>,
}

impl MultipleDefaultProvidersIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MultipleDefaultProviders
    }
}

/// More than one table is declared; neither the table nor the id table is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleTablesIssue {
    pub class_names: Vec<String>,
}

impl MultipleTablesIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MultipleTables
    }
}

/// A name that must become a Rust identifier is not one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentifierIssue {
    /// What the name is used for (e.g., "tableName of table 'Localization'").
    pub subject: String,
    /// The offending name.
    pub value: String,
    /// Set when the name is a translation key.
    pub context: Option<MessageContext>,
    /// What was skipped because of it.
    pub skipped: String,
}

impl InvalidIdentifierIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InvalidIdentifier
    }
}

/// Two artifacts would be written under the same name; the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateArtifactIssue {
    pub name: String,
    /// Class name of the artifact that was replaced.
    pub replaced: String,
    /// Class name of the artifact that was kept.
    pub kept: String,
}

impl DuplicateArtifactIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateArtifact
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Translation file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found during a build.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    ExtraKey(ExtraKeyIssue),
    UntranslatableTranslated(UntranslatableTranslatedIssue),
    UnmatchedProvider(UnmatchedProviderIssue),
    NoDefaultProvider(NoDefaultProviderIssue),
    MultipleDefaultProviders(MultipleDefaultProvidersIssue),
    MultipleTables(MultipleTablesIssue),
    InvalidIdentifier(InvalidIdentifierIssue),
    DuplicateArtifact(DuplicateArtifactIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// The translation key this issue is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Issue::MissingKey(issue) => Some(&issue.context.key),
            Issue::ExtraKey(issue) => Some(&issue.context.key),
            Issue::UntranslatableTranslated(issue) => Some(&issue.context.key),
            Issue::InvalidIdentifier(issue) => issue.context.as_ref().map(|c| c.key.as_str()),
            _ => None,
        }
    }

    /// One-line description, used where there is no room for the
    /// cargo-style layout (e.g. `cargo:warning=` lines).
    pub fn summary(&self) -> String {
        let location = match self.location() {
            ReportLocation::Message(ctx) if ctx.location.has_line() => {
                format!("{}:{}: ", ctx.file_path(), ctx.line())
            }
            ReportLocation::Message(ctx) => format!("{}: ", ctx.file_path()),
            ReportLocation::File { path } => format!("{}: ", path),
            ReportLocation::Build => String::new(),
        };
        match self.details() {
            Some(details) => format!(
                "{}{} \"{}\" {}",
                location,
                self.rule(),
                self.message(),
                details
            ),
            None => format!("{}{} \"{}\"", location, self.rule(), self.message()),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Translation file location (line may be 0 for missing keys).
    Message(&'a MessageContext),
    /// File-level only (for ReadError).
    File { path: &'a str },
    /// Declaration-level issue with no file to point at.
    Build,
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for zero-cost dispatch on the
/// `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, class name, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing its translation in {}, the default text is used",
            self.context.file_name
        ))
    }
}

impl Report for ExtraKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, but not present in the default translations file {}",
            self.context.file_name, self.default_file
        ))
    }
}

impl Report for UntranslatableTranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, but marked as untranslatable in {}",
            self.context.file_name, self.default_file
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("remove the line, the default text is always used for this key")
    }
}

impl Report for UnmatchedProviderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Build
    }

    fn message(&self) -> String {
        self.class_name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("no translation file named {}", self.filename))
    }
}

impl Report for NoDefaultProviderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Build
    }

    fn message(&self) -> String {
        "no default provider".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} provider(s) matched, none has isDefault set; nothing was generated",
            self.provider_count
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("set \"isDefault\": true on exactly one provider")
    }
}

impl Report for MultipleDefaultProvidersIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Build
    }

    fn message(&self) -> String {
        self.class_names.join(", ")
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("all marked as default; nothing was generated".to_string())
    }
}

impl Report for MultipleTablesIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Build
    }

    fn message(&self) -> String {
        self.class_names.join(", ")
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("only one table may be declared; no table was generated".to_string())
    }
}

impl Report for InvalidIdentifierIssue {
    fn location(&self) -> ReportLocation<'_> {
        match &self.context {
            Some(ctx) => ReportLocation::Message(ctx),
            None => ReportLocation::Build,
        }
    }

    fn message(&self) -> String {
        self.value.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} cannot be used as a Rust identifier; skipped {}",
            self.subject, self.skipped
        ))
    }
}

impl Report for DuplicateArtifactIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Build
    }

    fn message(&self) -> String {
        self.name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "generated by both {} and {}; kept {}",
            self.replaced, self.kept, self.kept
        ))
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// Get file path for sorting.
    fn sort_file_path(&self) -> Option<&str> {
        match self.location() {
            ReportLocation::Message(ctx) => Some(&ctx.location.file_path),
            ReportLocation::File { path } => Some(path),
            ReportLocation::Build => None,
        }
    }

    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            _ => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: file_path (None last), line, rule, message
        match (self.sort_file_path(), other.sort_file_path()) {
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| self.sort_line().cmp(&other.sort_line()))
                .then_with(|| self.rule().cmp(&other.rule()))
                .then_with(|| self.message().cmp(&other.message())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .rule()
                .cmp(&other.rule())
                .then_with(|| self.message().cmp(&other.message())),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
