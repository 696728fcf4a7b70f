use crate::core::emit::{
    Artifact, ArtifactKind, ProviderKind, RUNTIME_PATH, write_header, writer::SourceWriter,
};
use crate::core::{IndexedTranslations, ProviderSpec};

/// Generate the provider struct for one locale.
///
/// `source` is the name of the backing translation file. Entries are emitted
/// in index order.
pub fn emit_provider(
    spec: &ProviderSpec,
    kind: ProviderKind,
    source: &str,
    entries: &IndexedTranslations,
) -> Artifact {
    let class = &spec.class_name;
    let mut w = SourceWriter::new();
    write_header(&mut w, &spec.namespace, Some(source));

    match kind {
        ProviderKind::Default => w.doc(&[format!("Texts of `{}` (default locale).", source)]),
        ProviderKind::Secondary => w.doc(&[format!("Texts of `{}`.", source)]),
    }
    w.line(format!("pub struct {};", class));
    w.blank();

    w.open(format!(
        "impl {}::LocalizedTextProvider for {}",
        RUNTIME_PATH, class
    ));
    w.open(format!(
        "fn get(&self, id: {}::StringResourceId) -> Option<&'static str>",
        RUNTIME_PATH
    ));
    if entries.is_empty() {
        w.line("let _ = id;");
        w.line("None");
    } else {
        w.open("match id.get()");
        for (key, entry) in entries {
            let marker = if entry.untranslatable {
                " (untranslatable)"
            } else {
                ""
            };
            let mut arm = format!("{} => Some({:?}),", entry.index, entry.text);
            let note = format!("{}{}", key, marker);
            if !note.trim().is_empty() {
                arm.push_str(&format!(" // {}", note.trim()));
            }
            w.line(arm);
        }
        w.line("_ => None,");
        w.close();
    }
    w.close();
    w.close();

    if kind == ProviderKind::Default {
        w.blank();
        w.open(format!(
            "impl {}::DefaultTextProvider for {}",
            RUNTIME_PATH, class
        ));
        w.open(format!(
            "fn text(&self, id: {}::StringResourceId) -> &'static str",
            RUNTIME_PATH
        ));
        w.open(format!(
            "match {}::LocalizedTextProvider::get(self, id)",
            RUNTIME_PATH
        ));
        w.line("Some(text) => text,");
        w.line(format!(
            "None => panic!(\"unknown string resource id {{}} for {}\", id),",
            class
        ));
        w.close();
        w.close();
        w.close();
    }

    Artifact::new(ArtifactKind::Provider(kind), class.clone(), w.finish())
}
