use crate::core::emit::{
    Artifact, ArtifactKind, RUNTIME_PATH, docs::key_docs, write_header, writer::SourceWriter,
};
use crate::core::{AggregatedTranslations, IndexedTranslations, TableSpec};
use crate::utils::is_valid_identifier;

/// Generate a unit struct named `id_class` holding one resource id constant
/// per key, usable to index any provider or the table.
pub fn emit_id_table(
    spec: &TableSpec,
    id_class: &str,
    canonical: &IndexedTranslations,
    aggregated: &AggregatedTranslations,
) -> Artifact {
    let mut w = SourceWriter::new();
    write_header(&mut w, &spec.namespace, None);

    w.doc(&[format!("Resource ids of the [`{}`] texts.", spec.class_name)]);
    w.line(format!("pub struct {};", id_class));
    w.blank();

    w.line("#[allow(non_upper_case_globals)]");
    w.open(format!("impl {}", id_class));
    let mut first = true;
    for (key, entry) in canonical {
        if !is_valid_identifier(key) {
            continue;
        }
        if !first {
            w.blank();
        }
        first = false;
        if spec.generate_docs {
            w.doc(&key_docs(entry, aggregated.get(key)));
        }
        w.line(format!(
            "pub const {}: {rt}::StringResourceId = {rt}::StringResourceId::new({});",
            key,
            entry.index,
            rt = RUNTIME_PATH
        ));
    }
    w.close();

    Artifact::new(ArtifactKind::IdTable, id_class, w.finish())
}
