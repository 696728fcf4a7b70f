use crate::core::emit::{
    Artifact, ArtifactKind, RUNTIME_PATH, docs::key_docs, write_header, writer::SourceWriter,
};
use crate::core::{AggregatedTranslations, IndexedTranslations, TableSpec};
use crate::utils::{is_valid_identifier, to_upper_camel_case};

/// Private helper methods every generated table defines.
pub const TABLE_HELPERS: &[&str] = &["__current_or_default", "__default_only"];

/// Whether `key` gets an accessor method on the table.
pub fn is_accessor_name(key: &str) -> bool {
    is_valid_identifier(key) && !TABLE_HELPERS.contains(&key)
}

/// Name of the generated table struct: the class name followed by the table
/// name in UpperCamelCase (e.g., `Localization` + `Table`).
pub fn table_type_name(spec: &TableSpec) -> String {
    format!("{}{}", spec.class_name, to_upper_camel_case(&spec.table_name))
}

/// Generate the fallback table for `spec`.
///
/// Translatable keys read the current provider and fall back to the default
/// provider; untranslatable keys always read the default provider. Keys that
/// are not valid identifiers get no accessor but stay reachable through
/// `Index<StringResourceId>`.
pub fn emit_table(
    spec: &TableSpec,
    canonical: &IndexedTranslations,
    aggregated: &AggregatedTranslations,
) -> Artifact {
    let class = &spec.class_name;
    let table_type = table_type_name(spec);
    let current = format!("&*self.outer.{}()", spec.current_accessor);
    let default = format!("&*self.outer.{}()", spec.default_accessor);
    let has_untranslatable = canonical.values().any(|entry| entry.untranslatable);

    let mut w = SourceWriter::new();
    write_header(&mut w, &spec.namespace, None);

    w.open(format!("impl {}", class));
    w.doc(&["Texts of the current locale, falling back to the default locale."]);
    w.line("#[allow(non_snake_case)]");
    w.open(format!(
        "pub fn {}(&self) -> {}<'_>",
        spec.table_name, table_type
    ));
    w.line(format!("{} {{ outer: self }}", table_type));
    w.close();
    w.close();
    w.blank();

    w.doc(&[format!("Fallback table over the providers of [`{}`].", class)]);
    w.open(format!("pub struct {}<'a>", table_type));
    w.line(format!("outer: &'a {},", class));
    w.close();
    w.blank();

    w.line("#[allow(non_snake_case)]");
    w.open(format!("impl {}<'_>", table_type));
    w.open("fn __current_or_default(&self, index: u32) -> &'static str");
    w.line(format!(
        "let id = {}::StringResourceId::new(index);",
        RUNTIME_PATH
    ));
    w.line(format!(
        "{}::LocalizedTextProvider::get({}, id)",
        RUNTIME_PATH, current
    ));
    w.line(format!(
        "    .unwrap_or_else(|| {}::DefaultTextProvider::text({}, id))",
        RUNTIME_PATH, default
    ));
    w.close();

    if has_untranslatable {
        w.blank();
        w.open("fn __default_only(&self, index: u32) -> &'static str");
        w.line(format!(
            "{}::DefaultTextProvider::text({}, {}::StringResourceId::new(index))",
            RUNTIME_PATH, default, RUNTIME_PATH
        ));
        w.close();
    }

    for (key, entry) in canonical {
        if !is_accessor_name(key) {
            continue;
        }
        w.blank();
        if spec.generate_docs {
            w.doc(&key_docs(entry, aggregated.get(key)));
        }
        w.open(format!("pub fn {}(&self) -> &'static str", key));
        if entry.untranslatable {
            w.line(format!("self.__default_only({})", entry.index));
        } else {
            w.line(format!("self.__current_or_default({})", entry.index));
        }
        w.close();
    }
    w.close();
    w.blank();

    w.open(format!(
        "impl ::core::ops::Index<{}::StringResourceId> for {}<'_>",
        RUNTIME_PATH, table_type
    ));
    w.line("type Output = str;");
    w.blank();
    w.open(format!(
        "fn index(&self, id: {}::StringResourceId) -> &str",
        RUNTIME_PATH
    ));
    let untranslatable: Vec<String> = canonical
        .values()
        .filter(|entry| entry.untranslatable)
        .map(|entry| entry.index.to_string())
        .collect();
    if untranslatable.is_empty() {
        w.line("self.__current_or_default(id.get())");
    } else {
        w.open("match id.get()");
        let pattern = match untranslatable.as_slice() {
            [single] => single.clone(),
            many => format!("({})", many.join(" | ")),
        };
        w.line(format!("index @ {} => self.__default_only(index),", pattern));
        w.line("index => self.__current_or_default(index),");
        w.close();
    }
    w.close();
    w.close();

    Artifact::new(ArtifactKind::Table, table_type, w.finish())
}
