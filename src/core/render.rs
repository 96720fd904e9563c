// src/core/render.rs

use super::command::Command;
use super::property::collect;
use crate::config::HelpStyle;
use crate::models::PropertyInfo;
use std::collections::BTreeMap;

/// Genera la línea de uso: el prefijo seguido de un fragmento por propiedad, en orden de
/// parseo. Los fragmentos idénticos consecutivos se colapsan en uno.
pub fn generate_usage<C: Command + ?Sized>(command: &mut C, prefix: &str) -> String {
    let mut fragments: Vec<String> = collect(command)
        .iter()
        .filter_map(|planned| planned.property.usage_fragment())
        .collect();
    fragments.dedup();

    let mut components = Vec::with_capacity(fragments.len() + 1);
    if !prefix.is_empty() {
        components.push(prefix.to_string());
    }
    components.extend(fragments);
    components.join(" ")
}

/// Genera la página de ayuda completa con el estilo por defecto.
pub fn generate_help<C: Command + ?Sized>(command: &mut C, prefix: &str) -> String {
    generate_help_with(command, prefix, &HelpStyle::default())
}

/// Genera la página de ayuda: resumen, uso y una sección por categoría.
///
/// Las categorías se ordenan alfabéticamente y, dentro de cada una, las entradas por etiqueta.
/// Todas las etiquetas de la página se rellenan hasta el mismo ancho para alinear la
/// documentación entre categorías.
pub fn generate_help_with<C: Command + ?Sized>(
    command: &mut C,
    prefix: &str,
    style: &HelpStyle,
) -> String {
    let mut sections = Vec::new();

    let documentation = command.documentation();
    if !documentation.is_empty() {
        sections.push(format!("{}: {}", style.overview_label, documentation));
    }

    sections.push(format!(
        "{}: {}",
        style.usage_label,
        generate_usage(command, prefix)
    ));

    let entries: Vec<PropertyInfo> = collect(command)
        .iter()
        .flat_map(|planned| planned.property.help_entries())
        .collect();
    let label_width = entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut by_category: BTreeMap<&str, Vec<&PropertyInfo>> = BTreeMap::new();
    for entry in &entries {
        by_category.entry(&entry.category).or_default().push(entry);
    }

    let indent = " ".repeat(style.indent);
    let gap = " ".repeat(style.column_gap);
    for (category, mut infos) in by_category {
        infos.sort_by(|lhs, rhs| lhs.label.cmp(&rhs.label));

        let mut lines = vec![format!("{}:", category)];
        for info in infos {
            let padding = " ".repeat(label_width - info.label.chars().count());
            lines.push(format!(
                "{}{}{}{}{}",
                indent, info.label, padding, gap, info.documentation
            ));
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}
