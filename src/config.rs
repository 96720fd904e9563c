// src/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No se pudo leer el archivo de estilo: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("El archivo de estilo está mal formado: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Disposición de la página de ayuda. Solo afecta a cómo se muestra, nunca a los valores parseados.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HelpStyle {
    /// Espacios antes de cada etiqueta dentro de una categoría.
    pub indent: usize,
    /// Espacios entre la columna de etiquetas y la documentación.
    pub column_gap: usize,
    pub overview_label: String,
    pub usage_label: String,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            column_gap: 4,
            overview_label: "OVERVIEW".to_string(),
            usage_label: "USAGE".to_string(),
        }
    }
}

impl HelpStyle {
    /// Lee un estilo desde TOML. Los campos ausentes toman su valor por defecto.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Carga un estilo desde un archivo TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Cargando estilo de ayuda desde: {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
