// src/models.rs

use crate::constants::{ARGUMENT_PRIORITY, OPTION_PRIORITY, SUBCOMMAND_PRIORITY};

// --- MODELOS DE AYUDA ---

/// Una entrada de la página de ayuda: categoría, etiqueta y documentación de una propiedad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub category: String,
    pub label: String,
    pub documentation: String,
}

impl PropertyInfo {
    pub fn new(
        category: impl Into<String>,
        label: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            label: label.into(),
            documentation: documentation.into(),
        }
    }
}

// --- MODELOS DE PROPIEDADES ---

/// Las tres variantes de propiedad que puede declarar un comando.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Argument,
    Option,
    SubCommand,
}

impl PropertyKind {
    /// Prioridad de parseo. Las de mayor prioridad se intentan primero.
    pub fn priority(self) -> f64 {
        match self {
            PropertyKind::Argument => ARGUMENT_PRIORITY,
            PropertyKind::Option => OPTION_PRIORITY,
            PropertyKind::SubCommand => SUBCOMMAND_PRIORITY,
        }
    }
}

// --- MODELOS DE CONTROL (canal lateral de ayuda y versión) ---

/// Petición terminal emitida por una propiedad durante la validación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Help,
    Version(String),
}

/// Resultado de validar un comando ya parseado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// El comando puede ejecutarse.
    Continue,
    /// Hay que mostrar este texto y detener la ejecución.
    Exit(String),
}
