// src/core/error.rs

use thiserror::Error;

/// Errores producidos al parsear o validar un comando.
///
/// Todos son datos: el núcleo nunca termina el proceso. Cada variante lleva el token, el
/// nombre de la propiedad o la sugerencia necesarios para mostrar un mensaje preciso.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("falta el argumento '{argument}'")]
    ArgumentMissing { argument: String },
    #[error("formato inválido '{value}' para el argumento '{argument}'")]
    ArgumentInvalidFormat { argument: String, value: String },
    #[error(
        "a la opción '{option}' le falta un valor; indícalo con '{option} <valor>' o '{option}=<valor>'"
    )]
    OptionMissingValue { option: String },
    #[error("formato inválido '{value}' para la opción '{option}'")]
    OptionInvalidFormat { option: String, value: String },
    #[error("falta el subcomando")]
    SubCommandMissing,
    #[error("subcomando desconocido '{command}'{}", suggestion_hint(.suggestion))]
    InvalidSubCommand {
        command: String,
        suggestion: Option<String>,
    },
    #[error("argumento inesperado '{argument}'")]
    UnexpectedArgument { argument: String },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!("; ¿quisiste decir '{}'?", name),
        None => String::new(),
    }
}
