// src/core/argument.rs

use super::codec::{ArgumentType, CodecError};
use super::error::ParseError;
use super::property::CommandProperty;
use crate::constants::ARGUMENTS_CATEGORY;
use crate::models::{PropertyInfo, PropertyKind, Signal};

/// Una propiedad obligatoria que se toma de una posición concreta de los argumentos.
#[derive(Debug, Clone)]
pub struct Argument<T> {
    name: Option<String>,
    documentation: Option<String>,
    value: Option<T>,
}

impl<T: ArgumentType> Argument<T> {
    pub fn new() -> Self {
        Self {
            name: None,
            documentation: None,
            value: None,
        }
    }

    /// Nombre usado en la línea de uso y en la ayuda. Por defecto, la etiqueta del campo.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sin documentación, el argumento no aparece en la sección `ARGUMENTS` de la ayuda.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// El valor del último parseo. `None` hasta que se parsee al menos una vez.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

impl<T: ArgumentType> Default for Argument<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArgumentType> CommandProperty for Argument<T> {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Argument
    }

    fn setup(&mut self, label: &str) {
        if self.name.is_none() {
            self.name = Some(label.to_string());
        }
    }

    fn usage_fragment(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("<{}>", name))
    }

    fn help_entries(&self) -> Vec<PropertyInfo> {
        match (&self.name, &self.documentation) {
            (Some(name), Some(documentation)) => vec![PropertyInfo::new(
                ARGUMENTS_CATEGORY,
                name.as_str(),
                documentation.as_str(),
            )],
            _ => Vec::new(),
        }
    }

    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError> {
        // Un posicional nunca se enlaza a algo que parece una opción.
        if arguments.first().is_some_and(|first| first.starts_with('-')) {
            return Ok(false);
        }

        // Una colección se detiene antes de la siguiente opción.
        let end = arguments
            .iter()
            .position(|token| token.starts_with('-'))
            .unwrap_or(arguments.len());

        match T::decode(&arguments[..end]) {
            Ok((value, consumed)) => {
                arguments.drain(..consumed);
                self.value = Some(value);
                log::debug!(
                    "Argumento '{}' parseado con {} token(s)",
                    self.display_name(),
                    consumed
                );
                Ok(true)
            }
            Err(CodecError::MissingArgument) => Err(ParseError::ArgumentMissing {
                argument: self.display_name(),
            }),
            Err(CodecError::InvalidFormat(value)) => Err(ParseError::ArgumentInvalidFormat {
                argument: self.display_name(),
                value,
            }),
        }
    }

    fn validate(&self) -> Result<Option<Signal>, ParseError> {
        if self.value.is_none() {
            return Err(ParseError::ArgumentMissing {
                argument: self.display_name(),
            });
        }
        Ok(None)
    }
}
