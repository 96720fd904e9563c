// src/core/option.rs

use super::codec::{ArgumentType, CodecError};
use super::error::ParseError;
use super::property::CommandProperty;
use crate::constants::{OPTIONS_CATEGORY, OPTIONS_USAGE};
use crate::models::{PropertyInfo, PropertyKind};

/// Una propiedad opcional que se define con `--opcion valor`, `--opcion=valor`, `-o valor`
/// o `-o=valor`. Los booleanos se activan sin valor y admiten agrupación (`-oxy`).
#[derive(Debug, Clone)]
pub struct NamedOption<T> {
    name: Option<String>,
    shorthand: Option<char>,
    documentation: Option<String>,
    default_value: T,
    value: T,
}

impl<T: ArgumentType + Clone> NamedOption<T> {
    /// Crea una opción que toma `default_value` cuando no aparece en la línea de comandos.
    pub fn new(default_value: T) -> Self {
        Self {
            name: None,
            shorthand: None,
            documentation: None,
            value: default_value.clone(),
            default_value,
        }
    }

    /// Nombre sin el prefijo `--`. Por defecto, la etiqueta del campo.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Empieza con el valor por defecto y contiene el del último parseo.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    fn reset(&mut self) {
        self.value = self.default_value.clone();
    }

    /// Decodifica el valor de la opción y traduce los fallos del codec al texto usado.
    fn decode_value(&mut self, option: &str, tokens: &[String]) -> Result<usize, ParseError> {
        match T::decode(tokens) {
            Ok((value, consumed)) => {
                self.value = value;
                Ok(consumed)
            }
            Err(CodecError::MissingArgument) => Err(ParseError::OptionMissingValue {
                option: option.to_string(),
            }),
            Err(CodecError::InvalidFormat(value)) => Err(ParseError::OptionInvalidFormat {
                option: option.to_string(),
                value,
            }),
        }
    }
}

impl NamedOption<bool> {
    /// Una bandera que vale `false` salvo que aparezca.
    pub fn flag() -> Self {
        Self::new(false)
    }
}

impl<T: ArgumentType + Clone> CommandProperty for NamedOption<T> {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Option
    }

    fn setup(&mut self, label: &str) {
        if self.name.is_none() {
            self.name = Some(label.to_string());
        }
    }

    fn usage_fragment(&self) -> Option<String> {
        Some(OPTIONS_USAGE.to_string())
    }

    fn help_entries(&self) -> Vec<PropertyInfo> {
        let Some(name) = &self.name else {
            return Vec::new();
        };

        let mut label = format!("--{}", name);
        if let Some(shorthand) = self.shorthand {
            label.push_str(&format!(", -{}", shorthand));
        }

        let default = format!("[default: {}]", self.default_value.describe());
        let documentation = match &self.documentation {
            Some(documentation) => format!("{} {}", documentation, default),
            None => default,
        };

        vec![PropertyInfo::new(OPTIONS_CATEGORY, label, documentation)]
    }

    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError> {
        let Some(name) = self.name.clone() else {
            log::warn!("Se intentó parsear una opción sin nombre; falta llamar a `setup`.");
            self.reset();
            return Ok(false);
        };

        let Some(argument) = arguments.first().cloned() else {
            self.reset();
            return Ok(false);
        };

        let long = format!("--{}", name);
        let option = if argument == long {
            arguments.remove(0);
            long
        } else if let Some(inline) = argument.strip_prefix(&format!("{}=", long)) {
            arguments.remove(0);
            self.decode_value(&long, &[inline.to_string()])?;
            log::debug!("Opción '{}' parseada con sintaxis '='", long);
            return Ok(true);
        } else if let Some(shorthand) = self.shorthand
            && let Some(rest) = argument.strip_prefix(&format!("-{}", shorthand))
        {
            let short = format!("-{}", shorthand);
            if rest.is_empty() {
                arguments.remove(0);
            } else if let Some(inline) = rest.strip_prefix('=') {
                let inline = inline.to_string();
                arguments.remove(0);
                self.decode_value(&short, &[inline])?;
                log::debug!("Opción '{}' parseada con sintaxis '='", short);
                return Ok(true);
            } else if T::flag_value().is_some() {
                // Agrupación de banderas: `-oxy` activa esta opción y deja `-xy` en la cola.
                arguments[0] = format!("-{}", rest);
            } else {
                return Err(ParseError::OptionMissingValue { option: short });
            }
            short
        } else {
            self.reset();
            return Ok(false);
        };

        if let Some(flag) = T::flag_value() {
            self.value = flag;
        } else {
            // El valor se extiende hasta la siguiente opción o hasta que el codec se detenga.
            let end = arguments
                .iter()
                .position(|token| token.starts_with('-'))
                .unwrap_or(arguments.len());
            let consumed = self.decode_value(&option, &arguments[..end])?;
            // Una colección vacía no cuenta como valor dado.
            if consumed == 0 {
                return Err(ParseError::OptionMissingValue { option });
            }
            arguments.drain(..consumed);
        }

        log::debug!("Opción '{}' parseada", option);
        Ok(true)
    }
}
