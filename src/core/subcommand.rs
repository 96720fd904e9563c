// src/core/subcommand.rs

use super::command::Command;
use super::error::ParseError;
use super::property::CommandProperty;
use super::suggest;
use crate::constants::{SUBCOMMAND_USAGE, SUBCOMMANDS_CATEGORY};
use crate::models::{PropertyInfo, PropertyKind, Signal};

/// Un comando hijo registrado bajo un nombre.
struct Entry {
    name: String,
    command: Box<dyn Command>,
}

/// Propiedad que elige un comando hijo con el primer token y le delega el resto.
pub struct SubCommand {
    entries: Vec<Entry>,
    selected: Option<usize>,
}

impl SubCommand {
    /// Registra los comandos bajo su propio nombre, en el orden dado.
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        let entries = commands
            .into_iter()
            .map(|command| Entry {
                name: command.name().to_string(),
                command,
            })
            .collect();
        Self {
            entries,
            selected: None,
        }
    }

    /// Registra los comandos bajo nombres explícitos. El registro queda ordenado por nombre.
    pub fn from_named<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = (S, Box<dyn Command>)>,
        S: Into<String>,
    {
        let mut entries: Vec<Entry> = commands
            .into_iter()
            .map(|(name, command)| Entry {
                name: name.into(),
                command,
            })
            .collect();
        entries.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
        Self {
            entries,
            selected: None,
        }
    }

    /// Nombres registrados, en orden de registro; ordenados por nombre si el registro se
    /// creó con `from_named`. Este orden decide los empates de la sugerencia.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Nombre bajo el que se eligió el comando actual.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.map(|index| self.entries[index].name.as_str())
    }

    /// El comando elegido en el último parseo.
    pub fn value(&self) -> Option<&dyn Command> {
        let index = self.selected?;
        let command: &dyn Command = self.entries[index].command.as_ref();
        Some(command)
    }

    pub fn value_mut(&mut self) -> Option<&mut dyn Command> {
        let index = self.selected?;
        let command: &mut dyn Command = self.entries[index].command.as_mut();
        Some(command)
    }
}

impl CommandProperty for SubCommand {
    fn kind(&self) -> PropertyKind {
        PropertyKind::SubCommand
    }

    fn setup(&mut self, _label: &str) {}

    fn usage_fragment(&self) -> Option<String> {
        Some(SUBCOMMAND_USAGE.to_string())
    }

    fn help_entries(&self) -> Vec<PropertyInfo> {
        let mut entries: Vec<PropertyInfo> = self
            .entries
            .iter()
            .map(|entry| {
                PropertyInfo::new(
                    SUBCOMMANDS_CATEGORY,
                    entry.name.as_str(),
                    entry.command.documentation(),
                )
            })
            .collect();
        entries.sort_by(|lhs, rhs| lhs.label.cmp(&rhs.label));
        entries
    }

    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError> {
        let Some(argument) = arguments.first() else {
            return Err(ParseError::SubCommandMissing);
        };

        let index = suggest::resolve(argument, &self.names())?;
        arguments.remove(0);
        self.selected = Some(index);

        let entry = &mut self.entries[index];
        log::debug!("Subcomando '{}' seleccionado", entry.name);
        entry.command.parse(arguments)?;
        Ok(true)
    }

    fn validate(&self) -> Result<Option<Signal>, ParseError> {
        match self.selected {
            Some(_) => Ok(None),
            None => Err(ParseError::SubCommandMissing),
        }
    }

    fn selected_command_mut(&mut self) -> Option<&mut dyn Command> {
        self.value_mut()
    }
}
