// src/core/command.rs

use super::error::ParseError;
use super::help::{Help, Version};
use super::property::{Declaration, collect, declare};
use super::render;
use super::subcommand::SubCommand;
use crate::config::HelpStyle;
use crate::models::{Control, Signal};
use std::io::Write;

/// Un comando con nombre y documentación que agrupa propiedades declaradas.
pub trait Command {
    /// Nombre con el que se invoca el comando y con el que aparece en la línea de uso.
    fn name(&self) -> &str;

    fn documentation(&self) -> &str {
        ""
    }

    /// Las propiedades del comando, en orden de declaración.
    fn properties(&mut self) -> Vec<Declaration<'_>>;

    /// Lógica del comando, una vez parseado y validado.
    fn run(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<()>;

    /// Consume `arguments` en las propiedades del comando.
    fn parse(&mut self, arguments: &mut Vec<String>) -> Result<(), ParseError> {
        parse_properties(self, arguments)
    }
}

/// Recorre el plan de propiedades contra los tokens hasta agotarlos.
///
/// En cada paso se ofrece el frente de la lista a las propiedades pendientes en orden de
/// prioridad; la primera que consume sale del plan y se vuelve a empezar. Si ninguna consume,
/// el primer token es inesperado. Las propiedades que no llegan a consumir conservan su valor
/// por defecto.
pub fn parse_properties<C: Command + ?Sized>(
    command: &mut C,
    arguments: &mut Vec<String>,
) -> Result<(), ParseError> {
    let mut plan = collect(command);
    log::debug!(
        "Parseando {} token(s) con un plan de {} propiedad(es)",
        arguments.len(),
        plan.len()
    );

    while let Some(front) = arguments.first().cloned() {
        let mut consumed = None;
        for (position, planned) in plan.iter_mut().enumerate() {
            if planned.property.try_consume(arguments)? {
                consumed = Some(position);
                break;
            }
        }

        match consumed {
            Some(position) => {
                let planned = plan.remove(position);
                log::debug!("Propiedad '{}' consumió a partir de '{}'", planned.label, front);
            }
            None => return Err(ParseError::UnexpectedArgument { argument: front }),
        }
    }

    Ok(())
}

/// Valida el comando ya parseado y, recursivamente, el subcomando elegido.
///
/// `path` contiene los nombres de los comandos que preceden a `command`; se usan como
/// prefijo de la línea de uso si se pide la ayuda.
pub fn validate<C: Command + ?Sized>(
    command: &mut C,
    path: &[String],
    style: &HelpStyle,
) -> Result<Control, ParseError> {
    let mut chain = path.to_vec();
    chain.push(command.name().to_string());

    let mut signal = None;
    for planned in collect(command) {
        if let Some(requested) = planned.property.validate()? {
            signal = Some(requested);
            break;
        }
        if let Some(child) = planned.property.selected_command_mut() {
            match validate(child, &chain, style)? {
                Control::Continue => {}
                exit => return Ok(exit),
            }
        }
    }

    match signal {
        Some(Signal::Help) => {
            log::debug!("Ayuda solicitada para '{}'", chain.join(" "));
            let prefix = chain.join(" ");
            Ok(Control::Exit(render::generate_help_with(command, &prefix, style)))
        }
        Some(Signal::Version(version)) => Ok(Control::Exit(version)),
        None => Ok(Control::Continue),
    }
}

/// Operaciones del núcleo disponibles para cualquier comando.
pub trait CommandExt: Command {
    /// Parsea y valida en un solo paso.
    fn parse_and_validate(&mut self, arguments: &mut Vec<String>) -> Result<Control, ParseError> {
        self.parse(arguments)?;
        self.validate()
    }

    fn validate(&mut self) -> Result<Control, ParseError> {
        validate(self, &[], &HelpStyle::default())
    }

    fn validate_with(&mut self, style: &HelpStyle) -> Result<Control, ParseError> {
        validate(self, &[], style)
    }

    fn generate_usage(&mut self, prefix: &str) -> String {
        render::generate_usage(self, prefix)
    }

    fn generate_help(&mut self, prefix: &str) -> String {
        render::generate_help(self, prefix)
    }

    fn generate_help_with(&mut self, prefix: &str, style: &HelpStyle) -> String {
        render::generate_help_with(self, prefix, style)
    }
}

impl<C: Command + ?Sized> CommandExt for C {}

/// Un comando que solo delega en uno de sus subcomandos.
pub struct GroupCommand {
    name: String,
    documentation: String,
    help: Option<Help>,
    version: Option<Version>,
    subcommand: SubCommand,
}

impl GroupCommand {
    pub fn new(name: impl Into<String>, commands: Vec<Box<dyn Command>>) -> Self {
        Self {
            name: name.into(),
            documentation: String::new(),
            help: None,
            version: None,
            subcommand: SubCommand::new(commands),
        }
    }

    /// Crea el grupo con nombres explícitos para cada subcomando.
    pub fn from_named<I, S>(name: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = (S, Box<dyn Command>)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            documentation: String::new(),
            help: None,
            version: None,
            subcommand: SubCommand::from_named(commands),
        }
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    /// Añade una bandera de ayuda al grupo.
    pub fn with_help(mut self, help: Help) -> Self {
        self.help = Some(help);
        self
    }

    /// Añade una bandera de versión al grupo.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn subcommand(&self) -> &SubCommand {
        &self.subcommand
    }
}

impl Command for GroupCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> &str {
        &self.documentation
    }

    fn properties(&mut self) -> Vec<Declaration<'_>> {
        let mut declared = Vec::new();
        if let Some(help) = self.help.as_mut() {
            declared.push(declare("help", help));
        }
        if let Some(version) = self.version.as_mut() {
            declared.push(declare("version", version));
        }
        declared.push(declare("subcommand", &mut self.subcommand));
        declared
    }

    fn run(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<()> {
        match self.subcommand.value_mut() {
            Some(command) => command.run(out, err),
            None => Ok(()),
        }
    }
}
