// src/bin/argot.rs

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use argot::config::HelpStyle;
use argot::core::argument::Argument;
use argot::core::command::{Command, GroupCommand};
use argot::core::help::{Help, Version};
use argot::core::option::NamedOption;
use argot::core::property::{Declaration, declare};
use argot::system::tool::Tool;

/// Suma una lista de números.
struct Sum {
    numbers: Argument<Vec<f64>>,
    precision: NamedOption<usize>,
    help: Help,
}

impl Sum {
    fn new() -> Self {
        Self {
            numbers: Argument::new().with_documentation("Los números a sumar"),
            precision: NamedOption::new(2)
                .with_shorthand('p')
                .with_documentation("Decimales del resultado"),
            help: Help::new(),
        }
    }
}

impl Command for Sum {
    fn name(&self) -> &str {
        "sum"
    }

    fn documentation(&self) -> &str {
        "Suma los números dados"
    }

    fn properties(&mut self) -> Vec<Declaration<'_>> {
        vec![
            declare("numbers", &mut self.numbers),
            declare("precision", &mut self.precision),
            declare("help", &mut self.help),
        ]
    }

    fn run(&mut self, out: &mut dyn Write, _err: &mut dyn Write) -> Result<()> {
        let total: f64 = self.numbers.value().into_iter().flatten().sum();
        writeln!(out, "{:.*}", *self.precision.value(), total)?;
        Ok(())
    }
}

/// Repite un texto varias veces.
struct Repeat {
    text: Argument<String>,
    times: Argument<u32>,
    separator: NamedOption<String>,
    upper: NamedOption<bool>,
    help: Help,
}

impl Repeat {
    fn new() -> Self {
        Self {
            text: Argument::new().with_documentation("El texto a repetir"),
            times: Argument::new().with_documentation("Cuántas veces repetirlo"),
            separator: NamedOption::new(" ".to_string())
                .with_shorthand('s')
                .with_documentation("Separador entre repeticiones"),
            upper: NamedOption::flag()
                .with_shorthand('u')
                .with_documentation("Convierte el texto a mayúsculas"),
            help: Help::new(),
        }
    }
}

impl Command for Repeat {
    fn name(&self) -> &str {
        "repeat"
    }

    fn documentation(&self) -> &str {
        "Repite un texto"
    }

    fn properties(&mut self) -> Vec<Declaration<'_>> {
        vec![
            declare("text", &mut self.text),
            declare("times", &mut self.times),
            declare("separator", &mut self.separator),
            declare("upper", &mut self.upper),
            declare("help", &mut self.help),
        ]
    }

    fn run(&mut self, out: &mut dyn Write, _err: &mut dyn Write) -> Result<()> {
        let (Some(text), Some(&times)) = (self.text.value(), self.times.value()) else {
            bail!("faltan el texto o las repeticiones");
        };

        let text = if *self.upper.value() {
            text.to_uppercase()
        } else {
            text.clone()
        };
        let repeated = vec![text; times as usize].join(self.separator.value().as_str());
        writeln!(out, "{}", repeated)?;
        Ok(())
    }
}

/// Variable de entorno con la ruta de un estilo de ayuda en TOML.
const STYLE_ENV: &str = "ARGOT_STYLE";

/// Carga el estilo indicado en `ARGOT_STYLE`, o el estilo por defecto.
fn load_style() -> HelpStyle {
    let Some(path) = std::env::var_os(STYLE_ENV) else {
        return HelpStyle::default();
    };
    match HelpStyle::load(Path::new(&path)) {
        Ok(style) => style,
        Err(e) => {
            log::warn!("{}; se usa el estilo por defecto", e);
            HelpStyle::default()
        }
    }
}

/// El punto de entrada de la demostración.
fn main() {
    // Para ver los logs, ejecuta con `RUST_LOG=debug argot ...`
    env_logger::init();

    let group = GroupCommand::new(
        "argot",
        vec![Box::new(Sum::new()), Box::new(Repeat::new())],
    )
    .with_documentation("Demostración de argot")
    .with_help(Help::new())
    .with_version(Version::new(format!("argot {}", env!("CARGO_PKG_VERSION"))));

    Tool::new(group).with_style(load_style()).run();
}
