// src/system/tool.rs

use crate::config::HelpStyle;
use crate::core::command::{Command, CommandExt};
use crate::models::Control;
use std::io::{self, Write};

/// Termina el programa con un código de salida.
pub trait Terminator {
    fn terminate(&mut self, code: i32);
}

/// Termina el proceso actual.
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&mut self, code: i32) {
        std::process::exit(code);
    }
}

/// Lanza un comando raíz: parsea, valida, ejecuta y decide el código de salida.
pub struct Tool<C: Command> {
    command: C,
    style: HelpStyle,
}

impl<C: Command> Tool<C> {
    pub fn new(command: C) -> Self {
        Self {
            command,
            style: HelpStyle::default(),
        }
    }

    /// Estilo con el que se muestra la ayuda pedida con `--help`.
    pub fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut C {
        &mut self.command
    }

    /// Ejecuta el comando con los tokens dados.
    ///
    /// Un error de parseo o de ejecución se escribe en `err` y termina con 1. Una petición de
    /// ayuda o de versión se escribe en `out` y termina con 0, sin ejecutar el comando.
    pub fn run_with<I, S>(
        &mut self,
        tokens: I,
        out: &mut dyn Write,
        err: &mut dyn Write,
        terminator: &mut dyn Terminator,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut arguments: Vec<String> = tokens.into_iter().map(Into::into).collect();
        log::info!(
            "Ejecutando '{}' con {} argumento(s)",
            self.command.name(),
            arguments.len()
        );

        let control = self
            .command
            .parse(&mut arguments)
            .and_then(|_| self.command.validate_with(&self.style));

        match control {
            Err(error) => {
                log::warn!("Parseo fallido: {}", error);
                report(err, &format!("error: {}", error));
                terminator.terminate(1);
            }
            Ok(Control::Exit(text)) => {
                report(out, &text);
                terminator.terminate(0);
            }
            Ok(Control::Continue) => match self.command.run(out, err) {
                Ok(()) => terminator.terminate(0),
                Err(error) => {
                    log::warn!("El comando '{}' falló: {:?}", self.command.name(), error);
                    report(err, &format!("error: {:#}", error));
                    terminator.terminate(1);
                }
            },
        }
    }

    /// Ejecuta el comando con los argumentos del proceso y termina el proceso.
    pub fn run(&mut self) {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(
            std::env::args().skip(1),
            &mut stdout.lock(),
            &mut stderr.lock(),
            &mut ProcessTerminator,
        );
    }
}

/// Escribe una línea; si el destino falla solo queda constancia en el log.
fn report(target: &mut dyn Write, text: &str) {
    if let Err(error) = writeln!(target, "{}", text).and_then(|_| target.flush()) {
        log::warn!("No se pudo escribir la salida: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::argument::Argument;
    use crate::core::help::{Help, Version};
    use crate::core::property::{Declaration, declare};

    #[derive(Default)]
    struct Recorder {
        codes: Vec<i32>,
    }

    impl Terminator for Recorder {
        fn terminate(&mut self, code: i32) {
            self.codes.push(code);
        }
    }

    struct Greet {
        who: Argument<String>,
        help: Help,
        version: Version,
    }

    impl Command for Greet {
        fn name(&self) -> &str {
            "greet"
        }

        fn documentation(&self) -> &str {
            "Saluda"
        }

        fn properties(&mut self) -> Vec<Declaration<'_>> {
            vec![
                declare("who", &mut self.who),
                declare("help", &mut self.help),
                declare("version", &mut self.version),
            ]
        }

        fn run(&mut self, out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
            let who = self
                .who
                .value()
                .ok_or_else(|| anyhow::anyhow!("nadie a quien saludar"))?;
            if who == "nadie" {
                anyhow::bail!("no se puede saludar a nadie");
            }
            writeln!(out, "hola, {}", who)?;
            Ok(())
        }
    }

    fn tool() -> Tool<Greet> {
        Tool::new(Greet {
            who: Argument::new(),
            help: Help::new(),
            version: Version::new("greet 0.1"),
        })
    }

    fn launch(tokens: &[&str]) -> (String, String, Vec<i32>) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut recorder = Recorder::default();
        tool().run_with(tokens.iter().copied(), &mut out, &mut err, &mut recorder);
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            recorder.codes,
        )
    }

    #[test]
    fn test_run_success() {
        let (out, err, codes) = launch(&["mundo"]);
        assert_eq!(out, "hola, mundo\n");
        assert_eq!(err, "");
        assert_eq!(codes, vec![0]);
    }

    #[test]
    fn test_version_exits_zero() {
        let (out, _, codes) = launch(&["-v"]);
        assert_eq!(out, "greet 0.1\n");
        assert_eq!(codes, vec![0]);
    }

    #[test]
    fn test_parse_error_exits_one() {
        let (out, err, codes) = launch(&[]);
        assert_eq!(out, "");
        assert_eq!(err, "error: falta el argumento 'who'\n");
        assert_eq!(codes, vec![1]);
    }

    #[test]
    fn test_run_error_exits_one() {
        let (_, err, codes) = launch(&["nadie"]);
        assert_eq!(err, "error: no se puede saludar a nadie\n");
        assert_eq!(codes, vec![1]);
    }
}
