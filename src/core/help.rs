// src/core/help.rs

use super::error::ParseError;
use super::option::NamedOption;
use super::property::CommandProperty;
use crate::constants::{
    HELP_DOCUMENTATION, HELP_NAME, HELP_SHORTHAND, VERSION_DOCUMENTATION, VERSION_NAME,
    VERSION_SHORTHAND,
};
use crate::models::{PropertyInfo, PropertyKind, Signal};

/// Bandera `--help`/`-h`. Si se activa, la validación pide mostrar la ayuda del comando.
#[derive(Debug, Clone)]
pub struct Help {
    option: NamedOption<bool>,
}

impl Help {
    pub fn new() -> Self {
        Self {
            option: NamedOption::flag()
                .with_name(HELP_NAME)
                .with_shorthand(HELP_SHORTHAND)
                .with_documentation(HELP_DOCUMENTATION),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.option = self.option.with_name(name);
        self
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.option = self.option.with_shorthand(shorthand);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.option = self.option.with_documentation(documentation);
        self
    }

    pub fn is_requested(&self) -> bool {
        *self.option.value()
    }
}

impl Default for Help {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProperty for Help {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Option
    }

    fn setup(&mut self, label: &str) {
        self.option.setup(label);
    }

    fn usage_fragment(&self) -> Option<String> {
        self.option.usage_fragment()
    }

    fn help_entries(&self) -> Vec<PropertyInfo> {
        self.option.help_entries()
    }

    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError> {
        self.option.try_consume(arguments)
    }

    fn validate(&self) -> Result<Option<Signal>, ParseError> {
        Ok(self.is_requested().then_some(Signal::Help))
    }
}

/// Bandera `--version`/`-v`. Si se activa, la validación pide mostrar el texto de versión.
#[derive(Debug, Clone)]
pub struct Version {
    version: String,
    option: NamedOption<bool>,
}

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            option: NamedOption::flag()
                .with_name(VERSION_NAME)
                .with_shorthand(VERSION_SHORTHAND)
                .with_documentation(VERSION_DOCUMENTATION),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.option = self.option.with_name(name);
        self
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.option = self.option.with_shorthand(shorthand);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.option = self.option.with_documentation(documentation);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_requested(&self) -> bool {
        *self.option.value()
    }
}

impl CommandProperty for Version {
    fn kind(&self) -> PropertyKind {
        PropertyKind::Option
    }

    fn setup(&mut self, label: &str) {
        self.option.setup(label);
    }

    fn usage_fragment(&self) -> Option<String> {
        self.option.usage_fragment()
    }

    fn help_entries(&self) -> Vec<PropertyInfo> {
        self.option.help_entries()
    }

    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError> {
        self.option.try_consume(arguments)
    }

    fn validate(&self) -> Result<Option<Signal>, ParseError> {
        Ok(self
            .is_requested()
            .then(|| Signal::Version(self.version.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_defaults() {
        let help = Help::new();
        assert_eq!(
            help.help_entries(),
            vec![PropertyInfo::new(
                "OPTIONS",
                "--help, -h",
                "Muestra las opciones disponibles [default: false]"
            )]
        );
        assert_eq!(help.validate(), Ok(None));
    }

    #[test]
    fn test_help_requested() {
        let mut help = Help::new().with_name("aide").with_shorthand('a');
        assert_eq!(help.try_consume(&mut tokens(&["--help"])), Ok(false));
        assert_eq!(help.try_consume(&mut tokens(&["-a"])), Ok(true));
        assert_eq!(help.validate(), Ok(Some(Signal::Help)));
    }

    #[test]
    fn test_version_requested() {
        let mut version = Version::new("TestTool 2.4-alpha");
        assert_eq!(version.validate(), Ok(None));
        assert_eq!(version.try_consume(&mut tokens(&["-v"])), Ok(true));
        assert_eq!(
            version.validate(),
            Ok(Some(Signal::Version("TestTool 2.4-alpha".to_string())))
        );

        let mut version = Version::new("TestTool 1.0.1").with_name("wersja").with_shorthand('w');
        assert_eq!(version.try_consume(&mut tokens(&["--wersja"])), Ok(true));
        assert_eq!(version.version(), "TestTool 1.0.1");
        assert!(version.is_requested());
    }
}
