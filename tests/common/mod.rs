// tests/common/mod.rs

#![allow(dead_code)]

use std::io::Write;

use argot::{Command, Declaration};

/// Un comando sin propiedades, con nombre y documentación configurables.
pub struct DummyCommand {
    name: String,
    documentation: String,
}

impl DummyCommand {
    pub fn new(name: &str) -> Self {
        Self::documented(name, "")
    }

    pub fn documented(name: &str, documentation: &str) -> Self {
        Self {
            name: name.to_string(),
            documentation: documentation.to_string(),
        }
    }

    pub fn boxed(name: &str, documentation: &str) -> Box<dyn Command> {
        Box::new(Self::documented(name, documentation))
    }
}

impl Command for DummyCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> &str {
        &self.documentation
    }

    fn properties(&mut self) -> Vec<Declaration<'_>> {
        Vec::new()
    }

    fn run(&mut self, _out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
