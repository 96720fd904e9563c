// tests/help.rs

mod common;

use std::io::Write;

use argot::{
    Argument, Command, CommandExt, Declaration, GroupCommand, Help, HelpStyle, NamedOption,
    declare,
};
use common::{DummyCommand, tokens};

/// Un comando con tres posicionales y dos opciones, documentados a gusto de cada prueba.
struct TestCommand {
    documentation: &'static str,
    output: Argument<String>,
    input: Argument<String>,
    times: Argument<i32>,
    extra: NamedOption<i32>,
    verbose: NamedOption<bool>,
    with_options: bool,
}

impl TestCommand {
    fn bare() -> Self {
        Self {
            documentation: "",
            output: Argument::new(),
            input: Argument::new().with_name("files"),
            times: Argument::new(),
            extra: NamedOption::new(1),
            verbose: NamedOption::flag(),
            with_options: true,
        }
    }

    fn documented() -> Self {
        Self {
            documentation: "This is great documentation",
            output: Argument::new().with_documentation("This is the output documentation"),
            input: Argument::new()
                .with_name("files")
                .with_documentation("This is the input documentation"),
            ..Self::bare()
        }
    }
}

impl Command for TestCommand {
    fn name(&self) -> &str {
        "test"
    }

    fn documentation(&self) -> &str {
        self.documentation
    }

    fn properties(&mut self) -> Vec<Declaration<'_>> {
        let mut declared = vec![
            declare("output", &mut self.output),
            declare("input", &mut self.input),
            declare("times", &mut self.times),
        ];
        if self.with_options {
            declared.push(declare("extra", &mut self.extra));
            declared.push(declare("verbose", &mut self.verbose));
        }
        declared
    }

    fn run(&mut self, _out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
        Ok(())
    }
}

fn group() -> GroupCommand {
    GroupCommand::new(
        "group",
        vec![
            DummyCommand::boxed("edit", "The documentation for edit"),
            DummyCommand::boxed("unedit", "The documentation for unedit"),
            DummyCommand::boxed("random", ""),
        ],
    )
    .with_documentation("This is the group command documentation")
}

#[test]
fn test_usage_minimal() {
    assert_eq!(
        DummyCommand::new("dummy").generate_usage("tool command"),
        "tool command"
    );
    assert_eq!(DummyCommand::new("dummy").generate_usage(""), "");
}

#[test]
fn test_usage_collapses_options() {
    assert_eq!(
        TestCommand::bare().generate_usage("tool command"),
        "tool command [options] <output> <files> <times>"
    );
}

#[test]
fn test_usage_subcommand() {
    assert_eq!(group().generate_usage("tool command"), "tool command subcommand");
}

#[test]
fn test_help_minimal() {
    assert_eq!(
        DummyCommand::new("dummy").generate_help("tool command"),
        "USAGE: tool command"
    );
    assert_eq!(
        DummyCommand::documented("dummy", "This is great documentation")
            .generate_help("tool command"),
        "OVERVIEW: This is great documentation\n\nUSAGE: tool command"
    );
}

#[test]
fn test_help_undocumented_arguments_are_hidden() {
    let mut command = TestCommand::bare();
    command.documentation = "This is great documentation";
    command.with_options = false;
    assert_eq!(
        command.generate_help("tool command"),
        "OVERVIEW: This is great documentation\n\nUSAGE: tool command <output> <files> <times>"
    );
}

#[test]
fn test_help_documented_arguments() {
    let mut command = TestCommand::documented();
    command.with_options = false;
    let expected = "\
OVERVIEW: This is great documentation

USAGE: tool command <output> <files> <times>

ARGUMENTS:
  files     This is the input documentation
  output    This is the output documentation";
    assert_eq!(command.generate_help("tool command"), expected);
}

#[test]
fn test_help_aligns_labels_across_categories() {
    let mut command = TestCommand::documented();
    command.verbose = NamedOption::flag().with_shorthand('v');
    let expected = "\
OVERVIEW: This is great documentation

USAGE: tool [options] <output> <files> <times>

ARGUMENTS:
  files            This is the input documentation
  output           This is the output documentation

OPTIONS:
  --extra          [default: 1]
  --verbose, -v    [default: false]";
    assert_eq!(command.generate_help("tool"), expected);
}

#[test]
fn test_help_documented_options() {
    let mut command = TestCommand::documented();
    command.extra = NamedOption::new(2).with_documentation("This is the extra documentation");
    command.verbose = NamedOption::flag()
        .with_shorthand('v')
        .with_documentation("This is the verbose documentation");
    let expected = "\
OVERVIEW: This is great documentation

USAGE: tool [options] <output> <files> <times>

ARGUMENTS:
  files            This is the input documentation
  output           This is the output documentation

OPTIONS:
  --extra          This is the extra documentation [default: 2]
  --verbose, -v    This is the verbose documentation [default: false]";
    assert_eq!(command.generate_help("tool"), expected);
}

#[test]
fn test_help_subcommands() {
    let expected = "\
OVERVIEW: This is the group command documentation

USAGE: tool subcommand

SUBCOMMANDS:
  edit      The documentation for edit
  random    \n  unedit    The documentation for unedit";
    assert_eq!(group().generate_help("tool"), expected);
}

#[test]
fn test_help_with_custom_style() {
    let style = HelpStyle {
        indent: 1,
        column_gap: 1,
        overview_label: "RESUMEN".to_string(),
        usage_label: "USO".to_string(),
    };
    let expected = "\
RESUMEN: This is the group command documentation

USO: tool subcommand

SUBCOMMANDS:
 edit   The documentation for edit
 random \n unedit The documentation for unedit";
    assert_eq!(group().generate_help_with("tool", &style), expected);
}

#[test]
fn test_help_requested_renders_page() {
    struct WithHelp {
        help: Help,
    }

    impl Command for WithHelp {
        fn name(&self) -> &str {
            "test"
        }

        fn documentation(&self) -> &str {
            "Ceci est une super documentation"
        }

        fn properties(&mut self) -> Vec<Declaration<'_>> {
            vec![declare("help", &mut self.help)]
        }

        fn run(&mut self, _out: &mut dyn Write, _err: &mut dyn Write) -> anyhow::Result<()> {
            Ok(())
        }
    }

    let expected = "\
OVERVIEW: Ceci est une super documentation

USAGE: test [options]

OPTIONS:
  --aide, -a    Afficher les options [default: false]";

    for flag in ["--aide", "-a"] {
        let mut command = WithHelp {
            help: Help::new()
                .with_name("aide")
                .with_shorthand('a')
                .with_documentation("Afficher les options"),
        };
        assert_eq!(
            command.parse_and_validate(&mut tokens(&[flag])),
            Ok(argot::Control::Exit(expected.to_string()))
        );
    }
}
