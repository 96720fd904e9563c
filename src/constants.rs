// src/constants.rs

/// Categoría de la ayuda para los argumentos posicionales.
pub const ARGUMENTS_CATEGORY: &str = "ARGUMENTS";

/// Categoría de la ayuda para las opciones con nombre.
pub const OPTIONS_CATEGORY: &str = "OPTIONS";

/// Categoría de la ayuda para los subcomandos.
pub const SUBCOMMANDS_CATEGORY: &str = "SUBCOMMANDS";

/// Prioridad de parseo de un argumento posicional.
pub const ARGUMENT_PRIORITY: f64 = 0.25;

/// Prioridad de parseo de una opción. Las opciones pueden aparecer en cualquier parte de la línea.
pub const OPTION_PRIORITY: f64 = 0.75;

/// Prioridad de parseo de un subcomando.
pub const SUBCOMMAND_PRIORITY: f64 = 0.25;

/// Fragmento de uso compartido por todas las opciones de un comando.
pub const OPTIONS_USAGE: &str = "[options]";

/// Fragmento de uso de un subcomando.
pub const SUBCOMMAND_USAGE: &str = "subcommand";

/// Una sugerencia de subcomando solo se propone por debajo de esta distancia de edición.
pub const SUGGESTION_MAX_DISTANCE: usize = 3;

pub const HELP_NAME: &str = "help";
pub const HELP_SHORTHAND: char = 'h';
pub const HELP_DOCUMENTATION: &str = "Muestra las opciones disponibles";

pub const VERSION_NAME: &str = "version";
pub const VERSION_SHORTHAND: char = 'v';
pub const VERSION_DOCUMENTATION: &str = "Muestra la versión de la herramienta";
