// src/core/property.rs

use super::command::Command;
use super::error::ParseError;
use crate::models::{PropertyInfo, PropertyKind, Signal};

/// Una propiedad de comando que se configura a partir de los argumentos de la línea de comandos.
pub trait CommandProperty {
    /// Variante de la propiedad. Determina su prioridad.
    fn kind(&self) -> PropertyKind;

    /// Las propiedades de mayor prioridad se parsean primero. A igual prioridad, se respeta
    /// el orden de declaración en el comando.
    fn priority(&self) -> f64 {
        self.kind().priority()
    }

    /// Inicializa la propiedad con la etiqueta de su declaración. El nombre explícito, si existe,
    /// tiene preferencia y nunca se reemplaza.
    fn setup(&mut self, label: &str);

    /// Cómo aparece la propiedad en la línea de uso. `None` para no aparecer.
    fn usage_fragment(&self) -> Option<String>;

    /// Entradas de la página de ayuda. Un subcomando aporta una por comando registrado.
    fn help_entries(&self) -> Vec<PropertyInfo>;

    /// Intenta consumir tokens del inicio de `arguments`.
    ///
    /// Devuelve `Ok(true)` y elimina los tokens usados si pudo parsear; `Ok(false)` sin tocar
    /// la lista si los tokens no le corresponden; y un error si le corresponden pero son inválidos.
    fn try_consume(&mut self, arguments: &mut Vec<String>) -> Result<bool, ParseError>;

    /// Comprueba el estado tras el parseo. Puede pedir una salida terminal (ayuda, versión).
    fn validate(&self) -> Result<Option<Signal>, ParseError> {
        Ok(None)
    }

    /// El comando hijo elegido durante el parseo, si la propiedad es un subcomando.
    fn selected_command_mut(&mut self) -> Option<&mut dyn Command> {
        None
    }
}

/// Una propiedad declarada por un comando junto a la etiqueta de su campo.
pub struct Declaration<'a> {
    pub label: &'static str,
    pub property: &'a mut dyn CommandProperty,
}

/// Declara una propiedad con la etiqueta de su campo.
pub fn declare<'a>(label: &'static str, property: &'a mut dyn CommandProperty) -> Declaration<'a> {
    Declaration { label, property }
}

/// Un grupo de propiedades compartidas que varios comandos pueden incluir.
/// Sus declaraciones se añaden después de las del comando que lo contiene.
pub trait PropertyGroup {
    fn properties(&mut self) -> Vec<Declaration<'_>>;
}

/// Una propiedad dentro del plan de parseo, con su índice de declaración.
pub struct PlannedProperty<'a> {
    pub index: usize,
    pub label: &'static str,
    pub property: &'a mut dyn CommandProperty,
}

/// Descubre las propiedades de un comando, las inicializa y las ordena por
/// `(prioridad descendente, índice de declaración ascendente)`.
pub fn collect<C: Command + ?Sized>(command: &mut C) -> Vec<PlannedProperty<'_>> {
    let mut plan: Vec<PlannedProperty<'_>> = command
        .properties()
        .into_iter()
        .enumerate()
        .map(|(index, declaration)| {
            declaration.property.setup(declaration.label);
            PlannedProperty {
                index,
                label: declaration.label,
                property: declaration.property,
            }
        })
        .collect();

    plan.sort_by(|lhs, rhs| {
        rhs.property
            .priority()
            .total_cmp(&lhs.property.priority())
            .then(lhs.index.cmp(&rhs.index))
    });

    plan
}
