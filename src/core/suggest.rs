// src/core/suggest.rs

use super::error::ParseError;
use crate::constants::SUGGESTION_MAX_DISTANCE;

/// Distancia de Levenshtein entre dos cadenas, contando caracteres.
///
/// Usa dos filas que se alternan, del tamaño de la cadena más corta más uno.
pub fn levenshtein_distance(lhs: &str, rhs: &str) -> usize {
    let (long, short): (Vec<char>, Vec<char>) = if lhs.chars().count() >= rhs.chars().count() {
        (lhs.chars().collect(), rhs.chars().collect())
    } else {
        (rhs.chars().collect(), lhs.chars().collect())
    };

    if short.is_empty() {
        return long.len();
    }

    // previous[j]: distancia entre el prefijo ya procesado de `long` y los j primeros de `short`.
    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            let substitution = previous[j] + usize::from(long_char != short_char);
            current[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

/// Propone el nombre más cercano a `token`, solo si su distancia es menor que el umbral.
/// En caso de empate gana el primero en orden de registro.
pub fn suggest<'a>(token: &str, names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for name in names {
        let distance = levenshtein_distance(name, token);
        if distance >= SUGGESTION_MAX_DISTANCE {
            continue;
        }
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((name, distance));
        }
    }
    best.map(|(name, _)| name)
}

/// Busca `token` entre los nombres registrados y devuelve su posición.
/// Si no existe, el error incluye la sugerencia más cercana.
pub fn resolve(token: &str, names: &[&str]) -> Result<usize, ParseError> {
    if let Some(index) = names.iter().position(|name| *name == token) {
        return Ok(index);
    }

    let suggestion = suggest(token, names.iter().copied()).map(str::to_string);
    log::debug!(
        "Subcomando '{}' no encontrado. Sugerencia: {:?}",
        token,
        suggestion
    );
    Err(ParseError::InvalidSubCommand {
        command: token.to_string(),
        suggestion,
    })
}
