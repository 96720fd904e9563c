// src/core/codec.rs

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::path::PathBuf;
use thiserror::Error;

/// Fallos genéricos de conversión de tokens a valores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("falta un argumento")]
    MissingArgument,
    #[error("formato inválido '{0}'")]
    InvalidFormat(String),
}

/// Un tipo que puede construirse a partir de los primeros tokens de una lista de argumentos.
pub trait ArgumentType: Sized {
    /// Decodifica un valor desde el inicio de `tokens`.
    /// Devuelve el valor y cuántos tokens consumió.
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError>;

    /// Texto usado para mostrar el valor en la ayuda (`[default: ...]`).
    fn describe(&self) -> String;

    /// Valor que toma una opción de este tipo cuando aparece sin valor explícito.
    /// Solo los booleanos lo tienen; eso los convierte en banderas agrupables (`-oxy`).
    fn flag_value() -> Option<Self> {
        None
    }
}

/// Decodifica un único token con `FromStr`.
fn decode_single<T: std::str::FromStr>(tokens: &[String]) -> Result<(T, usize), CodecError> {
    let token = tokens.first().ok_or(CodecError::MissingArgument)?;
    let value = token
        .parse::<T>()
        .map_err(|_| CodecError::InvalidFormat(token.clone()))?;
    Ok((value, 1))
}

macro_rules! scalar_argument_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgumentType for $ty {
                fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
                    decode_single(tokens)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

scalar_argument_type!(
    String, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl ArgumentType for bool {
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
        // Solo se aceptan `true` y `false`.
        decode_single(tokens)
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn flag_value() -> Option<Self> {
        Some(true)
    }
}

impl ArgumentType for PathBuf {
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
        decode_single(tokens)
    }

    fn describe(&self) -> String {
        self.display().to_string()
    }
}

/// Aplica el codec de `T` repetidamente hasta que se acaben los tokens.
///
/// `MissingArgument` marca el final de la colección y no es un error; cualquier token
/// presente pero mal formado sí lo es.
fn decode_repeated<T: ArgumentType>(
    tokens: &[String],
    mut push: impl FnMut(T),
) -> Result<usize, CodecError> {
    let mut consumed = 0;
    loop {
        match T::decode(&tokens[consumed..]) {
            Ok((_, 0)) => break,
            Ok((value, used)) => {
                push(value);
                consumed += used;
            }
            Err(CodecError::MissingArgument) => break,
            Err(e) => return Err(e),
        }
    }
    log::trace!("Colección decodificada a partir de {} tokens", consumed);
    Ok(consumed)
}

fn describe_all<'a, T: ArgumentType + 'a>(values: impl Iterator<Item = &'a T>) -> String {
    let parts: Vec<String> = values.map(|value| value.describe()).collect();
    format!("[{}]", parts.join(", "))
}

impl<T: ArgumentType> ArgumentType for Vec<T> {
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
        let mut values = Vec::new();
        let consumed = decode_repeated(tokens, |value| values.push(value))?;
        Ok((values, consumed))
    }

    fn describe(&self) -> String {
        describe_all(self.iter())
    }
}

impl<T: ArgumentType + Eq + Hash> ArgumentType for HashSet<T> {
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
        let mut values = HashSet::new();
        let consumed = decode_repeated(tokens, |value| {
            values.insert(value);
        })?;
        Ok((values, consumed))
    }

    fn describe(&self) -> String {
        describe_all(self.iter())
    }
}

impl<T: ArgumentType + Ord> ArgumentType for BTreeSet<T> {
    fn decode(tokens: &[String]) -> Result<(Self, usize), CodecError> {
        let mut values = BTreeSet::new();
        let consumed = decode_repeated(tokens, |value| {
            values.insert(value);
        })?;
        Ok((values, consumed))
    }

    fn describe(&self) -> String {
        describe_all(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_string() {
        assert_eq!(String::decode(&[]), Err(CodecError::MissingArgument));
        assert_eq!(
            String::decode(&tokens(&["hello", "world"])),
            Ok(("hello".to_string(), 1))
        );
    }

    #[test]
    fn test_bool() {
        assert_eq!(bool::decode(&[]), Err(CodecError::MissingArgument));
        assert_eq!(
            bool::decode(&tokens(&["0"])),
            Err(CodecError::InvalidFormat("0".to_string()))
        );
        assert_eq!(
            bool::decode(&tokens(&["hello"])),
            Err(CodecError::InvalidFormat("hello".to_string()))
        );
        assert_eq!(bool::decode(&tokens(&["true", "false"])), Ok((true, 1)));
        assert_eq!(bool::decode(&tokens(&["false", "hello"])), Ok((false, 1)));
        assert_eq!(bool::flag_value(), Some(true));
        assert_eq!(i32::flag_value(), None);
    }

    #[test]
    fn test_char() {
        assert_eq!(char::decode(&tokens(&["x"])), Ok(('x', 1)));
        assert_eq!(
            char::decode(&tokens(&["xy"])),
            Err(CodecError::InvalidFormat("xy".to_string()))
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            i8::decode(&tokens(&["-129"])),
            Err(CodecError::InvalidFormat("-129".to_string()))
        );
        assert_eq!(
            u8::decode(&tokens(&["-2"])),
            Err(CodecError::InvalidFormat("-2".to_string()))
        );
        assert_eq!(
            i32::decode(&tokens(&["4834984935"])),
            Err(CodecError::InvalidFormat("4834984935".to_string()))
        );
        assert_eq!(
            i64::decode(&tokens(&["2.6"])),
            Err(CodecError::InvalidFormat("2.6".to_string()))
        );
        assert_eq!(i8::decode(&tokens(&["-128", "58"])), Ok((-128, 1)));
        assert_eq!(u64::decode(&tokens(&["95"])), Ok((95, 1)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::decode(&tokens(&["2.5"])), Ok((2.5, 1)));
        assert_eq!(
            f32::decode(&tokens(&["big"])),
            Err(CodecError::InvalidFormat("big".to_string()))
        );
    }

    #[test]
    fn test_vec_consumes_everything() {
        let (values, consumed) = Vec::<String>::decode(&tokens(&["a", "b", "c"])).unwrap();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_vec_empty_is_success() {
        assert_eq!(Vec::<i32>::decode(&[]), Ok((vec![], 0)));
    }

    #[test]
    fn test_vec_malformed_element_is_fatal() {
        assert_eq!(
            Vec::<i32>::decode(&tokens(&["1", "2", "three"])),
            Err(CodecError::InvalidFormat("three".to_string()))
        );
    }

    #[test]
    fn test_sets() {
        let (values, consumed) = HashSet::<u8>::decode(&tokens(&["1", "2", "1"])).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(values.len(), 2);

        let (values, _) = BTreeSet::<String>::decode(&tokens(&["b", "a"])).unwrap();
        assert_eq!(values.describe(), "[a, b]");
    }

    #[test]
    fn test_describe() {
        assert_eq!(42i32.describe(), "42");
        assert_eq!(false.describe(), "false");
        assert_eq!(vec![1i32, 2].describe(), "[1, 2]");
        assert_eq!(PathBuf::from("./").describe(), "./");
    }
}
