//! Runtime side of the field-list macros.
//!
//! [`ofx_define!`](crate::ofx_define) implements [`Fields`] for a type and
//! then routes serde's `Serialize`/`Deserialize` through [`FieldsVisitor`],
//! which accepts both name-keyed maps (JSON, XML) and positional sequences
//! (binary).

use serde::de::{Error, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::{fmt, marker::PhantomData};

/// Ordered field list of a type, as declared through the field-list macros.
pub trait Fields: Default {
    const NAME: &'static str;
    const FIELDS: &'static [&'static str];

    /// Reads every field positionally, in declaration order.
    fn visit_seq<'de, A>(&mut self, seq: &mut A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>;

    /// Reads the value of the field declared under `name`.
    /// Returns `false` when no field has that name; the value is then left unread.
    fn visit_field<'de, A>(&mut self, name: &str, map: &mut A) -> Result<bool, A::Error>
    where
        A: MapAccess<'de>;
}

#[doc(hidden)]
pub fn next_field<'de, A, T>(seq: &mut A, index: &mut usize, expected: &str) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: serde::Deserialize<'de>,
{
    match seq.next_element()? {
        Some(value) => {
            *index += 1;
            Ok(value)
        }
        None => Err(A::Error::invalid_length(*index, &expected)),
    }
}

pub struct FieldsVisitor<T>(PhantomData<fn() -> T>);

impl<T> Default for FieldsVisitor<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T> Visitor<'de> for FieldsVisitor<T>
where
    T: Fields,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "struct {}", T::NAME)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut result = T::default();
        result.visit_seq(&mut seq)?;
        Ok(result)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut result = T::default();
        let mut seen = vec![false; T::FIELDS.len()];
        while let Some(key) = map.next_key::<String>()? {
            match T::FIELDS.iter().position(|field| *field == key) {
                Some(index) => {
                    if seen[index] {
                        return Err(A::Error::duplicate_field(T::FIELDS[index]));
                    }
                    seen[index] = true;
                    result.visit_field(&key, &mut map)?;
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        if let Some(index) = seen.iter().position(|seen| !seen) {
            return Err(A::Error::missing_field(T::FIELDS[index]));
        }
        Ok(result)
    }
}
