use crate::{error::*, value::element::Element};
use roxmltree::{Document, Node, ParsingOptions};
use serde::{
    de::{
        value::BorrowedStrDeserializer, DeserializeOwned, DeserializeSeed, EnumAccess, MapAccess,
        SeqAccess, VariantAccess, Visitor,
    },
    Deserialize,
};
use std::{io::Read, str::FromStr};

pub fn from_str<T>(value: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let document = element_from_str(value)?;
    let value = document
        .children
        .first()
        .ok_or_else(|| Error::ExpectedElement(Element::item_name(0)))?;
    from_element(value)
}

pub fn from_slice<T>(value: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = std::str::from_utf8(value).map_err(|error| Error::Message(error.to_string()))?;
    from_str(value)
}

pub fn from_reader<T, R>(mut reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_str(&content)
}

pub fn from_element<'de, T>(value: &'de Element) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(ElementDeserializer::new(value))
}

/// Parses a document and returns its root element.
///
/// Entities, character references and CDATA sections are resolved into text.
/// Comments and processing instructions are dropped.
pub fn element_from_str(content: &str) -> Result<Element> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let document = Document::parse_with_options(content, options)?;
    Ok(element_from_node(document.root_element()))
}

fn element_from_node(node: Node) -> Element {
    let mut result = Element::new(node.tag_name().name());
    result.attributes = node
        .attributes()
        .map(|attribute| (attribute.name().to_owned(), attribute.value().to_owned()))
        .collect();
    for child in node.children() {
        if child.is_element() {
            result.children.push(element_from_node(child));
        } else if child.is_text() {
            result.text.push_str(child.text().unwrap_or_default());
        }
    }
    // whitespace between child elements is layout, not content
    if !result.children.is_empty() && result.text.trim().is_empty() {
        result.text.clear();
    }
    result
}

#[derive(Debug)]
pub struct ElementDeserializer<'de> {
    input: &'de Element,
}

impl<'de> ElementDeserializer<'de> {
    pub fn new(input: &'de Element) -> Self {
        Self { input }
    }

    fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
    {
        let text = self.input.text.trim();
        text.parse()
            .map_err(|_| Error::CannotParse(text.to_owned()))
    }

    fn seq(&self) -> SeqDeserializer<'de> {
        SeqDeserializer {
            values: self.input.children.as_slice(),
            index: 0,
        }
    }

    fn fields(&self) -> FieldsDeserializer<'de> {
        FieldsDeserializer {
            values: self.input.children.as_slice(),
            index: 0,
        }
    }
}

macro_rules! impl_deserialize_parse {
    ($name:ident, $visit:ident) => {
        fn $name<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            visitor.$visit(self.parse()?)
        }
    };
}

impl<'de> serde::de::Deserializer<'de> for ElementDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.input.get_attribute(Element::OPTION_ATTRIBUTE).is_some() {
            self.deserialize_option(visitor)
        } else if self.input.get_attribute(Element::SIZE_ATTRIBUTE).is_some() {
            visitor.visit_seq(self.seq())
        } else if !self.input.is_leaf() {
            visitor.visit_map(self.fields())
        } else {
            visitor.visit_borrowed_str(&self.input.text)
        }
    }

    impl_deserialize_parse!(deserialize_bool, visit_bool);
    impl_deserialize_parse!(deserialize_i8, visit_i8);
    impl_deserialize_parse!(deserialize_i16, visit_i16);
    impl_deserialize_parse!(deserialize_i32, visit_i32);
    impl_deserialize_parse!(deserialize_i64, visit_i64);
    impl_deserialize_parse!(deserialize_i128, visit_i128);
    impl_deserialize_parse!(deserialize_u8, visit_u8);
    impl_deserialize_parse!(deserialize_u16, visit_u16);
    impl_deserialize_parse!(deserialize_u32, visit_u32);
    impl_deserialize_parse!(deserialize_u64, visit_u64);
    impl_deserialize_parse!(deserialize_u128, visit_u128);
    impl_deserialize_parse!(deserialize_f32, visit_f32);
    impl_deserialize_parse!(deserialize_f64, visit_f64);

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let mut chars = self.input.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(Error::CannotParse(self.input.text.clone())),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(&self.input.text)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let bytes = self
            .input
            .children
            .iter()
            .map(|child| ElementDeserializer::new(child).parse::<u8>())
            .collect::<Result<Vec<_>>>()?;
        visitor.visit_byte_buf(bytes)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.input.get_attribute(Element::OPTION_ATTRIBUTE) {
            Some(Element::NONE) => visitor.visit_none(),
            Some(Element::SOME) => {
                let content = self
                    .input
                    .get_child(Element::SOME_CONTENT)
                    .ok_or_else(|| Error::ExpectedElement(Element::SOME_CONTENT.to_owned()))?;
                visitor.visit_some(ElementDeserializer::new(content))
            }
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(self.seq())
    }

    fn deserialize_tuple<V>(self, _: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(self.seq())
    }

    fn deserialize_tuple_struct<V>(
        self,
        _: &'static str,
        _: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(self.seq())
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer {
            values: self.input.children.as_slice(),
            index: 0,
        })
    }

    fn deserialize_struct<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(self.fields())
    }

    fn deserialize_enum<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.input.children.first() {
            Some(content) => visitor.visit_enum(EnumDeserializer::Content(content)),
            None => visitor.visit_enum(EnumDeserializer::Unit(self.input.text.trim())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input.text.trim())
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// Children read positionally, whatever their names.
#[derive(Debug)]
pub struct SeqDeserializer<'de> {
    values: &'de [Element],
    index: usize,
}

impl<'de> SeqAccess<'de> for SeqDeserializer<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        if let Some(value) = self.values.get(self.index) {
            self.index += 1;
            return seed.deserialize(ElementDeserializer::new(value)).map(Some);
        }
        Ok(None)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.values.len() - self.index)
    }
}

/// Children read as struct fields keyed by their names.
#[derive(Debug)]
pub struct FieldsDeserializer<'de> {
    values: &'de [Element],
    index: usize,
}

impl<'de> MapAccess<'de> for FieldsDeserializer<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        if let Some(value) = self.values.get(self.index) {
            return seed
                .deserialize(BorrowedStrDeserializer::<Error>::new(&value.name))
                .map(Some);
        }
        Ok(None)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        if let Some(value) = self.values.get(self.index) {
            self.index += 1;
            return seed.deserialize(ElementDeserializer::new(value));
        }
        Err(Error::ExpectedElement("struct field".to_owned()))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.values.len() - self.index)
    }
}

/// Children holding `key` and `value` elements.
#[derive(Debug)]
pub struct MapDeserializer<'de> {
    values: &'de [Element],
    index: usize,
}

impl<'de> MapDeserializer<'de> {
    fn part(&self, name: &str) -> Result<&'de Element> {
        let entry = self
            .values
            .get(self.index)
            .ok_or_else(|| Error::ExpectedElement(Element::item_name(self.index)))?;
        entry
            .get_child(name)
            .ok_or_else(|| Error::ExpectedElement(name.to_owned()))
    }
}

impl<'de> MapAccess<'de> for MapDeserializer<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        if self.index >= self.values.len() {
            return Ok(None);
        }
        let key = self.part("key")?;
        seed.deserialize(ElementDeserializer::new(key)).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let value = self.part("value")?;
        self.index += 1;
        seed.deserialize(ElementDeserializer::new(value))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.values.len() - self.index)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EnumDeserializer<'de> {
    Unit(&'de str),
    Content(&'de Element),
}

impl<'de> EnumAccess<'de> for EnumDeserializer<'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: DeserializeSeed<'de>,
    {
        let name = match self {
            Self::Unit(name) => name,
            Self::Content(content) => content.name.as_str(),
        };
        let variant = seed.deserialize(BorrowedStrDeserializer::<Error>::new(name))?;
        Ok((variant, self))
    }
}

impl<'de> VariantAccess<'de> for EnumDeserializer<'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        match self {
            Self::Content(content) => seed.deserialize(ElementDeserializer::new(content)),
            Self::Unit(_) => Err(Error::Message("expected newtype variant".to_owned())),
        }
    }

    fn tuple_variant<V>(self, _: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Self::Content(content) => visitor.visit_seq(ElementDeserializer::new(content).seq()),
            Self::Unit(_) => Err(Error::Message("expected tuple variant".to_owned())),
        }
    }

    fn struct_variant<V>(self, _: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Self::Content(content) => {
                visitor.visit_map(ElementDeserializer::new(content).fields())
            }
            Self::Unit(_) => Err(Error::Message("expected struct variant".to_owned())),
        }
    }
}
