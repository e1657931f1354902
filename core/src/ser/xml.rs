use crate::{
    error::*,
    value::element::{escape, validate_name, Element},
};
use serde::Serialize;
use std::io::Write;

/// Serializes `value` into an element called `name`.
///
/// Fails with [`Error::InvalidName`] when `name`, or any field or variant name
/// inside `value`, is not a valid XML name.
pub fn to_element<T>(value: &T, name: &str) -> Result<Element>
where
    T: Serialize + ?Sized,
{
    validate_name(name)?;
    value.serialize(ElementSerializer::new(name))
}

/// Wraps already serialized values into a document root, naming them
/// `value0`, `value1`, ... in order.
pub fn to_document(values: Vec<Element>, config: &XmlConfig) -> Element {
    values
        .into_iter()
        .enumerate()
        .fold(Element::new(&config.root), |root, (index, value)| {
            root.child(value.rename(Element::item_name(index)))
        })
}

pub fn to_writer<T, W>(value: &T, stream: W, config: XmlConfig) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let value = to_element(value, &Element::item_name(0))?;
    let document = to_document(vec![value], &config);
    write_document(&document, stream, config)
}

pub fn to_vec<T>(value: &T, config: XmlConfig) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut result = Vec::with_capacity(256);
    to_writer(value, &mut result, config)?;
    Ok(result)
}

pub fn to_string<T>(value: &T, config: XmlConfig) -> Result<String>
where
    T: Serialize + ?Sized,
{
    String::from_utf8(to_vec(value, config)?).map_err(|error| Error::Message(error.to_string()))
}

pub fn to_string_compact<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    to_string(value, XmlConfig::default().with_style(XmlConfigStyle::Compact))
}

pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    to_string(value, XmlConfig::default())
}

#[derive(Debug, Clone)]
pub struct XmlConfig {
    pub style: XmlConfigStyle,
    pub root: String,
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            style: XmlConfigStyle::default_pretty(),
            root: "ofx".to_owned(),
            declaration: true,
        }
    }
}

impl XmlConfig {
    pub fn with_style(mut self, style: XmlConfigStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_root(mut self, root: impl ToString) -> Self {
        self.root = root.to_string();
        self
    }

    pub fn with_declaration(mut self, mode: bool) -> Self {
        self.declaration = mode;
        self
    }
}

#[derive(Debug, Default, Clone)]
pub enum XmlConfigStyle {
    #[default]
    Compact,
    Pretty {
        indent: usize,
    },
}

impl XmlConfigStyle {
    pub fn default_pretty() -> Self {
        Self::Pretty { indent: 2 }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty { .. })
    }
}

pub fn write_document<W>(document: &Element, mut stream: W, config: XmlConfig) -> Result<()>
where
    W: Write,
{
    validate_name(&document.name)?;
    if config.declaration {
        stream.write_all(br#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        if config.style.is_pretty() {
            stream.write_all(b"\n")?;
        }
    }
    write_element(document, &mut stream, &config.style, 0)?;
    if config.style.is_pretty() {
        stream.write_all(b"\n")?;
    }
    stream.flush()?;
    Ok(())
}

fn write_element<W>(element: &Element, stream: &mut W, style: &XmlConfigStyle, level: usize) -> Result<()>
where
    W: Write,
{
    write!(stream, "<{}", element.name)?;
    for (name, value) in &element.attributes {
        write!(stream, " {}=\"{}\"", name, escape(value, true))?;
    }
    if element.children.is_empty() {
        if element.text.is_empty() {
            stream.write_all(b"/>")?;
        } else {
            write!(stream, ">{}</{}>", escape(&element.text, false), element.name)?;
        }
        return Ok(());
    }
    stream.write_all(b">")?;
    for child in &element.children {
        write_new_line_indent(stream, style, level + 1)?;
        write_element(child, stream, style, level + 1)?;
    }
    write_new_line_indent(stream, style, level)?;
    write!(stream, "</{}>", element.name)?;
    Ok(())
}

fn write_new_line_indent<W>(stream: &mut W, style: &XmlConfigStyle, level: usize) -> Result<()>
where
    W: Write,
{
    if let XmlConfigStyle::Pretty { indent } = style {
        write!(stream, "\n{:indent$}", "", indent = level * indent)?;
    }
    Ok(())
}

pub struct ElementSerializer {
    name: String,
}

impl ElementSerializer {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn leaf(self, value: impl ToString) -> Result<Element> {
        Ok(Element::new(self.name).text(value))
    }
}

macro_rules! impl_serialize_text {
    ($name:ident, $type:ident) => {
        fn $name(self, v: $type) -> Result<Self::Ok> {
            self.leaf(v)
        }
    };
}

impl serde::ser::Serializer for ElementSerializer {
    type Ok = Element;
    type Error = Error;
    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = VariantSerializer<SeqSerializer>;
    type SerializeMap = MapSerializer;
    type SerializeStruct = StructSerializer;
    type SerializeStructVariant = VariantSerializer<StructSerializer>;

    impl_serialize_text!(serialize_bool, bool);
    impl_serialize_text!(serialize_i8, i8);
    impl_serialize_text!(serialize_i16, i16);
    impl_serialize_text!(serialize_i32, i32);
    impl_serialize_text!(serialize_i64, i64);
    impl_serialize_text!(serialize_i128, i128);
    impl_serialize_text!(serialize_u8, u8);
    impl_serialize_text!(serialize_u16, u16);
    impl_serialize_text!(serialize_u32, u32);
    impl_serialize_text!(serialize_u64, u64);
    impl_serialize_text!(serialize_u128, u128);
    impl_serialize_text!(serialize_f32, f32);
    impl_serialize_text!(serialize_f64, f64);
    impl_serialize_text!(serialize_char, char);

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.leaf(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(v.iter()
            .enumerate()
            .fold(Element::new(self.name), |result, (index, byte)| {
                result.child(Element::new(Element::item_name(index)).text(byte))
            })
            .attribute(Element::SIZE_ATTRIBUTE, Element::DYNAMIC))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Element::none(self.name))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let name = self.name.clone();
        let content = value.serialize(self)?;
        // a bare element would read back as the inner option
        if content.get_attribute(Element::OPTION_ATTRIBUTE).is_some() {
            Ok(Element::some(name, content))
        } else {
            Ok(content)
        }
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Element::new(self.name))
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok> {
        Ok(Element::new(self.name))
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.leaf(variant)
    }

    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let content = to_element(value, variant)?;
        Ok(Element::new(self.name).child(content))
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer::new(
            Element::new(self.name).attribute(Element::SIZE_ATTRIBUTE, Element::DYNAMIC),
        ))
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple> {
        Ok(SeqSerializer::new(Element::new(self.name)))
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SeqSerializer::new(Element::new(self.name)))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        validate_name(variant)?;
        Ok(VariantSerializer {
            outer: Element::new(self.name),
            inner: SeqSerializer::new(Element::new(variant)),
        })
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            result: Element::new(self.name)
                .attribute(Element::SIZE_ATTRIBUTE, Element::DYNAMIC),
            key: None,
        })
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer {
            result: Element::new(self.name),
        })
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant> {
        validate_name(variant)?;
        Ok(VariantSerializer {
            outer: Element::new(self.name),
            inner: StructSerializer {
                result: Element::new(variant),
            },
        })
    }
}

pub struct SeqSerializer {
    result: Element,
}

impl SeqSerializer {
    fn new(result: Element) -> Self {
        Self { result }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = Element::item_name(self.result.children.len());
        self.result.children.push(to_element(value, &name)?);
        Ok(())
    }
}

impl serde::ser::SerializeSeq for SeqSerializer {
    type Ok = Element;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.result)
    }
}

impl serde::ser::SerializeTuple for SeqSerializer {
    type Ok = Element;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.result)
    }
}

impl serde::ser::SerializeTupleStruct for SeqSerializer {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.result)
    }
}

pub struct MapSerializer {
    result: Element,
    key: Option<Element>,
}

impl serde::ser::SerializeMap for MapSerializer {
    type Ok = Element;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(to_element(key, "key")?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| Error::Message("map value serialized before its key".to_owned()))?;
        let entry = Element::new(Element::item_name(self.result.children.len()))
            .child(key)
            .child(to_element(value, "value")?);
        self.result.children.push(entry);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.result)
    }
}

pub struct StructSerializer {
    result: Element,
}

impl serde::ser::SerializeStruct for StructSerializer {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.result.children.push(to_element(value, key)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.result)
    }
}

/// Enum variant with content: `<name><variant>content</variant></name>`.
pub struct VariantSerializer<S> {
    outer: Element,
    inner: S,
}

impl serde::ser::SerializeTupleVariant for VariantSerializer<SeqSerializer> {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.outer.child(self.inner.result))
    }
}

impl serde::ser::SerializeStructVariant for VariantSerializer<StructSerializer> {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.outer.child(self.inner.result))
    }
}
