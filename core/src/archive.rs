//! Formats and multi-value stream archives.

use crate::{
    de::xml::{element_from_str, from_element},
    error::*,
    ser::xml::{to_document, to_element, write_document, XmlConfig},
    value::element::Element,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    io::{Read, Write},
    marker::PhantomData,
    mem::take,
};

/// Encoding a value can be saved to and loaded from.
///
/// `save`/`load` stream exactly one value. The remaining hooks are driven by
/// [`OutputArchive`] and [`InputArchive`] to stream several values in order.
pub trait Format {
    const NAME: &'static str;
    const EXTENSION: &'static str;

    /// Values queued by an output archive until it is finished.
    type Pending: Default;
    /// Decoded document an input archive hands values out of.
    type Loaded;

    fn save<T, W>(writer: W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write;

    fn load<T, R>(reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read;

    fn push<T, W>(pending: &mut Self::Pending, writer: &mut W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write;

    fn flush<W>(pending: Self::Pending, writer: &mut W) -> Result<()>
    where
        W: Write;

    fn open<R>(reader: &mut R) -> Result<Self::Loaded>
    where
        R: Read;

    fn pull<T, R>(loaded: &mut Self::Loaded, reader: &mut R, index: usize) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read;
}

#[derive(Debug, Clone)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonConfig {
    pub fn with_pretty(mut self, mode: bool) -> Self {
        self.pretty = mode;
        self
    }
}

/// JSON through `serde_json`. Fields are keyed by name.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Json;

impl Json {
    pub fn to_writer_with<T, W>(writer: W, value: &T, config: &JsonConfig) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if config.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        Ok(())
    }
}

impl Format for Json {
    const NAME: &'static str = "json";
    const EXTENSION: &'static str = "json";

    type Pending = Vec<serde_json::Value>;
    type Loaded = serde_json::Map<String, serde_json::Value>;

    fn save<T, W>(writer: W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        Self::to_writer_with(writer, value, &JsonConfig::default())
    }

    fn load<T, R>(reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        Ok(serde_json::from_reader(reader)?)
    }

    fn push<T, W>(pending: &mut Self::Pending, _: &mut W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        pending.push(serde_json::to_value(value)?);
        Ok(())
    }

    fn flush<W>(pending: Self::Pending, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let document = pending
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Element::item_name(index), value))
            .collect::<serde_json::Map<_, _>>();
        Self::save(&mut *writer, &document)?;
        writer.flush()?;
        Ok(())
    }

    fn open<R>(reader: &mut R) -> Result<Self::Loaded>
    where
        R: Read,
    {
        let document: serde_json::Value = serde_json::from_reader(reader)?;
        match document {
            serde_json::Value::Object(document) => Ok(document),
            _ => Err(Error::Message(
                "json archive document is not an object".to_owned(),
            )),
        }
    }

    fn pull<T, R>(loaded: &mut Self::Loaded, _: &mut R, index: usize) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let value = loaded
            .remove(&Element::item_name(index))
            .ok_or(Error::ArchiveExhausted(index))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// XML through the element codec in [`crate::ser::xml`] and [`crate::de::xml`].
/// Fields are keyed by element name.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Xml;

impl Format for Xml {
    const NAME: &'static str = "xml";
    const EXTENSION: &'static str = "xml";

    type Pending = Vec<Element>;
    type Loaded = std::vec::IntoIter<Element>;

    fn save<T, W>(writer: W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        crate::ser::xml::to_writer(value, writer, XmlConfig::default())
    }

    fn load<T, R>(reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        crate::de::xml::from_reader(reader)
    }

    fn push<T, W>(pending: &mut Self::Pending, _: &mut W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let name = Element::item_name(pending.len());
        pending.push(to_element(value, &name)?);
        Ok(())
    }

    fn flush<W>(pending: Self::Pending, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let config = XmlConfig::default();
        let document = to_document(pending, &config);
        write_document(&document, writer, config)
    }

    fn open<R>(reader: &mut R) -> Result<Self::Loaded>
    where
        R: Read,
    {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(element_from_str(&content)?.children.into_iter())
    }

    fn pull<T, R>(loaded: &mut Self::Loaded, _: &mut R, index: usize) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let element = loaded.next().ok_or(Error::ArchiveExhausted(index))?;
        from_element(&element)
    }
}

/// Binary through `bincode`: little endian, fixed-width integers.
/// Fields are positional, so decoding depends on declaration order.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Binary;

impl Binary {
    pub fn config() -> impl bincode::config::Config {
        bincode::config::standard()
            .with_little_endian()
            .with_fixed_int_encoding()
    }

    pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        Ok(bincode::serde::encode_to_vec(value, Self::config())?)
    }

    pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (value, _) = bincode::serde::decode_from_slice(bytes, Self::config())?;
        Ok(value)
    }
}

impl Format for Binary {
    const NAME: &'static str = "binary";
    const EXTENSION: &'static str = "bin";

    type Pending = ();
    type Loaded = ();

    fn save<T, W>(mut writer: W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        bincode::serde::encode_into_std_write(value, &mut writer, Self::config())?;
        Ok(())
    }

    fn load<T, R>(mut reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        Ok(bincode::serde::decode_from_std_read(
            &mut reader,
            Self::config(),
        )?)
    }

    fn push<T, W>(_: &mut Self::Pending, writer: &mut W, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        Self::save(writer, value)
    }

    fn flush<W>(_: Self::Pending, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writer.flush()?;
        Ok(())
    }

    fn open<R>(_: &mut R) -> Result<Self::Loaded>
    where
        R: Read,
    {
        Ok(())
    }

    fn pull<T, R>(_: &mut Self::Loaded, reader: &mut R, _: usize) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        Self::load(reader)
    }
}

/// Writes several values to one stream, in order.
///
/// JSON and XML documents are produced when the archive is finished; binary
/// values reach the stream as they are written. Dropping an unfinished
/// archive finishes it and only logs a failure; an archive dropped before any
/// value was written leaves the stream untouched. Call [`OutputArchive::finish`]
/// to write an empty document.
///
/// # Example
/// ```rust
/// use ofx_serde::{archive::{InputArchive, Json, OutputArchive}, math::Vec3f};
///
/// let mut archive = OutputArchive::<Json, _>::new(Vec::new());
/// archive.write(&vec![Vec3f::new(1.0, 2.0, 3.0)]).unwrap();
/// archive.write(&42u32).unwrap();
/// let bytes = archive.finish().unwrap();
///
/// let mut archive = InputArchive::<Json, _>::new(bytes.as_slice()).unwrap();
/// assert_eq!(archive.read::<Vec<Vec3f>>().unwrap(), vec![Vec3f::new(1.0, 2.0, 3.0)]);
/// assert_eq!(archive.read::<u32>().unwrap(), 42);
/// ```
pub struct OutputArchive<F, W>
where
    F: Format,
    W: Write,
{
    writer: Option<W>,
    pending: F::Pending,
    count: usize,
}

impl<F, W> OutputArchive<F, W>
where
    F: Format,
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            pending: Default::default(),
            count: 0,
        }
    }

    pub fn write<T>(&mut self, value: &T) -> Result<&mut Self>
    where
        T: Serialize + ?Sized,
    {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| Error::Message("archive is already finished".to_owned()))?;
        log::trace!("Writing {} archive value #{}", F::NAME, self.count);
        F::push(&mut self.pending, writer, value)?;
        self.count += 1;
        Ok(self)
    }

    /// Number of values written so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn finish(mut self) -> Result<W> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| Error::Message("archive is already finished".to_owned()))?;
        F::flush(take(&mut self.pending), &mut writer)?;
        Ok(writer)
    }
}

impl<F, W> Drop for OutputArchive<F, W>
where
    F: Format,
    W: Write,
{
    fn drop(&mut self) {
        if self.count == 0 {
            return;
        }
        if let Some(mut writer) = self.writer.take() {
            if let Err(error) = F::flush(take(&mut self.pending), &mut writer) {
                log::warn!("Could not finish {} archive on drop: {}", F::NAME, error);
            }
        }
    }
}

/// Reads values written by an [`OutputArchive`] of the same format, in order.
pub struct InputArchive<F, R>
where
    F: Format,
    R: Read,
{
    reader: R,
    loaded: F::Loaded,
    count: usize,
    _format: PhantomData<F>,
}

impl<F, R> InputArchive<F, R>
where
    F: Format,
    R: Read,
{
    pub fn new(mut reader: R) -> Result<Self> {
        let loaded = F::open(&mut reader)?;
        Ok(Self {
            reader,
            loaded,
            count: 0,
            _format: PhantomData,
        })
    }

    pub fn read<T>(&mut self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::trace!("Reading {} archive value #{}", F::NAME, self.count);
        let value = F::pull(&mut self.loaded, &mut self.reader, self.count)?;
        self.count += 1;
        Ok(value)
    }

    /// Reads the next value over `target`. On failure `target` is left untouched.
    pub fn read_into<T>(&mut self, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        *target = self.read()?;
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
