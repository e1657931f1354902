//! One-shot save and load of a single value to a file.

use crate::{
    archive::{Binary, Format, Json, Xml},
    error::*,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

/// Creates or truncates the file at `path` and writes `value` to it.
pub fn save<F, T>(path: impl AsRef<Path>, value: &T) -> Result<()>
where
    F: Format,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    log::debug!("Saving {} file: {:?}", F::NAME, path);
    let mut writer = BufWriter::new(File::create(path)?);
    F::save(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Reads the file at `path` over `target`.
///
/// Returns `Ok(false)` without touching `target` when the file does not exist.
/// Any other failure is returned as an error, `target` is then left untouched too.
pub fn load<F, T>(path: impl AsRef<Path>, target: &mut T) -> Result<bool>
where
    F: Format,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            log::debug!("Skipping load of missing {} file: {:?}", F::NAME, path);
            return Ok(false);
        }
        Err(error) => return Err(error.into()),
    };
    log::debug!("Loading {} file: {:?}", F::NAME, path);
    *target = F::load(BufReader::new(file))?;
    Ok(true)
}

pub fn save_json<T>(path: impl AsRef<Path>, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    save::<Json, _>(path, value)
}

pub fn load_json<T>(path: impl AsRef<Path>, target: &mut T) -> Result<bool>
where
    T: DeserializeOwned,
{
    load::<Json, _>(path, target)
}

pub fn save_xml<T>(path: impl AsRef<Path>, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    save::<Xml, _>(path, value)
}

pub fn load_xml<T>(path: impl AsRef<Path>, target: &mut T) -> Result<bool>
where
    T: DeserializeOwned,
{
    load::<Xml, _>(path, target)
}

pub fn save_binary<T>(path: impl AsRef<Path>, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    save::<Binary, _>(path, value)
}

pub fn load_binary<T>(path: impl AsRef<Path>, target: &mut T) -> Result<bool>
where
    T: DeserializeOwned,
{
    load::<Binary, _>(path, target)
}
