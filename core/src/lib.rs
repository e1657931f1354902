pub mod adapters;
pub mod archive;
pub mod de;
pub mod error;
pub mod fields;
pub mod file;
mod macros;
pub mod math;
pub mod ser;
pub mod serializable;
pub mod value;


#[doc(hidden)]
pub use serde;

#[cfg(feature = "derive")]
pub use ofx_serde_derive::Serializable;

pub use crate::{
    archive::{Binary, Format, InputArchive, Json, OutputArchive, Xml},
    error::Error,
    file::{load, load_binary, load_json, load_xml, save, save_binary, save_json, save_xml},
    serializable::Serializable,
};
