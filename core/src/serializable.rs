use crate::{archive::Format, error::Result, file};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Capability of saving to and loading from files in a fixed format.
///
/// Implementors only expose the value to stream through `get`/`get_mut`,
/// usually the implementor itself. Prefer to implement using
/// `ofx_define_serializable!` or the `Serializable` derive macro.
///
/// # Example
/// ```rust
/// use ofx_serde::{archive::Binary, math::Rectangle, Serializable};
///
/// struct Viewport {
///     bounds: Rectangle,
/// }
///
/// impl Serializable for Viewport {
///     type Format = Binary;
///     type Target = Rectangle;
///
///     fn get(&self) -> &Rectangle {
///         &self.bounds
///     }
///
///     fn get_mut(&mut self) -> &mut Rectangle {
///         &mut self.bounds
///     }
/// }
///
/// let path = std::env::temp_dir().join("ofx-serde-viewport-doc.bin");
/// let viewport = Viewport { bounds: Rectangle::new(0.0, 0.0, 640.0, 480.0) };
/// viewport.save(&path).unwrap();
/// let mut loaded = Viewport { bounds: Rectangle::default() };
/// assert!(loaded.load(&path).unwrap());
/// assert_eq!(loaded.bounds, viewport.bounds);
/// # std::fs::remove_file(&path).unwrap();
/// ```
pub trait Serializable {
    type Format: Format;
    type Target: Serialize + DeserializeOwned;

    fn get(&self) -> &Self::Target;

    fn get_mut(&mut self) -> &mut Self::Target;

    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        file::save::<Self::Format, _>(path, self.get())
    }

    fn load(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        file::load::<Self::Format, _>(path, self.get_mut())
    }
}
