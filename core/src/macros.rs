/// Generates serde `Serialize` and `Deserialize` for a struct from an ordered
/// list of its fields. Each field may be paired with an explicit name.
/// The struct must implement `Default`, decoding fills a default value in place.
///
/// # Example
/// ```rust
/// use ofx_serde::{math::{Quaternion, Vec3f}, ofx_define};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Node {
///     pos: Vec3f,
///     rot: Quaternion,
/// }
///
/// ofx_define!(Node { pos => "position", rot });
///
/// let data = Node { pos: Vec3f::new(1.0, 2.0, 3.0), ..Default::default() };
/// let json = serde_json::to_string(&data).unwrap();
/// assert!(json.starts_with(r#"{"position":{"x":1.0"#));
/// assert_eq!(serde_json::from_str::<Node>(&json).unwrap(), data);
/// ```
///
/// Parameterized types list their generics in brackets:
/// ```rust
/// use ofx_serde::ofx_define;
///
/// #[derive(Default)]
/// struct Pair<T> {
///     first: T,
///     second: T,
/// }
///
/// ofx_define!(impl[T: serde::Serialize + serde::de::DeserializeOwned + Default] Pair<T> {
///     first,
///     second,
/// });
/// ```
#[macro_export]
macro_rules! ofx_define {
    (
        impl [ $( $generics:tt )* ] $name:ident $( < $( $param:ident ),+ > )?
        { $( $field:ident $( => $key:literal )? ),* $(,)? }
    ) => {
        impl< $( $generics )* > $crate::fields::Fields for $name $( < $( $param ),+ > )? {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[
                $( $crate::__ofx_field_name!($field $( => $key )?) ),*
            ];

            #[allow(unused_variables, unused_mut)]
            fn visit_seq<'de, A>(&mut self, seq: &mut A) -> ::std::result::Result<(), A::Error>
            where
                A: $crate::serde::de::SeqAccess<'de>,
            {
                let mut index = 0usize;
                $(
                    self.$field = $crate::fields::next_field(seq, &mut index, Self::NAME)?;
                )*
                Ok(())
            }

            #[allow(unused_variables)]
            fn visit_field<'de, A>(
                &mut self,
                name: &str,
                map: &mut A,
            ) -> ::std::result::Result<bool, A::Error>
            where
                A: $crate::serde::de::MapAccess<'de>,
            {
                $(
                    if name == $crate::__ofx_field_name!($field $( => $key )?) {
                        self.$field = map.next_value()?;
                        return Ok(true);
                    }
                )*
                Ok(false)
            }
        }

        impl< $( $generics )* > $crate::serde::Serialize for $name $( < $( $param ),+ > )? {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                use $crate::serde::ser::SerializeStruct;

                let mut state = serializer.serialize_struct(
                    stringify!($name),
                    <Self as $crate::fields::Fields>::FIELDS.len(),
                )?;
                $(
                    state.serialize_field(
                        $crate::__ofx_field_name!($field $( => $key )?),
                        &self.$field,
                    )?;
                )*
                state.end()
            }
        }

        impl<'de, $( $generics )* > $crate::serde::Deserialize<'de>
            for $name $( < $( $param ),+ > )?
        {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                deserializer.deserialize_struct(
                    stringify!($name),
                    <Self as $crate::fields::Fields>::FIELDS,
                    $crate::fields::FieldsVisitor::<Self>::default(),
                )
            }
        }
    };
    (
        $name:ident { $( $field:ident $( => $key:literal )? ),* $(,)? }
    ) => {
        $crate::ofx_define!(impl [] $name { $( $field $( => $key )? ),* });
    };
}

/// Same as [`ofx_define!`], and also makes the struct a [`Serializable`](crate::Serializable)
/// of the given format whose accessors return the struct itself.
///
/// # Example
/// ```rust
/// use ofx_serde::{archive::Json, math::Vec3f, ofx_define_serializable, Serializable};
///
/// #[derive(Default)]
/// struct Scene {
///     points: Vec<Vec3f>,
/// }
///
/// ofx_define_serializable!(Scene: Json { points });
///
/// let mut scene = Scene::default();
/// assert!(!scene.load("does/not/exist.json").unwrap());
/// ```
#[macro_export]
macro_rules! ofx_define_serializable {
    (
        $name:ident : $format:ident { $( $field:ident $( => $key:literal )? ),* $(,)? }
    ) => {
        $crate::ofx_define!(impl [] $name { $( $field $( => $key )? ),* });

        impl $crate::Serializable for $name {
            type Format = $crate::archive::$format;
            type Target = Self;

            fn get(&self) -> &Self {
                self
            }

            fn get_mut(&mut self) -> &mut Self {
                self
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ofx_field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident => $key:literal) => {
        $key
    };
}
