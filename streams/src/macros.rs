//! Generators for property cells, entities and reference kinds.
//!
//! Every cell and entity in the crate is an instance of one of these
//! templates; the vocabulary tables in `properties` and `terms` are their
//! only inputs.

/// Declares a property cell.
///
/// Reference alternatives are tried, in order, against objects carrying a
/// `type` discriminator; scalar alternatives, in order, against whatever
/// they did not take. The first match wins and anything unmatched is kept
/// verbatim in `Unknown`.
macro_rules! property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $key:literal {
            references {
                $( $rvariant:ident($rty:ty) => $ris:ident, $ras:ident; )*
            }
            scalars {
                $( $svariant:ident($sty:ty) => $sis:ident, $sas:ident; )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                #[doc = concat!("An embedded `", stringify!($rvariant), "`.")]
                $rvariant($rty),
            )*
            $(
                #[doc = concat!("A `", stringify!($svariant), "` value.")]
                $svariant($sty),
            )*
            /// A value that matched no declared alternative, kept verbatim.
            Unknown(::serde_json::Value),
        }

        impl $name {
            $(
                #[doc = concat!("True if the `", stringify!($rvariant), "` alternative is held.")]
                #[must_use]
                pub fn $ris(&self) -> bool {
                    matches!(self, Self::$rvariant(_))
                }

                #[doc = concat!("Returns the `", stringify!($rvariant), "` alternative, if held.")]
                #[must_use]
                pub fn $ras(&self) -> ::core::option::Option<&$rty> {
                    match self {
                        Self::$rvariant(value) => Some(value),
                        _ => None,
                    }
                }
            )*
            $(
                #[doc = concat!("True if the `", stringify!($svariant), "` alternative is held.")]
                #[must_use]
                pub fn $sis(&self) -> bool {
                    matches!(self, Self::$svariant(_))
                }

                #[doc = concat!("Returns the `", stringify!($svariant), "` alternative, if held.")]
                #[must_use]
                pub fn $sas(&self) -> ::core::option::Option<&$sty> {
                    match self {
                        Self::$svariant(value) => Some(value),
                        _ => None,
                    }
                }
            )*

            /// True if no declared alternative matched.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            /// Returns the raw value if no declared alternative matched.
            #[must_use]
            pub fn as_unknown(&self) -> ::core::option::Option<&::serde_json::Value> {
                match self {
                    Self::Unknown(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl $crate::property::PropertyValue for $name {
            const NAME: &'static str = $key;
            const ALTERNATIVES: &'static [&'static str] = &[
                $( stringify!($rvariant), )*
                $( stringify!($svariant), )*
            ];

            #[allow(unused_variables)]
            fn deserialize(
                raw: &::serde_json::Value,
                nesting: $crate::options::Nesting,
            ) -> $crate::Result<Self> {
                if let ::serde_json::Value::Object(map) = raw {
                    match $crate::value::type_names(map) {
                        Some(names) => {
                            $(
                                for name in &names {
                                    if let Some(mut target) = <$rty>::for_type_name(name) {
                                        target.deserialize_fields(map, nesting.enter()?)?;
                                        return Ok(Self::$rvariant(target));
                                    }
                                }
                            )*
                            ::tracing::debug!(property = $key, ?names, "no alternative accepts type");
                        }
                        None => {
                            ::tracing::trace!(property = $key, "object without a type discriminator");
                        }
                    }
                }
                $(
                    if let Ok(value) = <$sty as $crate::scalar::Scalar>::deserialize(raw) {
                        return Ok(Self::$svariant(value));
                    }
                )*
                ::tracing::trace!(
                    property = $key,
                    kind = $crate::value::kind(raw),
                    "value matched no alternative"
                );
                Ok(Self::Unknown($crate::value::passthrough(raw)))
            }

            fn serialize(&self) -> $crate::Result<::serde_json::Value> {
                match self {
                    $( Self::$rvariant(value) => value.serialize().map(::serde_json::Value::Object), )*
                    $( Self::$svariant(value) => $crate::scalar::Scalar::serialize(value), )*
                    Self::Unknown(value) => Ok($crate::value::passthrough(value)),
                }
            }

            fn unknown(value: ::serde_json::Value) -> Self {
                Self::Unknown(value)
            }

            fn unknown_value(&self) -> ::core::option::Option<&::serde_json::Value> {
                self.as_unknown()
            }
        }

        $(
            impl From<$rty> for $name {
                fn from(value: $rty) -> Self {
                    Self::$rvariant(value)
                }
            }
        )*
        $(
            impl From<$sty> for $name {
                fn from(value: $sty) -> Self {
                    Self::$svariant(value)
                }
            }
        )*
    };
}

macro_rules! field_type {
    (one $ty:ty) => { $crate::property::Functional<$ty> };
    (many $ty:ty) => { $crate::property::Values<$ty> };
    (map $ty:ty) => { ::core::option::Option<$crate::langmap::LanguageMap> };
}

macro_rules! field_claims {
    (one $ty:ty, $key:expr) => {
        $key == <$ty as $crate::property::PropertyValue>::NAME
    };
    (many $ty:ty, $key:expr) => {
        $key == <$ty as $crate::property::PropertyValue>::NAME
    };
    (map $ty:ty, $key:expr) => {
        $key.strip_suffix("Map") == Some(<$ty as $crate::property::PropertyValue>::NAME)
    };
}

// Evaluates to the `Result<bool>` of `Entity::deserialize_property`.
macro_rules! field_deserialize {
    (one $slot:expr, $raw:expr, $nesting:expr) => {{
        $slot.deserialize($raw, $nesting)?;
        Ok(true)
    }};
    (many $slot:expr, $raw:expr, $nesting:expr) => {{
        $slot.deserialize($raw, $nesting)?;
        Ok(true)
    }};
    (map $slot:expr, $raw:expr, $nesting:expr) => {{
        match $crate::langmap::LanguageMap::from_value($raw) {
            Some(map) => {
                $slot = Some(map);
                Ok(true)
            }
            None => {
                ::tracing::trace!("malformed language map kept as unknown");
                Ok(false)
            }
        }
    }};
}

macro_rules! field_serialize {
    (one $ty:ty, $slot:expr, $out:expr) => {
        if let Some(value) = $slot.serialize()? {
            $out.insert(<$ty as $crate::property::PropertyValue>::NAME.to_owned(), value);
        }
    };
    (many $ty:ty, $slot:expr, $out:expr) => {
        if let Some(value) = $slot.serialize()? {
            $out.insert(<$ty as $crate::property::PropertyValue>::NAME.to_owned(), value);
        }
    };
    (map $ty:ty, $slot:expr, $out:expr) => {
        if let Some(map) = &$slot {
            $out.insert(
                format!("{}Map", <$ty as $crate::property::PropertyValue>::NAME),
                map.to_value(),
            );
        }
    };
}

macro_rules! field_schema {
    (one $ty:ty) => {
        $crate::entity::FieldSchema {
            name: <$ty as $crate::property::PropertyValue>::NAME,
            multiplicity: $crate::entity::Multiplicity::Functional,
            alternatives: <$ty as $crate::property::PropertyValue>::ALTERNATIVES,
        }
    };
    (many $ty:ty) => {
        $crate::entity::FieldSchema {
            name: <$ty as $crate::property::PropertyValue>::NAME,
            multiplicity: $crate::entity::Multiplicity::Values,
            alternatives: <$ty as $crate::property::PropertyValue>::ALTERNATIVES,
        }
    };
    (map $ty:ty) => {
        $crate::entity::FieldSchema {
            name: <$ty as $crate::property::PropertyValue>::NAME,
            multiplicity: $crate::entity::Multiplicity::LanguageMap,
            alternatives: &[],
        }
    };
}

/// Declares an entity struct and its [`Entity`](crate::Entity) impl.
///
/// Each field is `one`, `many` or `map` followed by its slot name and cell
/// type; `map` slots hold the `<name>Map` sibling of the named cell.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $type_name:literal;
        $( $kind:ident $field:ident: $ty:ty, )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            /// Raw `type` values in input order.
            pub types: Vec<::serde_json::Value>,
            $(
                #[doc = concat!("The `", stringify!($field), "` slot.")]
                pub $field: field_type!($kind $ty),
            )*
            unknown: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    types: vec![::serde_json::Value::String($type_name.to_owned())],
                    $( $field: Default::default(), )*
                    unknown: ::serde_json::Map::new(),
                }
            }
        }

        impl $crate::Entity for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn schema() -> Vec<$crate::entity::FieldSchema> {
                vec![ $( field_schema!($kind $ty), )* ]
            }

            fn types(&self) -> &[::serde_json::Value] {
                &self.types
            }

            fn types_mut(&mut self) -> &mut Vec<::serde_json::Value> {
                &mut self.types
            }

            fn unknown(&self) -> &::serde_json::Map<String, ::serde_json::Value> {
                &self.unknown
            }

            fn unknown_mut(&mut self) -> &mut ::serde_json::Map<String, ::serde_json::Value> {
                &mut self.unknown
            }

            fn deserialize_property(
                &mut self,
                key: &str,
                raw: &::serde_json::Value,
                nesting: $crate::options::Nesting,
            ) -> $crate::Result<bool> {
                $(
                    if field_claims!($kind $ty, key) {
                        return field_deserialize!($kind self.$field, raw, nesting);
                    }
                )*
                Ok(false)
            }

            fn serialize_properties(
                &self,
                out: &mut ::serde_json::Map<String, ::serde_json::Value>,
            ) -> $crate::Result<()> {
                $( field_serialize!($kind $ty, self.$field, out); )*
                Ok(())
            }
        }
    };
}

/// Declares an enum over a set of entity types, resolved by type name.
///
/// Registration order is resolution order.
macro_rules! reference_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $( $variant:ident ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                #[doc = concat!("An embedded `", stringify!($variant), "`.")]
                $variant(Box<$crate::terms::$variant>),
            )+
        }

        impl $name {
            /// Type names this kind resolves, in registration order.
            pub const TYPE_NAMES: &'static [&'static str] = &[
                $( <$crate::terms::$variant as $crate::Entity>::TYPE_NAME, )+
            ];

            /// Returns an empty entity for `name`, or `None` if this kind has
            /// no such type.
            #[must_use]
            pub fn for_type_name(name: &str) -> Option<Self> {
                $(
                    if name == <$crate::terms::$variant as $crate::Entity>::TYPE_NAME {
                        return Some(Self::$variant(Box::default()));
                    }
                )+
                None
            }

            /// Canonical type name of the held entity.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$crate::terms::$variant as $crate::Entity>::TYPE_NAME, )+
                }
            }

            /// Declared slots of every type this kind resolves.
            #[must_use]
            pub fn schemas() -> Vec<(&'static str, Vec<$crate::entity::FieldSchema>)> {
                vec![
                    $((
                        <$crate::terms::$variant as $crate::Entity>::TYPE_NAME,
                        <$crate::terms::$variant as $crate::Entity>::schema(),
                    ),)+
                ]
            }

            /// Populates the held entity from `map`.
            ///
            /// # Errors
            ///
            /// Propagates nested entity failures.
            pub fn deserialize_fields(
                &mut self,
                map: &::serde_json::Map<String, ::serde_json::Value>,
                nesting: $crate::options::Nesting,
            ) -> $crate::Result<()> {
                use $crate::Entity as _;
                match self {
                    $( Self::$variant(entity) => entity.deserialize_fields(map, nesting), )+
                }
            }

            /// Encodes the held entity.
            ///
            /// # Errors
            ///
            /// Propagates failures encoding any value.
            pub fn serialize(&self) -> $crate::Result<::serde_json::Map<String, ::serde_json::Value>> {
                use $crate::Entity as _;
                match self {
                    $( Self::$variant(entity) => entity.serialize(), )+
                }
            }

            /// Encodes the held entity as a JSON value.
            ///
            /// # Errors
            ///
            /// As `serialize`.
            pub fn to_value(&self) -> $crate::Result<::serde_json::Value> {
                self.serialize().map(::serde_json::Value::Object)
            }
        }

        $(
            impl From<$crate::terms::$variant> for $name {
                fn from(entity: $crate::terms::$variant) -> Self {
                    Self::$variant(Box::new(entity))
                }
            }
        )+
    };
}
