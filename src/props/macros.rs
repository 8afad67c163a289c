/// Generates an optional-field props record.
///
/// Leaf fields map a JSON key to a [`PropValue`](crate::props::PropValue) and
/// an optional token category. Nested fields hold a whole record that is
/// replaced, never merged, when a higher layer sets it.
macro_rules! define_props {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $key:literal => $category:expr,
            )*
        }

        nested {
            $(
                $(#[$nested_meta:meta])*
                $nested:ident: $nested_key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<PropValue>,
            )*
            $(
                $(#[$nested_meta])*
                #[serde(rename = $nested_key, default, skip_serializing_if = "Option::is_none")]
                pub $nested: Option<Box<$name>>,
            )*
        }

        impl $name {
            /// JSON keys of the leaf props, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// JSON keys of the nested props.
            pub const NESTED_KEYS: &'static [&'static str] = &[$($nested_key),*];

            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $field(mut self, value: impl Into<PropValue>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            $(
                $(#[$nested_meta])*
                pub fn $nested(mut self, value: $name) -> Self {
                    self.$nested = Some(Box::new(value));
                    self
                }
            )*

            /// Merges `other` on top of `self`, key by key.
            ///
            /// Set keys in `other` win; nested records are taken whole.
            pub fn merge(&self, other: &$name) -> $name {
                $name {
                    $( $field: other.$field.clone().or_else(|| self.$field.clone()), )*
                    $( $nested: other.$nested.clone().or_else(|| self.$nested.clone()), )*
                }
            }

            /// Checks if any prop is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )* $( && self.$nested.is_none() )*
            }

            pub fn get(&self, key: &str) -> Option<&PropValue> {
                match key {
                    $( $key => self.$field.as_ref(), )*
                    _ => None,
                }
            }

            pub fn get_nested(&self, key: &str) -> Option<&$name> {
                match key {
                    $( $nested_key => self.$nested.as_deref(), )*
                    _ => None,
                }
            }

            /// Sets a leaf prop by JSON key. Returns `false` for unknown keys.
            pub fn set(&mut self, key: &str, value: impl Into<PropValue>) -> bool {
                match key {
                    $( $key => {
                        self.$field = Some(value.into());
                        true
                    } )*
                    _ => false,
                }
            }

            /// The token category a leaf prop resolves against.
            pub fn category(key: &str) -> Option<TokenCategory> {
                match key {
                    $( $key => $category, )*
                    _ => None,
                }
            }

            /// Iterates the set leaf props in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropValue)> + '_ {
                [ $( ($key, self.$field.as_ref()), )* ]
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|value| (key, value)))
            }

            /// Splits into the props named by `keys` and everything else.
            pub fn split(&self, keys: &[&str]) -> ($name, $name) {
                let mut picked = $name::default();
                let mut rest = $name::default();

                $(
                    let target = if keys.contains(&$key) { &mut picked } else { &mut rest };
                    target.$field = self.$field.clone();
                )*
                $(
                    let target = if keys.contains(&$nested_key) { &mut picked } else { &mut rest };
                    target.$nested = self.$nested.clone();
                )*

                (picked, rest)
            }

            /// Rebuilds every set leaf (recursing into nested records).
            pub(crate) fn map_values<F>(&self, f: &mut F) -> $name
            where
                F: FnMut(&'static str, Option<TokenCategory>, &PropValue) -> PropValue,
            {
                $name {
                    $( $field: self.$field.as_ref().map(|value| f($key, $category, value)), )*
                    $( $nested: self.$nested.as_ref().map(|nested| Box::new(nested.map_values(f))), )*
                }
            }
        }
    };
}

pub(crate) use define_props;
