//! Query parameter map and flattening rules
//!
//! Parameters keep their insertion order, which is the order they appear in
//! the request URL. A list value is written as repeated same-named pairs
//! (`genres=1&genres=2`), never comma-joined, and absent values are left out
//! entirely. Nested filter maps are flattened under a bracketed prefix
//! (`f[types]=TV`).

use indexmap::IndexMap;
use std::fmt::Display;
use url::Url;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Written once as `key=value`
    Scalar(String),
    /// Written as one `key=item` pair per item, in order
    List(Vec<String>),
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(String, &str, &String, bool, i32, i64, u16, u32, u64, usize, f64);

impl<T: Display> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: Display> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        QueryValue::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Insertion-ordered query parameter map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: IndexMap<String, QueryValue>,
}

impl QueryParams {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Set a parameter if a value is present; `None` is skipped
    pub fn insert_opt<V>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self
    where
        V: Into<QueryValue>,
    {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Builder-style [`Self::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style [`Self::insert_opt`]
    pub fn with_opt<V>(mut self, key: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<QueryValue>,
    {
        self.insert_opt(key, value);
        self
    }

    /// Flatten `nested` into this map under `prefix`
    ///
    /// Each nested key `k` becomes `prefix[k]`. Keys that already contain a
    /// bracket suffix (`k[from]`) become `prefix[k][from]`.
    pub fn insert_nested(&mut self, prefix: &str, nested: QueryParams) -> &mut Self {
        for (key, value) in nested.entries {
            let flattened = match key.find('[') {
                Some(pos) => format!("{}[{}]{}", prefix, &key[..pos], &key[pos..]),
                None => format!("{}[{}]", prefix, key),
            };
            self.entries.insert(flattened, value);
        }
        self
    }

    /// Append every entry of `other`, in its order
    pub fn extend(&mut self, other: QueryParams) -> &mut Self {
        self.entries.extend(other.entries);
        self
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.get(key)
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten to `(name, value)` pairs in URL order
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            match value {
                QueryValue::Scalar(v) => pairs.push((key.as_str(), v.as_str())),
                QueryValue::List(items) => {
                    pairs.extend(items.iter().map(|v| (key.as_str(), v.as_str())));
                }
            }
        }
        pairs
    }

    /// Append all pairs to a URL's query string
    pub fn append_to(&self, url: &mut Url) {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
    }
}

/// Types that render themselves as query parameters
pub trait ToQuery {
    /// Build the parameter map for this value
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}
