//! Cost centers and the registry that lists them.
//!
//! The registry is the only source of truth for which cost centers exist in a
//! model: every summary and rate set is produced in registry order, and every
//! allocation must point into it.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// Identifier of a cost center (a service costs are charged against).
///
/// The id is trimmed and NFC-normalized on construction, so `"Imaging"` typed
/// with a decomposed accent and the precomposed form compare equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CostCenterId(String);

impl CostCenterId {
    pub fn new(value: &str) -> ResultEngine<Self> {
        let normalized: String = value.trim().nfc().collect();
        if normalized.is_empty() {
            return Err(EngineError::InvalidCostCenter(
                "cost center id must not be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CostCenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CostCenterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CostCenterId {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for CostCenterId {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CostCenterId> for String {
    fn from(value: CostCenterId) -> Self {
        value.0
    }
}

/// Ordered set of the cost centers known to a model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CostCenterId>", into = "Vec<CostCenterId>")]
pub struct CostCenterRegistry {
    ids: Vec<CostCenterId>,
}

impl CostCenterRegistry {
    /// Build a registry, keeping the given order. Duplicates are rejected.
    pub fn new<I>(ids: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = CostCenterId>,
    {
        let mut registry = Self::default();
        for id in ids {
            registry.add(id)?;
        }
        Ok(registry)
    }

    /// Convenience constructor from raw strings.
    pub fn from_names<'a, I>(names: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids = names
            .into_iter()
            .map(CostCenterId::new)
            .collect::<ResultEngine<Vec<_>>>()?;
        Self::new(ids)
    }

    pub fn contains(&self, id: &CostCenterId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CostCenterId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Append a cost center at the end of the registry.
    pub fn add(&mut self, id: CostCenterId) -> ResultEngine<()> {
        if self.contains(&id) {
            return Err(EngineError::ExistingKey(id.to_string()));
        }
        self.ids.push(id);
        Ok(())
    }

    /// Drop a cost center. Whether it is still referenced is checked by the
    /// caller, which owns the entities.
    pub(crate) fn remove(&mut self, id: &CostCenterId) -> ResultEngine<CostCenterId> {
        match self.ids.iter().position(|known| known == id) {
            Some(index) => Ok(self.ids.remove(index)),
            None => Err(EngineError::KeyNotFound(id.to_string())),
        }
    }
}

impl TryFrom<Vec<CostCenterId>> for CostCenterRegistry {
    type Error = EngineError;

    fn try_from(value: Vec<CostCenterId>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CostCenterRegistry> for Vec<CostCenterId> {
    fn from(value: CostCenterRegistry) -> Self {
        value.ids
    }
}

/// Deserializers for maps keyed by cost center.
///
/// Keys are normalized while they are read, so `"Imaging"` and `"Imaging "`
/// land on the same id. A key that repeats after normalization is rejected
/// instead of overwriting the earlier entry.
pub(crate) mod keyed {
    use std::{collections::BTreeMap, fmt, marker::PhantomData};

    use serde::{
        Deserialize, Deserializer,
        de::{self, MapAccess, Visitor},
    };

    use super::CostCenterId;
    use crate::EngineError;

    struct UniqueKeys<V> {
        field: &'static str,
        marker: PhantomData<V>,
    }

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = BTreeMap<CostCenterId, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "`{}` as a map keyed by cost center", self.field)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut values = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<CostCenterId, V>()? {
                if values.contains_key(&key) {
                    return Err(de::Error::custom(EngineError::ExistingKey(format!(
                        "{key} in `{}`",
                        self.field
                    ))));
                }
                values.insert(key, value);
            }
            Ok(values)
        }
    }

    fn unique_keys<'de, D, V>(
        deserializer: D,
        field: &'static str,
    ) -> Result<BTreeMap<CostCenterId, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        deserializer.deserialize_map(UniqueKeys {
            field,
            marker: PhantomData,
        })
    }

    pub(crate) fn allocations<'de, D, V>(d: D) -> Result<BTreeMap<CostCenterId, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        unique_keys(d, "allocations")
    }

    pub(crate) fn per_cost_center<'de, D, V>(d: D) -> Result<BTreeMap<CostCenterId, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        unique_keys(d, "per_cost_center")
    }

    pub(crate) fn split<'de, D, V>(d: D) -> Result<BTreeMap<CostCenterId, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        unique_keys(d, "split")
    }
}
