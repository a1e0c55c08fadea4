use std::fmt;
use std::ops::Index;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role -> firmware pin id, kept in insertion order.
///
/// The form fills it in the type's declared role order, so the JSON on the
/// wire reads `pinTrig` before `pinEcho`. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct PinMap {
    entries: Vec<(String, u8)>,
}

type Entry<'a> = (&'a String, &'a u8);

fn entry_refs((role, id): &(String, u8)) -> Entry<'_> {
    (role, id)
}

impl PinMap {
    /// Set a role's pin; an existing role keeps its position
    pub fn insert(&mut self, role: &str, id: u8) {
        match self.entries.iter_mut().find(|(r, _)| r == role) {
            Some(entry) => entry.1 = id,
            None => self.entries.push((role.to_string(), id)),
        }
    }

    pub fn get(&self, role: &str) -> Option<&u8> {
        self.entries.iter().find(|(r, _)| r == role).map(|(_, id)| id)
    }

    pub fn contains_key(&self, role: &str) -> bool {
        self.get(role).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.entries.iter().map(entry_refs)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(role, _)| role.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &u8> {
        self.entries.iter().map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PinMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(role, id)| other.get(role) == Some(id))
    }
}

impl Index<&str> for PinMap {
    type Output = u8;

    fn index(&self, role: &str) -> &u8 {
        match self.get(role) {
            Some(id) => id,
            None => panic!("no pin role '{}'", role),
        }
    }
}

impl FromIterator<(String, u8)> for PinMap {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        let mut map = PinMap::default();
        for (role, id) in iter {
            map.insert(&role, id);
        }
        map
    }
}

impl<'a> IntoIterator for &'a PinMap {
    type Item = Entry<'a>;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, u8)>, fn(&'a (String, u8)) -> Entry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(entry_refs as fn(&'a (String, u8)) -> Entry<'a>)
    }
}

impl Serialize for PinMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, id) in &self.entries {
            map.serialize_entry(role, id)?;
        }
        map.end()
    }
}

struct PinMapVisitor;

impl<'de> Visitor<'de> for PinMapVisitor {
    type Value = PinMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of pin role to pin id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PinMap, A::Error> {
        let mut map = PinMap::default();
        while let Some((role, id)) = access.next_entry::<String, u8>()? {
            map.insert(&role, id);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for PinMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PinMapVisitor)
    }
}
