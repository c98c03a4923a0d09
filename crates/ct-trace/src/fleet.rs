//! Vehicle arena.
//!
//! Vehicles are keyed by a free-form name (derived from the source file) but
//! stored densely: the first time a name is seen it receives the next
//! [`VehicleId`], and iteration always follows id order.  This keeps dataset
//! numbering deterministic from load to output.

use ct_core::VehicleId;

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, VehicleId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, VehicleId>;

/// Insertion-ordered map from vehicle name to a per-vehicle value.
#[derive(Clone, Debug)]
pub struct Fleet<T> {
    names: Vec<String>,
    items: Vec<T>,
    index: NameIndex,
}

impl<T> Default for Fleet<T> {
    fn default() -> Self {
        Self { names: Vec::new(), items: Vec::new(), index: NameIndex::default() }
    }
}

impl<T> Fleet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<VehicleId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: VehicleId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn get(&self, id: VehicleId) -> Option<&T> {
        self.items.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Insert or replace the value for `name`, returning its id.
    ///
    /// # Panics
    /// Panics if the fleet already holds `u32::MAX + 1` vehicles, the most a
    /// `VehicleId` can number.
    pub fn insert(&mut self, name: &str, item: T) -> VehicleId {
        if let Some(id) = self.id_of(name) {
            self.items[id.index()] = item;
            return id;
        }
        let Ok(id) = VehicleId::try_from(self.items.len()) else {
            panic!("fleet is full: {} vehicles", self.items.len());
        };
        self.names.push(name.to_owned());
        self.items.push(item);
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Mutable access to the value for `name`, inserting `T::default()` on
    /// first encounter.
    pub fn entry(&mut self, name: &str) -> &mut T
    where
        T: Default,
    {
        let id = match self.id_of(name) {
            Some(id) => id,
            None => self.insert(name, T::default()),
        };
        &mut self.items[id.index()]
    }

    /// `(id, name, value)` in id order.
    ///
    /// `insert` bounds the length, so every position fits a `VehicleId`.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, &str, &T)> {
        self.names
            .iter()
            .zip(&self.items)
            .enumerate()
            .map(|(i, (name, item))| (VehicleId(i as u32), name.as_str(), item))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Transform every value, keeping names and ids.
    pub fn map<U>(self, mut f: impl FnMut(&str, T) -> U) -> Fleet<U> {
        let Fleet { names, items, index } = self;
        let items = names.iter().zip(items).map(|(name, item)| f(name, item)).collect();
        Fleet { names, items, index }
    }

    /// Like [`Fleet::map`] but runs `f` on the Rayon pool.
    #[cfg(feature = "parallel")]
    pub fn par_map<U: Send>(self, f: impl Fn(&str, T) -> U + Sync + Send) -> Fleet<U>
    where
        T: Send,
    {
        use rayon::prelude::*;

        let Fleet { names, items, index } = self;
        let items = names
            .par_iter()
            .zip(items.into_par_iter())
            .map(|(name, item)| f(name, item))
            .collect();
        Fleet { names, items, index }
    }

    /// Keep only the vehicles for which `keep` returns `true`.
    ///
    /// Surviving vehicles are renumbered densely, preserving relative order.
    pub fn retain(self, mut keep: impl FnMut(&str, &T) -> bool) -> Fleet<T> {
        let mut out = Fleet::new();
        for (name, item) in self.names.into_iter().zip(self.items) {
            if keep(&name, &item) {
                out.insert(&name, item);
            }
        }
        out
    }
}
