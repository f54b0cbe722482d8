use std::hash::Hash;

use hashbrown::HashMap;

use super::ChartHandle;

/// Live chart instances by container.
///
/// A container holds at most one instance; storing a new one destroys the
/// previous instance first.
#[derive(Debug)]
pub struct ChartRegistry<K, H> {
    charts: HashMap<K, H>,
}

impl<K, H> Default for ChartRegistry<K, H> {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H: ChartHandle> ChartRegistry<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `container`, destroying any instance it replaces.
    pub fn replace(&mut self, container: K, handle: H) {
        if let Some(mut previous) = self.charts.insert(container, handle) {
            previous.destroy();
        }
    }

    /// Destroy and forget the instance of `container`. Returns whether one existed.
    pub fn dispose(&mut self, container: &K) -> bool {
        match self.charts.remove(container) {
            Some(mut handle) => {
                handle.destroy();
                true
            }
            None => false,
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, mut handle) in self.charts.drain() {
            handle.destroy();
        }
    }

    pub fn get(&self, container: &K) -> Option<&H> {
        self.charts.get(container)
    }

    pub fn contains(&self, container: &K) -> bool {
        self.charts.contains_key(container)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
