//! Fixed-capacity slot arena
//!
//! Slots are allocated up front and recycled through a free list, so acquire and
//! release are O(1) and the pool never grows past its capacity. Handles carry a
//! generation so a stale handle cannot reach a slot that has been reused.

/// Stable reference to an occupied slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    active: usize,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot {
                generation: 0,
                value: None,
            })
            .collect();
        // Reversed so the lowest index is handed out first
        let free = (0..capacity as u32).rev().collect();
        Self {
            slots,
            free,
            active: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Place `value` in a free slot. Returns `None` when the pool is exhausted.
    pub fn acquire(&mut self, value: T) -> Option<Handle> {
        let index = self.free.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        self.active += 1;
        Some(Handle {
            index,
            generation: slot.generation,
        })
    }

    /// Free the slot behind `handle`, returning its value.
    /// Stale or already-released handles return `None`.
    pub fn release(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.active -= 1;
        Some(value)
    }

    pub fn release_all(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.active = 0;
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.value.as_ref())
    }

    /// Active values in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.value.as_ref().map(|v| {
                (
                    Handle {
                        index: i as u32,
                        generation: s.generation,
                    },
                    v,
                )
            })
        })
    }

    /// Keep only the values for which `keep` returns true.
    /// Removal happens in place, so the scan is unaffected by evictions.
    pub fn retain(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            let evict = match slot.value.as_mut() {
                Some(value) => !keep(value),
                None => false,
            };
            if evict {
                slot.value = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                self.active -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_until_exhausted() {
        let mut pool = Pool::with_capacity(2);
        assert!(pool.acquire(1).is_some());
        assert!(pool.acquire(2).is_some());
        assert!(pool.is_full());
        assert!(pool.acquire(3).is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_release_recycles_slot() {
        let mut pool = Pool::with_capacity(1);
        let a = pool.acquire("a").unwrap();
        assert_eq!(pool.release(a), Some("a"));
        assert!(pool.is_empty());

        let b = pool.acquire("b").unwrap();
        assert_eq!(a.index(), b.index());
        assert_eq!(pool.get(b), Some(&"b"));
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut pool = Pool::with_capacity(1);
        let a = pool.acquire(10).unwrap();
        pool.release(a);
        let _b = pool.acquire(20).unwrap();

        assert_eq!(pool.get(a), None);
        assert_eq!(pool.release(a), None);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_double_release() {
        let mut pool = Pool::with_capacity(3);
        let a = pool.acquire(1).unwrap();
        assert!(pool.release(a).is_some());
        assert!(pool.release(a).is_none());
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn test_release_all() {
        let mut pool = Pool::with_capacity(4);
        for i in 0..4 {
            pool.acquire(i);
        }
        pool.release_all();
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
        for i in 0..4 {
            assert!(pool.acquire(i).is_some());
        }
    }

    #[test]
    fn test_retain_evicts_in_place() {
        let mut pool = Pool::with_capacity(8);
        for i in 0..8 {
            pool.acquire(i);
        }
        pool.retain(|v| *v % 2 == 0);
        let kept: Vec<i32> = pool.iter().map(|(_, v)| *v).collect();
        assert_eq!(kept, vec![0, 2, 4, 6]);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_iteration_in_slot_order() {
        let mut pool = Pool::with_capacity(3);
        let a = pool.acquire('a').unwrap();
        pool.acquire('b');
        pool.acquire('c');
        pool.release(a);
        pool.acquire('d');
        let order: String = pool.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, "dbc");
    }
}
