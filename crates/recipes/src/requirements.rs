//! Multiset of still-needed inserts.

/// Pending insert counts, keyed by insert name in first-appearance order.
///
/// Entries are dropped when their count reaches zero, so `is_satisfied` is
/// simply "nothing left pending".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Requirements {
    pending: Vec<(String, usize)>,
}

impl Requirements {
    pub fn from_inserts<S: AsRef<str>>(inserts: &[S]) -> Self {
        let mut pending: Vec<(String, usize)> = Vec::new();
        for insert in inserts {
            let insert = insert.as_ref();
            match pending.iter_mut().find(|(name, _)| name == insert) {
                Some((_, count)) => *count += 1,
                None => pending.push((insert.to_string(), 1)),
            }
        }
        Self { pending }
    }

    /// Consume one unit of `name` if still needed. Returns whether it was.
    pub fn take(&mut self, name: &str) -> bool {
        let Some(idx) = self.pending.iter().position(|(n, _)| n == name) else {
            return false;
        };
        let count = &mut self.pending[idx].1;
        *count -= 1;
        if *count == 0 {
            self.pending.remove(idx);
        }
        true
    }

    pub fn is_satisfied(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of items still needed.
    pub fn total(&self) -> usize {
        self.pending.iter().map(|(_, c)| c).sum()
    }
}
