//! Address ranges exchanged with the host.

/// Half-open byte range `[address, address + size)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Region {
    pub address: u64,
    pub size: u64,
}

impl Region {
    pub const fn new(address: u64, size: u64) -> Self {
        Self { address, size }
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// One past the last byte, saturating at `u64::MAX`.
    pub const fn end(&self) -> u64 {
        self.address.saturating_add(self.size)
    }
}

/// Current selection as reported by the host. Both ends are inclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Selection {
    pub start: u64,
    pub end: u64,
}

impl Selection {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of selected bytes.
    pub const fn len(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).saturating_add(1)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn region(&self) -> Region {
        Region::new(self.start, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_selection() {
        let sel = Selection::new(0x40, 0x40);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.region(), Region::new(0x40, 1));
    }

    #[test]
    fn inverted_selection_is_empty() {
        let sel = Selection::new(10, 4);
        assert!(sel.is_empty());
        assert!(sel.region().is_empty());
    }

    #[test]
    fn full_address_space_saturates() {
        let sel = Selection::new(0, u64::MAX);
        assert_eq!(sel.len(), u64::MAX);
        assert_eq!(Region::new(u64::MAX - 1, 8).end(), u64::MAX);
    }
}
