use std::fmt;

/// Number of distinct byte values, and therefore of frequency slots.
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence count of every byte value in one input.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOL_COUNT],
        }
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Sum of all counts; equals the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }

    /// `(byte, count)` for every byte value with a nonzero count, ascending by byte.
    pub fn iter_present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_present()).finish()
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(bytes: &[u8]) -> Self {
        count_frequencies(bytes)
    }
}

/// Counts how many times each byte value occurs in `bytes`.
pub fn count_frequencies(bytes: &[u8]) -> FrequencyTable {
    bytes.iter().fold(FrequencyTable::new(), |mut table, &byte| {
        table.counts[byte as usize] += 1;
        table
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cnt_freq() {
        let table = count_frequencies(b"aaa");
        assert_eq!(&table.as_slice()[95..99], &[0, 0, 3, 0]);

        let table = count_frequencies(b"ddddddddddddddddccccccccbbbbaaff");
        assert_eq!(&table.as_slice()[96..104], &[0, 2, 4, 8, 16, 0, 2, 0]);

        let table = count_frequencies(b"ABCD");
        assert_eq!(&table.as_slice()[65..70], &[1, 1, 1, 1, 0]);

        let table = count_frequencies(b"");
        assert_eq!(table.as_slice(), &[0u64; SYMBOL_COUNT][..]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_total_matches_input_length() {
        let inputs: [&[u8]; 4] = [b"", b"x", b"hello world", &[0, 255, 0, 255, 7]];
        for input in inputs {
            let table = count_frequencies(input);
            assert_eq!(table.total(), input.len() as u64);
        }
    }

    #[test]
    fn test_absent_bytes_are_zero() {
        let table = count_frequencies(b"abcabc");
        for byte in 0..=255u8 {
            if !b"abc".contains(&byte) {
                assert_eq!(table.get(byte), 0);
            }
        }
        assert_eq!(table.distinct(), 3);
        let present: Vec<_> = table.iter_present().collect();
        assert_eq!(present, vec![(b'a', 2), (b'b', 2), (b'c', 2)]);
    }

    #[test]
    fn test_full_byte_range() {
        let all: Vec<u8> = (0..=255u8).collect();
        let table = count_frequencies(&all);
        assert!(table.as_slice().iter().all(|&c| c == 1));
        assert_eq!(table.distinct(), SYMBOL_COUNT);
    }
}
