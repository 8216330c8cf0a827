use crate::code_table::{BitPath, CodeTable};
use crate::error::{HuffmanError, Result};

/// Bits packed MSB first into bytes. Unused low bits of the last byte are zero,
/// so the buffer is always zero-padded to a whole byte.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_capacity.div_ceil(8)),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Zero bits appended to reach a byte boundary.
    pub fn padding_bits(&self) -> usize {
        (8 - self.bit_count % 8) % 8
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn push_path(&mut self, path: &BitPath) {
        for &bit in path.bits() {
            self.push_bit(bit);
        }
    }

    pub fn read_bit(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }
}

impl From<(usize, Vec<u8>)> for BitVec {
    fn from((bit_count, bits): (usize, Vec<u8>)) -> Self {
        BitVec { bits, bit_count }
    }
}

/// Concatenates the code of every byte of `input`, in order.
pub fn pack(input: &[u8], table: &CodeTable) -> Result<BitVec> {
    let mut bit_vec = BitVec::new();
    for &byte in input {
        let path = table.get(byte).ok_or(HuffmanError::MissingCode(byte))?;
        bit_vec.push_path(path);
    }
    Ok(bit_vec)
}

/// Packs a textual bit string (`"10110"`) into zero-padded bytes.
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>> {
    let path: BitPath = bits.parse()?;
    let mut bit_vec = BitVec::with_capacity(path.len());
    bit_vec.push_path(&path);
    Ok(bit_vec.into_bytes())
}

/// Reads the first `bit_count` bits of `bytes`, MSB first, as a bit string.
pub fn bytes_to_bits(bytes: &[u8], bit_count: usize) -> Result<String> {
    let available = bytes.len() * 8;
    if bit_count > available {
        return Err(HuffmanError::IndexOutOfRange {
            index: bit_count,
            len: available,
        });
    }
    let bit_vec = BitVec::from((bit_count, bytes.to_vec()));
    Ok((0..bit_count)
        .filter_map(|i| bit_vec.read_bit(i))
        .map(|bit| if bit { '1' } else { '0' })
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SingleSymbolPolicy;
    use crate::frequency::count_frequencies;
    use crate::hufftree::HuffmanTree;

    #[test]
    fn test_bits_to_bytes() {
        assert_eq!(bits_to_bytes("01").unwrap(), vec![0b0100_0000]);
        assert_eq!(bits_to_bytes("01").unwrap(), vec![64]);
        assert_eq!(bits_to_bytes("10110").unwrap(), vec![176]);
        assert_eq!(bits_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(bits_to_bytes("11111111").unwrap(), vec![255]);
        assert_eq!(bits_to_bytes("000000001").unwrap(), vec![0, 128]);
    }

    #[test]
    fn test_bits_to_bytes_rejects_non_bits() {
        assert!(matches!(
            bits_to_bytes("0120"),
            Err(HuffmanError::InvalidBitSymbol('2'))
        ));
    }

    #[test]
    fn test_padding_is_byte_aligned_and_recoverable() {
        for bits in ["1", "0110011", "10101010", "101010101", "1110001110001110001"] {
            let bytes = bits_to_bytes(bits).unwrap();
            assert_eq!(bytes.len(), bits.len().div_ceil(8));
            assert_eq!(bytes_to_bits(&bytes, bits.len()).unwrap(), bits);
            // padding bits are all zero
            let padded = bytes_to_bits(&bytes, bytes.len() * 8).unwrap();
            assert!(padded[bits.len()..].chars().all(|c| c == '0'));
        }
    }

    #[test]
    fn test_padding_bits_count() {
        let mut bv = BitVec::new();
        assert_eq!(bv.padding_bits(), 0);
        bv.push_bit(true);
        assert_eq!(bv.padding_bits(), 7);
        for _ in 0..7 {
            bv.push_bit(false);
        }
        assert_eq!(bv.padding_bits(), 0);
        assert_eq!(bv.as_bytes(), &[0x80]);
        assert_eq!(bv.read_bit(0), Some(true));
        assert_eq!(bv.read_bit(8), None);
    }

    #[test]
    fn test_bytes_to_bits_out_of_range() {
        assert!(matches!(
            bytes_to_bits(&[0xff], 9),
            Err(HuffmanError::IndexOutOfRange { index: 9, len: 8 })
        ));
    }

    #[test]
    fn test_pack_abcde() {
        let text = b"abcde";
        let table = HuffmanTree::from_bytes(text)
            .unwrap()
            .generate_table(SingleSymbolPolicy::default())
            .unwrap();
        let packed = pack(text, &table).unwrap();

        let expected_bits = table.encoded_bit_len(&count_frequencies(text));
        assert_eq!(packed.bit_count() as u64, expected_bits);
        assert!(!packed.as_bytes().is_empty());

        let concatenated: String = text
            .iter()
            .map(|&b| table.get(b).unwrap().to_string())
            .collect();
        assert_eq!(
            bytes_to_bits(packed.as_bytes(), packed.bit_count()).unwrap(),
            concatenated
        );
        assert_eq!(bits_to_bytes(&concatenated).unwrap(), packed.into_bytes());
    }

    #[test]
    fn test_pack_missing_code() {
        let table = HuffmanTree::from_frequencies(
            &count_frequencies(b"ab"),
            &crate::config::EncoderConfig {
                retain_unused_symbols: false,
                ..Default::default()
            },
        )
        .unwrap()
        .generate_table(SingleSymbolPolicy::default())
        .unwrap();
        assert!(matches!(pack(b"abc", &table), Err(HuffmanError::MissingCode(b'c'))));
    }
}
