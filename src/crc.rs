//! CRC-16/CCITT-FALSE: polynomial `0x1021`, initial value `0xFFFF`, no reflection, no final XOR.

const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

const TABLE: [u16; 256] = make_table();

const fn make_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Incremental CRC-16/CCITT-FALSE hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    /// Start a new checksum.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { crc: INIT }
    }

    /// Feed bytes into the checksum.
    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        self.crc = update(self.crc, bytes);
    }

    /// Return the checksum of all bytes fed so far.
    #[inline]
    #[must_use]
    pub const fn finish(self) -> u16 {
        self.crc
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

const fn update(mut crc: u16, bytes: &[u8]) -> u16 {
    let mut i = 0;
    while i < bytes.len() {
        let idx = ((crc >> 8) as u8 ^ bytes[i]) as usize;
        crc = (crc << 8) ^ TABLE[idx];
        i += 1;
    }
    crc
}

/// Compute the CRC-16/CCITT-FALSE checksum of `bytes`.
#[inline]
#[must_use]
pub const fn crc16_ccitt_false(bytes: &[u8]) -> u16 {
    update(INIT, bytes)
}
