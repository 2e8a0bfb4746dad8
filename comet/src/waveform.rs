//! Transmit pulse waveform tables for the COMET line interface.
//!
//! Each table shapes the transmitted pulse for one line build-out setting. The pulse is
//! described by 24 samples, each split across 5 units, and is followed by a single output
//! amplitude byte. Tables are stored as the 25x5 layout the chip is programmed from: rows
//! 0..24 hold the samples and byte 0 of row 24 holds the amplitude.

use std::fmt;

/// Number of samples in one transmit pulse.
pub const SAMPLES: usize = 24;

/// Number of units each sample is split across.
pub const UNITS: usize = 5;

/// Number of rows in a table: the samples plus the amplitude row.
pub const ROWS: usize = SAMPLES + 1;

/// The waveform RAM stores 7 bit values.
const DATA_MASK: u8 = 0x7F;

/// Unit index occupies the low bits of a waveform address.
const UNIT_BITS: u8 = 3;
const UNIT_MASK: u8 = (1 << UNIT_BITS) - 1;

/// A transmit waveform table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct WaveformTable([[u8; UNITS]; ROWS]);

impl WaveformTable {
    /// Builds a table from its sample rows and output amplitude.
    pub const fn new(samples: [[u8; UNITS]; SAMPLES], amplitude: u8) -> Self {
        let mut rows = [[0; UNITS]; ROWS];
        let mut i = 0;
        while i < SAMPLES {
            rows[i] = samples[i];
            i += 1;
        }
        rows[SAMPLES][0] = amplitude;
        Self(rows)
    }

    /// Builds a placeholder table for a setting the hardware doesn't support. Only the
    /// amplitude is defined, every sample is zero.
    pub const fn placeholder(amplitude: u8) -> Self {
        Self::new([[0; UNITS]; SAMPLES], amplitude)
    }

    /// All 25 rows, in the layout the chip is programmed from.
    pub fn rows(&self) -> &[[u8; UNITS]; ROWS] {
        &self.0
    }

    /// The 24 sample rows.
    pub fn samples(&self) -> &[[u8; UNITS]] {
        &self.0[..SAMPLES]
    }

    /// Gets a single sample row, or `None` if `index` is not a sample index.
    pub fn sample(&self, index: usize) -> Option<&[u8; UNITS]> {
        self.samples().get(index)
    }

    /// The output amplitude selector written after the samples.
    pub fn amplitude(&self) -> u8 {
        self.0[SAMPLES][0]
    }

    /// Iterates the waveform RAM writes for this table, sample-major and unit-minor.
    pub fn writes(&self) -> impl Iterator<Item = WaveformWrite> + '_ {
        self.samples().iter().enumerate().flat_map(|(sample, row)| {
            row.iter()
                .enumerate()
                .map(move |(unit, &value)| WaveformWrite::new(sample as u8, unit as u8, value))
        })
    }
}

/// A single write into the transmit waveform RAM.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WaveformWrite {
    /// RAM address, sample in the high bits and unit in the low three.
    pub addr: u8,
    /// Value to store, already masked to the RAM width.
    pub data: u8,
}

impl WaveformWrite {
    /// Encodes the write of `value` to the given sample and unit.
    pub const fn new(sample: u8, unit: u8, value: u8) -> Self {
        WaveformWrite {
            addr: (sample << UNIT_BITS) | (unit & UNIT_MASK),
            data: value & DATA_MASK,
        }
    }

    /// The sample this write targets.
    pub fn sample(&self) -> u8 {
        self.addr >> UNIT_BITS
    }

    /// The unit this write targets.
    pub fn unit(&self) -> u8 {
        self.addr & UNIT_MASK
    }
}

impl fmt::Display for WaveformWrite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "waveform[{:#04X}] (sample {}, unit {}) <- {:#04X}",
            self.addr,
            self.sample(),
            self.unit(),
            self.data
        )
    }
}

/// T1 long haul, 0 dB.
pub static TWV_LONG_HAUL_0DB: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x20, 0x43, 0x00, 0x00, 0x00], // 2
        [0x32, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3E, 0x42, 0x00, 0x00, 0x00], // 4
        [0x3D, 0x42, 0x00, 0x00, 0x00], // 5
        [0x3C, 0x41, 0x00, 0x00, 0x00], // 6
        [0x3B, 0x41, 0x00, 0x00, 0x00], // 7
        [0x3A, 0x00, 0x00, 0x00, 0x00], // 8
        [0x39, 0x00, 0x00, 0x00, 0x00], // 9
        [0x39, 0x00, 0x00, 0x00, 0x00], // 10
        [0x38, 0x00, 0x00, 0x00, 0x00], // 11
        [0x37, 0x00, 0x00, 0x00, 0x00], // 12
        [0x36, 0x00, 0x00, 0x00, 0x00], // 13
        [0x34, 0x00, 0x00, 0x00, 0x00], // 14
        [0x29, 0x00, 0x00, 0x00, 0x00], // 15
        [0x4F, 0x00, 0x00, 0x00, 0x00], // 16
        [0x4C, 0x00, 0x00, 0x00, 0x00], // 17
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 18
        [0x49, 0x00, 0x00, 0x00, 0x00], // 19
        [0x47, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x46, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x0C,
);

/// T1 long haul, -7.5 dB.
pub static TWV_LONG_HAUL_7_5DB: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x10, 0x00, 0x00, 0x00], // 0
        [0x01, 0x0E, 0x00, 0x00, 0x00], // 1
        [0x02, 0x0C, 0x00, 0x00, 0x00], // 2
        [0x04, 0x0A, 0x00, 0x00, 0x00], // 3
        [0x08, 0x08, 0x00, 0x00, 0x00], // 4
        [0x0C, 0x06, 0x00, 0x00, 0x00], // 5
        [0x10, 0x04, 0x00, 0x00, 0x00], // 6
        [0x16, 0x02, 0x00, 0x00, 0x00], // 7
        [0x1A, 0x01, 0x00, 0x00, 0x00], // 8
        [0x1E, 0x00, 0x00, 0x00, 0x00], // 9
        [0x22, 0x00, 0x00, 0x00, 0x00], // 10
        [0x26, 0x00, 0x00, 0x00, 0x00], // 11
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 12
        [0x2B, 0x00, 0x00, 0x00, 0x00], // 13
        [0x2C, 0x00, 0x00, 0x00, 0x00], // 14
        [0x2D, 0x00, 0x00, 0x00, 0x00], // 15
        [0x2C, 0x00, 0x00, 0x00, 0x00], // 16
        [0x28, 0x00, 0x00, 0x00, 0x00], // 17
        [0x24, 0x00, 0x00, 0x00, 0x00], // 18
        [0x20, 0x00, 0x00, 0x00, 0x00], // 19
        [0x1C, 0x00, 0x00, 0x00, 0x00], // 20
        [0x18, 0x00, 0x00, 0x00, 0x00], // 21
        [0x14, 0x00, 0x00, 0x00, 0x00], // 22
        [0x12, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x07,
);

/// T1 long haul, -15 dB.
pub static TWV_LONG_HAUL_15DB: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x2A, 0x09, 0x01, 0x00], // 0
        [0x00, 0x28, 0x08, 0x01, 0x00], // 1
        [0x00, 0x26, 0x08, 0x01, 0x00], // 2
        [0x00, 0x24, 0x07, 0x01, 0x00], // 3
        [0x01, 0x22, 0x07, 0x01, 0x00], // 4
        [0x02, 0x20, 0x06, 0x01, 0x00], // 5
        [0x04, 0x1E, 0x06, 0x01, 0x00], // 6
        [0x07, 0x1C, 0x05, 0x00, 0x00], // 7
        [0x0A, 0x1B, 0x05, 0x00, 0x00], // 8
        [0x0D, 0x19, 0x05, 0x00, 0x00], // 9
        [0x10, 0x18, 0x04, 0x00, 0x00], // 10
        [0x14, 0x16, 0x04, 0x00, 0x00], // 11
        [0x18, 0x15, 0x04, 0x00, 0x00], // 12
        [0x1B, 0x13, 0x03, 0x00, 0x00], // 13
        [0x1E, 0x12, 0x03, 0x00, 0x00], // 14
        [0x21, 0x10, 0x03, 0x00, 0x00], // 15
        [0x24, 0x0F, 0x03, 0x00, 0x00], // 16
        [0x27, 0x0D, 0x03, 0x00, 0x00], // 17
        [0x2A, 0x0D, 0x02, 0x00, 0x00], // 18
        [0x2D, 0x0B, 0x02, 0x00, 0x00], // 19
        [0x30, 0x0B, 0x02, 0x00, 0x00], // 20
        [0x30, 0x0A, 0x02, 0x00, 0x00], // 21
        [0x2E, 0x0A, 0x02, 0x00, 0x00], // 22
        [0x2C, 0x09, 0x02, 0x00, 0x00], // 23
    ],
    0x03,
);

/// T1 long haul, -22.5 dB.
pub static TWV_LONG_HAUL_22_5DB: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x1F, 0x16, 0x06, 0x01], // 0
        [0x00, 0x20, 0x15, 0x05, 0x01], // 1
        [0x00, 0x21, 0x15, 0x05, 0x01], // 2
        [0x00, 0x22, 0x14, 0x05, 0x01], // 3
        [0x00, 0x22, 0x13, 0x04, 0x00], // 4
        [0x00, 0x23, 0x12, 0x04, 0x00], // 5
        [0x01, 0x23, 0x12, 0x04, 0x00], // 6
        [0x01, 0x24, 0x11, 0x03, 0x00], // 7
        [0x01, 0x23, 0x10, 0x03, 0x00], // 8
        [0x02, 0x23, 0x10, 0x03, 0x00], // 9
        [0x03, 0x22, 0x0F, 0x03, 0x00], // 10
        [0x05, 0x22, 0x0E, 0x03, 0x00], // 11
        [0x07, 0x21, 0x0E, 0x02, 0x00], // 12
        [0x09, 0x20, 0x0D, 0x02, 0x00], // 13
        [0x0B, 0x1E, 0x0C, 0x02, 0x00], // 14
        [0x0E, 0x1D, 0x0C, 0x02, 0x00], // 15
        [0x10, 0x1B, 0x0B, 0x02, 0x00], // 16
        [0x13, 0x1B, 0x0A, 0x02, 0x00], // 17
        [0x15, 0x1A, 0x0A, 0x02, 0x00], // 18
        [0x17, 0x19, 0x09, 0x01, 0x00], // 19
        [0x19, 0x19, 0x08, 0x01, 0x00], // 20
        [0x1B, 0x18, 0x08, 0x01, 0x00], // 21
        [0x1D, 0x17, 0x07, 0x01, 0x00], // 22
        [0x1E, 0x17, 0x06, 0x01, 0x00], // 23
    ],
    0x02,
);

/// T1 short haul, 0 - 110 ft.
pub static TWV_SHORT_HAUL_0: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x45, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x20, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 4
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 5
        [0x3C, 0x41, 0x00, 0x00, 0x00], // 6
        [0x3B, 0x41, 0x00, 0x00, 0x00], // 7
        [0x3A, 0x00, 0x00, 0x00, 0x00], // 8
        [0x39, 0x00, 0x00, 0x00, 0x00], // 9
        [0x39, 0x00, 0x00, 0x00, 0x00], // 10
        [0x38, 0x00, 0x00, 0x00, 0x00], // 11
        [0x37, 0x00, 0x00, 0x00, 0x00], // 12
        [0x36, 0x00, 0x00, 0x00, 0x00], // 13
        [0x34, 0x00, 0x00, 0x00, 0x00], // 14
        [0x29, 0x00, 0x00, 0x00, 0x00], // 15
        [0x59, 0x00, 0x00, 0x00, 0x00], // 16
        [0x55, 0x00, 0x00, 0x00, 0x00], // 17
        [0x50, 0x00, 0x00, 0x00, 0x00], // 18
        [0x4D, 0x00, 0x00, 0x00, 0x00], // 19
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 20
        [0x48, 0x00, 0x00, 0x00, 0x00], // 21
        [0x46, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x0C,
);

/// T1 short haul, 110 - 220 ft.
pub static TWV_SHORT_HAUL_1: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 3
        [0x36, 0x42, 0x00, 0x00, 0x00], // 4
        [0x34, 0x42, 0x00, 0x00, 0x00], // 5
        [0x30, 0x41, 0x00, 0x00, 0x00], // 6
        [0x2F, 0x41, 0x00, 0x00, 0x00], // 7
        [0x2E, 0x00, 0x00, 0x00, 0x00], // 8
        [0x2D, 0x00, 0x00, 0x00, 0x00], // 9
        [0x2C, 0x00, 0x00, 0x00, 0x00], // 10
        [0x2B, 0x00, 0x00, 0x00, 0x00], // 11
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 12
        [0x28, 0x00, 0x00, 0x00, 0x00], // 13
        [0x26, 0x00, 0x00, 0x00, 0x00], // 14
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 15
        [0x68, 0x00, 0x00, 0x00, 0x00], // 16
        [0x54, 0x00, 0x00, 0x00, 0x00], // 17
        [0x4F, 0x00, 0x00, 0x00, 0x00], // 18
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 19
        [0x49, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x47, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x10,
);

/// T1 short haul, 220 - 330 ft.
pub static TWV_SHORT_HAUL_2: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3A, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3A, 0x42, 0x00, 0x00, 0x00], // 4
        [0x38, 0x42, 0x00, 0x00, 0x00], // 5
        [0x30, 0x41, 0x00, 0x00, 0x00], // 6
        [0x2F, 0x41, 0x00, 0x00, 0x00], // 7
        [0x2E, 0x00, 0x00, 0x00, 0x00], // 8
        [0x2D, 0x00, 0x00, 0x00, 0x00], // 9
        [0x2C, 0x00, 0x00, 0x00, 0x00], // 10
        [0x2B, 0x00, 0x00, 0x00, 0x00], // 11
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 12
        [0x29, 0x00, 0x00, 0x00, 0x00], // 13
        [0x23, 0x00, 0x00, 0x00, 0x00], // 14
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 15
        [0x6C, 0x00, 0x00, 0x00, 0x00], // 16
        [0x60, 0x00, 0x00, 0x00, 0x00], // 17
        [0x4F, 0x00, 0x00, 0x00, 0x00], // 18
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 19
        [0x49, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x47, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x11,
);

/// T1 short haul, 330 - 440 ft.
pub static TWV_SHORT_HAUL_3: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 4
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 5
        [0x2F, 0x41, 0x00, 0x00, 0x00], // 6
        [0x2E, 0x41, 0x00, 0x00, 0x00], // 7
        [0x2D, 0x00, 0x00, 0x00, 0x00], // 8
        [0x2C, 0x00, 0x00, 0x00, 0x00], // 9
        [0x2B, 0x00, 0x00, 0x00, 0x00], // 10
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 11
        [0x29, 0x00, 0x00, 0x00, 0x00], // 12
        [0x28, 0x00, 0x00, 0x00, 0x00], // 13
        [0x19, 0x00, 0x00, 0x00, 0x00], // 14
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 15
        [0x7F, 0x00, 0x00, 0x00, 0x00], // 16
        [0x60, 0x00, 0x00, 0x00, 0x00], // 17
        [0x4F, 0x00, 0x00, 0x00, 0x00], // 18
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 19
        [0x49, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x47, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x12,
);

/// T1 short haul, 440 - 550 ft.
pub static TWV_SHORT_HAUL_4: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 4
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 5
        [0x30, 0x41, 0x00, 0x00, 0x00], // 6
        [0x2B, 0x41, 0x00, 0x00, 0x00], // 7
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 8
        [0x29, 0x00, 0x00, 0x00, 0x00], // 9
        [0x28, 0x00, 0x00, 0x00, 0x00], // 10
        [0x27, 0x00, 0x00, 0x00, 0x00], // 11
        [0x26, 0x00, 0x00, 0x00, 0x00], // 12
        [0x26, 0x00, 0x00, 0x00, 0x00], // 13
        [0x24, 0x00, 0x00, 0x00, 0x00], // 14
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 15
        [0x7F, 0x00, 0x00, 0x00, 0x00], // 16
        [0x7F, 0x00, 0x00, 0x00, 0x00], // 17
        [0x4F, 0x00, 0x00, 0x00, 0x00], // 18
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 19
        [0x49, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x47, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x14,
);

/// T1 short haul, 550 - 660 ft.
pub static TWV_SHORT_HAUL_5: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x44, 0x00, 0x00, 0x00], // 0
        [0x0A, 0x44, 0x00, 0x00, 0x00], // 1
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x43, 0x00, 0x00, 0x00], // 3
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 4
        [0x3F, 0x42, 0x00, 0x00, 0x00], // 5
        [0x3F, 0x41, 0x00, 0x00, 0x00], // 6
        [0x30, 0x41, 0x00, 0x00, 0x00], // 7
        [0x2A, 0x00, 0x00, 0x00, 0x00], // 8
        [0x29, 0x00, 0x00, 0x00, 0x00], // 9
        [0x28, 0x00, 0x00, 0x00, 0x00], // 10
        [0x27, 0x00, 0x00, 0x00, 0x00], // 11
        [0x26, 0x00, 0x00, 0x00, 0x00], // 12
        [0x25, 0x00, 0x00, 0x00, 0x00], // 13
        [0x24, 0x00, 0x00, 0x00, 0x00], // 14
        [0x4A, 0x00, 0x00, 0x00, 0x00], // 15
        [0x7F, 0x00, 0x00, 0x00, 0x00], // 16
        [0x7F, 0x00, 0x00, 0x00, 0x00], // 17
        [0x5F, 0x00, 0x00, 0x00, 0x00], // 18
        [0x50, 0x00, 0x00, 0x00, 0x00], // 19
        [0x49, 0x00, 0x00, 0x00, 0x00], // 20
        [0x47, 0x00, 0x00, 0x00, 0x00], // 21
        [0x47, 0x00, 0x00, 0x00, 0x00], // 22
        [0x46, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x15,
);

/// E1, 120 Ohm twisted pair.
pub static TWV_E1_120OHM: WaveformTable = WaveformTable::new(
    [
        [0x00, 0x00, 0x00, 0x00, 0x00], // 0
        [0x00, 0x00, 0x00, 0x00, 0x00], // 1
        [0x0A, 0x00, 0x00, 0x00, 0x00], // 2
        [0x3F, 0x00, 0x00, 0x00, 0x00], // 3
        [0x3F, 0x00, 0x00, 0x00, 0x00], // 4
        [0x39, 0x00, 0x00, 0x00, 0x00], // 5
        [0x38, 0x00, 0x00, 0x00, 0x00], // 6
        [0x36, 0x00, 0x00, 0x00, 0x00], // 7
        [0x36, 0x00, 0x00, 0x00, 0x00], // 8
        [0x35, 0x00, 0x00, 0x00, 0x00], // 9
        [0x35, 0x00, 0x00, 0x00, 0x00], // 10
        [0x35, 0x00, 0x00, 0x00, 0x00], // 11
        [0x35, 0x00, 0x00, 0x00, 0x00], // 12
        [0x35, 0x00, 0x00, 0x00, 0x00], // 13
        [0x35, 0x00, 0x00, 0x00, 0x00], // 14
        [0x2D, 0x00, 0x00, 0x00, 0x00], // 15
        [0x00, 0x00, 0x00, 0x00, 0x00], // 16
        [0x00, 0x00, 0x00, 0x00, 0x00], // 17
        [0x00, 0x00, 0x00, 0x00, 0x00], // 18
        [0x00, 0x00, 0x00, 0x00, 0x00], // 19
        [0x00, 0x00, 0x00, 0x00, 0x00], // 20
        [0x00, 0x00, 0x00, 0x00, 0x00], // 21
        [0x00, 0x00, 0x00, 0x00, 0x00], // 22
        [0x00, 0x00, 0x00, 0x00, 0x00], // 23
    ],
    0x0C,
);
/// E1, 75 Ohm coax. Not supported by the hardware, so only the amplitude is defined.
pub static TWV_E1_75OHM: WaveformTable = WaveformTable::placeholder(0x0C);

#[cfg(test)]
mod tests {
    use super::*;

    static ALL: [(&str, &WaveformTable); 12] = [
        ("lh0", &TWV_LONG_HAUL_0DB),
        ("lh7.5", &TWV_LONG_HAUL_7_5DB),
        ("lh15", &TWV_LONG_HAUL_15DB),
        ("lh22.5", &TWV_LONG_HAUL_22_5DB),
        ("sh0", &TWV_SHORT_HAUL_0),
        ("sh1", &TWV_SHORT_HAUL_1),
        ("sh2", &TWV_SHORT_HAUL_2),
        ("sh3", &TWV_SHORT_HAUL_3),
        ("sh4", &TWV_SHORT_HAUL_4),
        ("sh5", &TWV_SHORT_HAUL_5),
        ("e1-75", &TWV_E1_75OHM),
        ("e1-120", &TWV_E1_120OHM),
    ];

    /// Sum and position-weighted sum over every byte of the 25x5 layout.
    fn checksums(table: &WaveformTable) -> (u32, u32) {
        table
            .rows()
            .iter()
            .flatten()
            .enumerate()
            .fold((0, 0), |(sum, weighted), (i, &b)| {
                (sum + b as u32, weighted + (i as u32 + 1) * b as u32)
            })
    }

    #[test]
    fn dimensions() {
        for (name, table) in ALL {
            assert_eq!(table.rows().len(), 25, "{}", name);
            assert!(table.rows().iter().all(|row| row.len() == 5), "{}", name);
            assert_eq!(table.samples().len(), 24, "{}", name);
            assert_eq!(&table.rows()[24][1..], &[0; 4], "{}", name);
        }
    }

    #[test]
    fn amplitudes() {
        let expected = [
            0x0C, 0x07, 0x03, 0x02, 0x0C, 0x10, 0x11, 0x12, 0x14, 0x15, 0x0C, 0x0C,
        ];
        for ((name, table), amplitude) in ALL.iter().zip(expected) {
            assert_eq!(table.amplitude(), amplitude, "{}", name);
        }
    }

    #[test]
    fn contents_match_reference_values() {
        let expected = [
            (1892, 101844),
            (689, 45017),
            (1194, 74899),
            (1386, 82949),
            (1942, 105050),
            (1883, 102610),
            (1901, 104048),
            (1920, 104977),
            (1945, 107692),
            (1987, 110424),
            (0x0C, 121 * 0x0C),
            (732, 33292),
        ];
        for ((name, table), sums) in ALL.iter().zip(expected) {
            assert_eq!(checksums(table), sums, "{}", name);
        }
    }

    #[test]
    fn spot_check_rows() {
        assert_eq!(TWV_LONG_HAUL_0DB.sample(0), Some(&[0x00, 0x44, 0x00, 0x00, 0x00]));
        assert_eq!(TWV_LONG_HAUL_0DB.sample(16), Some(&[0x4F, 0x00, 0x00, 0x00, 0x00]));
        assert_eq!(TWV_LONG_HAUL_15DB.sample(0), Some(&[0x00, 0x2A, 0x09, 0x01, 0x00]));
        assert_eq!(TWV_LONG_HAUL_22_5DB.sample(3), Some(&[0x00, 0x22, 0x14, 0x05, 0x01]));
        assert_eq!(TWV_LONG_HAUL_22_5DB.sample(23), Some(&[0x1E, 0x17, 0x06, 0x01, 0x00]));
        assert_eq!(TWV_SHORT_HAUL_3.sample(16), Some(&[0x7F, 0x00, 0x00, 0x00, 0x00]));
        assert_eq!(TWV_E1_120OHM.sample(15), Some(&[0x2D, 0x00, 0x00, 0x00, 0x00]));
        assert_eq!(TWV_E1_120OHM.sample(24), None);
    }

    #[test]
    fn e1_75_ohm_is_amplitude_only() {
        assert_eq!(TWV_E1_75OHM.amplitude(), 0x0C);
        assert!(TWV_E1_75OHM.samples().iter().flatten().all(|&b| b == 0));
    }

    #[test]
    fn rereading_is_stable() {
        for (name, table) in ALL {
            let first = *table.rows();
            let second = *table.rows();
            assert_eq!(first, second, "{}", name);
        }
    }

    #[test]
    fn write_addresses() {
        let writes: Vec<_> = TWV_SHORT_HAUL_0.writes().collect();
        assert_eq!(writes.len(), SAMPLES * UNITS);
        assert_eq!(writes[0], WaveformWrite { addr: 0x00, data: 0x00 });
        assert_eq!(writes[1], WaveformWrite { addr: 0x01, data: 0x45 });
        assert_eq!(writes[5], WaveformWrite { addr: 0x08, data: 0x0A });
        let last = writes[writes.len() - 1];
        assert_eq!((last.sample(), last.unit()), (23, 4));
        assert_eq!(last.addr, (23 << 3) | 4);

        // Addresses are unique and increase with the programming order.
        assert!(writes.windows(2).all(|w| w[0].addr < w[1].addr));
    }

    #[test]
    fn write_data_is_masked() {
        let write = WaveformWrite::new(1, 2, 0xFF);
        assert_eq!(write.data, 0x7F);
        assert_eq!((write.sample(), write.unit()), (1, 2));
    }
}
