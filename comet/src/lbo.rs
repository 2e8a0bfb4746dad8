//! Line configuration identifiers: line mode, haul class and line build-out.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::equalizer::{EqualizerTable, E1_EQUALIZER, T1_EQUALIZER};
use crate::waveform::{self, WaveformTable};

/// Error when a line build-out identifier is not recognized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnknownLineBuildOut {
    /// The numeric configuration code is out of range.
    #[error("Unknown line build-out code: {0:#04X}")]
    Code(u8),
    /// The name did not match any line build-out.
    #[error("Unknown line build-out name: {0:?}")]
    Name(String),
}

/// Error when a line mode name is not recognized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown line mode: {0:?}")]
pub struct UnknownLineMode(pub String);

/// Framing standard the line runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineMode {
    /// 1.544 Mbit/s, 100 Ohm twisted pair.
    T1,
    /// 2.048 Mbit/s, 120 Ohm twisted pair or 75 Ohm coax.
    E1,
}

impl LineMode {
    /// Both modes, T1 first.
    pub const ALL: [LineMode; 2] = [LineMode::T1, LineMode::E1];

    /// Gets the receive equalizer sweep table for this mode.
    pub fn equalizer(self) -> &'static EqualizerTable {
        match self {
            LineMode::T1 => &T1_EQUALIZER,
            LineMode::E1 => &E1_EQUALIZER,
        }
    }

    /// Short lowercase name, accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            LineMode::T1 => "t1",
            LineMode::E1 => "e1",
        }
    }
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineMode::T1 => f.pad("T1"),
            LineMode::E1 => f.pad("E1"),
        }
    }
}

impl FromStr for LineMode {
    type Err = UnknownLineMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLineMode(s.to_owned()))
    }
}

/// Cable distance class of a T1 line build-out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Haul {
    /// Long haul, shaped by attenuation level.
    Long,
    /// Short haul, shaped by cable length to the cross-connect.
    Short,
}

impl fmt::Display for Haul {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Haul::Long => f.pad("long"),
            Haul::Short => f.pad("short"),
        }
    }
}

/// Line build-out setting, selecting the transmit pulse shape.
///
/// The discriminants are the configuration codes used to select the setting numerically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineBuildOut {
    /// T1 long haul, 0 dB.
    LongHaul0Db = 0,
    /// T1 long haul, -7.5 dB.
    LongHaul7_5Db = 1,
    /// T1 long haul, -15 dB.
    LongHaul15Db = 2,
    /// T1 long haul, -22.5 dB.
    LongHaul22_5Db = 3,
    /// T1 short haul, 0 - 110 ft.
    ShortHaul0 = 4,
    /// T1 short haul, 110 - 220 ft.
    ShortHaul1 = 5,
    /// T1 short haul, 220 - 330 ft.
    ShortHaul2 = 6,
    /// T1 short haul, 330 - 440 ft.
    ShortHaul3 = 7,
    /// T1 short haul, 440 - 550 ft.
    ShortHaul4 = 8,
    /// T1 short haul, 550 - 660 ft.
    ShortHaul5 = 9,
    /// E1, 75 Ohm coax. Not supported by the hardware.
    E1_75Ohm = 10,
    /// E1, 120 Ohm twisted pair.
    E1_120Ohm = 11,
}

impl LineBuildOut {
    /// Every setting, in configuration code order.
    pub const ALL: [LineBuildOut; 12] = [
        LineBuildOut::LongHaul0Db,
        LineBuildOut::LongHaul7_5Db,
        LineBuildOut::LongHaul15Db,
        LineBuildOut::LongHaul22_5Db,
        LineBuildOut::ShortHaul0,
        LineBuildOut::ShortHaul1,
        LineBuildOut::ShortHaul2,
        LineBuildOut::ShortHaul3,
        LineBuildOut::ShortHaul4,
        LineBuildOut::ShortHaul5,
        LineBuildOut::E1_75Ohm,
        LineBuildOut::E1_120Ohm,
    ];

    /// Numeric configuration code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short lowercase name, accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            LineBuildOut::LongHaul0Db => "lh0",
            LineBuildOut::LongHaul7_5Db => "lh7.5",
            LineBuildOut::LongHaul15Db => "lh15",
            LineBuildOut::LongHaul22_5Db => "lh22.5",
            LineBuildOut::ShortHaul0 => "sh0",
            LineBuildOut::ShortHaul1 => "sh1",
            LineBuildOut::ShortHaul2 => "sh2",
            LineBuildOut::ShortHaul3 => "sh3",
            LineBuildOut::ShortHaul4 => "sh4",
            LineBuildOut::ShortHaul5 => "sh5",
            LineBuildOut::E1_75Ohm => "e1-75",
            LineBuildOut::E1_120Ohm => "e1-120",
        }
    }

    /// Human readable description.
    pub fn description(self) -> &'static str {
        match self {
            LineBuildOut::LongHaul0Db => "T1 long haul, 0 dB",
            LineBuildOut::LongHaul7_5Db => "T1 long haul, -7.5 dB",
            LineBuildOut::LongHaul15Db => "T1 long haul, -15 dB",
            LineBuildOut::LongHaul22_5Db => "T1 long haul, -22.5 dB",
            LineBuildOut::ShortHaul0 => "T1 short haul, 0 - 110 ft",
            LineBuildOut::ShortHaul1 => "T1 short haul, 110 - 220 ft",
            LineBuildOut::ShortHaul2 => "T1 short haul, 220 - 330 ft",
            LineBuildOut::ShortHaul3 => "T1 short haul, 330 - 440 ft",
            LineBuildOut::ShortHaul4 => "T1 short haul, 440 - 550 ft",
            LineBuildOut::ShortHaul5 => "T1 short haul, 550 - 660 ft",
            LineBuildOut::E1_75Ohm => "E1, 75 Ohm (unsupported)",
            LineBuildOut::E1_120Ohm => "E1, 120 Ohm",
        }
    }

    /// The line mode this setting applies to.
    pub fn mode(self) -> LineMode {
        match self {
            LineBuildOut::E1_75Ohm | LineBuildOut::E1_120Ohm => LineMode::E1,
            _ => LineMode::T1,
        }
    }

    /// Haul class of a T1 setting. E1 settings are selected by impedance instead and have
    /// no haul class.
    pub fn haul(self) -> Option<Haul> {
        match self {
            LineBuildOut::LongHaul0Db
            | LineBuildOut::LongHaul7_5Db
            | LineBuildOut::LongHaul15Db
            | LineBuildOut::LongHaul22_5Db => Some(Haul::Long),
            LineBuildOut::ShortHaul0
            | LineBuildOut::ShortHaul1
            | LineBuildOut::ShortHaul2
            | LineBuildOut::ShortHaul3
            | LineBuildOut::ShortHaul4
            | LineBuildOut::ShortHaul5 => Some(Haul::Short),
            LineBuildOut::E1_75Ohm | LineBuildOut::E1_120Ohm => None,
        }
    }

    /// Whether the hardware can be programmed with this setting.
    pub fn is_supported(self) -> bool {
        self != LineBuildOut::E1_75Ohm
    }

    /// Gets the transmit waveform table for this setting. Unsupported settings return their
    /// placeholder table.
    pub fn waveform(self) -> &'static WaveformTable {
        match self {
            LineBuildOut::LongHaul0Db => &waveform::TWV_LONG_HAUL_0DB,
            LineBuildOut::LongHaul7_5Db => &waveform::TWV_LONG_HAUL_7_5DB,
            LineBuildOut::LongHaul15Db => &waveform::TWV_LONG_HAUL_15DB,
            LineBuildOut::LongHaul22_5Db => &waveform::TWV_LONG_HAUL_22_5DB,
            LineBuildOut::ShortHaul0 => &waveform::TWV_SHORT_HAUL_0,
            LineBuildOut::ShortHaul1 => &waveform::TWV_SHORT_HAUL_1,
            LineBuildOut::ShortHaul2 => &waveform::TWV_SHORT_HAUL_2,
            LineBuildOut::ShortHaul3 => &waveform::TWV_SHORT_HAUL_3,
            LineBuildOut::ShortHaul4 => &waveform::TWV_SHORT_HAUL_4,
            LineBuildOut::ShortHaul5 => &waveform::TWV_SHORT_HAUL_5,
            LineBuildOut::E1_75Ohm => &waveform::TWV_E1_75OHM,
            LineBuildOut::E1_120Ohm => &waveform::TWV_E1_120OHM,
        }
    }
}

impl fmt::Display for LineBuildOut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.description())
    }
}

impl TryFrom<u8> for LineBuildOut {
    type Error = UnknownLineBuildOut;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        LineBuildOut::ALL
            .get(code as usize)
            .copied()
            .ok_or(UnknownLineBuildOut::Code(code))
    }
}

impl FromStr for LineBuildOut {
    type Err = UnknownLineBuildOut;

    /// Parses either a name such as `sh3` or a numeric configuration code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return LineBuildOut::try_from(code);
        }
        LineBuildOut::ALL
            .into_iter()
            .find(|lbo| lbo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLineBuildOut::Name(s.to_owned()))
    }
}
