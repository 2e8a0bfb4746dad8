//! Line interface unit programming.
//!
//! Bringing up the line interface loads the transmit waveform for the selected line build-out,
//! then loads and enables the receive equalizer for the line mode. The writes go through a
//! [`LineInterface`], which a register backend implements for real hardware.

use std::fmt;

use log::{debug, info, trace};
use thiserror::Error;

use crate::equalizer::{EqualizerTable, EqualizerWrite};
use crate::lbo::{LineBuildOut, LineMode};
use crate::waveform::{WaveformTable, WaveformWrite};

/// Equalizer configuration written once the RAM is loaded: equalizer enabled, sweeping over
/// 256 sample periods.
pub const EQUALIZER_ENABLE: u8 = 0xCB;

/// Errors from validating a line configuration.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The line build-out belongs to the other line mode.
    #[error("Line build-out '{lbo}' cannot be used in {mode} mode")]
    ModeMismatch {
        /// The requested line mode.
        mode: LineMode,
        /// The requested line build-out.
        lbo: LineBuildOut,
    },
    /// The hardware has no waveform for this line build-out.
    #[error("Line build-out '{0}' is not supported")]
    Unsupported(LineBuildOut),
}

/// Destination for line interface programming.
pub trait LineInterface {
    /// Write one entry of the transmit pulse waveform RAM.
    fn write_pulse_waveform(&mut self, write: WaveformWrite);

    /// Write the transmit output amplitude selector.
    fn write_output_amplitude(&mut self, value: u8);

    /// Write one word of the receive equalizer RAM.
    fn write_equalizer_ram(&mut self, write: EqualizerWrite);

    /// Write the receive equalizer configuration.
    fn enable_equalizer(&mut self, config: u8);
}

/// A validated pairing of line mode and line build-out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineConfig {
    mode: LineMode,
    lbo: LineBuildOut,
}

impl LineConfig {
    /// Checks that `lbo` can be programmed in `mode`.
    pub fn new(mode: LineMode, lbo: LineBuildOut) -> Result<Self, ConfigError> {
        if lbo.mode() != mode {
            return Err(ConfigError::ModeMismatch { mode, lbo });
        }
        if !lbo.is_supported() {
            return Err(ConfigError::Unsupported(lbo));
        }
        Ok(LineConfig { mode, lbo })
    }

    /// Builds a config using the line build-out's own mode.
    pub fn for_lbo(lbo: LineBuildOut) -> Result<Self, ConfigError> {
        Self::new(lbo.mode(), lbo)
    }

    /// Gets the line mode.
    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Gets the line build-out.
    pub fn lbo(&self) -> LineBuildOut {
        self.lbo
    }
}

impl fmt::Display for LineConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.mode, self.lbo)
    }
}

/// Loads a transmit waveform: every sample/unit entry, then the output amplitude.
pub fn program_waveform(iface: &mut impl LineInterface, table: &WaveformTable) {
    for write in table.writes() {
        trace!("{}", write);
        iface.write_pulse_waveform(write);
    }
    debug!("Output amplitude {:#04X}", table.amplitude());
    iface.write_output_amplitude(table.amplitude());
}

/// Loads the receive equalizer RAM in sweep order, then enables the equalizer.
pub fn program_equalizer(iface: &mut impl LineInterface, table: &EqualizerTable) {
    for write in table.writes() {
        trace!("{}", write);
        iface.write_equalizer_ram(write);
    }
    debug!("Enabling equalizer with config {:#04X}", EQUALIZER_ENABLE);
    iface.enable_equalizer(EQUALIZER_ENABLE);
}

/// Programs the transmit waveform and receive equalizer for a line configuration.
pub fn program_line_interface(iface: &mut impl LineInterface, config: LineConfig) {
    debug!("Loading transmit waveform for {}", config.lbo());
    program_waveform(iface, config.lbo().waveform());
    debug!("Loading {} receive equalizer", config.mode());
    program_equalizer(iface, config.mode().equalizer());
    info!("Line interface programmed for {}", config);
}

/// One operation on a [`LineInterface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineWrite {
    /// See [`LineInterface::write_pulse_waveform`].
    PulseWaveform(WaveformWrite),
    /// See [`LineInterface::write_output_amplitude`].
    OutputAmplitude(u8),
    /// See [`LineInterface::write_equalizer_ram`].
    EqualizerRam(EqualizerWrite),
    /// See [`LineInterface::enable_equalizer`].
    EnableEqualizer(u8),
}

impl fmt::Display for LineWrite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineWrite::PulseWaveform(write) => fmt::Display::fmt(write, f),
            LineWrite::OutputAmplitude(value) => write!(f, "output amplitude <- {:#04X}", value),
            LineWrite::EqualizerRam(write) => fmt::Display::fmt(write, f),
            LineWrite::EnableEqualizer(config) => {
                write!(f, "equalizer config <- {:#04X}", config)
            }
        }
    }
}

/// A [`LineInterface`] that records every operation in order.
#[derive(Clone, Debug, Default)]
pub struct WriteLog(Vec<LineWrite>);

impl WriteLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Default::default()
    }

    /// The recorded operations.
    pub fn writes(&self) -> &[LineWrite] {
        &self.0
    }

    /// Unwraps the recorded operations.
    pub fn into_inner(self) -> Vec<LineWrite> {
        self.0
    }
}

impl LineInterface for WriteLog {
    fn write_pulse_waveform(&mut self, write: WaveformWrite) {
        self.0.push(LineWrite::PulseWaveform(write));
    }

    fn write_output_amplitude(&mut self, value: u8) {
        self.0.push(LineWrite::OutputAmplitude(value));
    }

    fn write_equalizer_ram(&mut self, write: EqualizerWrite) {
        self.0.push(LineWrite::EqualizerRam(write));
    }

    fn enable_equalizer(&mut self, config: u8) {
        self.0.push(LineWrite::EnableEqualizer(config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::equalizer::T1_EQUALIZER;
    use crate::waveform::{SAMPLES, UNITS};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn config_validation() {
        assert!(LineConfig::new(LineMode::T1, LineBuildOut::ShortHaul3).is_ok());
        assert!(LineConfig::new(LineMode::E1, LineBuildOut::E1_120Ohm).is_ok());
        assert_eq!(
            LineConfig::new(LineMode::E1, LineBuildOut::LongHaul0Db),
            Err(ConfigError::ModeMismatch {
                mode: LineMode::E1,
                lbo: LineBuildOut::LongHaul0Db,
            })
        );
        assert_eq!(
            LineConfig::new(LineMode::T1, LineBuildOut::E1_120Ohm),
            Err(ConfigError::ModeMismatch {
                mode: LineMode::T1,
                lbo: LineBuildOut::E1_120Ohm,
            })
        );
        assert_eq!(
            LineConfig::for_lbo(LineBuildOut::E1_75Ohm),
            Err(ConfigError::Unsupported(LineBuildOut::E1_75Ohm))
        );

        for lbo in LineBuildOut::ALL {
            let config = LineConfig::for_lbo(lbo);
            assert_eq!(config.is_ok(), lbo.is_supported(), "{:?}", lbo);
        }
    }

    #[test]
    fn waveform_sequence() {
        init();

        let mut log = WriteLog::new();
        program_waveform(&mut log, LineBuildOut::LongHaul15Db.waveform());
        let writes = log.into_inner();

        assert_eq!(writes.len(), SAMPLES * UNITS + 1);
        assert_eq!(
            writes[1],
            LineWrite::PulseWaveform(WaveformWrite { addr: 0x01, data: 0x2A })
        );
        assert_eq!(
            writes[2],
            LineWrite::PulseWaveform(WaveformWrite { addr: 0x02, data: 0x09 })
        );
        assert_eq!(writes[writes.len() - 1], LineWrite::OutputAmplitude(0x03));
    }

    #[test]
    fn equalizer_sequence() {
        init();

        let mut log = WriteLog::new();
        program_equalizer(&mut log, &T1_EQUALIZER);
        let writes = log.writes();

        assert_eq!(writes.len(), 257);
        assert_eq!(
            writes[0],
            LineWrite::EqualizerRam(EqualizerWrite { addr: 0, word: 0x03FE1840 })
        );
        assert_eq!(
            writes[255],
            LineWrite::EqualizerRam(EqualizerWrite { addr: 255, word: 0xFC2153C0 })
        );
        assert_eq!(writes[256], LineWrite::EnableEqualizer(EQUALIZER_ENABLE));
    }

    #[test]
    fn full_bring_up() {
        init();

        let config = LineConfig::new(LineMode::E1, LineBuildOut::E1_120Ohm).unwrap();
        let mut log = WriteLog::new();
        program_line_interface(&mut log, config);
        let writes = log.writes();

        assert_eq!(writes.len(), 120 + 1 + 256 + 1);
        assert!(writes[..120]
            .iter()
            .all(|w| matches!(w, LineWrite::PulseWaveform(_))));
        assert_eq!(writes[120], LineWrite::OutputAmplitude(0x0C));
        assert_eq!(
            writes[121],
            LineWrite::EqualizerRam(EqualizerWrite { addr: 0, word: 0x07DE182C })
        );
        assert_eq!(
            writes[376],
            LineWrite::EqualizerRam(EqualizerWrite { addr: 255, word: 0xFC19B3AC })
        );
        assert_eq!(writes[377], LineWrite::EnableEqualizer(0xCB));
    }

    #[test]
    fn repeated_bring_up_is_identical() {
        init();

        let config = LineConfig::for_lbo(LineBuildOut::ShortHaul5).unwrap();
        let mut first = WriteLog::new();
        let mut second = WriteLog::new();
        program_line_interface(&mut first, config);
        program_line_interface(&mut second, config);
        assert_eq!(first.writes(), second.writes());
    }

    #[test]
    fn display() {
        assert_eq!(
            LineWrite::PulseWaveform(WaveformWrite::new(2, 1, 0x43)).to_string(),
            "waveform[0x11] (sample 2, unit 1) <- 0x43"
        );
        assert_eq!(
            LineWrite::EqualizerRam(EqualizerWrite { addr: 1, word: 0x03F61840 }).to_string(),
            "equalizer[0x01] <- 0x03F61840"
        );
        assert_eq!(
            ConfigError::Unsupported(LineBuildOut::E1_75Ohm).to_string(),
            "Line build-out 'E1, 75 Ohm (unsupported)' is not supported"
        );
    }
}
