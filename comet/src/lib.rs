//! Calibration tables for the PM4351 "COMET" T1/E1 line interface.
//!
//! The transmit side is shaped by a [`WaveformTable`] chosen by [`LineBuildOut`], and the
//! receive side by an [`EqualizerTable`] chosen by [`LineMode`]. All tables are `static` and
//! immutable. [`liu`] turns them into the write sequence that brings up the line interface.

use std::convert::TryFrom;

pub mod equalizer;
pub mod lbo;
pub mod liu;
pub mod waveform;

pub use equalizer::EqualizerTable;
pub use lbo::{Haul, LineBuildOut, LineMode, UnknownLineBuildOut, UnknownLineMode};
pub use liu::{ConfigError, LineConfig, LineInterface};
pub use waveform::WaveformTable;

/// Looks up a transmit waveform by numeric line build-out code.
pub fn lookup_waveform(code: u8) -> Result<&'static WaveformTable, UnknownLineBuildOut> {
    LineBuildOut::try_from(code).map(LineBuildOut::waveform)
}

/// Looks up a receive equalizer by line mode name (`t1` or `e1`).
pub fn lookup_equalizer(name: &str) -> Result<&'static EqualizerTable, UnknownLineMode> {
    name.parse::<LineMode>().map(LineMode::equalizer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_identifier() {
        assert_eq!(lookup_waveform(0).map(WaveformTable::amplitude), Ok(0x0C));
        assert_eq!(lookup_waveform(9).map(WaveformTable::amplitude), Ok(0x15));
        assert_eq!(
            lookup_waveform(12).map(WaveformTable::amplitude),
            Err(UnknownLineBuildOut::Code(12))
        );
        assert_eq!(lookup_equalizer("t1").map(|t| t.get(255)), Ok(0xFC2153C0));
        assert_eq!(lookup_equalizer("e1").map(|t| t.get(0)), Ok(0x07DE182C));
        assert_eq!(
            lookup_equalizer("x").map(|t| t.get(0)),
            Err(UnknownLineMode("x".to_owned()))
        );
    }

    #[test]
    fn tables_are_shareable() {
        fn assert_sync<T: Sync + 'static>(_: &T) {}
        assert_sync(LineBuildOut::ShortHaul0.waveform());
        assert_sync(LineMode::T1.equalizer());

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| LineMode::E1.equalizer().get(128)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0x974EAF2C);
        }
    }
}
