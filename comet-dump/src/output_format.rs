//! Output layouts for the printed tables.
use std::io::{self, Write};

use clap::ValueEnum;
use comet::liu::LineWrite;
use comet::waveform::UNITS;
use comet::{LineBuildOut, LineMode};

/// Words per line when printing an equalizer as text.
const WORDS_PER_LINE: usize = 4;

/// Clap arg enum for selecting the output layout.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human readable tables.
    #[default]
    Text,
    /// Comma separated values with a header row.
    Csv,
}

impl OutputFormat {
    /// Writes the summary of every line build-out.
    pub fn write_list(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "{:>4}  {:<7} {:<4} {:<5} {:<9} description",
                    "code", "name", "mode", "haul", "amplitude"
                )?;
                for lbo in LineBuildOut::ALL {
                    writeln!(
                        out,
                        "{:>4}  {:<7} {:<4} {:<5} {:<9} {}",
                        lbo.code(),
                        lbo.name(),
                        lbo.mode(),
                        lbo.haul().map_or("-".to_owned(), |haul| haul.to_string()),
                        format!("{:#04X}", lbo.waveform().amplitude()),
                        lbo.description(),
                    )?;
                }
            }
            OutputFormat::Csv => {
                writeln!(out, "code,name,mode,haul,amplitude,supported")?;
                for lbo in LineBuildOut::ALL {
                    writeln!(
                        out,
                        "{},{},{},{},{:#04X},{}",
                        lbo.code(),
                        lbo.name(),
                        lbo.mode(),
                        lbo.haul().map_or(String::new(), |haul| haul.to_string()),
                        lbo.waveform().amplitude(),
                        lbo.is_supported(),
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Writes the transmit waveform table of a line build-out.
    pub fn write_waveform(self, out: &mut impl Write, lbo: LineBuildOut) -> io::Result<()> {
        let table = lbo.waveform();
        // Placeholder tables have no real samples to show.
        let samples: &[[u8; UNITS]] = if lbo.is_supported() {
            table.samples()
        } else {
            &[]
        };
        match self {
            OutputFormat::Text => {
                writeln!(out, "# {} ({}, code {})", lbo, lbo.name(), lbo.code())?;
                if !lbo.is_supported() {
                    writeln!(out, "# unsupported: samples undefined")?;
                }
                write!(out, "sample")?;
                for unit in 0..UNITS {
                    write!(out, "  unit{}", unit)?;
                }
                writeln!(out)?;
                for (sample, row) in samples.iter().enumerate() {
                    write!(out, "{:>6}", sample)?;
                    for value in row {
                        write!(out, "  {:#04X} ", value)?;
                    }
                    writeln!(out)?;
                }
                writeln!(out, "amplitude {:#04X}", table.amplitude())?;
            }
            OutputFormat::Csv => {
                write!(out, "sample")?;
                for unit in 0..UNITS {
                    write!(out, ",unit{}", unit)?;
                }
                writeln!(out)?;
                for (sample, row) in samples.iter().enumerate() {
                    write!(out, "{}", sample)?;
                    for value in row {
                        write!(out, ",{:#04X}", value)?;
                    }
                    writeln!(out)?;
                }
                writeln!(out, "amplitude,{:#04X}", table.amplitude())?;
            }
        }
        Ok(())
    }

    /// Writes the receive equalizer sweep of a line mode.
    pub fn write_equalizer(self, out: &mut impl Write, mode: LineMode) -> io::Result<()> {
        let words = mode.equalizer().words();
        match self {
            OutputFormat::Text => {
                writeln!(out, "# {} receive equalizer", mode)?;
                for (line, chunk) in words.chunks(WORDS_PER_LINE).enumerate() {
                    write!(out, "{:03}:", line * WORDS_PER_LINE)?;
                    for word in chunk {
                        write!(out, " {:#010X}", word)?;
                    }
                    writeln!(out)?;
                }
            }
            OutputFormat::Csv => {
                writeln!(out, "step,word")?;
                for (step, word) in words.iter().enumerate() {
                    writeln!(out, "{},{:#010X}", step, word)?;
                }
            }
        }
        Ok(())
    }

    /// Writes a recorded bring-up sequence.
    pub fn write_program(self, out: &mut impl Write, writes: &[LineWrite]) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                for write in writes {
                    writeln!(out, "{}", write)?;
                }
            }
            OutputFormat::Csv => {
                writeln!(out, "target,addr,value")?;
                for write in writes {
                    match write {
                        LineWrite::PulseWaveform(w) => {
                            writeln!(out, "waveform,{:#04X},{:#04X}", w.addr, w.data)?
                        }
                        LineWrite::OutputAmplitude(value) => {
                            writeln!(out, "amplitude,,{:#04X}", value)?
                        }
                        LineWrite::EqualizerRam(w) => {
                            writeln!(out, "equalizer,{:#04X},{:#010X}", w.addr, w.word)?
                        }
                        LineWrite::EnableEqualizer(config) => {
                            writeln!(out, "equalizer-config,,{:#04X}", config)?
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
