//! Receive equalizer sweep tables.
//!
//! The receiver's adaptive equalizer steps through 256 configurations while it searches for
//! the best match to the incoming line. Each step is a raw configuration word loaded into the
//! equalizer's indirect RAM at the address of that step.

use std::fmt;

/// Number of steps in the equalizer sweep.
pub const STEPS: usize = 256;

/// A receive equalizer sweep table, one configuration word per step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct EqualizerTable([u32; STEPS]);

impl EqualizerTable {
    /// Wraps a full sweep of configuration words.
    pub const fn new(words: [u32; STEPS]) -> Self {
        Self(words)
    }

    /// All configuration words in sweep order.
    pub fn words(&self) -> &[u32; STEPS] {
        &self.0
    }

    /// Gets the configuration word for a sweep step. Every `u8` is a valid step.
    pub fn get(&self, step: u8) -> u32 {
        self.0[step as usize]
    }

    /// Iterates the equalizer RAM writes for this table in sweep order.
    pub fn writes(&self) -> impl Iterator<Item = EqualizerWrite> + '_ {
        self.0.iter().enumerate().map(|(addr, &word)| EqualizerWrite {
            addr: addr as u8,
            word,
        })
    }
}

/// A single write into the receive equalizer RAM.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EqualizerWrite {
    /// RAM address, equal to the sweep step.
    pub addr: u8,
    /// Configuration word for that step.
    pub word: u32,
}

impl EqualizerWrite {
    /// Splits the word into the bytes loaded through the indirect data registers, most
    /// significant first.
    pub fn bytes(&self) -> [u8; 4] {
        self.word.to_be_bytes()
    }
}

impl fmt::Display for EqualizerWrite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "equalizer[{:#04X}] <- {:#010X}", self.addr, self.word)
    }
}

/// T1 receiver equalizer.
pub static T1_EQUALIZER: EqualizerTable = EqualizerTable::new([
    0x03FE1840, 0x03F61840, 0x03EE1840, 0x03E61840, // 000
    0x03DE1840, 0x03D61840, 0x03D61840, 0x03D61840, // 004
    0x03CE1840, 0x03CE1840, 0x03CE1840, 0x03CE1840, // 008
    0x03C61840, 0x03C61840, 0x03C61840, 0x0BBE1840, // 012
    0x0BBE1840, 0x0BBE1840, 0x0BBE1840, 0x0BB61840, // 016
    0x0BB61840, 0x0BB61840, 0x0BB61840, 0x13AE1838, // 020
    0x13AE183C, 0x13AE1840, 0x13AE1840, 0x13AE1840, // 024
    0x13AE1840, 0x1BB618B8, 0x1BAE18B8, 0x1BAE18BC, // 028
    0x1BAE18C0, 0x1BAE18C0, 0x23A618C0, 0x23A618C0, // 032
    0x23A618C0, 0x23A618C0, 0x23A618C0, 0x239E18C0, // 036
    0x239E18C0, 0x239E18C0, 0x239E18C0, 0x239E18C0, // 040
    0x2B9618C0, 0x2B9618C0, 0x2B9618C0, 0x33961940, // 044
    0x37961940, 0x37961940, 0x37961940, 0x3F9E19C0, // 048
    0x3F9E19C0, 0x3F9E19C0, 0x3FA61A40, 0x3FA61A40, // 052
    0x3FA61A40, 0x3FA61A40, 0x3F9619C0, 0x3F9619C0, // 056
    0x3F9619C0, 0x3F9619C0, 0x479E1A40, 0x479E1A40, // 060
    0x479E1A40, 0x47961A40, 0x47961A40, 0x47961A40, // 064
    0x47961A40, 0x4F8E1A40, 0x4F8E1A40, 0x4F8E1A40, // 068
    0x4F8E1A40, 0x4F8E1A40, 0x57861A40, 0x57861A40, // 072
    0x57861A40, 0x57861A40, 0x57861A40, 0x5F861AC0, // 076
    0x5F861AC0, 0x5F861AC0, 0x5F861AC0, 0x5F861AC0, // 080
    0x5F861AC0, 0x5F7E1AC0, 0x5F7E1AC0, 0x5F7E1AC0, // 084
    0x5F7E1AC0, 0x5F7E1AC0, 0x677E2AC0, 0x677E2AC0, // 088
    0x677E2AC0, 0x677E2AC0, 0x67762AC0, 0x67762AC0, // 092
    0x67762AC0, 0x67762AC0, 0x67762AC0, 0x6F6E2AC0, // 096
    0x6F6E2AC0, 0x6F6E2AC0, 0x6F6E2AC0, 0x776E3AC0, // 100
    0x776E3AC0, 0x776E3AC0, 0x776E3AC0, 0x7F663AC0, // 104
    0x7F663AC0, 0x7F664AC0, 0x7F664AC0, 0x7F664AC0, // 108
    0x7F664AC0, 0x87665AC0, 0x87665AC0, 0x87665AC0, // 112
    0x87665AC0, 0x87665AC0, 0x875E5AC0, 0x875E5AC0, // 116
    0x875E5AC0, 0x875E5AC0, 0x875E5AC0, 0x8F5E6AC0, // 120
    0x8F5E6AC0, 0x8F5E6AC0, 0x8F5E6AC0, 0x975E7AC0, // 124
    0x975E7AC0, 0x975E7AC0, 0x975E7AC0, 0x9F5E8AC0, // 128
    0x9F5E8AC0, 0x9F5E8AC0, 0x9F5E8AC0, 0x9F5E8AC0, // 132
    0xA7569AC0, 0xA7569AC0, 0xA7569AC0, 0xA7569AC0, // 136
    0xA756AAC0, 0xA756AAC0, 0xA756AAC0, 0xAF4EAAC0, // 140
    0xAF4EAAC0, 0xAF4EAAC0, 0xAF4EAAC0, 0xAF4EAAC0, // 144
    0xB746AAC0, 0xB746AAC0, 0xB746AAC0, 0xB746AAC0, // 148
    0xB746AAC0, 0xB746AAC0, 0xB746AAC0, 0xB746BAC0, // 152
    0xB746BAC0, 0xB746BAC0, 0xBF4EBB40, 0xBF4EBB40, // 156
    0xBF4EBB40, 0xBF4EBB40, 0xBF4EBB40, 0xBF4EBB40, // 160
    0xBF4EBB40, 0xBF4EBB40, 0xBF4EBB40, 0xBE46CB40, // 164
    0xBE46CB40, 0xBE46CB40, 0xBE46CB40, 0xBE46CB40, // 168
    0xBE46CB40, 0xBE46DB40, 0xBE46DB40, 0xBE46DB40, // 172
    0xC63ECB40, 0xC63ECB40, 0xC63EDB40, 0xC63EDB40, // 176
    0xC63EDB40, 0xC644DB40, 0xC644DB40, 0xC644DB40, // 180
    0xC644DB40, 0xC63CDB40, 0xC63CDB40, 0xC63CDB40, // 184
    0xC63CDB40, 0xD634DB40, 0xD634DB40, 0xD634DB40, // 188
    0xD634DB40, 0xD634DB40, 0xDE2CDB3C, 0xDE2CDB3C, // 192
    0xDE2CDB3C, 0xE62CDB40, 0xE62CDB40, 0xE62CDB40, // 196
    0xE62CDB40, 0xE62CDB40, 0xE62CEB40, 0xE62CEB40, // 200
    0xE62CEB40, 0xEE2CFB40, 0xEE2CFB40, 0xEE2CFB40, // 204
    0xEE2D0B40, 0xEE2D0B40, 0xEE2D0B40, 0xEE2D0B40, // 208
    0xEE2D0B40, 0xF5250B38, 0xF5250B3C, 0xF5250B40, // 212
    0xF5251B40, 0xF5251B40, 0xF5251B40, 0xF5251B40, // 216
    0xF5251B40, 0xFD252B40, 0xFD252B40, 0xFD252B40, // 220
    0xFD252B40, 0xFD252740, 0xFD252740, 0xFD252740, // 224
    0xFD252340, 0xFD252340, 0xFD252340, 0xFD253340, // 228
    0xFD253340, 0xFD253340, 0xFD253340, 0xFD253340, // 232
    0xFD253340, 0xFD253340, 0xFD253340, 0xFC254340, // 236
    0xFD254340, 0xFD254340, 0xFD254344, 0xFC254348, // 240
    0xFC25434C, 0xFD2543BC, 0xFD2543C0, 0xFC2543C0, // 244
    0xFC2343C0, 0xFC2343C0, 0xFD2343C0, 0xFC2143C0, // 248
    0xFC2143C0, 0xFC2153C0, 0xFD2153C0, 0xFC2153C0, // 252
]);

/// E1 receiver equalizer.
pub static E1_EQUALIZER: EqualizerTable = EqualizerTable::new([
    0x07DE182C, 0x07DE182C, 0x07D6182C, 0x07D6182C, // 000
    0x07D6182C, 0x07CE182C, 0x07CE182C, 0x07CE182C, // 004
    0x07C6182C, 0x07C6182C, 0x07C6182C, 0x07BE182C, // 008
    0x07BE182C, 0x07BE182C, 0x07BE182C, 0x07BE182C, // 012
    0x07B6182C, 0x07B6182C, 0x07B6182C, 0x07B6182C, // 016
    0x07B6182C, 0x07AE182C, 0x07AE182C, 0x07AE182C, // 020
    0x07AE182C, 0x07AE182C, 0x07B618AC, 0x07AE18AC, // 024
    0x07AE18AC, 0x07AE18AC, 0x07AE18AC, 0x07A618AC, // 028
    0x07A618AC, 0x07A618AC, 0x07A618AC, 0x079E18AC, // 032
    0x07A6192C, 0x07A6192C, 0x07A6192C, 0x0FA6192C, // 036
    0x0FA6192C, 0x0F9E192C, 0x0F9E192C, 0x0F9E192C, // 040
    0x179E192C, 0x17A619AC, 0x179E19AC, 0x179E19AC, // 044
    0x179619AC, 0x1F9619AC, 0x1F9619AC, 0x1F8E19AC, // 048
    0x1F8E19AC, 0x1F8E19AC, 0x278E19AC, 0x278E1A2C, // 052
    0x278E1A2C, 0x278E1A2C, 0x278E1A2C, 0x2F861A2C, // 056
    0x2F861A2C, 0x2F861A2C, 0x2F7E1A2C, 0x2F7E1A2C, // 060
    0x2F7E1A2C, 0x377E1A2C, 0x377E1AAC, 0x377E1AAC, // 064
    0x377E1AAC, 0x377E1AAC, 0x3F7E2AAC, 0x3F7E2AAC, // 068
    0x3F762AAC, 0x3F862B2C, 0x3F7E2B2C, 0x477E2B2C, // 072
    0x477E2F2C, 0x477E2F2C, 0x477E2F2C, 0x47762F2C, // 076
    0x4F762F2C, 0x4F762F2C, 0x4F6E2F2C, 0x4F6E2F2C, // 080
    0x4F6E2F2C, 0x576E2F2C, 0x576E2F2C, 0x576E3F2C, // 084
    0x576E3F2C, 0x576E3F2C, 0x5F6E3F2C, 0x5F6E4F2C, // 088
    0x5F6E4F2C, 0x5F6E4F2C, 0x5F664F2C, 0x67664F2C, // 092
    0x67664F2C, 0x675E4F2C, 0x675E4F2C, 0x67664F2C, // 096
    0x67664F2C, 0x67665F2C, 0x6F6E5F2C, 0x6F6E6F2C, // 100
    0x6F6E6F2C, 0x6F6E7F2C, 0x6F6E7F2C, 0x6F6E7F2C, // 104
    0x77667F2C, 0x77667F2C, 0x775E6F2C, 0x775E7F2C, // 108
    0x775E7F2C, 0x7F5E7F2C, 0x7F5E8F2C, 0x7F5E8F2C, // 112
    0x7F5E8F2C, 0x87568F2C, 0x87568F2C, 0x87568F2C, // 116
    0x874E8F2C, 0x874E8F2C, 0x874E8F2C, 0x8F4E9F2C, // 120
    0x8F4E9F2C, 0x8F4EAF2C, 0x8F4EAF2C, 0x8F4EAF2C, // 124
    0x974EAF2C, 0x974EAF2C, 0x974EAB2C, 0x974EAB2C, // 128
    0x974EAB2C, 0x9F4EAB2C, 0x9F4EBB2C, 0x9F4EBB2C, // 132
    0x9F4EBB2C, 0x9F4ECB2C, 0xA74ECB2C, 0xA74ECB2C, // 136
    0xA746CB2C, 0xA746CB2C, 0xA746CB2C, 0xA746DB2C, // 140
    0xAF46DB2C, 0xAF46EB2C, 0xAF46EB2C, 0xAF4EEB2C, // 144
    0xAE4EEB2C, 0xAE4EEB2C, 0xB546FB2C, 0xB554FB2C, // 148
    0xB54CEB2C, 0xB554FB2C, 0xB554FB2C, 0xBD54FB2C, // 152
    0xBD4CFB2C, 0xBD4CFB2C, 0xBD4CFB2C, 0xBD44EB2C, // 156
    0xC544FB2C, 0xC544FB2C, 0xC544FB2C, 0xC5450B2C, // 160
    0xC5450B2C, 0xC5450B2C, 0xCD450B2C, 0xCD450B2C, // 164
    0xCD3D0B2C, 0xCD3D0B2C, 0xCD3D0B2C, 0xD53D0B2C, // 168
    0xD53D0B2C, 0xD53D1B2C, 0xD53D1B2C, 0xD53D1B2C, // 172
    0xDD3D1B2C, 0xDD3D1B2C, 0xDD351B2C, 0xDD351B2C, // 176
    0xDD351B2C, 0xE5351B2C, 0xE5351B2C, 0xE52D1B2C, // 180
    0xE52D1B2C, 0xE52D3B2C, 0xED2D4B2C, 0xED2D1BA8, // 184
    0xED2D1BAC, 0xED2D17AC, 0xED2D17AC, 0xED2D27AC, // 188
    0xF52D27AC, 0xF52D27AC, 0xF52D2BAC, 0xF52D2BAC, // 192
    0xF52D2BAC, 0xFD2D2BAC, 0xFD2B2BAC, 0xFD2B2BAC, // 196
    0xFD2B2BAC, 0xFD2B2BAC, 0xFD232BAC, 0xFD232BAC, // 200
    0xFD232BAC, 0xFD212BAC, 0xFD212BAC, 0xFD292BAC, // 204
    0xFD292BAC, 0xFD2927AC, 0xFD2937AC, 0xFD2923AC, // 208
    0xFD2923AC, 0xFD2923AC, 0xFD2923AC, 0xFD2123AC, // 212
    0xFD2123AC, 0xFD2123AC, 0xFD2133AC, 0xFD2133AC, // 216
    0xFD2133AC, 0xFD2143AC, 0xFD2143AC, 0xFD2143AC, // 220
    0xFC2143AC, 0xFC2143AC, 0xFC1943AC, 0xFC1943AC, // 224
    0xFC1943AC, 0xFC1943AC, 0xFC1953AC, 0xFC1953AC, // 228
    0xFC1953AC, 0xFC1953AC, 0xFC1963AC, 0xFC1963AC, // 232
    0xFC1963AC, 0xFC1973AC, 0xFC1973AC, 0xFC1973AC, // 236
    0xFC1973AC, 0xFC1973AC, 0xFC1983AC, 0xFC1983AC, // 240
    0xFC1983AC, 0xFC1983AC, 0xFC1983AC, 0xFC1993AC, // 244
    0xFC1993AC, 0xFC1993AC, 0xFC19A3AC, 0xFC19A3AC, // 248
    0xFC19B3AC, 0xFC19B3AC, 0xFC19B3AC, 0xFC19B3AC, // 252
]);
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(T1_EQUALIZER.words().len(), 256);
        assert_eq!(E1_EQUALIZER.words().len(), 256);
        assert_eq!(T1_EQUALIZER.get(0), 0x03FE1840);
        assert_eq!(T1_EQUALIZER.get(255), 0xFC2153C0);
        assert_eq!(E1_EQUALIZER.get(0), 0x07DE182C);
        assert_eq!(E1_EQUALIZER.get(255), 0xFC19B3AC);
    }

    #[test]
    fn contents_match_reference_values() {
        fn checksums(table: &EqualizerTable) -> (u32, u32, u64) {
            table.words().iter().enumerate().fold(
                (0u32, 0u32, 0u64),
                |(xor, sum, weighted), (i, &w)| {
                    (
                        xor ^ w,
                        sum.wrapping_add(w),
                        weighted.wrapping_add((i as u64 + 1) * w as u64),
                    )
                },
            )
        }

        assert_eq!(
            checksums(&T1_EQUALIZER),
            (0xCAA08DFC, 0xF0E8865C, 0x5EE7E2762448)
        );
        assert_eq!(
            checksums(&E1_EQUALIZER),
            (0x98A1F604, 0x80125BFC, 0x60B69BD48210)
        );
        assert_eq!(T1_EQUALIZER.get(128), 0x975E7AC0);
        assert_eq!(E1_EQUALIZER.get(128), 0x974EAF2C);
    }

    #[test]
    fn rereading_is_stable() {
        assert_eq!(*T1_EQUALIZER.words(), *T1_EQUALIZER.words());
        assert_eq!(*E1_EQUALIZER.words(), *E1_EQUALIZER.words());
        assert_ne!(T1_EQUALIZER, E1_EQUALIZER);
    }

    #[test]
    fn writes_follow_sweep_order() {
        let writes: Vec<_> = E1_EQUALIZER.writes().collect();
        assert_eq!(writes.len(), STEPS);
        for (step, write) in writes.iter().enumerate() {
            assert_eq!(write.addr as usize, step);
            assert_eq!(write.word, E1_EQUALIZER.words()[step]);
        }
    }

    #[test]
    fn write_bytes_are_msb_first() {
        let write = T1_EQUALIZER.writes().next().unwrap();
        assert_eq!(write.bytes(), [0x03, 0xFE, 0x18, 0x40]);
    }
}
