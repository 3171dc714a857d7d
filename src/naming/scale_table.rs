// ============================================================================
// Scale Table
// Integer-keyed magnitude-to-name mapping (Conway-Wechsler)
// ============================================================================

use crate::numeric::{Magnitude, NumericError, NumericResult};

/// Read-only mapping from magnitude to scale name.
///
/// Backed by a static slice sorted by ascending magnitude and binary
/// searched on lookup. The table is pure data: extending coverage past
/// centillion is a matter of appending entries, no code change. Entries
/// reference `'static` strings, so a table is freely shareable across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    entries: &'static [(i32, &'static str)],
}

impl ScaleTable {
    const fn from_static(entries: &'static [(i32, &'static str)]) -> Self {
        Self { entries }
    }

    /// Build a table from caller-supplied entries.
    ///
    /// # Errors
    /// - `InvalidMagnitude` if any key is not a multiple of 3
    /// - `TableOrder` unless keys are strictly ascending
    pub fn from_entries(entries: &'static [(i32, &'static str)]) -> NumericResult<Self> {
        let mut previous: Option<i32> = None;
        for &(magnitude, _) in entries {
            if magnitude % Magnitude::STEP != 0 {
                return Err(NumericError::InvalidMagnitude);
            }
            if let Some(prev) = previous {
                if magnitude <= prev {
                    return Err(NumericError::TableOrder);
                }
            }
            previous = Some(magnitude);
        }
        Ok(Self { entries })
    }

    /// Look up the name for `magnitude`, `None` when the table has no entry.
    pub fn lookup(&self, magnitude: Magnitude) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&magnitude.get(), |&(key, _)| key)
            .ok()
            .map(|index| self.entries[index].1)
    }

    /// Smallest magnitude covered by the table.
    pub fn min_magnitude(&self) -> Option<Magnitude> {
        self.entries
            .first()
            .and_then(|&(key, _)| Magnitude::new(key).ok())
    }

    /// Largest magnitude covered by the table.
    pub fn max_magnitude(&self) -> Option<Magnitude> {
        self.entries
            .last()
            .and_then(|&(key, _)| Magnitude::new(key).ok())
    }

    /// Entries in ascending magnitude order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The shipped table: magnitudes 0 through 303 under the Conway-Wechsler
/// convention (http://mrob.com/pub/math/largenum.html#conway-wechsler).
/// Magnitude 0 maps to the empty string so plain units render bare.
pub static CONWAY_WECHSLER: ScaleTable = ScaleTable::from_static(&[
    (0, ""),
    (3, "thousand"),
    (6, "million"),
    (9, "billion"),
    (12, "trillion"),
    (15, "quadrillion"),
    (18, "quintillion"),
    (21, "sextillion"),
    (24, "septillion"),
    (27, "octillion"),
    (30, "nonillion"),
    (33, "decillion"),
    (36, "undecillion"),
    (39, "duodecillion"),
    (42, "tredecillion"),
    (45, "quattuordecillion"),
    (48, "quindecillion"),
    (51, "sedecillion"),
    (54, "septendecillion"),
    (57, "octodecillion"),
    (60, "novendecillion"),
    (63, "vigintillion"),
    (66, "unvigintillion"),
    (69, "duovigintillion"),
    (72, "tresvigintillion"),
    (75, "quattuorvigintillion"),
    (78, "quinvigintillion"),
    (81, "sesvigintillion"),
    (84, "septemvigintillion"),
    (87, "octovigintillion"),
    (90, "novemvigintillion"),
    (93, "trigintillion"),
    (96, "untrigintillion"),
    (99, "duotrigintillion"),
    (102, "trestrigintillion"),
    (105, "quattuortrigintillion"),
    (108, "quintrigintillion"),
    (111, "sestrigintillion"),
    (114, "septentrigintillion"),
    (117, "octotrigintillion"),
    (120, "noventrigintillion"),
    (123, "quadragintillion"),
    (126, "unquadragintillion"),
    (129, "duoquadragintillion"),
    (132, "tresquadragintillion"),
    (135, "quattuorquadragintillion"),
    (138, "quinquadragintillion"),
    (141, "sesquadragintillion"),
    (144, "septenquadragintillion"),
    (147, "octoquadragintillion"),
    (150, "novenquadragintillion"),
    (153, "quinquagintillion"),
    (156, "unquinquagintillion"),
    (159, "duoquinquagintillion"),
    (162, "tresquinquagintillion"),
    (165, "quattuorquinquagintillion"),
    (168, "quinquinquagintillion"),
    (171, "sesquinquagintillion"),
    (174, "septenquinquagintillion"),
    (177, "octoquinquagintillion"),
    (180, "novenquinquagintillion"),
    (183, "sexagintillion"),
    (186, "unsexagintillion"),
    (189, "duosexagintillion"),
    (192, "tresexagintillion"),
    (195, "quattuorsexagintillion"),
    (198, "quinsexagintillion"),
    (201, "sesexagintillion"),
    (204, "septensexagintillion"),
    (207, "octosexagintillion"),
    (210, "novensexagintillion"),
    (213, "septuagintillion"),
    (216, "unseptuagintillion"),
    (219, "duoseptuagintillion"),
    (222, "treseptuagintillion"),
    (225, "quattuorseptuagintillion"),
    (228, "quinseptuagintillion"),
    (231, "seseptuagintillion"),
    (234, "septenseptuagintillion"),
    (237, "octoseptuagintillion"),
    (240, "novenseptuagintillion"),
    (243, "octogintillion"),
    (246, "unoctogintillion"),
    (249, "duooctogintillion"),
    (252, "tresoctogintillion"),
    (255, "quattuoroctogintillion"),
    (258, "quinoctogintillion"),
    (261, "sexoctogintillion"),
    (264, "septemoctogintillion"),
    (267, "octooctogintillion"),
    (270, "novemoctogintillion"),
    (273, "nonagintillion"),
    (276, "unnonagintillion"),
    (279, "duononagintillion"),
    (282, "trenonagintillion"),
    (285, "quattuornonagintillion"),
    (288, "quinnonagintillion"),
    (291, "senonagintillion"),
    (294, "septenonagintillion"),
    (297, "octononagintillion"),
    (300, "novenonagintillion"),
    (303, "centillion"),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::BigNum;

    fn mag(exponent: i32) -> Magnitude {
        Magnitude::new(exponent).unwrap()
    }

    #[test]
    fn test_lookup() {
        assert_eq!(CONWAY_WECHSLER.lookup(mag(3)), Some("thousand"));
        assert_eq!(CONWAY_WECHSLER.lookup(mag(63)), Some("vigintillion"));
        assert_eq!(CONWAY_WECHSLER.lookup(mag(303)), Some("centillion"));
    }

    #[test]
    fn test_lookup_zero_is_empty_name() {
        assert_eq!(CONWAY_WECHSLER.lookup(Magnitude::ZERO), Some(""));
    }

    #[test]
    fn test_lookup_miss() {
        assert_eq!(CONWAY_WECHSLER.lookup(mag(306)), None);
        assert_eq!(CONWAY_WECHSLER.lookup(mag(-3)), None);
    }

    #[test]
    fn test_coverage() {
        assert_eq!(CONWAY_WECHSLER.len(), 102);
        assert!(!CONWAY_WECHSLER.is_empty());
        assert_eq!(CONWAY_WECHSLER.min_magnitude(), Some(Magnitude::ZERO));
        assert_eq!(CONWAY_WECHSLER.max_magnitude(), Some(mag(303)));
    }

    #[test]
    fn test_shipped_table_is_well_formed() {
        let mut previous = None;
        for (exponent, _) in CONWAY_WECHSLER.iter() {
            assert_eq!(exponent % Magnitude::STEP, 0);
            if let Some(prev) = previous {
                assert!(exponent > prev);
            }
            previous = Some(exponent);
        }
    }

    #[test]
    fn test_from_entries() {
        static EXTENDED: [(i32, &str); 2] = [(306, "uncentillion"), (309, "duocentillion")];
        let table = ScaleTable::from_entries(&EXTENDED).unwrap();
        assert_eq!(table.lookup(mag(309)), Some("duocentillion"));
    }

    #[test]
    fn test_from_entries_rejects_bad_key() {
        static BAD_KEY: [(i32, &str); 2] = [(0, ""), (4, "oops")];
        assert_eq!(
            ScaleTable::from_entries(&BAD_KEY).unwrap_err(),
            NumericError::InvalidMagnitude
        );
    }

    #[test]
    fn test_from_entries_rejects_unsorted() {
        static UNSORTED: [(i32, &str); 3] = [(0, ""), (6, "million"), (3, "thousand")];
        assert_eq!(
            ScaleTable::from_entries(&UNSORTED).unwrap_err(),
            NumericError::TableOrder
        );
    }

    #[test]
    fn test_name_round_trip_for_every_entry() {
        for (exponent, name) in CONWAY_WECHSLER.iter() {
            let num = BigNum::new(1.0, mag(exponent));
            assert_eq!(num.name(), Some(name));
        }
    }
}
