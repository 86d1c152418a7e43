//! Static reference tables for Bayer designations.
//!
//! Two fixed tables back the positional indices stored in dataset records:
//! the 24 Greek letters in traditional Alpha..Omega order, and the 88 IAU
//! constellation abbreviations in the order the dataset generator assigns
//! them. Record indices are 1-based; both tables are addressed with
//! `index - 1`. The ordering here must match the generator exactly — the
//! indices are positional, not named.
//!
//! Access goes through [`greek_letter`] and [`constellation_abbrev`], which
//! turn an out-of-range index into a defined panic. Records that pass load
//! validation can never trigger it; a panic here means the tables and the
//! dataset were built against different conventions.

/// One Greek letter as used in Bayer designations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreekLetter {
    /// Lowercase Greek symbol, e.g. `"α"`.
    pub symbol: &'static str,
    /// Conventional 3-letter abbreviation, e.g. `"alf"`.
    pub abbrev: &'static str,
    /// Full English name, e.g. `"Alpha"`.
    pub name: &'static str,
}

const fn greek(symbol: &'static str, abbrev: &'static str, name: &'static str) -> GreekLetter {
    GreekLetter {
        symbol,
        abbrev,
        name,
    }
}

/// The 24 Greek letters, Alpha..Omega. `bayer_index - 1` addresses this.
pub const GREEK_LETTERS: [GreekLetter; 24] = [
    greek("α", "alf", "Alpha"),
    greek("β", "bet", "Beta"),
    greek("γ", "gam", "Gamma"),
    greek("δ", "del", "Delta"),
    greek("ε", "eps", "Epsilon"),
    greek("ζ", "zet", "Zeta"),
    greek("η", "eta", "Eta"),
    greek("θ", "tet", "Theta"),
    greek("ι", "iot", "Iota"),
    greek("κ", "kap", "Kappa"),
    greek("λ", "lam", "Lambda"),
    greek("μ", "mu", "Mu"),
    greek("ν", "nu", "Nu"),
    greek("ξ", "xi", "Xi"),
    greek("ο", "omi", "Omicron"),
    greek("π", "pi", "Pi"),
    greek("ρ", "rho", "Rho"),
    greek("σ", "sig", "Sigma"),
    greek("τ", "tau", "Tau"),
    greek("υ", "ups", "Upsilon"),
    greek("φ", "phi", "Phi"),
    greek("χ", "chi", "Chi"),
    greek("ψ", "psi", "Psi"),
    greek("ω", "ome", "Omega"),
];

/// IAU 3-letter constellation codes in generator order.
/// `constellation_index - 1` addresses this. Not alphabetical — the order is
/// fixed by the dataset generator and must never be resorted.
pub const CONSTELLATIONS: [&str; 88] = [
    "Aql", "And", "Scl", "Ara", "Lib", "Cet", "Ari", "Sct", "Pyx", "Boo", //
    "Cae", "Cha", "Cnc", "Cap", "Car", "Cas", "Cen", "Cep", "Com", "CVn", //
    "Aur", "Col", "Cir", "Crt", "CrA", "CrB", "Crv", "Cru", "Cyg", "Del", //
    "Dor", "Dra", "Nor", "Eri", "Sge", "For", "Gem", "Cam", "CMa", "UMa", //
    "Gru", "Her", "Hor", "Hya", "Hyi", "Ind", "Lac", "Mon", "Lep", "Leo", //
    "Lup", "Lyn", "Lyr", "Ant", "Mic", "Mus", "Oct", "Aps", "Oph", "Ori", //
    "Pav", "Peg", "Pic", "Per", "Equ", "CMi", "LMi", "Vul", "UMi", "Phe", //
    "Psc", "PsA", "Vol", "Pup", "Ret", "Sgr", "Sco", "Ser", "Sex", "Men", //
    "Tau", "Tel", "Tuc", "Tri", "TrA", "Aqr", "Vir", "Vel",
];

/// Returns the Greek letter for a 1-based Bayer index.
///
/// # Panics
/// Panics if `bayer_index` is outside `1..=24`. Loaded records are range
/// checked, so this fires only on a generator/table mismatch.
pub fn greek_letter(bayer_index: u8) -> &'static GreekLetter {
    assert!(
        (1..=24).contains(&bayer_index),
        "Bayer index {} outside 1..=24",
        bayer_index
    );
    &GREEK_LETTERS[bayer_index as usize - 1]
}

/// Returns the IAU abbreviation for a 1-based constellation index.
///
/// # Panics
/// Panics if `constellation_index` is outside `1..=88`. Loaded records are
/// range checked, so this fires only on a generator/table mismatch.
pub fn constellation_abbrev(constellation_index: u8) -> &'static str {
    assert!(
        (1..=88).contains(&constellation_index),
        "constellation index {} outside 1..=88",
        constellation_index
    );
    CONSTELLATIONS[constellation_index as usize - 1]
}

/// A fully resolved Bayer designation, minus any multiplicity suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Designation {
    /// IAU constellation abbreviation, e.g. `"CMa"`.
    pub constellation: &'static str,
    /// The Greek-letter triple (symbol, abbreviation, full name).
    pub greek: &'static GreekLetter,
}

/// Resolves a pair of 1-based record indices into display strings.
///
/// Pure and side-effect free. Panics on out-of-range indices, same as the
/// underlying accessors.
pub fn resolve(constellation_index: u8, bayer_index: u8) -> Designation {
    Designation {
        constellation: constellation_abbrev(constellation_index),
        greek: greek_letter(bayer_index),
    }
}
