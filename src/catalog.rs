//! Embedded Bayer designation catalog.
//!
//! The dataset is a small container compiled into the crate:
//!
//! 1. **Size prefix** (4 bytes, little-endian) — exact decompressed length
//! 2. **Payload** — a zlib stream of 8-byte records
//!
//! Each decompressed record is `catalog_id:u32, constellation_index:u8,
//! bayer_index:u8, multiplicity:u8, padding:u8`, little-endian. The
//! container is produced offline from the BSC5P bright star catalog; this
//! module only consumes it.
//!
//! [`BayerCatalog::embedded`] parses the container once, on first use, and
//! hands out a `'static` borrow afterwards. Every parse failure is a broken
//! build artifact and surfaces as [`BayerError`] — no partial catalog is
//! ever exposed.

use crate::error::{BayerError, Result};
use crate::tables::{constellation_abbrev, greek_letter, GreekLetter};
use flate2::read::ZlibDecoder;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::sync::OnceLock;

/// The compiled-in container (size prefix + zlib stream).
const EMBEDDED: &[u8] = include_bytes!("../data/bayer.dat");

const SIZE_PREFIX: usize = 4;
const RECORD_SIZE: usize = 8;

/// One raw dataset record, as stored.
///
/// Indices are 1-based into the static tables in [`crate::tables`]; load
/// validation guarantees they are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BayerRecord {
    /// Henry Draper catalog number. Never zero.
    pub catalog_id: u32,
    /// 1-based index into the 88-entry constellation table.
    pub constellation_index: u8,
    /// 1-based index into the 24-entry Greek-letter table.
    pub bayer_index: u8,
    /// 0 for a plain designation, >= 1 for double-star suffixes (α1, α2, ...).
    pub multiplicity: u8,
}

/// Result of a point lookup: the designation with the constellation already
/// resolved to its IAU abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BayerName {
    /// IAU constellation abbreviation, e.g. `"CMa"`.
    pub constellation: &'static str,
    /// 1-based Greek-letter index.
    pub bayer_index: u8,
    /// Double-star suffix, 0 when absent.
    pub multiplicity: u8,
}

/// One fully denormalized entry yielded by iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BayerEntry {
    /// Henry Draper catalog number.
    pub catalog_id: u32,
    /// IAU constellation abbreviation.
    pub constellation: &'static str,
    /// 1-based Greek-letter index.
    pub bayer_index: u8,
    /// Double-star suffix, 0 when absent.
    pub multiplicity: u8,
    /// The resolved Greek-letter triple.
    pub greek: &'static GreekLetter,
}

impl fmt::Display for BayerEntry {
    /// Renders the designation the way star charts label it: `α And`,
    /// or `α1 Cen` for components of a double.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.greek.symbol)?;
        if self.multiplicity > 0 {
            write!(f, "{}", self.multiplicity)?;
        }
        write!(f, " {}", self.constellation)
    }
}

/// Parsed, immutable designation catalog.
///
/// Holds the ordered record array and a catalog-id index over it. Obtain the
/// process-wide instance with [`BayerCatalog::embedded`], or parse an
/// arbitrary container with [`BayerCatalog::parse`].
#[derive(Debug)]
pub struct BayerCatalog {
    records: Vec<BayerRecord>,
    by_id: HashMap<u32, usize>,
}

static CATALOG: OnceLock<Result<BayerCatalog>> = OnceLock::new();

impl BayerCatalog {
    /// Returns the catalog parsed from the compiled-in dataset.
    ///
    /// The parse runs exactly once per process, even under concurrent first
    /// callers; later calls return the cached result. A corrupt dataset
    /// yields the same [`BayerError`] on every call — the feature stays
    /// unavailable rather than serving partial data.
    pub fn embedded() -> Result<&'static BayerCatalog> {
        CATALOG
            .get_or_init(|| BayerCatalog::parse(EMBEDDED))
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// Parses a designation container (size prefix + zlib stream).
    ///
    /// # Errors
    /// Any structural defect is corruption: a truncated container, a
    /// malformed zlib stream, a decompressed length that differs from the
    /// declared size, a payload that is not a whole number of records, a
    /// zero or duplicate catalog id, or a positional index outside its
    /// static table.
    pub fn parse(container: &[u8]) -> Result<Self> {
        if container.len() < SIZE_PREFIX {
            return Err(BayerError::TruncatedContainer(container.len()));
        }
        let declared =
            u32::from_le_bytes(container[..SIZE_PREFIX].try_into().unwrap()) as usize;

        let mut payload = Vec::with_capacity(declared);
        ZlibDecoder::new(&container[SIZE_PREFIX..])
            .read_to_end(&mut payload)
            .map_err(|e| BayerError::Inflate(e.to_string()))?;

        if payload.len() != declared {
            return Err(BayerError::SizeMismatch {
                declared,
                actual: payload.len(),
            });
        }
        if !payload.len().is_multiple_of(RECORD_SIZE) {
            return Err(BayerError::RaggedPayload(payload.len()));
        }

        let count = payload.len() / RECORD_SIZE;
        let mut records = Vec::with_capacity(count);
        let mut by_id = HashMap::with_capacity(count);

        for (position, raw) in payload.chunks_exact(RECORD_SIZE).enumerate() {
            let record = BayerRecord {
                catalog_id: u32::from_le_bytes(raw[0..4].try_into().unwrap()),
                constellation_index: raw[4],
                bayer_index: raw[5],
                multiplicity: raw[6],
            };
            if record.catalog_id == 0 {
                return Err(BayerError::ZeroCatalogId { position });
            }
            if !(1..=88).contains(&record.constellation_index) {
                return Err(BayerError::ConstellationOutOfRange {
                    position,
                    value: record.constellation_index,
                });
            }
            if !(1..=24).contains(&record.bayer_index) {
                return Err(BayerError::BayerOutOfRange {
                    position,
                    value: record.bayer_index,
                });
            }
            if by_id.insert(record.catalog_id, position).is_some() {
                return Err(BayerError::DuplicateCatalogId {
                    catalog_id: record.catalog_id,
                    position,
                });
            }
            records.push(record);
        }

        Ok(Self { records, by_id })
    }

    /// Looks up the designation for a catalog id. O(1).
    ///
    /// `None` means the star has no Bayer designation in the dataset — the
    /// common case, not an error.
    pub fn lookup(&self, catalog_id: u32) -> Option<BayerName> {
        let record = &self.records[*self.by_id.get(&catalog_id)?];
        Some(BayerName {
            constellation: constellation_abbrev(record.constellation_index),
            bayer_index: record.bayer_index,
            multiplicity: record.multiplicity,
        })
    }

    /// Returns the denormalized entry at `position`, or `None` at or past
    /// the end of the catalog.
    ///
    /// Positions are stable for the life of the process; callers own the
    /// cursor and may restart or skip freely.
    pub fn entry_at(&self, position: usize) -> Option<BayerEntry> {
        let record = self.records.get(position)?;
        Some(BayerEntry {
            catalog_id: record.catalog_id,
            constellation: constellation_abbrev(record.constellation_index),
            bayer_index: record.bayer_index,
            multiplicity: record.multiplicity,
            greek: greek_letter(record.bayer_index),
        })
    }

    /// Iterates all entries in dataset order.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            catalog: self,
            position: 0,
        }
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a BayerCatalog {
    type Item = BayerEntry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Entries<'a> {
        self.iter()
    }
}

/// Iterator over denormalized catalog entries, in dataset order.
pub struct Entries<'a> {
    catalog: &'a BayerCatalog,
    position: usize,
}

impl Iterator for Entries<'_> {
    type Item = BayerEntry;

    fn next(&mut self) -> Option<BayerEntry> {
        let entry = self.catalog.entry_at(self.position)?;
        self.position += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.catalog.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    /// Builds a container from raw records, with an optional lie in the
    /// declared size prefix.
    fn build_container(records: &[(u32, u8, u8, u8)], declared: Option<u32>) -> Vec<u8> {
        let mut payload = Vec::new();
        for &(id, cst, bayer, n) in records {
            payload.extend_from_slice(&id.to_le_bytes());
            payload.extend_from_slice(&[cst, bayer, n, 0]);
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).unwrap();
        let compressed = encoder.finish().unwrap();

        let declared = declared.unwrap_or(payload.len() as u32);
        let mut container = declared.to_le_bytes().to_vec();
        container.extend_from_slice(&compressed);
        container
    }

    #[test]
    fn test_parse_single_record() {
        // The canonical one-record scenario: Sirius filed under Aql for the
        // sake of exercising constellation index 1.
        let container = build_container(&[(48915, 1, 1, 0)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        assert_eq!(catalog.len(), 1);
        let name = catalog.lookup(48915).unwrap();
        assert_eq!(name.constellation, "Aql");
        assert_eq!(name.bayer_index, 1);
        assert_eq!(name.multiplicity, 0);
    }

    #[test]
    fn test_lookup_absent_id() {
        let container = build_container(&[(48915, 1, 1, 0)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        assert_eq!(catalog.lookup(1), None);
        assert_eq!(catalog.lookup(0), None);
        assert_eq!(catalog.lookup(u32::MAX), None);
    }

    #[test]
    fn test_entry_at_end_of_sequence() {
        let container = build_container(&[(100, 2, 3, 0), (200, 39, 1, 0)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        assert!(catalog.entry_at(0).is_some());
        assert!(catalog.entry_at(1).is_some());
        assert_eq!(catalog.entry_at(2), None);
        assert_eq!(catalog.entry_at(usize::MAX), None);
    }

    #[test]
    fn test_entry_resolves_greek_triple() {
        let container = build_container(&[(636, 57, 3, 3)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        let entry = catalog.entry_at(0).unwrap();
        assert_eq!(entry.catalog_id, 636);
        assert_eq!(entry.constellation, "Oct");
        assert_eq!(entry.greek.symbol, "γ");
        assert_eq!(entry.greek.abbrev, "gam");
        assert_eq!(entry.greek.name, "Gamma");
        assert_eq!(entry.multiplicity, 3);
    }

    #[test]
    fn test_display_formats() {
        let container = build_container(&[(358, 2, 1, 0), (128620, 17, 1, 1)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        assert_eq!(catalog.entry_at(0).unwrap().to_string(), "α And");
        assert_eq!(catalog.entry_at(1).unwrap().to_string(), "α1 Cen");
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let container = build_container(&[], None);
        let catalog = BayerCatalog::parse(&container).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.entry_at(0), None);
    }

    #[test]
    fn test_truncated_container() {
        match BayerCatalog::parse(&[1, 2]) {
            Err(BayerError::TruncatedContainer(2)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_stream() {
        let mut container = 8u32.to_le_bytes().to_vec();
        container.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        match BayerCatalog::parse(&container) {
            Err(BayerError::Inflate(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_declared_size_mismatch() {
        // One 8-byte record but the prefix claims 16.
        let container = build_container(&[(48915, 1, 1, 0)], Some(16));

        match BayerCatalog::parse(&container) {
            Err(BayerError::SizeMismatch {
                declared: 16,
                actual: 8,
            }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_ragged_payload() {
        let mut payload = vec![0u8; 12]; // not a multiple of 8
        payload[0] = 1;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).unwrap();
        let compressed = encoder.finish().unwrap();
        let mut container = 12u32.to_le_bytes().to_vec();
        container.extend_from_slice(&compressed);

        match BayerCatalog::parse(&container) {
            Err(BayerError::RaggedPayload(12)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_zero_catalog_id_rejected() {
        let container = build_container(&[(358, 2, 1, 0), (0, 1, 1, 0)], None);

        match BayerCatalog::parse(&container) {
            Err(BayerError::ZeroCatalogId { position: 1 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        let container = build_container(&[(358, 89, 1, 0)], None);
        match BayerCatalog::parse(&container) {
            Err(BayerError::ConstellationOutOfRange { position: 0, value: 89 }) => {}
            other => panic!("unexpected: {:?}", other),
        }

        let container = build_container(&[(358, 2, 25, 0)], None);
        match BayerCatalog::parse(&container) {
            Err(BayerError::BayerOutOfRange { position: 0, value: 25 }) => {}
            other => panic!("unexpected: {:?}", other),
        }

        let container = build_container(&[(358, 0, 1, 0)], None);
        match BayerCatalog::parse(&container) {
            Err(BayerError::ConstellationOutOfRange { position: 0, value: 0 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_catalog_id_rejected() {
        let container = build_container(&[(358, 2, 1, 0), (432, 16, 2, 0), (358, 5, 3, 0)], None);

        match BayerCatalog::parse(&container) {
            Err(BayerError::DuplicateCatalogId {
                catalog_id: 358,
                position: 2,
            }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_iter_matches_entry_at() {
        let container = build_container(&[(358, 2, 1, 0), (432, 16, 2, 0), (493, 3, 10, 1)], None);
        let catalog = BayerCatalog::parse(&container).unwrap();

        let collected: Vec<BayerEntry> = catalog.iter().collect();
        assert_eq!(collected.len(), 3);
        for (position, entry) in collected.iter().enumerate() {
            assert_eq!(Some(*entry), catalog.entry_at(position));
        }
        assert_eq!(catalog.iter().len(), 3);
    }
}
