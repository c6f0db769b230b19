//! Request-sized chunking of genomic-location lists.

use crate::consts::MAX_LOCATIONS_PER_REQUEST;

/// Splits the location list into contiguous chunks the enrichment service
/// will accept, lazily and in original order.
///
/// Purely request shaping: scores from different chunks of the same
/// accession are later kept as separate sheets but carry no chunk
/// semantics of their own.
pub fn chunk_locations(locations: &[String]) -> impl Iterator<Item = &[String]> {
    locations.chunks(MAX_LOCATIONS_PER_REQUEST)
}
