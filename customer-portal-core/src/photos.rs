//! Photo grid batches

/// Number of cells in the photo grid (3 × 3)
pub const PHOTO_GRID_SIZE: usize = 9;

/// Placeholder image service
const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/200";

/// Build the placeholder URL for one grid cell
#[must_use]
pub fn placeholder_url(index: usize) -> String {
    format!("{PLACEHOLDER_BASE_URL}?random={index}")
}

/// One complete set of photo grid URLs
///
/// Always holds exactly [`PHOTO_GRID_SIZE`] URLs. Batches are replaced
/// wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoBatch {
    urls: [String; PHOTO_GRID_SIZE],
    generation: u64,
}

impl PhotoBatch {
    /// Generate a fresh batch; URLs depend only on the cell index
    #[must_use]
    pub fn generate(generation: u64) -> Self {
        Self {
            urls: std::array::from_fn(placeholder_url),
            generation,
        }
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Refresh counter, 0 for the batch created at start-up
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for PhotoBatch {
    fn default() -> Self {
        Self::generate(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_has_nine_index_keyed_urls() {
        let batch = PhotoBatch::generate(3);
        assert_eq!(batch.urls().len(), PHOTO_GRID_SIZE);
        assert_eq!(batch.urls()[0], "https://picsum.photos/200?random=0");
        assert_eq!(batch.urls()[8], "https://picsum.photos/200?random=8");
        assert_eq!(batch.generation(), 3);
    }

    #[test]
    fn generation_does_not_change_urls() {
        assert_eq!(PhotoBatch::generate(1).urls(), PhotoBatch::generate(2).urls());
    }
}
