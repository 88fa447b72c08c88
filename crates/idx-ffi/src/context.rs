use idx_dataset::ImageSample;

/// Opaque handle that owns every sample decoded from one IDX file.
pub struct IdxDataset {
    pub side_length: u32,
    pub samples: Vec<ImageSample>,
}

impl IdxDataset {
    pub fn new(side_length: u32, samples: Vec<ImageSample>) -> Self {
        Self {
            side_length,
            samples,
        }
    }

    pub fn sample(&self, index: usize) -> Option<&ImageSample> {
        self.samples.get(index)
    }
}
