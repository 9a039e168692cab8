//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), `channels` samples per pixel
#[derive(Debug, Default, Clone)]
pub struct RenderingBuffer<T> {
    /// Sample data of Image
    pub data: Vec<T>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Samples per pixel
    pub channels: usize,
}

impl<T: Copy + Default> RenderingBuffer<T> {
    /// Create a new buffer of width, height, and channels
    ///
    /// Data for the Image is allocated and zeroed
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        RenderingBuffer {
            width, height, channels,
            data: vec![T::default(); width * height * channels],
        }
    }
    /// Size of underlying Rendering Buffer in samples
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Offset of the first sample of pixel (`x`,`y`), None if outside
    pub fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(((y as usize * self.width) + x as usize) * self.channels)
    }
    /// Samples of pixel (`x`,`y`)
    pub fn pixel(&self, x: i64, y: i64) -> Option<&[T]> {
        let i = self.offset(x, y)?;
        Some(&self.data[i .. i + self.channels])
    }
    /// Mutable samples of pixel (`x`,`y`)
    pub fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [T]> {
        let i = self.offset(x, y)?;
        let n = self.channels;
        Some(&mut self.data[i .. i + n])
    }
}
