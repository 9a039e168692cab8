//! One bit per pixel coverage mask

/// Dense bit mask of `width * height` pixels
#[derive(Debug, Clone)]
pub struct Bitmap {
    bits: Vec<u8>,
    width: i64,
    height: i64,
}

impl Bitmap {
    /// Create a cleared mask
    pub fn new(width: i64, height: i64) -> Self {
        let n = (width.max(0) * height.max(0)) as usize;
        Bitmap { bits: vec![0; (n + 7) / 8], width, height }
    }
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }
    /// Is pixel (`x`,`y`) set, false outside of the mask
    pub fn test(&self, x: i64, y: i64) -> bool {
        match self.index(x, y) {
            Some(i) => self.bits[i / 8] & (1 << (i % 8)) != 0,
            None => false,
        }
    }
    /// Set pixel (`x`,`y`), ignored outside of the mask
    pub fn set(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.bits[i / 8] |= 1 << (i % 8);
        }
    }
    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }
}
