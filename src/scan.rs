//! Scanline coverage accumulator

use crate::math::saturate;

/// Per column coverage of one output scanline
///
/// Values are accumulated in 1/256 pixel area units, a fully covered
/// pixel reaches 256 and is clamped to 255 when read.
#[derive(Debug, Clone, Default)]
pub struct SsScanline {
    pub line: Vec<i32>,
}

impl SsScanline {
    /// Accumulator for an image `width` pixels wide
    pub fn new(width: usize) -> Self {
        SsScanline { line: vec![0; width] }
    }
    /// Zero all columns
    pub fn reset(&mut self) {
        for v in self.line.iter_mut() {
            *v = 0;
        }
    }
    pub fn width(&self) -> usize {
        self.line.len()
    }
    /// Raw accumulated coverage of column `x`
    pub fn raw(&self, x: usize) -> i32 {
        self.line[x]
    }
    /// Saturated coverage of column `x`
    pub fn coverage(&self, x: usize) -> u8 {
        saturate(self.line[x])
    }
    /// First and one past last column with non zero coverage
    pub fn extent(&self) -> Option<(usize, usize)> {
        let left = self.line.iter().position(|&v| v > 0)?;
        let right = self.line.iter().rposition(|&v| v > 0)? + 1;
        Some((left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::SsScanline;
    #[test]
    fn extent_and_coverage() {
        let mut s = SsScanline::new(6);
        assert_eq!(s.extent(), None);
        s.line[1] = 256;
        s.line[2] = -4;
        s.line[4] = 17;
        assert_eq!(s.extent(), Some((1, 5)));
        assert_eq!(s.coverage(1), 255);
        assert_eq!(s.coverage(2), 0);
        assert_eq!(s.raw(4), 17);
        s.reset();
        assert_eq!(s.extent(), None);
        assert_eq!(s.width(), 6);
    }
}
