use crate::Error;

/// Error diffusion kernel
///
/// The matrix holds the weight each neighbour receives. Its first row describes the current scan line: the entries up to and including the pixel being processed are zero, so the column of the first non zero entry, minus one, is where the current pixel sits (the anchor offset).
///
/// The weighted error is normalized either with an integer division by `divisor`, or, for shiftable kernels, with a right shift by `divisor` bits.
#[derive(Clone, Debug, PartialEq)]
pub struct DitherKernel {
    matrix: Vec<Vec<u8>>,
    divisor: u8,
    threshold: u8,
    use_shift: bool,
    anchor_offset: isize
}

impl DitherKernel {
    /// Builds a kernel, failing on an empty matrix, a first row without weights or a zero divisor
    ///
    /// ```rust
    /// use thermal_rs::imaging::DitherKernel;
    ///
    /// let kernel = DitherKernel::new(vec![vec![0, 0, 7], vec![3, 5, 1]], 16, 128, false).unwrap();
    /// assert_eq!(1, kernel.anchor_offset());
    /// assert!(DitherKernel::new(vec![vec![0, 0], vec![1, 1]], 2, 128, false).is_err());
    /// assert!(DitherKernel::new(vec![vec![0, 1]], 0, 128, false).is_err());
    /// ```
    pub fn new(matrix: Vec<Vec<u8>>, divisor: u8, threshold: u8, use_shift: bool) -> Result<DitherKernel, Error> {
        if matrix.is_empty() || matrix.iter().any(|row| row.is_empty()) {
            return Err(Error::InvalidKernel("the matrix is empty".to_string()));
        }
        if divisor == 0 {
            return Err(Error::InvalidKernel("the divisor is zero".to_string()));
        }
        let first_weight = match matrix[0].iter().position(|weight| *weight != 0) {
            Some(column) => column,
            None => return Err(Error::InvalidKernel("the first row carries no weight".to_string()))
        };
        Ok(DitherKernel {
            matrix,
            divisor,
            threshold,
            use_shift,
            anchor_offset: first_weight as isize - 1
        })
    }

    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    pub fn divisor(&self) -> u8 {
        self.divisor
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn use_shift(&self) -> bool {
        self.use_shift
    }

    pub fn anchor_offset(&self) -> isize {
        self.anchor_offset
    }

    /// Share of `error` a tap with the given weight receives
    pub fn scale(&self, error: i32, weight: u8) -> i32 {
        let weighted = error * weight as i32;
        if self.use_shift {
            weighted >> self.divisor
        } else {
            weighted / self.divisor as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_first_weight_minus_one() {
        let kernel = DitherKernel::new(vec![vec![0, 0, 0, 7, 5], vec![3, 5, 7, 5, 3]], 48, 128, false).unwrap();
        assert_eq!(2, kernel.anchor_offset());
        let degenerate = DitherKernel::new(vec![vec![1]], 1, 128, false).unwrap();
        assert_eq!(-1, degenerate.anchor_offset());
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert!(DitherKernel::new(vec![], 1, 128, false).is_err());
        assert!(DitherKernel::new(vec![vec![]], 1, 128, false).is_err());
        assert!(DitherKernel::new(vec![vec![1], vec![]], 1, 128, false).is_err());
    }

    #[test]
    fn shift_and_division_scaling() {
        let shifted = DitherKernel::new(vec![vec![0, 7]], 4, 128, true).unwrap();
        assert_eq!(7, shifted.scale(16, 7));
        assert_eq!(-7, shifted.scale(-16, 7));
        let divided = DitherKernel::new(vec![vec![0, 7]], 16, 128, false).unwrap();
        assert_eq!(6, divided.scale(15, 7));
        assert_eq!(-6, divided.scale(-15, 7));
    }
}
