use super::DitherKernel;
use serde::{Serialize, Deserialize};

/// Available dithering algorithms
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Hash)]
pub enum Algorithm {
    FloydSteinberg,
    JarvisJudiceNinke,
    Atkinson,
    Stucki,
    Sierra,
    Sierra2,
    SierraLite,
    Burkes,
    /// Plain threshold, no error diffusion
    OneBpp
}

impl Eq for Algorithm{}

impl Default for Algorithm {
    fn default() -> Algorithm {
        Algorithm::FloydSteinberg
    }
}

impl Algorithm {
    /// Matrix, divisor, and whether the divisor is a shift amount
    fn parameters(&self) -> (Vec<Vec<u8>>, u8, bool) {
        match self {
            Algorithm::FloydSteinberg => (vec![
                vec![0, 0, 7],
                vec![3, 5, 1]
            ], 4, true),
            Algorithm::JarvisJudiceNinke => (vec![
                vec![0, 0, 0, 7, 5],
                vec![3, 5, 7, 5, 3],
                vec![1, 3, 5, 3, 1]
            ], 48, false),
            Algorithm::Atkinson => (vec![
                vec![0, 0, 1, 1],
                vec![1, 1, 1, 0],
                vec![0, 1, 0, 0]
            ], 3, true),
            Algorithm::Stucki => (vec![
                vec![0, 0, 0, 8, 4],
                vec![2, 4, 8, 4, 2],
                vec![1, 2, 4, 2, 1]
            ], 42, false),
            Algorithm::Sierra => (vec![
                vec![0, 0, 0, 5, 3],
                vec![2, 4, 5, 4, 2],
                vec![0, 2, 3, 2, 0]
            ], 5, true),
            Algorithm::Sierra2 => (vec![
                vec![0, 0, 0, 4, 3],
                vec![1, 2, 3, 2, 1]
            ], 4, true),
            Algorithm::SierraLite => (vec![
                vec![0, 0, 2],
                vec![1, 1, 0]
            ], 2, true),
            Algorithm::Burkes => (vec![
                vec![0, 0, 0, 8, 4],
                vec![2, 4, 8, 4, 2]
            ], 5, true),
            Algorithm::OneBpp => (vec![
                vec![1]
            ], 1, false)
        }
    }

    /// Kernel of the algorithm, with the given threshold
    pub fn kernel(&self, threshold: u8) -> DitherKernel {
        let (matrix, divisor, use_shift) = self.parameters();
        match DitherKernel::new(matrix, divisor, threshold, use_shift) {
            Ok(kernel) => kernel,
            Err(e) => unreachable!("built-in kernel {:?} is invalid, {}", self, e)
        }
    }

    pub fn all() -> [Algorithm; 9] {
        [
            Algorithm::FloydSteinberg,
            Algorithm::JarvisJudiceNinke,
            Algorithm::Atkinson,
            Algorithm::Stucki,
            Algorithm::Sierra,
            Algorithm::Sierra2,
            Algorithm::SierraLite,
            Algorithm::Burkes,
            Algorithm::OneBpp
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_kernel_is_valid() {
        for algorithm in Algorithm::all().iter() {
            let kernel = algorithm.kernel(128);
            assert_eq!(128, kernel.threshold());
        }
    }

    #[test]
    fn anchors() {
        assert_eq!(1, Algorithm::FloydSteinberg.kernel(128).anchor_offset());
        assert_eq!(2, Algorithm::JarvisJudiceNinke.kernel(128).anchor_offset());
        assert_eq!(1, Algorithm::Atkinson.kernel(128).anchor_offset());
        assert_eq!(2, Algorithm::Burkes.kernel(128).anchor_offset());
        assert_eq!(1, Algorithm::SierraLite.kernel(128).anchor_offset());
    }
}
