//! Tests for the error function and Gaussian box coverage

#[cfg(test)]
mod tests {
    use seedpattern::math::probability::{blur_sigma, erf, gaussian_box_coverage};

    // Tests erf against tabulated values
    #[test]
    fn test_erf_reference_values() {
        assert!(erf(0.0).abs() < 1e-7);
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 1e-6);
        assert!((erf(0.5) - 0.520_499_877_8).abs() < 1e-6);
        assert!((erf(3.0) - 0.999_977_909_5).abs() < 1e-6);
    }

    #[test]
    fn test_erf_is_odd() {
        for x in [0.1, 0.7, 1.9, 4.0] {
            assert!((erf(-x) + erf(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_blur_sigma_is_half_the_blur() {
        assert!((blur_sigma(10.0) - 5.0).abs() < f64::EPSILON);
    }

    // Tests coverage inside, outside and on the edge of a box
    #[test]
    fn test_gaussian_box_coverage_regions() {
        assert!(gaussian_box_coverage(0.0, -100.0, 100.0, 5.0) > 0.999_999);
        assert!(gaussian_box_coverage(500.0, -100.0, 100.0, 5.0) < 1e-6);
        assert!((gaussian_box_coverage(0.0, 0.0, 1000.0, 5.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_box_coverage_is_symmetric() {
        let left = gaussian_box_coverage(-3.0, -2.0, 2.0, 5.0);
        let right = gaussian_box_coverage(3.0, -2.0, 2.0, 5.0);
        assert!((left - right).abs() < 1e-12);
        assert!(gaussian_box_coverage(0.0, -2.0, 2.0, 5.0) > right);
    }

    // Tests that zero blur is a hard edge
    #[test]
    fn test_gaussian_box_coverage_without_blur() {
        assert!((gaussian_box_coverage(0.5, 0.0, 1.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!(gaussian_box_coverage(1.5, 0.0, 1.0, 0.0).abs() < f64::EPSILON);
    }
}
