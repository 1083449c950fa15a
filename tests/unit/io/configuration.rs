//! Tests for rendering constants

#[cfg(test)]
mod tests {
    use seedpattern::io::configuration::{
        BACKGROUND_END, BACKGROUND_START, DATA_URI_PREFIX, FLOW_CONTROL_X, GRID_LINE_COLOR,
        GRID_MIN_STEP, GRID_STEP_RANGE, MARKER_COLOR, NODE_ALPHA, PATTERN_HEIGHT, PATTERN_WIDTH,
        STYLE_COUNT,
    };

    #[test]
    fn test_surface_is_400_by_250() {
        assert_eq!((PATTERN_WIDTH, PATTERN_HEIGHT), (400, 250));
    }

    #[test]
    fn test_background_runs_from_dark_to_lighter() {
        assert_eq!(BACKGROUND_START.to_pixel(), [0x0a, 0x0a, 0x0a, 255]);
        assert_eq!(BACKGROUND_END.to_pixel(), [0x1a, 0x1a, 0x1a, 255]);
    }

    #[test]
    fn test_style_count_matches_styles() {
        assert_eq!(STYLE_COUNT as usize, seedpattern::PatternStyle::ALL.len());
    }

    // Tests the grid spacing stays within 20..=39 pixels
    #[test]
    fn test_grid_step_bounds() {
        assert_eq!(GRID_MIN_STEP, 20);
        assert!(GRID_STEP_RANGE > 0.0);
        assert!(f64::from(GRID_MIN_STEP) + GRID_STEP_RANGE <= 40.0);
    }

    #[test]
    fn test_grid_colours_share_hue() {
        let [r, g, b, _] = MARKER_COLOR.to_pixel();
        assert_eq!([r, g, b], [59, 130, 246]);
        assert_eq!(GRID_LINE_COLOR.with_alpha(1.0).to_pixel(), [59, 130, 246, 255]);
        assert!((GRID_LINE_COLOR.a - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flow_control_points_are_ordered() {
        assert!(FLOW_CONTROL_X[0] < FLOW_CONTROL_X[1]);
        assert!((f64::from(PATTERN_WIDTH) * FLOW_CONTROL_X[0] - 120.0).abs() < 1e-9);
        assert!((f64::from(PATTERN_WIDTH) * FLOW_CONTROL_X[1] - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_misc_constants() {
        assert!((NODE_ALPHA - 0.4).abs() < f64::EPSILON);
        assert_eq!(DATA_URI_PREFIX, "data:image/png;base64,");
    }
}
