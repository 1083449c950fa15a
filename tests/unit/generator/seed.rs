//! Tests for seed hashing and the sine draw sequence against reference values

#[cfg(test)]
mod tests {
    use seedpattern::generator::seed::{SineRandom, hash_seed};

    const TOLERANCE: f64 = 1e-9;

    fn first_draws(seed: &str, count: usize) -> Vec<f64> {
        SineRandom::from_seed(seed).take(count).collect()
    }

    fn assert_draws(seed: &str, expected: &[f64]) {
        let actual = first_draws(seed, expected.len());
        for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a - e).abs() < TOLERANCE,
                "draw {index} of {seed:?}: expected {e}, got {a}"
            );
        }
    }

    // Tests the rolling hash on literal strings
    #[test]
    fn test_hash_seed_reference_values() {
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("abc"), 96_354);
        assert_eq!(hash_seed("unxai"), 111_447_399);
    }

    // Tests 32-bit wraparound on a long name
    #[test]
    fn test_hash_seed_wraps_to_negative() {
        assert_eq!(hash_seed("monitor-mcp-server"), -1_295_448_791);
        assert_eq!(hash_seed("project-1"), -894_833_027);
        assert_eq!(hash_seed("project-2"), -894_833_026);
    }

    // Tests that astral characters hash as their two UTF-16 surrogates
    #[test]
    fn test_hash_seed_astral_character() {
        assert_eq!(hash_seed("\u{1F600}"), 1_772_899);
    }

    // Tests that long and unusual seeds hash without panicking
    #[test]
    fn test_hash_seed_arbitrary_input() {
        let long = "x".repeat(10_000);
        let _ = hash_seed(&long);
        let _ = hash_seed("ñ\u{0}\u{10FFFF}\r\n");
    }

    #[test]
    fn test_first_draws_for_a() {
        assert_draws(
            "a",
            &[
                0.077_390_275_217_112_503,
                0.181_280_095_771_398_92,
                0.931_658_136_463_738_63,
                0.343_588_902_412_193_42,
            ],
        );
    }

    #[test]
    fn test_first_draws_for_abc() {
        assert_draws(
            "abc",
            &[
                0.438_732_097_587_489_99,
                0.403_762_473_745_700_85,
                0.564_877_315_544_164_47,
                0.775_752_688_839_929_76,
            ],
        );
    }

    #[test]
    fn test_first_draws_for_unxai() {
        assert_draws(
            "unxai",
            &[
                0.787_399_860_858_840_84,
                0.860_930_791_719_511_03,
                0.084_515_932_237_991_365,
                0.247_255_397_606_750_19,
            ],
        );
    }

    // Tests that the empty seed starts at sin(0)
    #[test]
    fn test_empty_seed_first_draw_is_zero() {
        let mut random = SineRandom::from_seed("");
        assert!(random.next_draw().abs() < f64::EPSILON);
        assert!((random.next_draw() - 0.709_848_078_964_569_14).abs() < TOLERANCE);
    }

    // Tests that adjacent hashes yield the same stream shifted by one draw
    #[test]
    fn test_adjacent_hashes_shift_the_stream() {
        let one = first_draws("project-1", 4);
        let two = first_draws("project-2", 3);
        assert_eq!(one.get(1..), Some(two.as_slice()));
    }

    #[test]
    fn test_draws_stay_in_unit_interval() {
        for seed in ["", "a", "monitor-mcp-server", "\u{1F600}"] {
            for value in first_draws(seed, 500) {
                assert!((0.0..1.0).contains(&value), "{value} out of range");
            }
        }
    }

    #[test]
    fn test_counter_starts_at_hash_and_increments() {
        let mut random = SineRandom::new(-5);
        assert_eq!(random.counter(), -5);
        random.next_draw();
        random.next_draw();
        random.next_draw();
        assert_eq!(random.counter(), -2);
    }

    // Tests that the counter keeps counting past the 32-bit range
    #[test]
    fn test_counter_does_not_wrap() {
        let mut random = SineRandom::new(i32::MAX);
        random.next_draw();
        assert_eq!(random.counter(), i64::from(i32::MAX) + 1);
    }

    #[test]
    fn test_from_seed_matches_new() {
        assert_eq!(
            SineRandom::from_seed("monitor-mcp-server"),
            SineRandom::new(hash_seed("monitor-mcp-server"))
        );
    }

    #[test]
    fn test_next_index_floors() {
        let mut random = SineRandom::from_seed("abc");
        assert_eq!(random.next_index(3.0), 1);
        assert_eq!(random.next_index(10.0), 4);
    }
}
