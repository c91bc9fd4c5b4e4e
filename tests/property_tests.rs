//! Property-Based Tests for extract-settings
//!
//! These tests verify:
//! - Layout structure for arbitrary base directories
//! - Input/download alias equivalence
//! - ProvisionMode string round-trips

use extract_settings::{base_dir_for, DataLayout, ProvisionMode};
use proptest::prelude::*;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Strategy for plain path segments (no separators, no dot entries)
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

/// Strategy for absolute base directories
fn base_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|segments| {
        let mut path = PathBuf::from("/");
        path.extend(segments);
        path
    })
}

proptest! {
    /// Every layout directory sits at a fixed place under the base
    #[test]
    fn layout_structure(base in base_strategy()) {
        let layout = DataLayout::from_base(&base).unwrap();
        prop_assert_eq!(layout.base_dir(), base.as_path());
        let expected_data = base.join("data");
        let expected_input = base.join("data").join("input");
        let expected_output = base.join("data").join("output");
        prop_assert_eq!(layout.data_dir(), expected_data.as_path());
        prop_assert_eq!(layout.input_dir(), expected_input.as_path());
        prop_assert_eq!(layout.output_dir(), expected_output.as_path());
    }

    /// Download directory is always the input directory
    #[test]
    fn download_alias(base in base_strategy()) {
        let layout = DataLayout::from_base(&base).unwrap();
        prop_assert_eq!(layout.download_dir(), layout.input_dir());
    }

    /// The base of `<base>/<dir>/<file>` is `<base>`
    #[test]
    fn base_is_grandparent(
        base in base_strategy(),
        dir in segment_strategy(),
        file in segment_strategy()
    ) {
        let module = base.join(&dir).join(&file);
        prop_assert_eq!(base_dir_for(&module).unwrap(), base);
    }
}

#[test]
fn provision_mode_roundtrip() {
    for mode in ProvisionMode::iter() {
        let parsed: ProvisionMode = mode.to_string().parse().expect("Should parse");
        assert_eq!(mode, parsed);
    }
}
