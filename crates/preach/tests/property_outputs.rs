use proptest::prelude::*;

use preach::build_artifacts;
use preach_render::css::custom_properties;
use preach_render::{ColorNode, ColorTable, HexColor, Palette, Rgb};

fn color_strategy() -> impl Strategy<Value = HexColor> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| HexColor::from(Rgb { r, g, b }))
}

// camelCase keys, one level of nesting
fn table_strategy() -> impl Strategy<Value = ColorTable> {
    let node = prop_oneof![
        3 => color_strategy().prop_map(ColorNode::Leaf),
        1 => prop::collection::vec(("[a-z][a-zA-Z]{0,6}", color_strategy()), 1..4).prop_map(
            |entries| {
                ColorNode::Group(
                    entries
                        .into_iter()
                        .fold(ColorTable::new(), |table, (key, color)| table.color(key, color)),
                )
            }
        ),
    ];
    prop::collection::vec(("[a-z][a-zA-Z]{0,6}", node), 1..8).prop_map(|entries| {
        let mut table = ColorTable::new();
        for (key, node) in entries {
            table.insert(key, node);
        }
        table
    })
}

fn palette_strategy() -> impl Strategy<Value = Palette> {
    prop_oneof![
        table_strategy().prop_map(Palette::flat),
        (table_strategy(), table_strategy()).prop_map(|(light, dark)| {
            Palette::from_table(ColorTable::new().group("light", light).group("dark", dark))
                .unwrap()
        }),
    ]
}

proptest! {
    #[test]
    fn test_minified_matches_formatted(
        palette in palette_strategy(),
        prefix in "[a-z]{1,6}-",
    ) {
        let artifacts = build_artifacts(&palette, &prefix, false).unwrap();

        let formatted = custom_properties(&artifacts.stylesheet).unwrap();
        let minified = custom_properties(&artifacts.minified).unwrap();
        prop_assert_eq!(&formatted, &minified);
        prop_assert!(!formatted.is_empty());
        let want = format!("--{}", prefix);
        prop_assert!(formatted.iter().all(|p| p.name.starts_with(&want)));
    }

    #[test]
    fn test_media_block_only_for_themes(palette in palette_strategy()) {
        let artifacts = build_artifacts(&palette, "preach-", false).unwrap();
        prop_assert_eq!(
            artifacts.minified.contains("@media (prefers-color-scheme:dark)"),
            palette.is_themed()
        );
    }

    #[test]
    fn test_rendering_is_deterministic(palette in palette_strategy()) {
        let first = build_artifacts(&palette, "preach-", true).unwrap();
        let second = build_artifacts(&palette, "preach-", true).unwrap();
        prop_assert_eq!(first, second);
    }
}
