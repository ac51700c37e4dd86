#[cfg(test)]
mod prop_tests {
    use crate::model::language::Language;
    use crate::services::alt_text::build_alt_text;
    use crate::services::filename::build_filename;
    use crate::services::slug::slugify;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn slugify_idempotent(s in ".{0,200}") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn slug_has_no_edge_hyphens(s in ".{0,200}") {
            let slug = slugify(&s);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn slug_alphabet(s in ".{0,200}") {
            let slug = slugify(&s);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn filename_shape(
            name in "[A-Za-z0-9 ()_-]{0,60}",
            category in prop::sample::select(vec![
                "Family Ride", "Thrill Adventure", "Water Attraction", "Kiddie Fun", "Other",
            ]),
            lang in prop::sample::select(Language::ALL.to_vec()),
        ) {
            let file = build_filename(&name, lang, category);
            let suffix = format!("-{}-{}.jpg", lang.country(), lang.code());
            prop_assert!(file.ends_with(&suffix));
            prop_assert!(!file.chars().any(char::is_whitespace));
        }

        #[test]
        fn alt_text_embeds_right_name(
            en in "[A-Za-z ]{1,30}",
            zh in "[\u{4e00}-\u{4fff}]{1,8}",
            lang in prop::sample::select(Language::ALL.to_vec()),
        ) {
            let text = build_alt_text(&en, &zh, lang.code());
            if lang == Language::Chinese {
                prop_assert!(text.starts_with(&zh));
            } else {
                prop_assert!(text.starts_with(&en));
                prop_assert!(!text.contains(&zh));
            }
        }
    }
}
