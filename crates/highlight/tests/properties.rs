use highlight::{
    annotate, build_change_map, highlight, reconstruct, tokenize, ChangeMap, SubstitutionHint,
    TokenKind,
};
use proptest::prelude::*;

fn hint_strategy() -> impl Strategy<Value = SubstitutionHint> {
    ("[A-Za-z]{1,8}", "[A-Za-z]{1,8}[.,!?;:]?")
        .prop_map(|(original, replacement)| SubstitutionHint::new(original, replacement))
}

proptest! {
    #[test]
    fn tokenize_round_trips(s in ".*") {
        let tokens = tokenize(&s);
        prop_assert_eq!(reconstruct(&tokens), s);
    }

    #[test]
    fn tokens_alternate_and_cover_offsets(s in "[a-z ,.\t\n]{0,64}") {
        let tokens = tokenize(&s);
        let mut cursor = 0;
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
        for token in &tokens {
            prop_assert_eq!(token.start, cursor);
            prop_assert_eq!(&s[token.start..token.end], token.text.as_str());
            cursor = token.end;
        }
        prop_assert_eq!(cursor, s.len());
    }

    #[test]
    fn empty_map_never_marks(s in ".{0,120}") {
        let out = annotate(&tokenize(&s), &ChangeMap::new());
        prop_assert!(out.iter().all(|t| !t.changed && t.matched_original.is_none()));
    }

    #[test]
    fn separators_never_marked(
        text in "[A-Za-z ,.]{0,80}",
        hints in prop::collection::vec(hint_strategy(), 0..8),
    ) {
        let tokens = tokenize(&text);
        let out = annotate(&tokens, &build_change_map(&hints));
        for (token, annotated) in tokens.iter().zip(out.iter()) {
            if token.kind == TokenKind::Separator {
                prop_assert!(!annotated.changed);
            }
        }
    }

    #[test]
    fn changed_flag_independent_of_neighbours(
        word in "[A-Za-z]{1,8}[.,]?",
        prefix in "[A-Za-z ]{0,40}",
        hints in prop::collection::vec(hint_strategy(), 0..8),
    ) {
        let map = build_change_map(&hints);
        let alone = annotate(&tokenize(&word), &map);
        let in_context = annotate(&tokenize(&format!("{prefix} {word}")), &map);
        let last = in_context.last().unwrap();
        prop_assert_eq!(&alone[0], last);
    }

    #[test]
    fn highlight_preserves_rephrased_text(
        original in "[A-Za-z .,]{0,60}",
        rephrased in "[A-Za-z .,\n]{0,60}",
        hints in prop::collection::vec(hint_strategy(), 0..6),
    ) {
        prop_assert_eq!(highlight(&original, &rephrased, Some(&hints)).text(), rephrased.clone());
        prop_assert_eq!(highlight(&original, &rephrased, None).text(), rephrased);
    }
}
