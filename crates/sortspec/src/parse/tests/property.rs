use crate::{direction::Direction, parse::parse};
use proptest::prelude::*;
use std::collections::BTreeSet;

const FIELDS: [&str; 4] = ["name", "created_at", "status", "rank"];

// One raw token: field index, descending flag, and padding choices.
fn arb_token() -> impl Strategy<Value = (usize, bool, String, String)> {
    (0..FIELDS.len(), any::<bool>(), " {0,3}", " {0,3}")
}

fn render(tokens: &[(usize, bool, String, String)]) -> String {
    tokens
        .iter()
        .map(|(idx, desc, left, right)| {
            let dash = if *desc { "-" } else { "" };
            format!("{left}{dash}{}{right}", FIELDS[*idx])
        })
        .collect::<Vec<_>>()
        .join(",")
}

// Left-to-right first-wins reference model.
fn expected(tokens: &[(usize, bool, String, String)]) -> Vec<(String, Direction)> {
    let mut out: Vec<(String, Direction)> = Vec::new();
    for (idx, desc, _, _) in tokens {
        let name = FIELDS[*idx];
        if out.iter().any(|(seen, _)| seen == name) {
            continue;
        }
        let direction = if *desc { Direction::Desc } else { Direction::Asc };
        out.push((name.to_string(), direction));
    }

    out
}

proptest! {
    #[test]
    fn parse_never_emits_duplicate_field_names(
        tokens in prop::collection::vec(arb_token(), 0..12)
    ) {
        let spec = parse(Some(&render(&tokens)));

        let mut seen = BTreeSet::new();
        for field in spec.iter() {
            prop_assert!(seen.insert(field.field.clone()), "duplicate {}", field.field);
        }
    }

    #[test]
    fn parse_matches_first_wins_reference_model(
        tokens in prop::collection::vec(arb_token(), 0..12)
    ) {
        let spec = parse(Some(&render(&tokens)));

        let got: Vec<(String, Direction)> = spec
            .iter()
            .map(|f| (f.field.clone(), f.direction))
            .collect();
        prop_assert_eq!(got, expected(&tokens));
    }

    #[test]
    fn padding_never_changes_the_parse(
        tokens in prop::collection::vec(arb_token(), 0..8)
    ) {
        let padded = parse(Some(&render(&tokens)));

        let bare: Vec<(usize, bool, String, String)> = tokens
            .iter()
            .map(|(idx, desc, _, _)| (*idx, *desc, String::new(), String::new()))
            .collect();
        let unpadded = parse(Some(&render(&bare)));

        prop_assert_eq!(padded, unpadded);
    }
}
