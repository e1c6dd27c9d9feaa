// crates/quotemend-core/tests/properties.rs

use proptest::prelude::*;
use quotemend_core::collapse::collapse_quirky_breaks;
use quotemend_core::diag::count_char;
use quotemend_core::newline::CATALOG;
use quotemend_core::normalize::normalize_field;
use quotemend_core::scan::{SpanKind, Spans};
use quotemend_core::{repair, RepairConfig, RepairError};

fn doc_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', ',', ' ', '"', '\r', '\n', 'é']),
        0..96,
    )
    .prop_map(|v| v.into_iter().collect())
}

fn cfg() -> RepairConfig {
    RepairConfig::new('"', "_")
}

proptest! {
    #[test]
    fn odd_guard_count_is_unterminated(doc in doc_strategy()) {
        let guards = count_char(&doc, '"');
        let res = repair(&doc, &cfg());
        if guards % 2 == 1 {
            let is_unterminated = matches!(res, Err(RepairError::UnterminatedGuard { .. }));
            prop_assert!(is_unterminated);
        } else {
            prop_assert!(res.is_ok());
        }
    }

    #[test]
    fn guards_are_conserved(doc in doc_strategy()) {
        if let Ok(out) = repair(&doc, &cfg()) {
            prop_assert_eq!(count_char(&out.text, '"'), count_char(&doc, '"'));
        }
    }

    #[test]
    fn spans_partition_the_input(doc in doc_strategy()) {
        let spans: Result<Vec<_>, _> = Spans::new(&doc, '"').collect();
        if let Ok(spans) = spans {
            let mut next = 0usize;
            let mut joined = String::new();
            for span in &spans {
                prop_assert_eq!(span.start, next);
                prop_assert!(!span.is_empty());
                joined.push_str(span.slice(&doc));
                next = span.end;
            }
            prop_assert_eq!(next, doc.len());
            prop_assert_eq!(joined, doc);
        }
    }

    #[test]
    fn length_accounts_for_every_change(doc in doc_strategy()) {
        if let Ok(out) = repair(&doc, &cfg()) {
            let mut expected = doc.len();
            for span in Spans::new(&doc, '"') {
                let span = span.unwrap();
                if span.kind == SpanKind::Guarded {
                    let field = span.slice(&doc);
                    let normalized = normalize_field(field, &CATALOG, "_");
                    expected = expected - field.len() + normalized.len();
                }
            }
            expected -= out.report.quirky_breaks;
            prop_assert_eq!(out.text.len(), expected);
        }
    }

    #[test]
    fn normalization_is_idempotent(field in doc_strategy()) {
        let once = normalize_field(&field, &CATALOG, "_").into_owned();
        let twice = normalize_field(&once, &CATALOG, "_");
        prop_assert_eq!(&*twice, once.as_str());
        prop_assert!(!once.contains(['\r', '\n']));
    }

    #[test]
    fn unguarded_text_only_sees_collapse(doc in doc_strategy()) {
        let plain: String = doc.chars().filter(|&c| c != '"').collect();
        let out = repair(&plain, &cfg()).unwrap();
        let (collapsed, n) = collapse_quirky_breaks(plain.clone());
        prop_assert_eq!(out.text, collapsed);
        prop_assert_eq!(out.report.quirky_breaks, n);
        prop_assert_eq!(out.report.guarded_spans, 0);
    }

    #[test]
    fn break_free_input_is_unchanged(doc in doc_strategy()) {
        let flat: String = doc.chars().filter(|&c| c != '\r' && c != '\n').collect();
        if let Ok(out) = repair(&flat, &cfg()) {
            prop_assert_eq!(out.text, flat);
            prop_assert_eq!(out.report.normalized_spans, 0);
        }
    }
}
