// crates/quotemend-core/tests/normalize_collapse.rs

use std::borrow::Cow;

use quotemend_core::collapse::collapse_quirky_breaks;
use quotemend_core::diag::{count_char, BreakCounts};
use quotemend_core::newline::{NewlineToken, CATALOG};
use quotemend_core::normalize::normalize_field;

#[test]
fn catalog_tries_two_byte_token_first() {
    assert_eq!(CATALOG[0], NewlineToken::CrLf);
    assert_eq!(CATALOG[0].byte_len(), 2);
}

#[test]
fn crlf_replaced_as_unit() {
    assert_eq!(normalize_field("a\r\nb\"", &CATALOG, "_"), "a_b\"");
}

#[test]
fn mixed_breaks_each_replaced_once() {
    assert_eq!(normalize_field("1\n2\r3\r\n4\n\r5", &CATALOG, " "), "1 2 3 4  5");
}

#[test]
fn field_without_breaks_is_borrowed() {
    assert!(matches!(
        normalize_field("plain\"", &CATALOG, "_"),
        Cow::Borrowed("plain\"")
    ));
}

#[test]
fn catalog_order_matters() {
    // LF before CRLF would leave a dangling CR behind to be replaced again.
    let reversed = [NewlineToken::Lf, NewlineToken::Cr, NewlineToken::CrLf];
    assert_eq!(normalize_field("a\r\nb", &reversed, "_"), "a__b");
    assert_eq!(normalize_field("a\r\nb", &CATALOG, "_"), "a_b");
}

#[test]
fn collapse_counts_sites() {
    let (out, n) = collapse_quirky_breaks("a\r\r\nb\r\r\nc\r\n".to_string());
    assert_eq!(out, "a\r\nb\r\nc\r\n");
    assert_eq!(n, 2);
}

#[test]
fn collapse_is_single_left_to_right_pass() {
    let (out, n) = collapse_quirky_breaks("\r\r\r\n".to_string());
    assert_eq!(out, "\r\r\n");
    assert_eq!(n, 1);
}

#[test]
fn collapse_without_sites_is_noop() {
    let (out, n) = collapse_quirky_breaks("a\r\nb\n\r".to_string());
    assert_eq!(out, "a\r\nb\n\r");
    assert_eq!(n, 0);
}

#[test]
fn counts_cr_and_lf() {
    assert_eq!(count_char("a\r\nb\rc\n", '\r'), 2);
    assert_eq!(count_char("a\r\nb\rc\n", '\n'), 2);
    assert_eq!(count_char("ééa", 'é'), 2);
    assert_eq!(BreakCounts::of("\r\n\n"), BreakCounts { cr: 1, lf: 2 });
    assert_eq!(BreakCounts::of(""), BreakCounts::default());
}
