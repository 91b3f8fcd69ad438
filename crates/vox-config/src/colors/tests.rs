//! Tests for color parsing and validation.

use super::*;

fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
}

#[test]
fn parse_hex_6_digit() {
    let c = parse_rgb("#4f46e5").unwrap();
    assert!(approx(c, [0.31, 0.275, 0.898]));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_rgb("#f00").unwrap();
    assert!(approx(c, [1.0, 0.0, 0.0]));
}

#[test]
fn parse_trims_whitespace() {
    let c = parse_rgb("  #ffffff ").unwrap();
    assert!(approx(c, [1.0, 1.0, 1.0]));
}

#[test]
fn parse_rejects_missing_hash() {
    let err = parse_rgb("4f46e5").unwrap_err();
    assert!(err.to_string().contains("unrecognized color format"));
}

#[test]
fn parse_rejects_bad_digits() {
    let err = parse_rgb("#zzzzzz").unwrap_err();
    assert!(err.to_string().contains("invalid hex color"));
}

#[test]
fn parse_or_falls_back() {
    let c = parse_rgb_or("nope", [0.1, 0.2, 0.3]);
    assert!(approx(c, [0.1, 0.2, 0.3]));
}

#[test]
fn validate_accepts_hex_forms() {
    assert!(validate_color("#e6b566"));
    assert!(validate_color("#ABC"));
}

#[test]
fn validate_rejects_other_forms() {
    assert!(!validate_color(""));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgba(0,0,0,1.0)"));
    assert!(!validate_color("amber"));
}
