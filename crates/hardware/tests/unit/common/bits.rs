//! # Bit Helper Tests

use rv32i_core::common::bits::{mask, sign_extend};

#[test]
fn mask_covers_requested_width() {
    assert_eq!(mask(1), 0x1);
    assert_eq!(mask(8), 0xFF);
    assert_eq!(mask(12), 0xFFF);
    assert_eq!(mask(16), 0xFFFF);
    assert_eq!(mask(32), 0xFFFF_FFFF);
    assert_eq!(mask(63), 0x7FFF_FFFF_FFFF_FFFF);
}

#[test]
fn mask_full_width_does_not_overflow() {
    assert_eq!(mask(64), u64::MAX);
}

#[test]
fn sign_extend_negative_field() {
    assert_eq!(sign_extend(0x800, 12), -2048);
    assert_eq!(sign_extend(0xFFF, 12), -1);
    assert_eq!(sign_extend(0x8000_0000, 32), i64::from(i32::MIN));
}

#[test]
fn sign_extend_positive_field() {
    assert_eq!(sign_extend(0x7FF, 12), 2047);
    assert_eq!(sign_extend(0, 12), 0);
    assert_eq!(sign_extend(0x7FFF_FFFF, 32), i64::from(i32::MAX));
}

#[test]
fn sign_extend_ignores_bits_above_field() {
    assert_eq!(sign_extend(0xF000, 12), 0);
    assert_eq!(sign_extend(0xDEAD_0001, 16), 1);
    assert_eq!(sign_extend(0x1_FFFF_FFFF, 32), -1);
}

#[test]
fn sign_extend_full_width_is_reinterpretation() {
    assert_eq!(sign_extend(u64::MAX, 64), -1);
    assert_eq!(sign_extend(0x7FFF_FFFF_FFFF_FFFF, 64), i64::MAX);
}
