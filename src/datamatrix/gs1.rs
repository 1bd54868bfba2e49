//! Элементные строки GS1 для `DataMatrix`.
//!
//! Переменной длины поле (серийник, AI 91) завершается GS перед следующим AI.
//! GTIN (AI 01) фиксированной длины, поэтому AI 21 идёт сразу за ним.

use rand::Rng;

use crate::core::pad::{pad_gtin14, GTIN_LEN};
use crate::core::random::{generate_serial, random_base64ish, random_hex};

/// ASCII Group Separator (0x1D), он же FNC1 внутри данных.
pub const GS: char = '\u{1D}';

pub const AI_GTIN: &str = "01";
pub const AI_SERIAL: &str = "21";
pub const AI_KEY_ID: &str = "91";
pub const AI_SIGNATURE: &str = "92";
pub const AI_CHECK_CODE: &str = "93";

pub const TYPE1_SERIAL_LEN: usize = 7;
pub const TYPE1_TAIL_LEN: usize = 4;
pub const TYPE2_SERIAL_LEN: usize = 13;
pub const TYPE2_KEY_LEN: usize = 4;
pub const TYPE2_TAIL_LEN: usize = 44;

/// 01 + GTIN(14) + 21 + серийник(7, начинается с '0') + GS + 93 + хвост(4). Всего 32.
pub fn generate_type1<R: Rng + ?Sized>(gtin: &str, rng: &mut R) -> String {
    let serial = generate_serial("0", TYPE1_SERIAL_LEN, rng);
    let tail = random_base64ish(TYPE1_TAIL_LEN, rng);

    let mut out = String::with_capacity(type1_len());
    push_gtin_and_serial(&mut out, gtin, &serial);
    out.push(GS);
    out.push_str(AI_CHECK_CODE);
    out.push_str(&tail);
    out
}

/// 01 + GTIN(14) + 21 + серийник(13, начинается с '5') + GS + 91 + hex(4)
/// + GS + 92 + хвост(44). Всего 85.
pub fn generate_type2<R: Rng + ?Sized>(gtin: &str, rng: &mut R) -> String {
    let serial = generate_serial("5", TYPE2_SERIAL_LEN, rng);
    let key = random_hex(TYPE2_KEY_LEN, rng);
    let tail = random_base64ish(TYPE2_TAIL_LEN, rng);

    let mut out = String::with_capacity(type2_len());
    push_gtin_and_serial(&mut out, gtin, &serial);
    out.push(GS);
    out.push_str(AI_KEY_ID);
    out.push_str(&key);
    out.push(GS);
    out.push_str(AI_SIGNATURE);
    out.push_str(&tail);
    out
}

fn push_gtin_and_serial(out: &mut String, gtin: &str, serial: &str) {
    out.push_str(AI_GTIN);
    out.push_str(&pad_gtin14(gtin));
    out.push_str(AI_SERIAL);
    out.push_str(serial);
}

#[must_use]
pub const fn type1_len() -> usize {
    2 + GTIN_LEN + 2 + TYPE1_SERIAL_LEN + 1 + 2 + TYPE1_TAIL_LEN
}

#[must_use]
pub const fn type2_len() -> usize {
    2 + GTIN_LEN + 2 + TYPE2_SERIAL_LEN + 1 + 2 + TYPE2_KEY_LEN + 1 + 2 + TYPE2_TAIL_LEN
}
