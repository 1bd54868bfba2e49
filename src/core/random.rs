//! Случайные токены для серийников и «крипто-хвостов» GS1.
//!
//! Криптостойкость не нужна: хвост должен лишь выглядеть как подпись.
//! RNG всегда передаётся явно; с засеянным `ChaCha8Rng` вывод воспроизводим.
//! Длины имеют тип `usize`, отрицательная длина непредставима; `n == 0` даёт `""`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const HEX: &[u8] = b"0123456789ABCDEF";
// не настоящий base64: без паддинга, просто фиксированный алфавит-заполнитель
const BASE64ISH: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const DIGITS: &[u8] = b"0123456789";

/// Алфавиты случайных токенов.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alphabet {
    /// A–Z, a–z, 0–9 (62 символа).
    Alphanumeric,
    /// 0–9, A–F, верхний регистр.
    Hex,
    /// A–Z, a–z, 0–9, `+`, `/` (64 символа).
    Base64ish,
    /// 0–9.
    Digits,
}

impl Alphabet {
    #[inline]
    #[must_use]
    pub const fn chars(self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Hex => HEX,
            Self::Base64ish => BASE64ISH,
            Self::Digits => DIGITS,
        }
    }
}

/// `n` символов, равномерно и с возвращением из `alphabet`.
pub fn random_from<R: Rng + ?Sized>(alphabet: Alphabet, n: usize, rng: &mut R) -> String {
    let chars = alphabet.chars();
    (0..n)
        .map(|_| char::from(chars[rng.random_range(0..chars.len())]))
        .collect()
}

#[inline]
pub fn random_digits<R: Rng + ?Sized>(n: usize, rng: &mut R) -> String {
    random_from(Alphabet::Digits, n, rng)
}

#[inline]
pub fn random_hex<R: Rng + ?Sized>(n: usize, rng: &mut R) -> String {
    random_from(Alphabet::Hex, n, rng)
}

#[inline]
pub fn random_base64ish<R: Rng + ?Sized>(n: usize, rng: &mut R) -> String {
    random_from(Alphabet::Base64ish, n, rng)
}

/// Серийник: `prefix` + алфавитно-цифровые символы до общей длины `len`.
/// Префикс не короче `len` возвращается как есть.
pub fn generate_serial<R: Rng + ?Sized>(prefix: &str, len: usize, rng: &mut R) -> String {
    let missing = len.saturating_sub(prefix.chars().count());
    let mut serial = String::with_capacity(prefix.len() + missing);
    serial.push_str(prefix);
    serial.push_str(&random_from(Alphabet::Alphanumeric, missing, rng));
    serial
}

/// Равномерное целое из `[min, max]` (вес в граммах, скидка в процентах).
/// Перевёрнутые границы меняются местами.
pub fn random_in_range<R: Rng + ?Sized>(min: u32, max: u32, rng: &mut R) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Одна случайная цифра 0..=9.
#[inline]
pub fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..10u8)
}

/// RNG, засеянный из ОС, для интерактивной генерации.
#[inline]
#[must_use]
pub fn os_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_os_rng()
}

/// Детерминированный RNG для тестов и воспроизводимых наборов.
#[inline]
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
