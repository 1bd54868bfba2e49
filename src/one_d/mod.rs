pub mod code128;
pub mod ean13;
pub mod family;
pub mod weight;

use rand::Rng;
use tracing::{debug, warn};

use crate::core::error::ValidationError;
use crate::core::random::random_digit;
use crate::core::types::{BarcodeFormat, EncodedCode};
use family::{BarcodeFamily, FieldValues};

/// Цифра 0..=9 → ASCII-символ.
#[inline]
pub(crate) fn digit_char(d: u8) -> char {
    char::from(b'0' + d % 10)
}

/// Ручная форма: поля семейства → код с контрольной цифрой.
///
/// Поле длиннее своей ширины (после очистки от нецифровых символов) отменяет
/// генерацию целиком, ничего не обрезается. `simulate_error` заменяет
/// вычисленную контрольную цифру на случайную *другую* (для демонстрации
/// отказа сканера); у семейств с фиксированной цифрой флаг игнорируется.
///
/// # Errors
///
/// [`ValidationError`] со всеми превысившими ширину полями.
pub fn generate_from_field_config<R: Rng + ?Sized>(
    family: BarcodeFamily,
    values: &FieldValues,
    simulate_error: bool,
    rng: &mut R,
) -> Result<EncodedCode, ValidationError> {
    let mut code = family.build_payload(values).inspect_err(|err| {
        warn!(family = family.id(), error = %err, "поля не прошли проверку");
    })?;

    let check = family.check_digit();
    let mut ctrl = check.compute(&code);
    if simulate_error && !check.is_fixed() {
        ctrl = wrong_digit(ctrl, rng);
        debug!(family = family.id(), "контрольная цифра намеренно испорчена");
    }
    code.push(ctrl);

    debug!(family = family.id(), code = %code, "штрих-код из формы");
    Ok(EncodedCode::new(code, family.format()))
}

/// Случайная цифра, отличная от `right` (перевыбор до несовпадения).
fn wrong_digit<R: Rng + ?Sized>(right: char, rng: &mut R) -> char {
    loop {
        let d = digit_char(random_digit(rng));
        if d != right {
            return d;
        }
    }
}

/// `SimpleGen`: обрезает пробелы; для EAN13 и ровно 12 цифр дописывает
/// контрольную. Остальное как есть (валидность на вызывающем).
///
/// ```
/// use bargen::{BarcodeFormat, one_d::generate_simple};
///
/// assert_eq!(generate_simple("590123412345", BarcodeFormat::Ean13).code, "5901234123457");
/// assert_eq!(generate_simple(" ABC-1 ", BarcodeFormat::Code128).code, "ABC-1");
/// ```
#[must_use]
pub fn generate_simple(value: &str, format: BarcodeFormat) -> EncodedCode {
    let trimmed = value.trim();
    let code = match format {
        BarcodeFormat::Ean13 => ean13::complete_ean13(trimmed).unwrap_or_else(|| trimmed.to_owned()),
        _ => trimmed.to_owned(),
    };
    EncodedCode::new(code, format)
}
