use std::borrow::Cow;

use icu_normalizer::ComposingNormalizerBorrowed;

use crate::tables::Tables;

/// результат быстрой проверки
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QuickCheck
{
    Yes,
    No,
    Maybe,
}

/// кодпоинты до U+0300 не участвуют в композиции и имеют CCC = 0
const FIRST_COMPOSING_CODE: u32 = 0x300;

/// быстрая проверка, находится ли последовательность в форме NFC
///
/// Yes - строка гарантированно нормализована, No / Maybe - требуется полная проверка
pub fn quick_check(tables: &Tables, codes: &[u32]) -> QuickCheck
{
    let mut last_ccc = 0;

    for &code in codes {
        if code < FIRST_COMPOSING_CODE {
            last_ccc = 0;
            continue;
        }

        let ccc = tables.combining_class(code);

        // нестартеры идут не по порядку
        if ccc != 0 && last_ccc > ccc {
            return QuickCheck::No;
        }

        match tables.nfc_quick_check(code) {
            QuickCheck::Yes => (),
            result => return result,
        }

        last_ccc = ccc;
    }

    QuickCheck::Yes
}

/// нормализована ли строка
pub fn is_nfc(tables: &Tables, text: &str, codes: &[u32]) -> bool
{
    match quick_check(tables, codes) {
        QuickCheck::Yes => true,
        _ => is_normalized_nfc(text),
    }
}

/// нормализовать строку, если быстрая проверка этого требует
pub fn to_nfc(tables: &Tables, text: String, codes: &[u32]) -> String
{
    match quick_check(tables, codes) {
        QuickCheck::Yes => text,
        _ => {
            log::debug!("NFC-нормализация: {:?}", text);

            normalize_nfc(&text).into_owned()
        }
    }
}

/// полная проверка NFC
#[inline]
pub fn is_normalized_nfc(text: &str) -> bool
{
    ComposingNormalizerBorrowed::new_nfc().is_normalized(text)
}

/// NFC-нормализация
#[inline]
pub fn normalize_nfc(text: &str) -> Cow<str>
{
    ComposingNormalizerBorrowed::new_nfc().normalize(text)
}
