/// получаем количество байт в последовательности UTF-8
///
/// 0xED допускается целиком: суррогаты декодируются как есть, без замены
#[inline(always)]
pub fn get_utf8_sequence_width(first: u8) -> u8
{
    match first {
        0 ..= 0x7F => 1,
        0xC2 ..= 0xDF => 2,
        0xE0 ..= 0xEF => 3,
        0xF0 ..= 0xF4 => 4,
        _ => 0,
    }
}

/// допустимый диапазон второго байта последовательности, зависит от первого байта
#[inline(always)]
pub fn second_byte_range(first: u8) -> (u8, u8)
{
    match first {
        // без overlong-последовательностей
        0xE0 => (0xA0, 0xBF),
        0xF0 => (0x90, 0xBF),
        // не больше U+10FFFF
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// маска, использующаяся для получения битов значения первого байта UTF-8
const FIRST_BYTE_VALUE_MASK: u8 = 0x7F;
/// маска, исключащая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;

/// убираем старшие биты первого байта UTF-8 последовательности
#[inline(always)]
pub fn utf8_first_byte(byte: u8, width: u8) -> u32
{
    (byte & (FIRST_BYTE_VALUE_MASK >> width)) as u32
}

/// убираем 2 старших бита у следующего байта последовательности и комбинируем с предыдущим значением
#[inline(always)]
pub fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32
{
    (ch << 6) | (byte & CONT_MASK) as u32
}
