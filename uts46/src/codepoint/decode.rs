use crate::utf8;

/// U+FFFD REPLACEMENT CHARACTER
pub const REPLACEMENT: u32 = 0xFFFD;

/// терпимый к ошибкам декодер UTF-8
///
/// каждая максимальная часть некорректной последовательности заменяется на U+FFFD,
/// закодированные суррогаты (ED A0..BF xx) возвращаются как есть
pub struct Utf8Decoder<'a>
{
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Utf8Decoder<'a>
{
    pub fn new(bytes: &'a [u8]) -> Self
    {
        Self { bytes, position: 0 }
    }

    /// следующий байт продолжения, если он попадает в диапазон
    #[inline(always)]
    fn cont_byte(&self, lower: u8, upper: u8) -> Option<u8>
    {
        match self.bytes.get(self.position) {
            Some(&byte) if (lower ..= upper).contains(&byte) => Some(byte),
            _ => None,
        }
    }
}

impl<'a> Iterator for Utf8Decoder<'a>
{
    type Item = u32;

    fn next(&mut self) -> Option<u32>
    {
        let first = *self.bytes.get(self.position)?;
        self.position += 1;

        let width = utf8::get_utf8_sequence_width(first);

        match width {
            1 => return Some(first as u32),
            0 => return Some(REPLACEMENT),
            _ => (),
        }

        let (lower, upper) = utf8::second_byte_range(first);
        let mut code = utf8::utf8_first_byte(first, width);

        for i in 1 .. width {
            let byte = match i {
                1 => self.cont_byte(lower, upper),
                _ => self.cont_byte(0x80, 0xBF),
            };

            // байт, прервавший последовательность, не поглощается - с него начнётся следующий кодпоинт
            match byte {
                Some(byte) => code = utf8::utf8_acc_cont_byte(code, byte),
                None => return Some(REPLACEMENT),
            }

            self.position += 1;
        }

        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let rest = self.bytes.len() - self.position;

        ((rest + 3) / 4, Some(rest))
    }
}
