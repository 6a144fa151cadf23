use decode::Utf8Decoder;

mod decode;

/// последовательность кодпоинтов
///
/// в отличие от String может содержать суррогаты - они приходят из некорректного UTF-8
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CodePoints(Vec<u32>);

impl CodePoints
{
    /// декодировать произвольные байты, некорректные последовательности заменяются на U+FFFD
    pub fn decode(bytes: &[u8]) -> Self
    {
        Self(Utf8Decoder::new(bytes).collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32]
    {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_
    {
        self.0.iter().copied()
    }

    /// все кодпоинты - ASCII
    #[inline]
    pub fn is_ascii(&self) -> bool
    {
        self.0.iter().all(|&code| code < 0x80)
    }

    /// закодировать в UTF-8
    pub fn encode(&self) -> String
    {
        let mut result = String::with_capacity(self.0.len());

        self.0.iter().for_each(|&code| write_code_point(&mut result, code));

        result
    }
}

impl From<&str> for CodePoints
{
    fn from(value: &str) -> Self
    {
        Self(value.chars().map(u32::from).collect())
    }
}

impl From<Vec<u32>> for CodePoints
{
    fn from(value: Vec<u32>) -> Self
    {
        Self(value)
    }
}

impl core::fmt::Debug for CodePoints
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_list()
            .entries(self.0.iter().map(|code| format!("U+{:04X}", code)))
            .finish()
    }
}

/// дописать кодпоинт в строку; суррогаты и значения вне Unicode пишутся как U+FFFD
#[inline]
pub fn write_code_point(result: &mut String, code: u32)
{
    result.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
