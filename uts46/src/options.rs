/// параметры обработки доменного имени
///
/// по умолчанию включены все проверки, правила STD3 и проверка длины для DNS,
/// переходная обработка выключена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options
{
    /// CheckHyphens - запрет дефисов в начале, конце и позициях 3-4 метки
    pub check_hyphens: bool,
    /// CheckBidi - правила RFC 5893 для bidi-доменов
    pub check_bidi: bool,
    /// CheckJoiners - правила ContextJ для ZWNJ / ZWJ
    pub check_joiners: bool,
    /// UseSTD3ASCIIRules - в метках допустимы только буквы, цифры и дефис из ASCII
    pub use_std3_ascii_rules: bool,
    /// Transitional_Processing - устаревшая обработка deviation-кодпоинтов (ß, ς, ZWJ, ZWNJ)
    pub transitional_processing: bool,
    /// IgnoreInvalidPunycode - не считать ошибкой некорректную ACE-метку
    pub ignore_invalid_punycode: bool,
    /// VerifyDnsLength - только для to_ascii
    pub verify_dns_length: bool,
}

impl Default for Options
{
    fn default() -> Self
    {
        Self {
            check_hyphens: true,
            check_bidi: true,
            check_joiners: true,
            use_std3_ascii_rules: true,
            transitional_processing: false,
            ignore_invalid_punycode: false,
            verify_dns_length: true,
        }
    }
}

impl Options
{
    #[inline]
    pub fn check_hyphens(mut self, value: bool) -> Self
    {
        self.check_hyphens = value;
        self
    }

    #[inline]
    pub fn check_bidi(mut self, value: bool) -> Self
    {
        self.check_bidi = value;
        self
    }

    #[inline]
    pub fn check_joiners(mut self, value: bool) -> Self
    {
        self.check_joiners = value;
        self
    }

    #[inline]
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self
    {
        self.use_std3_ascii_rules = value;
        self
    }

    #[inline]
    pub fn transitional_processing(mut self, value: bool) -> Self
    {
        self.transitional_processing = value;
        self
    }

    #[inline]
    pub fn ignore_invalid_punycode(mut self, value: bool) -> Self
    {
        self.ignore_invalid_punycode = value;
        self
    }

    #[inline]
    pub fn verify_dns_length(mut self, value: bool) -> Self
    {
        self.verify_dns_length = value;
        self
    }
}
