use crate::domain::DomainInfo;
use crate::errors::Errors;

/// результат to_ascii / to_unicode
///
/// домен возвращается всегда, даже при наличии ошибок; что с ними делать - решает вызывающий код
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdnaResult
{
    domain: String,
    errors: Errors,
    transitional_different: bool,
}

impl IdnaResult
{
    pub(crate) fn new(domain: String, info: &DomainInfo) -> Self
    {
        Self {
            domain,
            errors: info.errors(),
            transitional_different: info.is_transitional_different(),
        }
    }

    #[inline]
    pub fn domain(&self) -> &str
    {
        &self.domain
    }

    #[inline]
    pub fn errors(&self) -> Errors
    {
        self.errors
    }

    /// выставлен хотя бы один из переданных флагов
    #[inline]
    pub fn has_error(&self, error: Errors) -> bool
    {
        self.errors.intersects(error)
    }

    #[inline]
    pub fn has_errors(&self) -> bool
    {
        !self.errors.is_empty()
    }

    /// результат мог бы отличаться при переходной обработке
    #[inline]
    pub fn is_transitional_different(&self) -> bool
    {
        self.transitional_different
    }

    /// строгий вариант: домен без ошибок или набор ошибок
    pub fn into_result(self) -> Result<String, Errors>
    {
        match self.errors.is_empty() {
            true => Ok(self.domain),
            false => Err(self.errors),
        }
    }
}
