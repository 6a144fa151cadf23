use crate::codepoint::CodePoints;
use crate::errors::Errors;

/// максимальная длина метки в байтах
pub const MAX_LABEL_SIZE: usize = 63;
/// максимальная длина домена в байтах без завершающей точки
pub const MAX_DOMAIN_SIZE: usize = 253;
/// префикс ACE-метки
pub const ACE_PREFIX: &str = "xn--";

/// состояние обработки домена: ошибки и флаги bidi
#[derive(Debug, Clone)]
pub struct DomainInfo
{
    errors: Errors,
    bidi: bool,
    valid_bidi: bool,
    transitional_different: bool,
}

impl Default for DomainInfo
{
    fn default() -> Self
    {
        Self {
            errors: Errors::empty(),
            bidi: false,
            valid_bidi: true,
            transitional_different: false,
        }
    }
}

impl DomainInfo
{
    #[inline]
    pub fn add_error(&mut self, error: Errors)
    {
        self.errors |= error;
    }

    #[inline]
    pub fn errors(&self) -> Errors
    {
        self.errors
    }

    /// домен содержит символ с классом R, AL или AN
    #[inline]
    pub fn is_bidi(&self) -> bool
    {
        self.bidi
    }

    #[inline]
    pub fn set_bidi(&mut self)
    {
        self.bidi = true;
    }

    #[inline]
    pub fn is_valid_bidi(&self) -> bool
    {
        self.valid_bidi
    }

    /// однажды выставленный, флаг не снимается
    #[inline]
    pub fn set_invalid_bidi(&mut self)
    {
        self.valid_bidi = false;
    }

    /// встречался кодпоинт со статусом deviation
    #[inline]
    pub fn is_transitional_different(&self) -> bool
    {
        self.transitional_different
    }

    #[inline]
    pub fn set_transitional_different(&mut self)
    {
        self.transitional_different = true;
    }
}

/// метка - часть домена между точками
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label(String);

impl Label
{
    #[inline]
    pub fn as_str(&self) -> &str
    {
        &self.0
    }

    /// длина в байтах
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
    pub fn is_ascii(&self) -> bool
    {
        self.0.is_ascii()
    }

    #[inline]
    pub fn has_ace_prefix(&self) -> bool
    {
        self.0.starts_with(ACE_PREFIX)
    }

    #[inline]
    pub fn code_points(&self) -> CodePoints
    {
        CodePoints::from(self.as_str())
    }
}

impl From<String> for Label
{
    fn from(value: String) -> Self
    {
        Self(value)
    }
}

impl From<&str> for Label
{
    fn from(value: &str) -> Self
    {
        Self(value.to_owned())
    }
}

/// домен: метки и состояние обработки
#[derive(Debug, Clone, Default)]
pub struct Domain
{
    labels: Vec<Label>,
    info: DomainInfo,
}

impl Domain
{
    pub fn new(labels: Vec<Label>, info: DomainInfo) -> Self
    {
        Self { labels, info }
    }

    #[inline]
    pub fn labels(&self) -> &[Label]
    {
        &self.labels
    }

    #[inline]
    pub fn labels_mut(&mut self) -> &mut [Label]
    {
        &mut self.labels
    }

    #[inline]
    pub fn info(&self) -> &DomainInfo
    {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut DomainInfo
    {
        &mut self.info
    }

    /// последняя метка пуста и не единственная - это корневая метка
    #[inline]
    pub fn has_root_label(&self) -> bool
    {
        self.labels.len() > 1 && self.labels.last().is_some_and(Label::is_empty)
    }

    /// проверка длины домена и меток для DNS
    ///
    /// корневая метка не проверяется, но её точка допускает длину 254
    pub fn validate_lengths(&mut self)
    {
        let mut max_domain_size = MAX_DOMAIN_SIZE;
        let mut count = self.labels.len();
        let mut total = count.saturating_sub(1);

        if self.has_root_label() {
            max_domain_size += 1;
            count -= 1;
        }

        for label in &self.labels[.. count] {
            total += label.len();

            if label.len() > MAX_LABEL_SIZE {
                self.info.add_error(Errors::LABEL_TOO_LONG);
            }
        }

        if total > max_domain_size {
            self.info.add_error(Errors::DOMAIN_NAME_TOO_LONG);
        }
    }

    /// собрать метки через точку
    pub fn join(&self) -> String
    {
        let mut result = String::with_capacity(self.labels.iter().map(|l| l.len() + 1).sum());

        for (i, label) in self.labels.iter().enumerate() {
            if i != 0 {
                result.push('.');
            }

            result.push_str(label.as_str());
        }

        result
    }
}
