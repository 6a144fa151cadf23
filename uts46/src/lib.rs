#[macro_use]
extern crate lazy_static;

pub use codepoint::CodePoints;
pub use domain::Domain;
pub use domain::DomainInfo;
pub use domain::Label;
pub use domain::MAX_DOMAIN_SIZE;
pub use domain::MAX_LABEL_SIZE;
pub use errors::Errors;
pub use normalization::quick_check;
pub use normalization::QuickCheck;
pub use options::Options;
pub use properties::BidiClass;
pub use properties::JoiningType;
pub use properties::PropertiesError;
pub use punycode::PunycodeError;
pub use result::IdnaResult;
pub use tables::CodePointStatus;
pub use tables::Idna2008Status;
pub use tables::MappingEntry;
pub use tables::TableStatus;
pub use tables::Tables;
pub use tables::TABLES;
pub use validation::LabelValidator;

pub mod punycode;

mod codepoint;
mod data;
mod domain;
mod errors;
mod normalization;
mod options;
mod processing;
mod properties;
mod result;
mod tables;
mod utf8;
mod validation;

/// преобразовать домен в ASCII-совместимую форму
///
/// ```
/// use unicode_uts46::{to_ascii, Options};
///
/// let result = to_ascii("Bücher.example", Options::default());
///
/// assert_eq!(result.domain(), "xn--bcher-kva.example");
/// assert!(!result.has_errors());
/// ```
pub fn to_ascii(domain: &str, options: Options) -> IdnaResult
{
    processing::to_ascii(&TABLES, &CodePoints::from(domain), &options)
}

/// преобразовать домен в Unicode-форму
///
/// ```
/// use unicode_uts46::{to_unicode, Options};
///
/// let result = to_unicode("xn--bcher-kva.example", Options::default());
///
/// assert_eq!(result.domain(), "bücher.example");
/// ```
pub fn to_unicode(domain: &str, options: Options) -> IdnaResult
{
    processing::to_unicode(&TABLES, &CodePoints::from(domain), &options)
}

/// to_ascii для произвольных байт: некорректный UTF-8 заменяется на U+FFFD и помечается как DISALLOWED
pub fn to_ascii_bytes(domain: &[u8], options: Options) -> IdnaResult
{
    processing::to_ascii(&TABLES, &CodePoints::decode(domain), &options)
}

/// to_unicode для произвольных байт
pub fn to_unicode_bytes(domain: &[u8], options: Options) -> IdnaResult
{
    processing::to_unicode(&TABLES, &CodePoints::decode(domain), &options)
}

/// обработка домена без финального преобразования: метки после проверки и накопленные ошибки
pub fn process(domain: &str, options: Options, check_empty_labels: bool) -> Domain
{
    processing::process(&TABLES, &CodePoints::from(domain), &options, check_empty_labels)
}
