use icu_properties::props;

use super::PropertiesError;

/// класс направления текста (bidi class)
///
/// группы классов:
///     strong (L, R, AL) - символы, которые имеют явно заданное направление
///     weak (EN, ES, ET, AN, CS, NSM, BN) - направление зависит от контекста
///     neutral (B, S, WS, ON) - не имеют определенного направления
///     explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - явное управление направлением
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BidiClass
{
    /// L - любой сильный LTR-символ
    LeftToRight,
    /// R - любой сильный (не арабский) RTL-символ
    RightToLeft,
    /// AL - любой сильный (арабский) RTL-символ
    ArabicLetter,

    /// EN - любая цифра ASCII или восточно-арабская индийская цифра
    EuropeanNumber,
    /// ES - знаки плюса и минуса
    EuropeanSeparator,
    /// ET - терминатор в контексте числового формата, включает символы валюты
    EuropeanTerminator,
    /// AN - любая арабско-индийская цифра
    ArabicNumber,
    /// CS - запятые, двоеточия и слеши
    CommonSeparator,
    /// NSM - не занимающий места символ
    NonspacingMark,
    /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
    BoundaryNeutral,

    /// B - символы новой строки, которые разделяют абзацы
    ParagraphSeparator,
    /// S - управляющие коды, связанные с сегментами текста
    SegmentSeparator,
    /// WS - пробельные символы
    Whitespace,
    /// ON - большинство других символов и знаков пунктуации
    OtherNeutral,

    /// LRE - U+202A
    LeftToRightEmbedding,
    /// LRO - U+202D
    LeftToRightOverride,
    /// RLE - U+202B
    RightToLeftEmbedding,
    /// RLO - U+202E
    RightToLeftOverride,
    /// PDF - U+202C
    PopDirectionalFormat,
    /// LRI - U+2066
    LeftToRightIsolate,
    /// RLI - U+2067
    RightToLeftIsolate,
    /// FSI - U+2068
    FirstStrongIsolate,
    /// PDI - U+2069
    PopDirectionalIsolate,
}

impl BidiClass
{
    /// R, AL, AN - наличие такого символа делает домен bidi-доменом
    #[inline]
    pub fn is_rtl(&self) -> bool
    {
        matches!(
            self,
            Self::RightToLeft | Self::ArabicLetter | Self::ArabicNumber
        )
    }
}

impl From<props::BidiClass> for BidiClass
{
    fn from(value: props::BidiClass) -> Self
    {
        match value {
            props::BidiClass::LeftToRight => Self::LeftToRight,
            props::BidiClass::RightToLeft => Self::RightToLeft,
            props::BidiClass::ArabicLetter => Self::ArabicLetter,
            props::BidiClass::EuropeanNumber => Self::EuropeanNumber,
            props::BidiClass::EuropeanSeparator => Self::EuropeanSeparator,
            props::BidiClass::EuropeanTerminator => Self::EuropeanTerminator,
            props::BidiClass::ArabicNumber => Self::ArabicNumber,
            props::BidiClass::CommonSeparator => Self::CommonSeparator,
            props::BidiClass::NonspacingMark => Self::NonspacingMark,
            props::BidiClass::BoundaryNeutral => Self::BoundaryNeutral,
            props::BidiClass::ParagraphSeparator => Self::ParagraphSeparator,
            props::BidiClass::SegmentSeparator => Self::SegmentSeparator,
            props::BidiClass::WhiteSpace => Self::Whitespace,
            props::BidiClass::OtherNeutral => Self::OtherNeutral,
            props::BidiClass::LeftToRightEmbedding => Self::LeftToRightEmbedding,
            props::BidiClass::LeftToRightOverride => Self::LeftToRightOverride,
            props::BidiClass::RightToLeftEmbedding => Self::RightToLeftEmbedding,
            props::BidiClass::RightToLeftOverride => Self::RightToLeftOverride,
            props::BidiClass::PopDirectionalFormat => Self::PopDirectionalFormat,
            props::BidiClass::LeftToRightIsolate => Self::LeftToRightIsolate,
            props::BidiClass::RightToLeftIsolate => Self::RightToLeftIsolate,
            props::BidiClass::FirstStrongIsolate => Self::FirstStrongIsolate,
            props::BidiClass::PopDirectionalIsolate => Self::PopDirectionalIsolate,
            // кодпоинты, не перечисленные явно, имеют класс L
            _ => Self::LeftToRight,
        }
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "L" => Self::LeftToRight,
            "R" => Self::RightToLeft,
            "AL" => Self::ArabicLetter,
            "EN" => Self::EuropeanNumber,
            "ES" => Self::EuropeanSeparator,
            "ET" => Self::EuropeanTerminator,
            "AN" => Self::ArabicNumber,
            "CS" => Self::CommonSeparator,
            "NSM" => Self::NonspacingMark,
            "BN" => Self::BoundaryNeutral,
            "B" => Self::ParagraphSeparator,
            "S" => Self::SegmentSeparator,
            "WS" => Self::Whitespace,
            "ON" => Self::OtherNeutral,
            "LRE" => Self::LeftToRightEmbedding,
            "LRO" => Self::LeftToRightOverride,
            "RLE" => Self::RightToLeftEmbedding,
            "RLO" => Self::RightToLeftOverride,
            "PDF" => Self::PopDirectionalFormat,
            "LRI" => Self::LeftToRightIsolate,
            "RLI" => Self::RightToLeftIsolate,
            "FSI" => Self::FirstStrongIsolate,
            "PDI" => Self::PopDirectionalIsolate,
            _ => return Err(PropertiesError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}
