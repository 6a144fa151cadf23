use icu_properties::props;
use icu_properties::CodePointMapData;

use crate::data;
use crate::normalization::QuickCheck;
use crate::properties::BidiClass;
use crate::properties::JoiningType;
use crate::properties::PropertiesError;

lazy_static! {
    /// общие для всех вызовов неизменяемые таблицы
    pub static ref TABLES: Tables = Tables::new();
}

/// маска кодпоинта в упакованных значениях
const CODE_MASK: u64 = 0x1F_FFFF;

/// класс комбинирования вирамы
pub const CCC_VIRAMA: u8 = 9;

/// статус кодпоинта, как он записан в таблице соответствий
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableStatus
{
    Valid,
    Ignored,
    Mapped,
    Deviation,
    Disallowed,
    /// допустим, если не применяются правила STD3
    DisallowedStd3Valid,
    /// заменяется, если не применяются правила STD3
    DisallowedStd3Mapped,
}

impl TryFrom<u8> for TableStatus
{
    type Error = PropertiesError;

    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Ok(match value {
            0 => Self::Valid,
            1 => Self::Ignored,
            2 => Self::Mapped,
            3 => Self::Deviation,
            4 => Self::Disallowed,
            5 => Self::DisallowedStd3Valid,
            6 => Self::DisallowedStd3Mapped,
            _ => return Err(PropertiesError::UnknownPropertyValue(value.to_string())),
        })
    }
}

/// аннотация IDNA2008 для допустимых кодпоинтов
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Idna2008Status
{
    /// NV8 - не допускается IDNA2008 по причинам, не связанным с контекстом
    Nv8,
    /// XV8 - исключён из IDNA2008 по историческим причинам
    Xv8,
}

/// статус кодпоинта с учетом правил STD3
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodePointStatus
{
    Valid,
    Mapped(&'static str),
    Deviation(&'static str),
    Disallowed,
    Ignored,
}

/// запись таблицы соответствий
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MappingEntry
{
    pub start: u32,
    pub end: u32,
    pub status: TableStatus,
    pub mapping: Option<&'static str>,
    pub idna2008: Option<Idna2008Status>,
}

/// таблицы свойств, необходимые для обработки доменных имён
pub struct Tables
{
    unicode_version: (u8, u8, u8),
    ranges: &'static [u64],
    mappings: &'static [&'static str],
    ccc: &'static [u32],
    nfc_qc: &'static [u32],
}

impl Tables
{
    fn new() -> Self
    {
        let mapping = data::mapping();
        let normalization = data::normalization();

        debug_assert!(mapping
            .ranges
            .windows(2)
            .all(|w| ((w[0] >> 21) & CODE_MASK) < (w[1] & CODE_MASK)));

        Self {
            unicode_version: mapping.unicode_version,
            ranges: mapping.ranges,
            mappings: mapping.mappings,
            ccc: normalization.ccc,
            nfc_qc: normalization.nfc_qc,
        }
    }

    /// версия Unicode, для которой подготовлены запечённые данные
    pub fn unicode_version(&self) -> (u8, u8, u8)
    {
        self.unicode_version
    }

    /// статус кодпоинта; варианты STD3 разрешаются в зависимости от use_std3
    pub fn lookup(&self, code: u32, use_std3: bool) -> CodePointStatus
    {
        let entry = self.entry(code);

        match (entry.status, use_std3) {
            (TableStatus::Valid, _) | (TableStatus::DisallowedStd3Valid, false) => {
                CodePointStatus::Valid
            }
            (TableStatus::Mapped, _) | (TableStatus::DisallowedStd3Mapped, false) => {
                CodePointStatus::Mapped(entry.mapping.unwrap_or_default())
            }
            (TableStatus::Deviation, _) => CodePointStatus::Deviation(entry.mapping.unwrap_or_default()),
            (TableStatus::Ignored, _) => CodePointStatus::Ignored,
            (TableStatus::Disallowed, _)
            | (TableStatus::DisallowedStd3Valid, true)
            | (TableStatus::DisallowedStd3Mapped, true) => CodePointStatus::Disallowed,
        }
    }

    /// запись таблицы соответствий, содержащая кодпоинт
    ///
    /// таблица покрывает весь диапазон Unicode, отсутствие записи - повреждённые данные
    pub fn entry(&self, code: u32) -> MappingEntry
    {
        let index = self
            .ranges
            .partition_point(|&value| (value & CODE_MASK) as u32 <= code);

        let value = match index.checked_sub(1).map(|i| self.ranges[i]) {
            Some(value) if code as u64 <= (value >> 21) & CODE_MASK => value,
            _ => panic!("таблица соответствий не содержит U+{:04X}", code),
        };

        let status = match TableStatus::try_from(((value >> 42) & 0b111) as u8) {
            Ok(status) => status,
            Err(e) => panic!("таблица соответствий повреждена, U+{:04X}: {}", code, e),
        };

        let mapping = match status {
            TableStatus::Mapped | TableStatus::Deviation | TableStatus::DisallowedStd3Mapped => {
                Some(self.mappings[(value >> 47) as usize])
            }
            _ => None,
        };

        let idna2008 = match (value >> 45) & 0b11 {
            1 => Some(Idna2008Status::Nv8),
            2 => Some(Idna2008Status::Xv8),
            _ => None,
        };

        MappingEntry {
            start: (value & CODE_MASK) as u32,
            end: ((value >> 21) & CODE_MASK) as u32,
            status,
            mapping,
            idna2008,
        }
    }

    /// класс комбинирования, 0 - если кодпоинт отсутствует в таблице
    #[inline]
    pub fn combining_class(&self, code: u32) -> u8
    {
        match self.ccc.binary_search_by_key(&code, |&value| value >> 8) {
            Ok(index) => self.ccc[index] as u8,
            Err(_) => 0,
        }
    }

    /// свойство NFC_Quick_Check, Yes - если кодпоинт отсутствует в таблице
    #[inline]
    pub fn nfc_quick_check(&self, code: u32) -> QuickCheck
    {
        let index = self
            .nfc_qc
            .partition_point(|&value| value & CODE_MASK as u32 <= code);

        match index.checked_sub(1).map(|i| self.nfc_qc[i]) {
            Some(value) if code <= (value & CODE_MASK as u32) + ((value >> 21) & 0x3FF) => {
                match value >> 31 {
                    1 => QuickCheck::Maybe,
                    _ => QuickCheck::No,
                }
            }
            _ => QuickCheck::Yes,
        }
    }

    /// класс направления текста
    #[inline]
    pub fn bidi_class(&self, code: u32) -> BidiClass
    {
        BidiClass::from(CodePointMapData::<props::BidiClass>::new().get32(code))
    }

    /// тип соединения
    #[inline]
    pub fn joining_type(&self, code: u32) -> JoiningType
    {
        JoiningType::from(CodePointMapData::<props::JoiningType>::new().get32(code))
    }

    /// General_Category - одна из Mc, Me, Mn
    #[inline]
    pub fn is_combining_mark(&self, code: u32) -> bool
    {
        matches!(
            CodePointMapData::<props::GeneralCategory>::new().get32(code),
            props::GeneralCategory::NonspacingMark
                | props::GeneralCategory::SpacingMark
                | props::GeneralCategory::EnclosingMark
        )
    }
}
