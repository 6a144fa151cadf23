/// запечённая таблица соответствий IDNA
///
/// диапазоны упакованы в u64:
///     0..21  - первый кодпоинт диапазона
///     21..42 - последний кодпоинт диапазона (включительно)
///     42..45 - статус (см. TableStatus)
///     45..47 - аннотация IDNA2008 (0 - нет, 1 - NV8, 2 - XV8)
///     47..63 - индекс строки в mappings
pub struct MappingData<'a>
{
    /// версия Unicode, для которой подготовлены данные
    pub unicode_version: (u8, u8, u8),
    /// диапазоны, отсортированы по первому кодпоинту, покрывают 0 ..= 0x10FFFF без пропусков
    pub ranges: &'a [u64],
    /// строки замен
    pub mappings: &'a [&'a str],
}

/// данные нормализации, нужные для быстрой проверки NFC
pub struct NormalizationData<'a>
{
    /// ненулевые классы комбинирования: code << 8 | ccc, отсортированы
    pub ccc: &'a [u32],
    /// кодпоинты со свойством NFC_QC = No / Maybe:
    /// первый кодпоинт | длина диапазона - 1 << 21 | Maybe << 31
    pub nfc_qc: &'a [u32],
}

/// таблица соответствий IDNA
pub fn mapping<'a>() -> MappingData<'a>
{
    include!("./../../data/mapping.txt")
}

/// классы комбинирования и быстрые проверки NFC
pub fn normalization<'a>() -> NormalizationData<'a>
{
    include!("./../../data/normalization.txt")
}
