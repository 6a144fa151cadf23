use crate::domain::DomainInfo;
use crate::domain::Label;
use crate::errors::Errors;
use crate::normalization;
use crate::options::Options;
use crate::tables::CodePointStatus;
use crate::tables::Tables;

mod bidi;
mod contextj;

const HYPHEN: u32 = 0x2D;
const FULL_STOP: u32 = 0x2E;

/// проверка метки по критериям допустимости UTS #46
pub struct LabelValidator<'t>
{
    tables: &'t Tables,
}

impl<'t> LabelValidator<'t>
{
    pub fn new(tables: &'t Tables) -> Self
    {
        Self { tables }
    }

    /// проверить метку, ошибки пишутся в info
    ///
    /// can_be_empty - метка является корневой (последняя, но не первая),
    /// check_empty - пустые метки считаются ошибкой
    pub fn validate(
        &self,
        label: &Label,
        options: &Options,
        can_be_empty: bool,
        check_empty: bool,
        info: &mut DomainInfo,
    )
    {
        if label.is_empty() {
            if !can_be_empty && check_empty {
                info.add_error(Errors::EMPTY_LABEL);
            }

            return;
        }

        let codes = label.code_points();
        let codes = codes.as_slice();

        // 1. метка в форме NFC
        if !normalization::is_nfc(self.tables, label.as_str(), codes) {
            info.add_error(Errors::INVALID_ACE_LABEL);
        }

        // 2, 3. дефисы
        if options.check_hyphens {
            if codes.get(2) == Some(&HYPHEN) && codes.get(3) == Some(&HYPHEN) {
                info.add_error(Errors::HYPHEN_3_4);
            }

            if codes.first() == Some(&HYPHEN) {
                info.add_error(Errors::LEADING_HYPHEN);
            }

            if codes.last() == Some(&HYPHEN) {
                info.add_error(Errors::TRAILING_HYPHEN);
            }
        }

        // 4. точка может попасть в метку только из декодированной ACE-метки
        if codes.contains(&FULL_STOP) {
            info.add_error(Errors::LABEL_HAS_DOT);
        }

        // 5. метка не может начинаться с комбинируемого символа
        if codes.first().is_some_and(|&code| self.tables.is_combining_mark(code)) {
            info.add_error(Errors::LEADING_COMBINING_MARK);
        }

        // 6. статусы кодпоинтов
        if !self.has_valid_statuses(codes, options) {
            info.add_error(Errors::DISALLOWED);
        }

        // 7. ContextJ
        if options.check_joiners && !contextj::is_valid(self.tables, codes) {
            info.add_error(Errors::CONTEXTJ);
        }

        // 8. bidi; если домен уже признан некорректным bidi-доменом, результат не изменится
        if options.check_bidi && (!info.is_bidi() || info.is_valid_bidi()) {
            bidi::validate(self.tables, codes, info);
        }
    }

    /// допустимы только valid и, без переходной обработки, deviation
    fn has_valid_statuses(&self, codes: &[u32], options: &Options) -> bool
    {
        codes.iter().all(|&code| {
            match self.tables.lookup(code, options.use_std3_ascii_rules) {
                CodePointStatus::Valid => true,
                CodePointStatus::Deviation(_) => !options.transitional_processing,
                _ => false,
            }
        })
    }
}
