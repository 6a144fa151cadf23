use crate::codepoint::write_code_point;
use crate::codepoint::CodePoints;
use crate::domain::Domain;
use crate::domain::DomainInfo;
use crate::domain::Label;
use crate::domain::ACE_PREFIX;
use crate::errors::Errors;
use crate::normalization;
use crate::options::Options;
use crate::punycode;
use crate::result::IdnaResult;
use crate::tables::CodePointStatus;
use crate::tables::Tables;
use crate::validation::LabelValidator;

/// LATIN CAPITAL LETTER SHARP S
const CAPITAL_SHARP_S: u32 = 0x1E9E;

/// обработка домена: отображение, нормализация, разбиение на метки и их проверка
///
/// check_empty - пустые метки (кроме корневой) и пустой домен считаются ошибкой
pub fn process(tables: &Tables, input: &CodePoints, options: &Options, check_empty: bool) -> Domain
{
    log::trace!("обработка домена {:?}, {:?}", input, options);

    if options.transitional_processing {
        log::warn!("переходная обработка (Transitional_Processing) устарела и будет удалена из UTS #46");
    }

    let mut info = DomainInfo::default();

    if check_empty && input.is_empty() {
        info.add_error(Errors::EMPTY_LABEL);

        return Domain::new(vec![Label::default()], info);
    }

    let mapped = map_code_points(tables, input, options, &mut info);
    let codes = CodePoints::from(mapped.as_str());
    let normalized = normalization::to_nfc(tables, mapped, codes.as_slice());

    let mut labels: Vec<Label> = normalized.split('.').map(Label::from).collect();
    let last = labels.len() - 1;
    let validator = LabelValidator::new(tables);

    for (i, label) in labels.iter_mut().enumerate() {
        let mut label_options = *options;

        if label.has_ace_prefix() {
            match decode_ace_label(label, options, &mut info) {
                Some(decoded) => *label = decoded,
                None => continue,
            }

            label_options.transitional_processing = false;
        }

        validator.validate(label, &label_options, i > 0 && i == last, check_empty, &mut info);
    }

    if info.is_bidi() && !info.is_valid_bidi() {
        info.add_error(Errors::BIDI);
    }

    Domain::new(labels, info)
}

/// ToASCII
pub fn to_ascii(tables: &Tables, input: &CodePoints, options: &Options) -> IdnaResult
{
    let mut domain = process(tables, input, options, options.verify_dns_length);
    let mut encode_failed = false;

    for label in domain.labels_mut() {
        if label.is_ascii() {
            continue;
        }

        match punycode::encode(label.as_str()) {
            Ok(encoded) => *label = Label::from(format!("{}{}", ACE_PREFIX, encoded)),
            Err(e) => {
                log::debug!("{}", e);
                encode_failed = true;
            }
        }
    }

    if encode_failed {
        domain.info_mut().add_error(Errors::PUNYCODE);
    }

    if options.verify_dns_length {
        domain.validate_lengths();
    }

    IdnaResult::new(domain.join(), domain.info())
}

/// ToUnicode; VerifyDnsLength не применяется, пустые метки всегда считаются ошибкой
pub fn to_unicode(tables: &Tables, input: &CodePoints, options: &Options) -> IdnaResult
{
    let domain = process(tables, input, options, true);

    IdnaResult::new(domain.join(), domain.info())
}

/// шаг отображения: каждый кодпоинт заменяется согласно таблице соответствий
fn map_code_points(tables: &Tables, input: &CodePoints, options: &Options, info: &mut DomainInfo) -> String
{
    let mut result = String::with_capacity(input.len());
    let transitional = options.transitional_processing;

    for code in input.iter() {
        match tables.lookup(code, options.use_std3_ascii_rules) {
            CodePointStatus::Valid => write_code_point(&mut result, code),
            CodePointStatus::Disallowed => {
                info.add_error(Errors::DISALLOWED);
                write_code_point(&mut result, code);
            }
            CodePointStatus::Ignored => (),
            CodePointStatus::Mapped(mapping) => match transitional && code == CAPITAL_SHARP_S {
                true => result.push_str("ss"),
                false => result.push_str(mapping),
            },
            CodePointStatus::Deviation(mapping) => {
                info.set_transitional_different();

                match transitional {
                    true => result.push_str(mapping),
                    false => write_code_point(&mut result, code),
                }
            }
        }
    }

    result
}

/// декодировать ACE-метку; None - метку следует пропустить
fn decode_ace_label(label: &Label, options: &Options, info: &mut DomainInfo) -> Option<Label>
{
    if !label.is_ascii() {
        info.add_error(Errors::PUNYCODE);
        return None;
    }

    match punycode::decode(&label.as_str()[ACE_PREFIX.len() ..]) {
        Ok(decoded) => {
            if decoded.is_empty() {
                info.add_error(Errors::EMPTY_LABEL);
            }

            if decoded.is_ascii() {
                info.add_error(Errors::INVALID_ACE_LABEL);
            }

            Some(Label::from(decoded))
        }
        Err(e) => {
            log::debug!("{}", e);

            if !options.ignore_invalid_punycode {
                info.add_error(Errors::PUNYCODE);
            }

            None
        }
    }
}
