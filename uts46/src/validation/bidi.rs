use crate::domain::DomainInfo;
use crate::properties::BidiClass;
use crate::properties::BidiClass::*;
use crate::tables::Tables;

/// правило bidi (RFC 5893, раздел 2)
///
/// метка с символом R, AL или AN делает домен bidi-доменом;
/// любое нарушение помечает домен как некорректный bidi-домен
pub fn validate(tables: &Tables, codes: &[u32], info: &mut DomainInfo)
{
    let classes: Vec<BidiClass> = codes.iter().map(|&code| tables.bidi_class(code)).collect();

    let valid = match classes.iter().any(BidiClass::is_rtl) {
        true => {
            info.set_bidi();
            is_valid_rtl(&classes)
        }
        false => is_valid_ltr(&classes),
    };

    if !valid {
        info.set_invalid_bidi();
    }
}

/// RTL-метка
fn is_valid_rtl(classes: &[BidiClass]) -> bool
{
    // 1. первый символ - R или AL
    if !matches!(classes.first(), Some(RightToLeft | ArabicLetter)) {
        return false;
    }

    // 2. только R, AL, AN, EN, ES, CS, ET, ON, BN, NSM
    let allowed = classes.iter().all(|class| {
        matches!(
            class,
            RightToLeft
                | ArabicLetter
                | ArabicNumber
                | EuropeanNumber
                | EuropeanSeparator
                | CommonSeparator
                | EuropeanTerminator
                | OtherNeutral
                | BoundaryNeutral
                | NonspacingMark
        )
    });

    if !allowed {
        return false;
    }

    // 3. в конце R, AL, EN или AN, за которым могут идти NSM
    if !matches!(
        last_non_nsm(classes),
        Some(RightToLeft | ArabicLetter | EuropeanNumber | ArabicNumber)
    ) {
        return false;
    }

    // 4. EN и AN не встречаются вместе
    !(classes.contains(&EuropeanNumber) && classes.contains(&ArabicNumber))
}

/// LTR-метка
fn is_valid_ltr(classes: &[BidiClass]) -> bool
{
    // 1. первый символ - L
    if classes.first() != Some(&LeftToRight) {
        return false;
    }

    // 5. только L, EN, ES, CS, ET, ON, BN, NSM
    let allowed = classes.iter().all(|class| {
        matches!(
            class,
            LeftToRight
                | EuropeanNumber
                | EuropeanSeparator
                | CommonSeparator
                | EuropeanTerminator
                | OtherNeutral
                | BoundaryNeutral
                | NonspacingMark
        )
    });

    // 6. в конце L или EN, за которым могут идти NSM
    allowed && matches!(last_non_nsm(classes), Some(LeftToRight | EuropeanNumber))
}

/// последний класс, не считая завершающих NSM
#[inline]
fn last_non_nsm(classes: &[BidiClass]) -> Option<BidiClass>
{
    classes.iter().rev().find(|&&class| class != NonspacingMark).copied()
}
