use crate::properties::JoiningType;
use crate::tables::Tables;
use crate::tables::CCC_VIRAMA;

/// ZERO WIDTH NON-JOINER
const ZWNJ: u32 = 0x200C;
/// ZERO WIDTH JOINER
const ZWJ: u32 = 0x200D;

/// правила ContextJ (RFC 5892, приложение A.1, A.2)
pub fn is_valid(tables: &Tables, codes: &[u32]) -> bool
{
    // позиция, с которой ищется контекст следующего ZWNJ
    let mut cursor = 0;

    for (i, &code) in codes.iter().enumerate() {
        if code != ZWNJ && code != ZWJ {
            continue;
        }

        let previous = match i.checked_sub(1) {
            Some(previous) => codes[previous],
            None => return false,
        };

        if tables.combining_class(previous) == CCC_VIRAMA {
            continue;
        }

        if code == ZWNJ {
            if let Some(end) = find_zwnj_context(tables, codes, cursor, i) {
                cursor = end;
                continue;
            }
        }

        return false;
    }

    true
}

/// проверяем вокруг ZWNJ в позиции at последовательность
/// (Joining_Type:{L,D})(Joining_Type:T)* ZWNJ (Joining_Type:T)*(Joining_Type:{R,D}),
/// левая часть не может начинаться раньше from
///
/// возвращаем позицию символа {R,D}, т.е. конец совпадения
fn find_zwnj_context(tables: &Tables, codes: &[u32], from: usize, at: usize) -> Option<usize>
{
    // слева: пропускаем T, затем L или D
    let mut start = at;
    while start > from && tables.joining_type(codes[start - 1]) == JoiningType::Transparent {
        start -= 1;
    }

    if start <= from || !tables.joining_type(codes[start - 1]).joins_to_right() {
        return None;
    }

    // справа: пропускаем T, затем R или D
    let mut end = at + 1;
    while end < codes.len() && tables.joining_type(codes[end]) == JoiningType::Transparent {
        end += 1;
    }

    (end < codes.len() && tables.joining_type(codes[end]).joins_to_left()).then_some(end)
}
