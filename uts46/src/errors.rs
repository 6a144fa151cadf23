use bitflags::bitflags;

bitflags! {
    /// ошибки, накопленные при обработке домена; флаги только добавляются
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Errors: u16
    {
        const EMPTY_LABEL = 0x0001;
        const LABEL_TOO_LONG = 0x0002;
        const DOMAIN_NAME_TOO_LONG = 0x0004;
        const LEADING_HYPHEN = 0x0008;
        const TRAILING_HYPHEN = 0x0010;
        const HYPHEN_3_4 = 0x0020;
        const LEADING_COMBINING_MARK = 0x0040;
        const DISALLOWED = 0x0080;
        const PUNYCODE = 0x0100;
        const LABEL_HAS_DOT = 0x0200;
        const INVALID_ACE_LABEL = 0x0400;
        const BIDI = 0x0800;
        const CONTEXTJ = 0x1000;
        /// не выставляется: правила CONTEXTO не входят в UTS #46
        const CONTEXTO_PUNCTUATION = 0x2000;
        /// не выставляется: правила CONTEXTO не входят в UTS #46
        const CONTEXTO_DIGITS = 0x4000;
    }
}

impl core::fmt::Display for Errors
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if self.is_empty() {
            return write!(f, "no errors");
        }

        for (i, (name, _)) in self.iter_names().enumerate() {
            if i != 0 {
                write!(f, " | ")?;
            }

            write!(f, "{}", name)?;
        }

        Ok(())
    }
}

impl std::error::Error for Errors {}
