use icu_properties::props;

/// тип соединения (Joining_Type), используется правилом ContextJ
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum JoiningType
{
    /// U
    NonJoining,
    /// C
    JoinCausing,
    /// D
    DualJoining,
    /// L
    LeftJoining,
    /// R
    RightJoining,
    /// T
    Transparent,
}

impl JoiningType
{
    /// L или D - может стоять слева от ZWNJ
    #[inline]
    pub fn joins_to_right(&self) -> bool
    {
        matches!(self, Self::LeftJoining | Self::DualJoining)
    }

    /// R или D - может стоять справа от ZWNJ
    #[inline]
    pub fn joins_to_left(&self) -> bool
    {
        matches!(self, Self::RightJoining | Self::DualJoining)
    }
}

impl From<props::JoiningType> for JoiningType
{
    fn from(value: props::JoiningType) -> Self
    {
        match value {
            props::JoiningType::JoinCausing => Self::JoinCausing,
            props::JoiningType::DualJoining => Self::DualJoining,
            props::JoiningType::LeftJoining => Self::LeftJoining,
            props::JoiningType::RightJoining => Self::RightJoining,
            props::JoiningType::Transparent => Self::Transparent,
            _ => Self::NonJoining,
        }
    }
}
