pub use bidi_class::BidiClass;
pub use joining_type::JoiningType;

mod bidi_class;
mod joining_type;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: {0}")]
    UnknownPropertyValue(String),
}
