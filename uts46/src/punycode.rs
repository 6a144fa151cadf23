/// ошибки кодека Punycode
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PunycodeError
{
    #[error("некорректная Punycode-последовательность: {0:?}")]
    Decode(String),
    #[error("метка не может быть закодирована в Punycode: {0:?}")]
    Encode(String),
}

/// закодировать метку (без префикса xn--)
pub fn encode(label: &str) -> Result<String, PunycodeError>
{
    idna::punycode::encode_str(label).ok_or_else(|| PunycodeError::Encode(label.to_owned()))
}

/// декодировать метку (без префикса xn--)
pub fn decode(label: &str) -> Result<String, PunycodeError>
{
    idna::punycode::decode_to_string(label).ok_or_else(|| PunycodeError::Decode(label.to_owned()))
}
