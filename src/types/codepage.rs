use crate::types::errors::CodepageError;
use encoding_rs::WINDOWS_1250;

/// Decodes Windows-1250 bytes, the codepage used by statement exports and ledger files.
pub fn decode(bytes: &[u8]) -> Result<String, CodepageError> {
    let (text, had_errors) = WINDOWS_1250.decode_without_bom_handling(bytes);

    if had_errors {
        return Err(CodepageError::Undecodable(WINDOWS_1250.name()));
    }

    Ok(text.into_owned())
}

pub fn encode(text: &str) -> Result<Vec<u8>, CodepageError> {
    let (bytes, _, had_errors) = WINDOWS_1250.encode(text);

    if had_errors {
        return Err(CodepageError::Unencodable(WINDOWS_1250.name()));
    }

    Ok(bytes.into_owned())
}
