//! IO functionality for reading the list of registrants from a JSON source
//! file.

use serde::{Deserialize, Deserializer};

use crate::Registrant;

/// Read the list of registrants from a JSON array of registrant objects.
///
/// This function takes a Reader (e.g. an open filehandle), reads its contents
/// and interprets them as the canonical serde_json representation of a list of
/// `Registrant` objects.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if
/// * the source has invalid JSON syntax (the string representation of the
///   serde_json error is returned)
/// * the data does not decode to an array of objects with the required fields
pub fn read<R: std::io::Read>(reader: R) -> Result<Vec<Registrant>, String> {
    serde_json::from_reader(reader).map_err(|err| err.to_string())
}

/// Deserialize a JSON string or number into a String. The registration exports
/// are not consistent about the type of the license number field.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Integer(value) => value.to_string(),
        StringOrNumber::Float(value) => value.to_string(),
    })
}
