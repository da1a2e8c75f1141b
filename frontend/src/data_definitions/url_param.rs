//! Route segments holding typed state, encoded as CBOR in URL-safe base64.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Route parameters must implement Display, FromStr and Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[derive(Debug)]
pub enum StateParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "invalid url state encoding: {}", err),
            Self::Cbor(err) => write!(f, "invalid url state: {}", err),
        }
    }
}

impl From<base64::DecodeError> for StateParseError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err)
    }
}

impl From<ciborium::de::Error<std::io::Error>> for StateParseError {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Self::Cbor(err)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cbor = Vec::new();
        // an unencodable value renders as an empty segment, which parses back to an error
        if ciborium::into_writer(&self.0, &mut cbor).is_ok() {
            f.write_str(&URL_SAFE.encode(cbor))?;
        }
        Ok(())
    }
}

impl<T: DeserializeOwned> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cbor = URL_SAFE.decode(s.as_bytes())?;
        let value = ciborium::from_reader::<T, _>(std::io::Cursor::new(cbor))?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use common::document::ExtractedField;

    use super::*;
    use crate::data_definitions::doc_viewer_state::DocViewerState;

    #[test]
    fn viewer_state_survives_the_url() {
        let field = ExtractedField {
            name: "invoice_total".to_string(),
            source_text: "Total due: $1,250.00".to_string(),
            page_number: 2,
            ..Default::default()
        };
        let state = DocViewerState::from_field(&field);
        let segment = UrlParam::from(state.clone()).to_string();
        assert!(!segment.contains('/') && !segment.contains('+'));

        let parsed = segment.parse::<UrlParam<DocViewerState>>().unwrap();
        assert_eq!(parsed.into_inner(), state);
    }

    #[test]
    fn default_state_survives_the_url() {
        let segment = UrlParam::from(DocViewerState::default()).to_string();
        let parsed = segment.parse::<UrlParam<DocViewerState>>().unwrap();
        assert_eq!(parsed.into_inner(), DocViewerState::default());
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!(matches!(
            "not base64!".parse::<UrlParam<DocViewerState>>(),
            Err(StateParseError::Base64(_))
        ));
        assert!(matches!(
            URL_SAFE.encode([0xff]).parse::<UrlParam<DocViewerState>>(),
            Err(StateParseError::Cbor(_))
        ));
        assert!(matches!("".parse::<UrlParam<DocViewerState>>(), Err(StateParseError::Cbor(_))));
    }
}
