use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

const VIACEP_URL: &str = "https://viacep.com.br/ws";

/// Masks free-text input into `NNNNN-NNN`, eight digits at most.
pub fn format_cep(raw: &str) -> String {
    let digits: String = NON_DIGITS.replace_all(raw, "").chars().take(8).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// A lookup only goes out once all eight digits are present.
pub fn is_complete(cep: &str) -> bool {
    digits_of(cep).len() == 8
}

fn digits_of(cep: &str) -> String {
    NON_DIGITS.replace_all(cep, "").into_owned()
}

#[derive(Debug, Error)]
pub enum CepError {
    #[error("digite o CEP completo (8 dígitos)")]
    Incomplete,
    #[error("CEP não encontrado")]
    NotFound,
    #[error("erro ao consultar o CEP: {0}")]
    Transport(#[from] reqwest::Error),
}

/// ViaCEP lookup client.
pub struct CepClient {
    client: Client,
}

impl CepClient {
    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self {
            client: crate::http::client()?,
        })
    }

    /// Resolves a formatted CEP into a display address.
    ///
    /// Not-found halts the flow for manual correction; transport errors
    /// are retryable by the user and never retried automatically.
    pub async fn lookup(&self, cep: &str) -> Result<String, CepError> {
        let code = digits_of(cep);
        if code.len() != 8 {
            return Err(CepError::Incomplete);
        }
        let url = format!("{VIACEP_URL}/{code}/json/");
        let payload: CepPayload = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if payload.not_found() {
            return Err(CepError::NotFound);
        }
        Ok(payload.display())
    }
}

/// Fields ViaCEP returns for a matched code. `erro` only shows up on a
/// miss, with a value that has changed type across API revisions.
#[derive(Debug, Default, Deserialize)]
pub struct CepPayload {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl CepPayload {
    fn not_found(&self) -> bool {
        self.erro.is_some()
    }

    /// `{logradouro} - {bairro}, {localidade} - {uf}`
    fn display(&self) -> String {
        format!(
            "{} - {}, {} - {}",
            self.logradouro, self.bairro, self.localidade, self.uf
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_progressively_typed_digits() {
        assert_eq!(format_cep(""), "");
        assert_eq!(format_cep("0"), "0");
        assert_eq!(format_cep("01310"), "01310");
        assert_eq!(format_cep("013101"), "01310-1");
        assert_eq!(format_cep("01310100"), "01310-100");
    }

    #[test]
    fn strips_everything_that_is_not_a_digit() {
        assert_eq!(format_cep("01.310-100"), "01310-100");
        assert_eq!(format_cep("cep: 01310 100"), "01310-100");
        assert_eq!(format_cep("abc"), "");
    }

    #[test]
    fn caps_at_nine_characters() {
        assert_eq!(format_cep("013101009999999"), "01310-100");
        assert!(format_cep("1234567890123").len() <= 9);
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_cep("01310100");
        assert_eq!(format_cep(&once), once);
    }

    #[test]
    fn output_shape_holds_for_short_inputs() {
        // ^\d{0,5}(-\d{1,3})?$ for any digit input
        for len in 0..=8 {
            let input: String = "9".repeat(len);
            let out = format_cep(&input);
            let mut parts = out.splitn(2, '-');
            let head = parts.next().unwrap();
            assert!(head.len() <= 5 && head.chars().all(|c| c.is_ascii_digit()));
            if let Some(tail) = parts.next() {
                assert!(!tail.is_empty() && tail.len() <= 3);
                assert!(tail.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn completeness_requires_exactly_eight_digits() {
        assert!(is_complete("01310-100"));
        assert!(is_complete("01310100"));
        assert!(!is_complete("01310-10"));
        assert!(!is_complete(""));
    }

    #[test]
    fn found_payload_composes_the_display_address() {
        let payload: CepPayload = serde_json::from_str(
            r#"{
                "cep": "01310-100",
                "logradouro": "Av. Paulista",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }"#,
        )
        .unwrap();
        assert!(!payload.not_found());
        assert_eq!(payload.display(), "Av. Paulista - Bela Vista, São Paulo - SP");
    }

    #[test]
    fn erro_flag_marks_a_miss_in_both_api_revisions() {
        let boolean: CepPayload = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(boolean.not_found());

        let string: CepPayload = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(string.not_found());
    }
}
