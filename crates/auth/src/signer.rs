//! HMAC-SHA256 canonical request signing for the Flow API.
//!
//! The canonical string is every `name` immediately followed by its value,
//! in ascending byte order of `name`, with no separators. The remote side
//! recomputes the same string, so the ordering must not be locale-aware or
//! case-insensitive. Concatenation collisions (`"ab" + "c"` vs `"a" + "bc"`)
//! are part of the upstream protocol and are reproduced as-is.

use crate::credentials::ApiCredentials;
use crate::params::ParamSet;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Parameter name the signature is transmitted under.
pub const SIGNATURE_PARAM: &str = "s";

/// Parameter name the API key is transmitted under.
pub const API_KEY_PARAM: &str = "apiKey";

/// Build the canonical string for a parameter set.
pub fn canonical_string(params: &ParamSet) -> String {
    params
        .iter()
        .fold(String::new(), |mut acc, (name, value)| {
            acc.push_str(name);
            acc.push_str(&value.to_param_string());
            acc
        })
}

/// Stringified parameters together with their signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    params: BTreeMap<String, String>,
    signature: String,
}

impl SignedParams {
    /// The stringified parameters that were signed.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Lowercase hex HMAC-SHA256 of the canonical string.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// All parameters followed by the signature under `s`, ready for a
    /// query string or form body.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.params.into_iter().collect();
        pairs.push((SIGNATURE_PARAM.to_string(), self.signature));
        pairs
    }
}

/// Request signer for authenticated Flow API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the secret key
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        let result = mac.finalize();
        hex::encode(result.into_bytes())
    }

    /// Stringify and sign a parameter set as given.
    ///
    /// An empty set signs the empty message.
    pub fn sign_params(&self, params: &ParamSet) -> SignedParams {
        let signature = self.sign(&canonical_string(params));
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_param_string()))
            .collect();

        SignedParams { params, signature }
    }

    /// Inject the API key, then sign.
    ///
    /// A caller-supplied `apiKey` is overwritten and a caller-supplied `s`
    /// is dropped, so neither can leak into the canonical string.
    pub fn sign_request(&self, params: &ParamSet) -> SignedParams {
        let mut params = params.clone();
        params.remove(SIGNATURE_PARAM);
        params.insert(API_KEY_PARAM, self.credentials.api_key());
        self.sign_params(&params)
    }
}
