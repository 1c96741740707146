use std::fmt;

use serde::Deserialize;

/// Where a frontend endpoint's custom HTTPS certificate comes from.
///
/// - `AzureKeyVault`: a customer certificate stored in a key vault. The
///   three `azure_key_vault_certificate_*` fields must all be set.
/// - `FrontDoor`: a managed certificate (default). The key-vault fields
///   must all be left empty.
/// - `Other`: any other source string. Treated like `FrontDoor` by the
///   validator, kept verbatim so messages can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CertificateSource {
    AzureKeyVault,
    FrontDoor,
    Other(String),
}

impl CertificateSource {
    pub fn as_str(&self) -> &str {
        match self {
            CertificateSource::AzureKeyVault => "AzureKeyVault",
            CertificateSource::FrontDoor => "FrontDoor",
            CertificateSource::Other(s) => s.as_str(),
        }
    }

    pub fn is_key_vault(&self) -> bool {
        matches!(self, CertificateSource::AzureKeyVault)
    }
}

impl Default for CertificateSource {
    fn default() -> Self {
        CertificateSource::FrontDoor
    }
}

// Matching is exact: "azurekeyvault" is some other source, not the key vault.
impl From<String> for CertificateSource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AzureKeyVault" => CertificateSource::AzureKeyVault,
            "FrontDoor" => CertificateSource::FrontDoor,
            _ => CertificateSource::Other(s),
        }
    }
}

impl fmt::Display for CertificateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
