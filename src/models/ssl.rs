use super::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// SSLKeyAndCertificate s s l key and certificate
///
/// `Debug` leaves out the private key and its passphrase.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Derivative, Clone, Default, PartialEq)]
#[derivative(Debug)]
#[serde(default)]
pub struct SslKeyAndCertificate {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// CA certificates in certificate chain.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ca_certs: Vec<CertificateAuthority>,

    /// Required: true
    #[serialize_always]
    pub certificate: Option<SslCertificate>,

    /// States if the certificate is base64 encoded.
    pub certificate_base64: Option<bool>,

    /// It is a reference to an object of type CertificateManagementProfile.
    pub certificate_management_profile_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Creator name.
    pub created_by: Option<String>,

    /// Enables OCSP Stapling.
    pub enable_ocsp_stapling: Option<bool>,

    /// Format of the Key/Certificate file. Enum options - SSL_PEM, SSL_PKCS12.
    pub format: Option<String>,

    /// It is a reference to an object of type HardwareSecurityModuleGroup.
    pub hardwaresecuritymodulegroup_ref: Option<String>,

    /// Import the private key to the HSM group.
    pub import_key_to_hsm: Option<bool>,

    pub is_federated: Option<bool>,

    /// Private key.
    #[derivative(Debug = "ignore")]
    pub key: Option<String>,

    /// States if the private key is base64 encoded.
    pub key_base64: Option<bool>,

    pub key_params: Option<SslKeyParams>,

    /// Passphrase used to encrypt the private key.
    #[derivative(Debug = "ignore")]
    pub key_passphrase: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Name of the object.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Error status of the OCSP response. Enum options - OCSP_ERR_CERTSTATUS_DISABLED, ...
    pub ocsp_error_status: Option<String>,

    /// This is an internal field to store the OCSP Responder URLs contained in the certificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ocsp_responder_url_list_from_certs: Vec<String>,

    /// Enum options - SSL_CERTIFICATE_FINISHED, SSL_CERTIFICATE_PENDING.
    pub status: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// Enum options - SSL_CERTIFICATE_TYPE_VIRTUALSERVICE, SSL_CERTIFICATE_TYPE_SYSTEM,
    /// SSL_CERTIFICATE_TYPE_CA.
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// SSLCertificate s s l certificate
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SslCertificate {
    /// Certificate of the SSL certificate.
    pub certificate: Option<String>,

    /// Certificate signing request.
    pub certificate_signing_request: Option<String>,

    /// Whether this is a chain (intermediate or root) certificate.
    pub chain_verified: Option<bool>,

    /// Number of days remaining before the certificate expires.
    pub days_until_expire: Option<i32>,

    /// Enum options - SSL_CERTIFICATE_GOOD, SSL_CERTIFICATE_EXPIRY_WARNING, SSL_CERTIFICATE_EXPIRED.
    pub expiry_status: Option<String>,

    pub fingerprint: Option<String>,

    pub issuer: Option<SslCertificateDescription>,

    pub key_params: Option<SslKeyParams>,

    pub not_after: Option<String>,

    pub not_before: Option<String>,

    pub public_key: Option<String>,

    /// Self signed certificate.
    pub self_signed: Option<bool>,

    pub serial_number: Option<String>,

    pub signature: Option<String>,

    pub signature_algorithm: Option<String>,

    pub subject: Option<SslCertificateDescription>,

    /// Subject Alternative Names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_alt_names: Vec<String>,

    pub text: Option<String>,

    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SslCertificateDescription {
    pub common_name: Option<String>,
    pub country: Option<String>,
    pub distinguished_name: Option<String>,
    pub email_address: Option<String>,
    pub locality: Option<String>,
    pub organization: Option<String>,
    pub organization_unit: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SslKeyParams {
    /// Enum options - SSL_KEY_ALGORITHM_RSA, SSL_KEY_ALGORITHM_EC.
    /// Required: true
    #[serialize_always]
    pub algorithm: Option<String>,

    pub ec_params: Option<SslKeyEcParams>,

    pub rsa_params: Option<SslKeyRsaParams>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SslKeyRsaParams {
    pub exponent: Option<u32>,

    /// Enum options - SSL_KEY_1024_BITS, SSL_KEY_2048_BITS, SSL_KEY_3072_BITS, SSL_KEY_4096_BITS.
    pub key_size: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SslKeyEcParams {
    /// Enum options - SSL_KEY_EC_CURVE_SECP256R1, SSL_KEY_EC_CURVE_SECP384R1, SSL_KEY_EC_CURVE_SECP521R1.
    pub curve: Option<String>,
}

/// CertificateAuthority certificate authority
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CertificateAuthority {
    /// It is a reference to an object of type SSLKeyAndCertificate.
    pub ca_ref: Option<String>,

    pub name: Option<String>,
}
