use gitward_verify::error::VerifyError;
use gitward_verify::keyring::KeyringVerifier;
use gitward_verify::verifier::SignatureVerifier;

/// Ed25519 test key (fingerprint `B3B8AD8E0EAD25CB515AE7DF1BD41430EE87893F`).
const PUBLIC_KEY: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----

mDMEapSSARYJKwYBBAHaRw8BAQdA6MkAMJpuE/JSNpfy+Wijtysh6IT4hXKfMrnw
ZWcmXna0I0dpdHdhcmQgVGVzdCA8dGVzdEBnaXR3YXJkLmludmFsaWQ+iJAEExYI
ADgWIQSzuK2ODq0ly1Fa598b1BQw7oeJPwUCapSSAQIbAwULCQgHAgYVCgkICwIE
FgIDAQIeAQIXgAAKCRAb1BQw7oeJP68BAP9E8XJW3zPE6YKOMJcw94R4B5QlfAHx
lyCttW0CyfCswAD+L504cya1nButjvMd7DFYRSIaiOgbAdANXQWjhnaU+wg=
=4Ndt
-----END PGP PUBLIC KEY BLOCK-----
";

/// Detached signature by the key above over exactly `tree abc\nparent def\n`.
const SIGNATURE: &str = "-----BEGIN PGP SIGNATURE-----

iHUEABYIAB0WIQSzuK2ODq0ly1Fa598b1BQw7oeJPwUCapSSAQAKCRAb1BQw7oeJ
P+LYAQDZV9EvOrVLs6ttyJ2J0nGbPNb/jq3UEXStNyquh5vrXwD9GMCJqqNr29cJ
Wh7f7vL/7JXOdmasP+V4H6HIgFiOOwA=
=/rID
-----END PGP SIGNATURE-----
";

const PAYLOAD: &[u8] = b"tree abc\nparent def\n";

fn keyring() -> KeyringVerifier {
    KeyringVerifier::from_armored(PUBLIC_KEY.as_bytes()).unwrap()
}

#[test]
fn armored_keyring_loads_with_one_key() {
    let keyring = keyring();
    assert_eq!(keyring.len(), 1);
    assert!(!keyring.is_empty());
}

#[tokio::test]
async fn genuine_signature_yields_good_verdict_with_key_id() {
    let verdict = keyring()
        .verify(SIGNATURE.as_bytes(), PAYLOAD)
        .await
        .unwrap();
    assert!(verdict.valid);
    assert_eq!(verdict.key_id.as_deref(), Some("1BD41430EE87893F"));
}

#[tokio::test]
async fn tampered_payload_yields_invalid_verdict() {
    let verdict = keyring()
        .verify(SIGNATURE.as_bytes(), b"tree abc\nparent eve\n")
        .await
        .unwrap();
    assert!(!verdict.valid);
}

#[tokio::test]
async fn unparsable_signature_is_checked_and_bad_not_an_error() {
    let verdict = keyring()
        .verify(b"not an armored signature", PAYLOAD)
        .await
        .unwrap();
    assert!(!verdict.valid);
    assert!(verdict.key_id.is_none());
}

#[test]
fn garbage_keyring_fails_to_load() {
    let result = KeyringVerifier::from_armored(b"not an armored keyring");
    assert!(matches!(result, Err(VerifyError::Keyring(_))));
}

#[test]
fn missing_keyring_file_is_an_io_error() {
    let result =
        KeyringVerifier::from_file(std::path::Path::new("/nonexistent/gitward-keyring.asc"));
    assert!(matches!(result, Err(VerifyError::Io(_))));
}
