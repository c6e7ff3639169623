//! API credentials for the research APIs and the revalidation webhook.
//!
//! Keys stay inside [`SecretString`] from config loading until a request is
//! built; [`bearer`] and [`basic`] are the only places they are exposed.

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

pub use secrecy::SecretString;

/// `Authorization: Bearer <secret>` (Perplexity, revalidation webhook).
pub fn bearer(request: RequestBuilder, secret: &SecretString) -> RequestBuilder {
    request.bearer_auth(secret.expose_secret())
}

/// HTTP basic auth (DataForSEO).
pub fn basic(request: RequestBuilder, login: &str, password: &SecretString) -> RequestBuilder {
    request.basic_auth(login, Some(password.expose_secret()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(request: RequestBuilder) -> String {
        let request = request.build().unwrap();
        request.headers()["authorization"].to_str().unwrap().to_string()
    }

    #[test]
    fn test_bearer_header() {
        let client = reqwest::Client::new();
        let secret = SecretString::from("pplx-super-secret");

        let header = authorization(bearer(client.post("https://api.example.com"), &secret));
        assert_eq!(header, "Bearer pplx-super-secret");
    }

    #[test]
    fn test_basic_header() {
        let client = reqwest::Client::new();
        let password = SecretString::from("pass");

        let header = authorization(basic(client.post("https://api.example.com"), "user", &password));
        assert_eq!(header, "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::from("rv-secret-123");
        assert!(!format!("{:?}", secret).contains("rv-secret-123"));
    }
}
