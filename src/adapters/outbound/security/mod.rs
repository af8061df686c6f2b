mod hmac_token_provider;
mod sha256_password_hasher;

pub use hmac_token_provider::HmacTokenProvider;
pub use sha256_password_hasher::Sha256PasswordHasher;
