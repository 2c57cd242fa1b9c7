use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;
use crate::secret::SecretString;

/// Password hashing implementation.
///
/// Argon2id with a tunable work factor. The defaults follow the OWASP
/// interactive-login recommendation (19 MiB, 2 passes, 1 lane), which lands
/// in the same latency band as bcrypt cost 12.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Memory cost in KiB.
    pub const DEFAULT_MEMORY_COST: u32 = 19 * 1024;
    /// Number of passes.
    pub const DEFAULT_TIME_COST: u32 = 2;
    /// Degree of parallelism.
    pub const DEFAULT_PARALLELISM: u32 = 1;

    /// Create a new password hasher with the default work factor.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `memory_cost_kib` - Memory size in KiB
    /// * `time_cost` - Number of iterations
    /// * `parallelism` - Degree of parallelism
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside Argon2's accepted ranges
    pub fn with_params(
        memory_cost_kib: u32,
        time_cost: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_cost_kib, time_cost, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &SecretString) -> Result<SecretString, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|hash| SecretString::new(hash.to_string()))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The parameters encoded in the stored hash are used, not the ones this
    /// hasher was built with.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(
        &self,
        password: &SecretString,
        hash: &SecretString,
    ) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash.expose_secret()).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self
            .argon2()
            .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let password = SecretString::from("my_secure_password");

        // Hash the password
        let hash = hasher.hash(&password).expect("Failed to hash password");
        assert!(hash.expose_secret().starts_with("$argon2id$"));

        // Verify correct password
        assert!(hasher
            .verify(&password, &hash)
            .expect("Failed to verify password"));

        // Verify incorrect password
        assert!(!hasher
            .verify(&SecretString::from("wrong_password"), &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = fast_hasher();
        let password = SecretString::from("same_password");

        let first = hasher.hash(&password).expect("Failed to hash password");
        let second = hasher.hash(&password).expect("Failed to hash password");

        assert_ne!(first.expose_secret(), second.expose_secret());
    }

    #[test]
    fn test_verify_uses_params_from_stored_hash() {
        let hash = fast_hasher()
            .hash(&SecretString::from("password123"))
            .expect("Failed to hash password");

        let other = PasswordHasher::with_params(2048, 2, 1).expect("Failed to build hasher");
        assert!(other
            .verify(&SecretString::from("password123"), &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_default_params() {
        let hasher = PasswordHasher::new();
        assert_eq!(hasher.params.m_cost(), PasswordHasher::DEFAULT_MEMORY_COST);
        assert_eq!(hasher.params.t_cost(), PasswordHasher::DEFAULT_TIME_COST);
        assert_eq!(hasher.params.p_cost(), PasswordHasher::DEFAULT_PARALLELISM);
    }

    #[test]
    fn test_invalid_params() {
        let result = PasswordHasher::with_params(1, 0, 0);
        assert!(matches!(result, Err(PasswordError::InvalidParams(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = fast_hasher();
        let result = hasher.verify(
            &SecretString::from("password"),
            &SecretString::from("invalid_hash"),
        );
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
