#[derive(Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct TokenDTO {
    pub token: String,
}

#[derive(Debug)]
pub struct ValidateTokenDTO {
    pub token: String,
    /// Seconds a session stays valid after creation.
    pub token_ttl: i64,
}
