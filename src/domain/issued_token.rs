/// A freshly minted token together with the CSRF nonce that was baked into
/// it. Returned as one value so the cookie-setting call never depends on
/// hidden session state or call ordering.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub csrf: String,
}
