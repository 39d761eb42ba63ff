/// Classification of a provider failure.
///
/// | Class | Meaning | Caller behaviour |
/// |-------|---------|------------------|
/// | `Transport` | Provider unreachable (connect error, timeout) | Surface as an error |
/// | `Unusable` | Provider answered but the answer can't be used | Degrade to "price unknown" |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The request never got an answer.
    Transport,

    /// The provider answered with a rate limit, an error status or a body
    /// that could not be parsed.
    Unusable,
}

impl FailureClass {
    pub fn is_transport(self) -> bool {
        matches!(self, FailureClass::Transport)
    }
}
