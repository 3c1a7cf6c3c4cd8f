//! User-facing notification after a submission

use std::fmt;

use crate::error::SubmitError;

/// What the user is told once the send operation has resolved.
///
/// Blocked and in-flight submissions produce no notice; their feedback is
/// the per-field error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The message was delivered.
    Sent,
    /// Delivery failed. The cause is not shown to the user.
    SendFailed,
}

impl Notice {
    /// Text shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sent => "Data sent successfully",
            Self::SendFailed => "Uh oh something went wrong, mail didn't send",
        }
    }

    /// Maps a submission outcome to a notice, if it reached the send operation.
    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Option<Self> {
        match outcome {
            Ok(()) => Some(Self::Sent),
            Err(SubmitError::Send(_)) => Some(Self::SendFailed),
            Err(SubmitError::Blocked(_) | SubmitError::InFlight) => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SendError;
    use contact_validator::foundation::ValidationErrors;

    #[test]
    fn outcome_mapping() {
        assert_eq!(Notice::from_outcome(&Ok(())), Some(Notice::Sent));
        assert_eq!(
            Notice::from_outcome(&Err(SubmitError::Send(SendError::Config("x".into())))),
            Some(Notice::SendFailed)
        );
        assert_eq!(Notice::from_outcome(&Err(SubmitError::InFlight)), None);
        assert_eq!(
            Notice::from_outcome(&Err(SubmitError::Blocked(ValidationErrors::new()))),
            None
        );
    }

    #[test]
    fn display_uses_message() {
        assert_eq!(Notice::Sent.to_string(), "Data sent successfully");
    }
}
