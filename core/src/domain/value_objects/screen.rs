//! Named screens of the hosting shell.

use serde::{Deserialize, Serialize};

/// The screens the flow can ask the shell to switch to
///
/// Routing itself is owned by the shell; the flow only names the
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Signup,
    RegisterOtp,
    Notifications,
}

impl Screen {
    /// The tab name the shell expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::RegisterOtp => "registerotp",
            Screen::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names() {
        assert_eq!(Screen::Login.as_str(), "login");
        assert_eq!(Screen::RegisterOtp.as_str(), "registerotp");
    }

    #[test]
    fn test_serialization_uses_tab_names() {
        let json = serde_json::to_string(&Screen::RegisterOtp).unwrap();
        assert_eq!(json, "\"registerotp\"");
    }
}
