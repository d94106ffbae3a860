/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::LOGIN_PATH;
use serde::Serialize;

/// Session transitions broadcast by the HTTP client
///
/// UI layers subscribe to these to react to logins and, in particular, to
/// navigate to the login view when a refresh fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Tokens were obtained from login or registration
    LoggedIn,
    /// The access token was renewed
    TokenRefreshed,
    /// The user logged out
    LoggedOut,
    /// The session could not be renewed and was cleared
    Expired {
        /// Where the user should be sent
        redirect_to: String,
    },
}

impl SessionEvent {
    /// `Expired` event redirecting to the login view
    #[must_use]
    pub fn expired() -> Self {
        SessionEvent::Expired {
            redirect_to: LOGIN_PATH.to_string(),
        }
    }
}
