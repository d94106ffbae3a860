/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Authentication payloads, tokens and the user model
pub mod auth;
/// Query parameter models for API calls
pub mod requests;
/// Response envelopes returned by the API
pub mod responses;
