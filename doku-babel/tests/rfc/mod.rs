//! RFC rule table tests
//!
//! Element tests convert one construct at a time; the kitchensink converts a full RFC
//! draft and compares against the expected DokuWiki file.

mod convert;
mod properties;
mod voting;
