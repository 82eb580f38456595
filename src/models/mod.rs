//! Typed options payloads for the remote operations
//!
//! Every optional field is an explicit `Option` serialized only when set, so
//! a request body never contains a field the user did not supply. Required
//! path parameters travel as method arguments on the transport client, not
//! as payload fields.

pub mod assistant;
pub mod nlc;
pub mod nlu;
pub mod stt;
pub mod tts;
pub mod vr;
