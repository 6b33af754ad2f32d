//! ライブ入場権利確認サービス
//!
//! Looks a participant up in the event roster by CAMPFIRE ID and answers
//! whether they may enter the venue and watch the rehearsal.
//!
//! ## Layers
//! - `domain`: roster rows, access decisions, identifier validation
//! - `application`: roster lookup and the request → envelope use case
//! - `infrastructure`: roster backends, HTTP surface, health and metrics
//! - `interfaces`: CLI and the access-check client
//! - `shared`: wire protocol and metrics shared by all layers

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
