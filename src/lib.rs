//! Client SDK for the NSX Advanced Load Balancer (Avi) controller REST API.

pub mod clients;
pub mod config;
pub mod errors;
pub mod models;
pub mod refs;
pub mod rest_op;
pub mod session;
pub mod version;

pub use clients::{AviClient, AviClientPool, ResourceClient};
pub use errors::AviError;
pub use session::{ApiOptions, AviSession, AviSessionBuilder, PatchOp};
