// Post generation: workflow orchestration plus the pure text logic around it
// (attribution, truncation, word cloud, export). All workflow calls go through
// workflow_client.

pub mod attribution;
pub mod export;
pub mod generator;
pub mod handlers;
pub mod session;
pub mod truncation;
pub mod validation;
pub mod word_cloud;
