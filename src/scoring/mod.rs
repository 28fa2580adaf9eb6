pub mod config;
pub mod engine;
pub mod factors;
pub mod response;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_connection_strength, calculate_connection_strength_with, classify_strength,
    engagement_score, network_score, origin_score, ScoreBreakdown,
};
pub use factors::{ContactFactors, ContactSource, EngagementFactors, NetworkFactors, OriginFactors, Strength};
pub use response::{categorize_response_duration, categorize_response_time, ResponseCategory, ResponseTally, ResponseTime};
pub use validation::validate_scoring;
