//! API middleware. Only access logging for now; CORS and the body limit
//! are tower layers applied in `router`.

pub mod audit;
