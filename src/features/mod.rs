//! Feature vectors for training-data logging.
//!
//! The layout is a stable schema consumed by external loggers. Any change to
//! field order or meaning must bump [`FEATURE_SCHEMA_VERSION`].

pub mod encoder;

pub use encoder::{encode, encode_for, feature_len, FeatureVector, FEATURE_SCHEMA_VERSION};
