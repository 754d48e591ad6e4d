// src/application/ports/mod.rs
pub mod cache;
pub mod events;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type CacheStorePort = dyn cache::CacheStore;
pub type EventPublisherPort = dyn events::EventPublisher;
pub type ClockPort = dyn time::Clock;
