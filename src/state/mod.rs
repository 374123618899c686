pub mod mobile;

pub use mobile::MobileTracker;
