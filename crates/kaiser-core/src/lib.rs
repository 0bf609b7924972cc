#![deny(warnings)]
mod codec;
pub mod error;
pub mod game;
pub mod model;

pub use error::RuleError;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "kaiser"
    }

    pub const fn codename() -> &'static str {
        "Three Spot"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "kaiser");
        assert_eq!(AppInfo::codename(), "Three Spot");
        assert!(!AppInfo::version().is_empty());
    }
}
