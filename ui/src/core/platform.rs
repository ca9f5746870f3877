//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Native release builds cannot rely on the asset server, so stylesheets are inlined.
pub fn needs_inline_styles() -> bool {
    cfg!(all(not(debug_assertions), not(target_arch = "wasm32")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_run_as_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert_eq!(Platform::current().as_str(), "desktop");
    }
}
