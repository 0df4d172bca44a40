use derive_more::Display;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SpinnerSize {
    #[display("sm")]
    Small,
    #[default]
    #[display("md")]
    Medium,
    #[display("lg")]
    Large,
}

impl SpinnerSize {
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Small => 16,
            Self::Medium => 32,
            Self::Large => 48,
        }
    }
}

/// Indeterminate loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingSpinner {
    pub size: SpinnerSize,
}

impl LoadingSpinner {
    pub fn new(size: SpinnerSize) -> Self {
        Self { size }
    }
}

impl fmt::Display for LoadingSpinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let px = self.size.pixels();
        write!(
            f,
            r#"<div class="spinner spinner-{size}" role="status" style="width:{px}px;height:{px}px"><span class="sr-only">로딩 중...</span></div>"#,
            size = self.size,
        )
    }
}
