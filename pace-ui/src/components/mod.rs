//! Shared UI components

pub mod button;
pub mod helpers;
pub mod icons;
pub mod text_input;
pub mod utils;
pub mod wizard;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::{ErrorPageView, PageContainer, GENERIC_ERROR_MESSAGE};
pub use icons::{
    AlertTriangleIcon, ArrowLeftIcon, CheckIcon, ClockIcon, PlusIcon, RefreshIcon,
};
pub use text_input::{TextInput, TextInputSize};
pub use utils::format_minutes;
pub use wizard::{DetailsStepView, DurationStepView, ReviewStepView, WizardProgressView};
