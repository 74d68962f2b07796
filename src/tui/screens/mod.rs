//! Screen rendering and input handling.

mod home;
mod phase;
mod stakeholders;
mod wizard;

pub use home::HomeScreen;
pub use phase::PhaseScreen;
pub use stakeholders::StakeholderScreen;
pub use wizard::WizardScreen;
