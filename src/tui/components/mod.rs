//! # TUI Components
//!
//! Each file contains one component with its rendering logic and tests.
//! Section components are stateless: they borrow the `Portfolio` and the
//! active `Theme` as props and draw one full-viewport panel. `TitleBar`,
//! `Indicator`, and `Splash` are the chrome around them.

mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod indicator;
mod projects;
mod skills;
mod splash;
mod title_bar;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use hero::Hero;
pub use indicator::Indicator;
pub use projects::Projects;
pub use skills::Skills;
pub use splash::Splash;
pub use title_bar::TitleBar;
