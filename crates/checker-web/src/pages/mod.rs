//! Page Components

mod checker;

pub use checker::CheckerPage;
