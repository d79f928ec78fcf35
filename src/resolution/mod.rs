/// Domain layer - license resolution model and pure business rules
pub mod domain;
pub mod policies;
pub mod services;
